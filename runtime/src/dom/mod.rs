//! Document tree abstraction read by the extractor.
//!
//! A tree answers one question: which elements match a selector group, in
//! document order, and what does each of them report for the handful of
//! reads the extractor needs. Projection rules (label fallback, casing,
//! absent markers) live in [`crate::extractor`], not here.

pub mod html;
pub mod text;

pub use html::HtmlDocument;

use crate::error::Result;

/// Raw reads taken from one matched element.
///
/// Values are reported as the tree sees them. Empty strings are allowed
/// here; the extractor decides what counts as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementFacts {
    /// Tag name as stored in the tree (any casing).
    pub tag_name: String,
    /// Whether the element lives in the HTML namespace.
    pub is_html: bool,
    /// Rendered visible text, if the tree can compute one.
    pub rendered_text: Option<String>,
    /// Value of the `aria-label` attribute.
    pub aria_label: Option<String>,
    /// Resolved link destination, only for hyperlink elements.
    pub link_target: Option<String>,
    /// Value of the `type` attribute.
    pub type_attr: Option<String>,
}

/// A queryable, read-only document tree.
pub trait DocumentTree {
    /// Return every element matching `selector`, in document order, each
    /// element at most once.
    ///
    /// Fails with [`crate::ExtractError::NoDocument`] when the tree is not
    /// attached to a document.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementFacts>>;
}
