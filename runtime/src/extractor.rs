//! Clickable-element extraction.
//!
//! Selects buttons, links and `role="button"` elements from a document tree
//! and projects each one into a flat [`ClickableElement`] descriptor.

use crate::dom::{DocumentTree, ElementFacts, HtmlDocument};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Selector group for clickable elements.
pub const CLICKABLE_SELECTOR: &str = "button, a, [role='button']";

/// Label used when an element has neither rendered text nor `aria-label`.
pub const UNNAMED_LABEL: &str = "Unnamed";

/// One clickable element, as seen at extraction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickableElement {
    /// Visible label. Never empty.
    pub text: String,
    /// Tag name, uppercased for HTML elements (e.g. `"BUTTON"`).
    pub tag: String,
    /// Resolved link destination, only for hyperlinks that have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Value of the `type` attribute.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ClickableElement {
    /// Project raw element reads into a descriptor.
    pub fn from_facts(facts: ElementFacts) -> Self {
        let text = label(facts.rendered_text.as_deref(), facts.aria_label.as_deref());
        let tag = if facts.is_html {
            facts.tag_name.to_ascii_uppercase()
        } else {
            facts.tag_name
        };

        Self {
            text,
            tag,
            href: non_empty(facts.link_target),
            kind: non_empty(facts.type_attr),
        }
    }

    /// Whether this element carries a link destination.
    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

/// Extract every clickable element from `document`, in document order.
///
/// The result has exactly one entry per matched element; nothing is
/// filtered, merged or reordered. Reads only; the tree is left untouched.
pub fn extract<D: DocumentTree + ?Sized>(document: &D) -> Result<Vec<ClickableElement>> {
    let matched = document.query_selector_all(CLICKABLE_SELECTOR)?;
    let elements: Vec<ClickableElement> =
        matched.into_iter().map(ClickableElement::from_facts).collect();

    debug!(
        count = elements.len(),
        links = elements.iter().filter(|e| e.is_link()).count(),
        "extracted clickable elements"
    );
    Ok(elements)
}

/// Parse `html` and extract its clickable elements.
///
/// With `page_url`, relative links resolve to absolute URLs.
pub fn extract_html(html: &str, page_url: Option<&str>) -> Result<Vec<ClickableElement>> {
    let document = match page_url {
        Some(url) => HtmlDocument::parse_with_url(html, url)?,
        None => HtmlDocument::parse(html),
    };
    extract(&document)
}

/// Pick the label: rendered text, then `aria-label`, then [`UNNAMED_LABEL`].
///
/// Blank values (empty or whitespace only) fall through to the next source.
pub fn label(rendered_text: Option<&str>, aria_label: Option<&str>) -> String {
    [rendered_text, aria_label]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(UNNAMED_LABEL)
        .to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
