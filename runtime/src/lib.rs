//! Clickable-element extraction for crawlers.
//!
//! Given a page's document tree, [`extract`] returns one [`ClickableElement`]
//! per button, link and `role="button"` element, in document order. Pages
//! can come from static HTML ([`HtmlDocument`]), from any other
//! [`DocumentTree`], or from a live browser that evaluated
//! [`CLICKABLES_SCRIPT`].

pub mod cli;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod keywords;
pub mod script;
pub mod summary;

pub use dom::{DocumentTree, ElementFacts, HtmlDocument};
pub use error::{ExtractError, Result};
pub use extractor::{extract, extract_html, ClickableElement, CLICKABLE_SELECTOR, UNNAMED_LABEL};
pub use keywords::extract_keywords;
pub use script::{parse_script_output, CLICKABLES_SCRIPT};
pub use summary::{summarize, MetaTag, PageSummary, SummaryLimits};
