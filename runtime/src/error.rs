//! Error types for clickable-element extraction.

use thiserror::Error;

/// Failures surfaced by extraction. There is no partial result: an
/// extraction either returns every matched element or one of these.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No document context was reachable when the extractor ran.
    #[error("no document context available")]
    NoDocument,

    /// The selector group could not be parsed by the document tree.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The page URL supplied for link resolution is not an absolute URL.
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A page-script result did not have the expected shape.
    #[error("malformed script output: {0}")]
    ScriptOutput(String),

    /// A page-script result could not be decoded.
    #[error("script output decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
