//! Page-context extraction script.
//!
//! Drivers that hold a live browser page evaluate [`CLICKABLES_SCRIPT`] in
//! the page and hand the JSON result to [`parse_script_output`]. The script
//! applies the same selection and projection rules as
//! [`crate::extractor::extract`].

use crate::error::{ExtractError, Result};
use crate::extractor::{label, ClickableElement};
use serde::Deserialize;
use tracing::debug;

/// Embedded contents of `clickables.js`.
pub const CLICKABLES_SCRIPT: &str = include_str!("clickables.js");

/// Descriptor as the script reports it, before normalization.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    text: Option<String>,
    tag: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl From<RawDescriptor> for ClickableElement {
    fn from(raw: RawDescriptor) -> Self {
        Self {
            text: label(raw.text.as_deref(), None),
            tag: raw.tag,
            href: raw.href.filter(|h| !h.is_empty()),
            kind: raw.kind.filter(|k| !k.is_empty()),
        }
    }
}

/// Convert the value the script evaluated to into descriptors.
///
/// `null` means the page had no document to read from. Anything other
/// than an array of descriptor objects is rejected as a whole.
pub fn parse_script_output(value: serde_json::Value) -> Result<Vec<ClickableElement>> {
    let entries = match value {
        serde_json::Value::Null => return Err(ExtractError::NoDocument),
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(ExtractError::ScriptOutput(format!(
                "expected an array, got {}",
                json_kind(&other)
            )))
        }
    };

    let elements = entries
        .into_iter()
        .map(|entry| serde_json::from_value::<RawDescriptor>(entry).map(ClickableElement::from))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!("decoded {} clickable elements from page script", elements.len());
    Ok(elements)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
