//! Reading page HTML from a file or stdin.

use crate::error::ExtractError;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read HTML from `source`, where `-` means stdin.
///
/// Blank input has no document to extract from and fails with
/// [`ExtractError::NoDocument`].
pub fn read_html(source: &str) -> Result<String> {
    let html = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read HTML from stdin")?;
        buf
    } else {
        read_file(Path::new(source))?
    };

    if html.trim().is_empty() {
        return Err(ExtractError::NoDocument).with_context(|| format!("empty input: {source}"));
    }

    debug!("read {} bytes of HTML from {source}", html.len());
    Ok(html)
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_html_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<a href=\"/x\">Go</a>").unwrap();
        let html = read_html(file.path().to_str().unwrap()).unwrap();
        assert!(html.contains("Go"));
    }

    #[test]
    fn test_read_html_blank_file_is_no_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  \n ").unwrap();
        let err = read_html(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::NoDocument)
        ));
    }

    #[test]
    fn test_read_html_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.html");
        assert!(read_html(missing.to_str().unwrap()).is_err());
    }
}
