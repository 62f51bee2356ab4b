//! `clickmap extract <FILE>` — list clickable elements of a page.

use crate::cli::input;
use crate::cli::output::{self, Styled};
use crate::dom::HtmlDocument;
use crate::extractor::{extract, ClickableElement};
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;

const TEXT_WIDTH: usize = 40;

/// Run the extract command.
pub fn run(source: &str, base_url: Option<&str>) -> Result<()> {
    let start = Instant::now();
    let html = input::read_html(source)?;

    let document = match base_url {
        Some(url) => HtmlDocument::parse_with_url(&html, url)?,
        None => HtmlDocument::parse(&html),
    };
    let elements = extract(&document).with_context(|| format!("extracting from {source}"))?;

    info!(
        source,
        count = elements.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "extraction finished"
    );

    if output::is_json() {
        return output::print_json(&elements);
    }

    let s = Styled::new();
    if !output::is_quiet() {
        output::print_header(&s);
    }
    for line in render_table(&s, &elements) {
        println!("{line}");
    }
    if !output::is_quiet() {
        eprintln!();
        eprintln!(
            "  {} clickable elements in {:.1}ms",
            s.green(&elements.len().to_string()),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
    Ok(())
}

/// Render descriptors as aligned rows: index, tag, label, type, href.
pub fn render_table(s: &Styled, elements: &[ClickableElement]) -> Vec<String> {
    elements
        .iter()
        .enumerate()
        .map(|(i, el)| {
            let text = output::ellipsize(&el.text, TEXT_WIDTH);
            let kind = el.kind.as_deref().map(|k| format!("[{k}]")).unwrap_or_default();
            let href = el
                .href
                .as_deref()
                .map(|h| format!(" -> {}", s.cyan(h)))
                .unwrap_or_default();
            format!(
                "  {:>3}  {}  {:<width$} {}{}",
                i + 1,
                s.bold(&format!("{:<8}", el.tag)),
                text,
                s.dim(&kind),
                href,
                width = TEXT_WIDTH
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use std::io::Write;

    fn page_file(html: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{html}").unwrap();
        file
    }

    #[test]
    fn test_render_table_plain() {
        let elements = vec![
            ClickableElement {
                text: "Go".into(),
                tag: "A".into(),
                href: Some("/x".into()),
                kind: None,
            },
            ClickableElement {
                text: "Send".into(),
                tag: "BUTTON".into(),
                href: None,
                kind: Some("submit".into()),
            },
        ];
        let lines = render_table(&Styled::plain(), &elements);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("    1  A "));
        assert!(lines[0].ends_with(" -> /x"));
        assert!(lines[1].contains("BUTTON"));
        assert!(lines[1].ends_with("[submit]"));
    }

    #[test]
    fn test_render_table_empty() {
        assert!(render_table(&Styled::plain(), &[]).is_empty());
    }

    #[test]
    fn test_run_json_from_file() {
        std::env::set_var("CLICKMAP_JSON", "1");
        let file = page_file(r#"<a href="/x">Go</a><button type="submit">Send</button>"#);
        let path = file.path().to_str().unwrap();
        assert!(run(path, None).is_ok());
        assert!(run(path, Some("https://example.com/shop/")).is_ok());
    }

    #[test]
    fn test_run_rejects_invalid_base_url() {
        let file = page_file("<a href=\"/x\">Go</a>");
        let err = run(file.path().to_str().unwrap(), Some("not a url")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_run_blank_file_is_no_document() {
        let file = page_file("   ");
        let err = run(file.path().to_str().unwrap(), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::NoDocument)
        ));
    }
}
