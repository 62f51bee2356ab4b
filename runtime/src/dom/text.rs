//! Rendered-text approximation for static trees.
//!
//! Without a layout engine we approximate `innerText`: descendant text with
//! whitespace collapsed, block boundaries and `<br>` as line breaks, and
//! non-rendered subtrees skipped.

use scraper::node::Node;
use scraper::ElementRef;

/// Elements whose content never renders as text.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template", "noscript", "head"];

/// Elements that start and end a line.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "dialog", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table", "tr",
    "ul",
];

/// Compute the rendered text of `element`.
///
/// The element's own visibility is not checked, only that of its
/// descendants. Returns an empty string when nothing renders.
pub fn rendered_text(element: ElementRef<'_>) -> String {
    let mut buf = LineBuffer::default();
    collect(element, &mut buf);
    buf.finish()
}

fn collect(element: ElementRef<'_>, buf: &mut LineBuffer) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => buf.push_text(text),
            Node::Element(el) => {
                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) || is_hidden(child_ref) {
                    continue;
                }
                if name == "br" {
                    buf.break_line();
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    buf.break_line();
                }
                collect(child_ref, buf);
                if block {
                    buf.break_line();
                } else if name == "td" || name == "th" {
                    buf.pending_space = true;
                }
            }
            _ => {}
        }
    }
}

/// Whether an element is hidden by attribute or inline style.
pub fn is_hidden(element: ElementRef<'_>) -> bool {
    let el = element.value();
    if el.attr("hidden").is_some() {
        return true;
    }
    el.attr("style")
        .map(|style| {
            let compact: String = style
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_lowercase();
            compact.contains("display:none")
        })
        .unwrap_or(false)
}

#[derive(Default)]
struct LineBuffer {
    lines: Vec<String>,
    current: String,
    pending_space: bool,
}

impl LineBuffer {
    fn push_text(&mut self, text: &str) {
        // Only ASCII whitespace collapses; `&nbsp;` survives as U+00A0.
        for c in text.chars() {
            if c.is_ascii_whitespace() {
                self.pending_space = true;
                continue;
            }
            if self.pending_space && !self.current.is_empty() {
                self.current.push(' ');
            }
            self.pending_space = false;
            self.current.push(c);
        }
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
        self.pending_space = false;
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn text_of(html: &str) -> String {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse("#t").unwrap();
        let el = doc.select(&sel).next().unwrap();
        rendered_text(el)
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(text_of("<a id=t>\n   Sign\n\t  in  </a>"), "Sign in");
    }

    #[test]
    fn test_keeps_non_breaking_space() {
        assert_eq!(text_of("<a id=t>Save&nbsp;now</a>"), "Save\u{a0}now");
        assert_eq!(text_of("<a id=t> Save&nbsp; now</a>"), "Save\u{a0} now");
    }

    #[test]
    fn test_inline_children_join_without_extra_space() {
        assert_eq!(text_of("<a id=t>Go<b>now</b></a>"), "Gonow");
        assert_eq!(text_of("<a id=t>Go <b>now</b> please</a>"), "Go now please");
    }

    #[test]
    fn test_block_children_break_lines() {
        assert_eq!(
            text_of("<div id=t><p>First</p><p>Second</p></div>"),
            "First\nSecond"
        );
        assert_eq!(text_of("<button id=t>Line<br>Two</button>"), "Line\nTwo");
    }

    #[test]
    fn test_skips_scripts_and_hidden_descendants() {
        assert_eq!(
            text_of(
                "<button id=t>Buy<script>var x = 1;</script>\
                 <span hidden>secret</span><span style=\"display: none\">gone</span></button>"
            ),
            "Buy"
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(text_of("<button id=t>   \n  </button>"), "");
        assert_eq!(text_of("<button id=t><img src=x.png></button>"), "");
    }

    #[test]
    fn test_is_hidden() {
        let doc = Html::parse_fragment(
            "<span id=a hidden></span><span id=b style='DISPLAY : NONE'></span><span id=c></span>",
        );
        let hidden = |id: &str| {
            let sel = Selector::parse(&format!("#{id}")).unwrap();
            is_hidden(doc.select(&sel).next().unwrap())
        };
        assert!(hidden("a"));
        assert!(hidden("b"));
        assert!(!hidden("c"));
    }
}
