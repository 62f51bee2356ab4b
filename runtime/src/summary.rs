//! Per-page content digest.
//!
//! Crawlers record this next to the clickable elements of each page: the
//! title and meta tags, headings, paragraphs, links, forms, images,
//! tables, lists, social links, keyword ranking, technologies advertised
//! in the meta tags and landmark flags.

use crate::dom::HtmlDocument;
use crate::keywords::{extract_keywords, DEFAULT_MAX_FEATURES};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// Platforms recognized in social links, checked in this order.
const SOCIAL_PLATFORMS: &[&str] = &["facebook", "twitter", "instagram", "linkedin", "youtube"];

/// `generator` meta content markers, checked in this order.
const GENERATORS: &[(&str, &str)] = &[
    ("wordpress", "WordPress"),
    ("drupal", "Drupal"),
    ("joomla", "Joomla"),
];

/// Truncation limits for the lists in a [`PageSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryLimits {
    pub headings: usize,
    pub paragraphs: usize,
    pub links: usize,
    pub images: usize,
    pub lists: usize,
    pub list_items: usize,
    pub keywords: usize,
    /// Characters of visible text kept in `text_content`.
    pub text_chars: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            headings: 10,
            paragraphs: 5,
            links: 20,
            images: 10,
            lists: 5,
            list_items: 10,
            keywords: 15,
            text_chars: 1000,
        }
    }
}

/// Content digest of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub title: String,
    pub meta_description: String,
    pub meta_tags: Vec<MetaTag>,
    pub headings: Vec<String>,
    pub paragraphs: Vec<String>,
    pub links: Vec<String>,
    pub word_count: usize,
    pub sentences_count: usize,
    pub text_content: String,
    pub important_words: Vec<String>,
    pub forms: Vec<FormSummary>,
    pub images: Vec<ImageSummary>,
    pub tables: Vec<TableSummary>,
    pub lists: Vec<ListSummary>,
    pub social_links: Vec<SocialLink>,
    /// Technologies recognized from the meta tags, in order of detection.
    pub technologies: Vec<String>,
    pub total_elements: ElementTotals,
    pub page_structure: PageStructure,
}

/// One `<meta>` element. Missing attributes are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
    pub property: String,
    pub charset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    pub action: String,
    /// Submission method, `get` when unspecified.
    pub method: String,
    pub inputs: Vec<InputSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSummary {
    /// Input type, `text` when unspecified.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub placeholder: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub src: String,
    pub alt: String,
    pub width: String,
    pub height: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub rows: usize,
    pub headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    /// `ul` or `ol`.
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Element counts before truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTotals {
    pub headings: usize,
    pub paragraphs: usize,
    pub links: usize,
    pub images: usize,
    pub forms: usize,
    pub tables: usize,
    pub lists: usize,
    /// `script` elements, inline or external.
    pub scripts: usize,
    /// `style` elements plus `link rel=stylesheet`.
    pub stylesheets: usize,
}

/// Which landmark elements the page contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStructure {
    pub has_navigation: bool,
    pub has_footer: bool,
    pub has_header: bool,
    pub has_main: bool,
    pub has_aside: bool,
}

/// Summarize the content of `document`. Script and style content is
/// ignored throughout.
pub fn summarize(document: &HtmlDocument, limits: &SummaryLimits) -> PageSummary {
    let html = document.html();

    let headings = stripped_texts(html, "h1, h2, h3");
    let paragraphs = stripped_texts(html, "p");
    let links: Vec<String> = select(html, "a[href]")
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect();

    let visible_text = visible_text(html);
    let word_count = visible_text.split_whitespace().count();
    let sentences_count = visible_text
        .split('.')
        .filter(|s| !s.trim().is_empty())
        .count();

    let forms: Vec<FormSummary> = select(html, "form").map(form_summary).collect();
    let images: Vec<ImageSummary> = select(html, "img").map(image_summary).collect();
    let tables: Vec<TableSummary> = select(html, "table").map(table_summary).collect();
    let lists: Vec<ListSummary> = select(html, "ul, ol")
        .map(|list| list_summary(list, limits.list_items))
        .collect();
    let meta_tags: Vec<MetaTag> = select(html, "meta").map(meta_tag).collect();

    let total_elements = ElementTotals {
        headings: headings.len(),
        paragraphs: paragraphs.len(),
        links: links.len(),
        images: images.len(),
        forms: forms.len(),
        tables: tables.len(),
        lists: lists.len(),
        scripts: select(html, "script").count(),
        stylesheets: stylesheet_count(html),
    };

    let mut important_words = extract_keywords(&visible_text, DEFAULT_MAX_FEATURES);
    important_words.truncate(limits.keywords);

    PageSummary {
        title: title(html),
        meta_description: meta_description(html),
        technologies: detect_technologies(&meta_tags),
        meta_tags,
        social_links: social_links(&links),
        headings: truncated(headings, limits.headings),
        paragraphs: truncated(paragraphs, limits.paragraphs),
        links: truncated(links, limits.links),
        word_count,
        sentences_count,
        text_content: truncate_chars(&visible_text, limits.text_chars),
        important_words,
        forms,
        images: truncated(images, limits.images),
        tables,
        lists: truncated(lists, limits.lists),
        total_elements,
        page_structure: PageStructure {
            has_navigation: exists(html, "nav"),
            has_footer: exists(html, "footer"),
            has_header: exists(html, "header"),
            has_main: exists(html, "main"),
            has_aside: exists(html, "aside"),
        },
    }
}

fn select<'a>(html: &'a Html, selector: &str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    // Selectors here are compile-time literals; an unparseable one selects nothing.
    let parsed = Selector::parse(selector).ok();
    parsed
        .into_iter()
        .flat_map(move |sel| html.select(&sel).collect::<Vec<_>>())
}

fn select_within<'a>(element: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    Selector::parse(selector)
        .map(|sel| element.select(&sel).collect())
        .unwrap_or_default()
}

fn exists(html: &Html, selector: &str) -> bool {
    select(html, selector).next().is_some()
}

/// Text nodes under `element`, each trimmed, concatenated without separator.
/// Script and style content is skipped.
fn stripped_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        if let Node::Text(text) = node.value() {
            if inside_script(node.ancestors().filter_map(ElementRef::wrap)) {
                continue;
            }
            out.push_str(text.trim());
        }
    }
    out
}

fn stripped_texts(html: &Html, selector: &str) -> Vec<String> {
    select(html, selector)
        .map(stripped_text)
        .filter(|t| !t.is_empty())
        .collect()
}

/// All text of the document outside `script` and `style`, space separated.
fn visible_text(html: &Html) -> String {
    html.root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) if !inside_script(node.ancestors().filter_map(ElementRef::wrap)) => {
                Some(text.trim())
            }
            _ => None,
        })
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn inside_script<'a>(mut ancestors: impl Iterator<Item = ElementRef<'a>>) -> bool {
    ancestors.any(|el| matches!(el.value().name(), "script" | "style"))
}

fn title(html: &Html) -> String {
    select(html, "title")
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| "No title".to_string())
}

fn meta_description(html: &Html) -> String {
    select(html, "meta")
        .find(|m| m.value().attr("name") == Some("description"))
        .and_then(|m| m.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

fn meta_tag(meta: ElementRef<'_>) -> MetaTag {
    MetaTag {
        name: attr_or(meta, "name", ""),
        content: attr_or(meta, "content", ""),
        property: attr_or(meta, "property", ""),
        charset: attr_or(meta, "charset", ""),
    }
}

fn stylesheet_count(html: &Html) -> usize {
    let linked = select(html, "link[rel]")
        .filter(|link| {
            link.value().attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("stylesheet"))
            })
        })
        .count();
    select(html, "style").count() + linked
}

/// Recognize platforms and conventions a page advertises in its meta tags.
/// Matching is case-insensitive; each technology is listed once.
fn detect_technologies(meta_tags: &[MetaTag]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut add = |technology: &str| {
        if !found.iter().any(|t| t == technology) {
            found.push(technology.to_string());
        }
    };

    for meta in meta_tags {
        let name = meta.name.to_lowercase();
        let content = meta.content.to_lowercase();
        let property = meta.property.to_lowercase();

        if name.contains("generator") {
            if let Some((_, cms)) = GENERATORS.iter().find(|(marker, _)| content.contains(marker)) {
                add(*cms);
            }
        }
        if name.contains("viewport") {
            add("Responsive Design");
        }
        if property.contains("og:") {
            add("Open Graph");
        }
        if property.contains("twitter:") {
            add("Twitter Cards");
        }
    }
    found
}

fn attr_or(element: ElementRef<'_>, name: &str, default: &str) -> String {
    element.value().attr(name).unwrap_or(default).to_string()
}

fn form_summary(form: ElementRef<'_>) -> FormSummary {
    let inputs = select_within(form, "input")
        .into_iter()
        .map(|input| InputSummary {
            kind: attr_or(input, "type", "text"),
            name: attr_or(input, "name", ""),
            placeholder: attr_or(input, "placeholder", ""),
            required: input.value().attr("required").is_some(),
        })
        .collect();

    FormSummary {
        action: attr_or(form, "action", ""),
        method: attr_or(form, "method", "get"),
        inputs,
    }
}

fn image_summary(img: ElementRef<'_>) -> ImageSummary {
    ImageSummary {
        src: attr_or(img, "src", ""),
        alt: attr_or(img, "alt", ""),
        width: attr_or(img, "width", ""),
        height: attr_or(img, "height", ""),
        title: attr_or(img, "title", ""),
    }
}

fn table_summary(table: ElementRef<'_>) -> TableSummary {
    TableSummary {
        rows: select_within(table, "tr").len(),
        headers: select_within(table, "th")
            .into_iter()
            .map(stripped_text)
            .collect(),
    }
}

fn list_summary(list: ElementRef<'_>, max_items: usize) -> ListSummary {
    let items: Vec<String> = select_within(list, "li")
        .into_iter()
        .map(stripped_text)
        .collect();
    ListSummary {
        kind: list.value().name().to_string(),
        items: truncated(items, max_items),
    }
}

fn social_links(links: &[String]) -> Vec<SocialLink> {
    links
        .iter()
        .filter_map(|href| {
            let lowered = href.to_lowercase();
            SOCIAL_PLATFORMS
                .iter()
                .find(|platform| lowered.contains(*platform))
                .map(|platform| SocialLink {
                    platform: platform.to_string(),
                    url: href.clone(),
                })
        })
        .collect()
}

fn truncated<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
        <html>
        <head>
            <meta charset="utf-8">
            <title> Acme Tools </title>
            <meta name="viewport" content="width=device-width">
            <meta name="Generator" content="WordPress 6.4">
            <meta property="og:title" content="Acme Tools">
            <link rel="preload Stylesheet" href="/site.css">
            <link rel="icon" href="/favicon.ico">
            <meta name="description" content="Hand tools for builders.">
            <style>body { color: red; }</style>
        </head>
        <body>
            <header><nav><a href="/">Home</a><a href="https://twitter.com/acme">Tweets</a></nav></header>
            <main>
                <h1>Hammers</h1>
                <h2>  </h2>
                <h3>Claw <em>hammers</em></h3>
                <p>Steel hammers. Wooden handles.</p>
                <p></p>
                <script>var tracking = "hammers hammers hammers";</script>
                <form action="/search">
                    <input name="q" placeholder="Search" required>
                    <input type="submit">
                </form>
                <img src="/h.png" alt="Hammer" width="40">
                <table><tr><th>Model</th><th>Weight</th></tr><tr><td>A1</td><td>1kg</td></tr></table>
                <ul><li>One</li><li>Two</li><li>Three</li></ul>
                <a href="">Empty</a>
                <a href="https://www.YouTube.com/acme">Video</a>
            </main>
            <footer>Copyright</footer>
        </body>
        </html>"#;

    fn summary_with(limits: SummaryLimits) -> PageSummary {
        summarize(&HtmlDocument::parse(PAGE), &limits)
    }

    #[test]
    fn test_title_and_description() {
        let summary = summary_with(SummaryLimits::default());
        assert_eq!(summary.title, "Acme Tools");
        assert_eq!(summary.meta_description, "Hand tools for builders.");
    }

    #[test]
    fn test_missing_title() {
        let summary = summarize(&HtmlDocument::parse("<p>hi</p>"), &SummaryLimits::default());
        assert_eq!(summary.title, "No title");
        assert_eq!(summary.meta_description, "");
    }

    #[test]
    fn test_meta_tags() {
        let summary = summary_with(SummaryLimits::default());
        assert_eq!(summary.meta_tags.len(), 5);
        assert_eq!(summary.meta_tags[0].charset, "utf-8");
        assert_eq!(summary.meta_tags[0].name, "");
        assert_eq!(
            summary.meta_tags[3],
            MetaTag {
                name: String::new(),
                content: "Acme Tools".to_string(),
                property: "og:title".to_string(),
                charset: String::new(),
            }
        );
    }

    #[test]
    fn test_technologies_from_meta_tags() {
        let summary = summary_with(SummaryLimits::default());
        assert_eq!(
            summary.technologies,
            vec!["Responsive Design", "WordPress", "Open Graph"]
        );
    }

    #[test]
    fn test_detect_technologies() {
        let meta = |name: &str, content: &str, property: &str| MetaTag {
            name: name.to_string(),
            content: content.to_string(),
            property: property.to_string(),
            charset: String::new(),
        };
        let tags = vec![
            meta("twitter:card", "summary", ""),
            meta("", "summary", "twitter:card"),
            meta("generator", "Drupal 10 (https://www.drupal.org)", ""),
            meta("generator", "Hugo 0.120", ""),
            meta("generator", "", ""),
            meta("", "Acme", "OG:site_name"),
            meta("", "Acme", "og:title"),
        ];
        assert_eq!(
            detect_technologies(&tags),
            vec!["Twitter Cards", "Drupal", "Open Graph"]
        );
        assert!(detect_technologies(&[]).is_empty());
    }

    #[test]
    fn test_script_and_stylesheet_totals() {
        let summary = summary_with(SummaryLimits::default());
        assert_eq!(summary.total_elements.scripts, 1);
        assert_eq!(summary.total_elements.stylesheets, 2);

        let bare = summarize(&HtmlDocument::parse("<p>hi</p>"), &SummaryLimits::default());
        assert_eq!(bare.total_elements.scripts, 0);
        assert_eq!(bare.total_elements.stylesheets, 0);
        assert!(bare.meta_tags.is_empty());
        assert!(bare.technologies.is_empty());
    }

    #[test]
    fn test_headings_paragraphs_links() {
        let summary = summary_with(SummaryLimits::default());
        assert_eq!(summary.headings, vec!["Hammers", "Clawhammers"]);
        assert_eq!(summary.paragraphs, vec!["Steel hammers. Wooden handles."]);
        assert_eq!(
            summary.links,
            vec!["/", "https://twitter.com/acme", "https://www.YouTube.com/acme"]
        );
    }

    #[test]
    fn test_forms_images_tables_lists() {
        let summary = summary_with(SummaryLimits::default());

        let form = &summary.forms[0];
        assert_eq!(form.action, "/search");
        assert_eq!(form.method, "get");
        assert_eq!(form.inputs.len(), 2);
        assert_eq!(form.inputs[0].kind, "text");
        assert!(form.inputs[0].required);
        assert_eq!(form.inputs[1].kind, "submit");
        assert!(!form.inputs[1].required);

        assert_eq!(summary.images[0].alt, "Hammer");
        assert_eq!(summary.images[0].width, "40");
        assert_eq!(summary.images[0].height, "");

        assert_eq!(summary.tables[0].rows, 2);
        assert_eq!(summary.tables[0].headers, vec!["Model", "Weight"]);

        assert_eq!(summary.lists[0].kind, "ul");
        assert_eq!(summary.lists[0].items, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_social_links() {
        let summary = summary_with(SummaryLimits::default());
        let platforms: Vec<_> = summary
            .social_links
            .iter()
            .map(|s| s.platform.as_str())
            .collect();
        assert_eq!(platforms, vec!["twitter", "youtube"]);
    }

    #[test]
    fn test_structure_flags() {
        let summary = summary_with(SummaryLimits::default());
        assert_eq!(
            summary.page_structure,
            PageStructure {
                has_navigation: true,
                has_footer: true,
                has_header: true,
                has_main: true,
                has_aside: false,
            }
        );
    }

    #[test]
    fn test_script_and_style_text_ignored() {
        let summary = summary_with(SummaryLimits::default());
        assert!(!summary.text_content.contains("tracking"));
        assert!(!summary.text_content.contains("color"));
        assert_eq!(summary.important_words.first().map(String::as_str), Some("hammers"));
    }

    #[test]
    fn test_limits_truncate_but_totals_do_not() {
        let summary = summary_with(SummaryLimits {
            headings: 1,
            links: 1,
            list_items: 2,
            text_chars: 10,
            ..SummaryLimits::default()
        });
        assert_eq!(summary.headings.len(), 1);
        assert_eq!(summary.total_elements.headings, 2);
        assert_eq!(summary.links.len(), 1);
        assert_eq!(summary.total_elements.links, 3);
        assert_eq!(summary.lists[0].items, vec!["One", "Two"]);
        assert_eq!(summary.text_content.chars().count(), 13);
        assert!(summary.text_content.ends_with("..."));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("héllo", 10), "héllo");
        assert_eq!(truncate_chars("héllo", 2), "hé...");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn test_limits_deserialize_with_defaults() {
        let limits: SummaryLimits = serde_json::from_str(r#"{"links": 3}"#).unwrap();
        assert_eq!(limits.links, 3);
        assert_eq!(limits.headings, 10);
    }
}
