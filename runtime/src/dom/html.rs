//! Static HTML document backed by `scraper`.

use super::text::rendered_text;
use super::{DocumentTree, ElementFacts};
use crate::error::{ExtractError, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A parsed HTML page, optionally anchored at the URL it was loaded from.
///
/// `scraper` documents are not `Send`; build and query them on one thread.
pub struct HtmlDocument {
    html: Html,
    base_url: Option<Url>,
}

impl HtmlDocument {
    /// Parse a full HTML document with no page URL.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        let base_url = document_base(&html, None);
        Self { html, base_url }
    }

    /// Parse a full HTML document loaded from `page_url`.
    ///
    /// The page URL anchors relative links and any relative `<base href>`.
    pub fn parse_with_url(source: &str, page_url: &str) -> Result<Self> {
        let page = Url::parse(page_url).map_err(|source| ExtractError::InvalidBaseUrl {
            url: page_url.to_string(),
            source,
        })?;
        let html = Html::parse_document(source);
        let base_url = document_base(&html, Some(page));
        Ok(Self { html, base_url })
    }

    /// The URL relative links resolve against, if one is known.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Borrow the underlying parsed tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    fn facts(&self, element: ElementRef<'_>) -> ElementFacts {
        let el = element.value();
        let is_html = &*el.name.ns == HTML_NAMESPACE;
        let tag_name = el.name().to_string();

        let link_target = if is_html && tag_name.eq_ignore_ascii_case("a") {
            el.attr("href").and_then(|raw| self.resolve_href(raw))
        } else {
            None
        };

        ElementFacts {
            tag_name,
            is_html,
            rendered_text: Some(rendered_text(element)),
            aria_label: el.attr("aria-label").map(str::to_string),
            link_target,
            type_attr: el.attr("type").map(str::to_string),
        }
    }

    /// Resolve an `href` attribute value the way a browser's `href` getter
    /// does, as far as a static tree allows.
    fn resolve_href(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        match &self.base_url {
            Some(base) => match base.join(trimmed) {
                Ok(url) => Some(url.to_string()),
                Err(e) => {
                    warn!("unresolvable href {trimmed:?} against {base}: {e}");
                    Some(raw.to_string())
                }
            },
            None if trimmed.is_empty() => None,
            None => Some(trimmed.to_string()),
        }
    }
}

impl DocumentTree for HtmlDocument {
    fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementFacts>> {
        let parsed = Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        let matched: Vec<ElementFacts> = self
            .html
            .select(&parsed)
            .map(|element| self.facts(element))
            .collect();

        debug!("selector {selector:?} matched {} elements", matched.len());
        Ok(matched)
    }
}

/// Compute the document base: the first `<base href>` resolved against the
/// page URL, else the page URL itself.
fn document_base(html: &Html, page: Option<Url>) -> Option<Url> {
    let base_href = Selector::parse("base[href]")
        .ok()
        .and_then(|sel| {
            html.select(&sel)
                .next()
                .and_then(|el| el.value().attr("href"))
                .map(|href| href.trim().to_string())
        });

    let Some(href) = base_href else {
        return page;
    };

    let resolved = match &page {
        Some(page_url) => page_url.join(&href),
        None => Url::parse(&href),
    };

    match resolved {
        Ok(url) => Some(url),
        Err(e) => {
            debug!("ignoring unusable <base href={href:?}>: {e}");
            page
        }
    }
}
