//! `clickmap summary <FILE>` — content digest of a page.

use crate::cli::input;
use crate::cli::output::{self, Styled};
use crate::dom::HtmlDocument;
use crate::summary::{summarize, PageSummary, SummaryLimits};
use anyhow::Result;
use tracing::info;

/// Run the summary command.
pub fn run(source: &str, limits: &SummaryLimits) -> Result<()> {
    let html = input::read_html(source)?;
    let summary = summarize(&HtmlDocument::parse(&html), limits);

    info!(
        source,
        words = summary.word_count,
        links = summary.total_elements.links,
        "summary finished"
    );

    if output::is_json() {
        return output::print_json(&summary);
    }

    let s = Styled::new();
    if !output::is_quiet() {
        output::print_header(&s);
    }
    print_summary(&s, &summary);
    Ok(())
}

fn print_summary(s: &Styled, summary: &PageSummary) {
    output::print_section(s, &summary.title);
    if !summary.meta_description.is_empty() {
        output::print_field("Description:", &summary.meta_description);
    }
    output::print_field("Words:", &summary.word_count.to_string());
    output::print_field("Sentences:", &summary.sentences_count.to_string());
    if !summary.technologies.is_empty() {
        output::print_field("Technologies:", &summary.technologies.join(", "));
    }

    let totals = &summary.total_elements;
    output::print_field(
        "Elements:",
        &format!(
            "{} headings, {} paragraphs, {} links, {} images, {} forms, {} tables, {} lists, \
             {} scripts, {} stylesheets",
            totals.headings,
            totals.paragraphs,
            totals.links,
            totals.images,
            totals.forms,
            totals.tables,
            totals.lists,
            totals.scripts,
            totals.stylesheets
        ),
    );

    let structure = &summary.page_structure;
    let landmarks: Vec<&str> = [
        (structure.has_header, "header"),
        (structure.has_navigation, "nav"),
        (structure.has_main, "main"),
        (structure.has_aside, "aside"),
        (structure.has_footer, "footer"),
    ]
    .into_iter()
    .filter_map(|(present, name)| present.then_some(name))
    .collect();
    if !landmarks.is_empty() {
        output::print_field("Landmarks:", &landmarks.join(", "));
    }

    if !summary.important_words.is_empty() {
        output::print_field("Keywords:", &summary.important_words.join(", "));
    }

    if !summary.headings.is_empty() {
        println!();
        output::print_section(s, "Headings");
        for heading in &summary.headings {
            println!("    {}", output::ellipsize(heading, 70));
        }
    }

    if !summary.social_links.is_empty() {
        println!();
        output::print_section(s, "Social");
        for link in &summary.social_links {
            output::print_field(&link.platform, &s.cyan(&link.url));
        }
    }

    for form in &summary.forms {
        println!();
        output::print_section(s, &format!("Form {} {}", form.method.to_uppercase(), form.action));
        for field in &form.inputs {
            let required = if field.required {
                s.yellow(" *")
            } else {
                String::new()
            };
            output::print_field(&field.kind, &format!("{}{required}", field.name));
        }
    }
}
