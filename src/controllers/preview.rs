//! Markdown preview rendering.
//!
//! A pure pipeline from Markdown source to a complete, styled HTML document
//! string: no disk I/O, no timestamps, byte-identical output for identical
//! input. The shell feeds the result straight into its web view on every
//! text change, so everything here stays cheap and synchronous.

use std::collections::HashMap;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::domain::theme::PreviewTheme;

/// Paragraph marker the pro variant replaces with a table of contents.
const TOC_MARKER: &str = "[TOC]";

/// Shared body styling for the pro document template.
const BASE_STYLE: &str = "\
body {
    font-family: 'Segoe UI', Arial, sans-serif;
    line-height: 1.6;
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
}
pre {
    background: #f8f8f8;
    padding: 10px;
    border-radius: 5px;
    overflow: auto;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 10px 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 8px;
    text-align: left;
}
th {
    background-color: #f2f2f2;
}
blockquote {
    border-left: 4px solid #ddd;
    padding-left: 15px;
    color: #666;
}
.toc {
    background: #f9f9f9;
    border: 1px solid #ddd;
    padding: 10px;
    margin: 10px 0;
}
";

/// Styling for the basic (unthemed) variant.
const BASIC_STYLE: &str = "\
body {
    font-family: Arial, sans-serif;
    line-height: 1.6;
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
}
h1, h2, h3 {
    color: #333;
}
code {
    background: #f4f4f4;
    padding: 2px 4px;
    border-radius: 3px;
}
pre {
    background: #f4f4f4;
    padding: 10px;
    border-radius: 5px;
    overflow: auto;
}
blockquote {
    border-left: 4px solid #ddd;
    padding-left: 15px;
    color: #666;
}
";

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render markdown text to a bare HTML fragment.
pub fn render_fragment(text: &str) -> String {
    let parser = Parser::new_ext(text, markdown_options());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Pro pipeline: render a fragment, and when the source contains a `[TOC]`
/// marker paragraph, give every heading a slug anchor and replace each
/// marker with a nested contents list linking to those anchors.
fn render_fragment_with_toc(text: &str) -> String {
    let events: Vec<Event> = Parser::new_ext(text, markdown_options()).collect();
    let markers = find_marker_paragraphs(&events);
    if markers.is_empty() {
        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        return html_output;
    }

    let entries = collect_headings(&events);
    let toc_html = render_toc(&entries);

    let mut rewritten = Vec::with_capacity(events.len());
    let mut heading_index = 0;
    let mut skip_until = 0;
    for (i, event) in events.into_iter().enumerate() {
        if i < skip_until {
            continue;
        }
        if let Some(&end) = markers.get(&i) {
            if let Some(toc) = &toc_html {
                rewritten.push(Event::Html(CowStr::from(toc.clone())));
            }
            skip_until = end + 1;
            continue;
        }
        match event {
            Event::Start(Tag::Heading {
                level,
                classes,
                attrs,
                ..
            }) => {
                let id = entries
                    .get(heading_index)
                    .map(|entry| CowStr::from(entry.slug.clone()));
                heading_index += 1;
                rewritten.push(Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }));
            }
            other => rewritten.push(other),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, rewritten.into_iter());
    html_output
}

/// Render the pro-variant document: fragment plus TOC handling, wrapped in
/// the full template with the theme's CSS overrides.
pub fn render_document(text: &str, theme: PreviewTheme) -> String {
    wrap_document(&render_fragment_with_toc(text), theme)
}

/// Render the basic-variant document: plain fragment in the unthemed
/// template.
pub fn render_basic_document(text: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n{BASIC_STYLE}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        render_fragment(text)
    )
}

/// Wrap an HTML fragment in the pro document template. The theme block
/// comes after the base rules so that equal-specificity theme rules (body,
/// pre, table colors) win.
pub fn wrap_document(fragment: &str, theme: PreviewTheme) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n{BASE_STYLE}{}</style>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n",
        theme.css()
    )
}

struct TocEntry {
    level: u8,
    title: String,
    slug: String,
}

/// Find paragraphs whose only content is the `[TOC]` marker. Maps the index
/// of the paragraph start event to the index of its end event. The parser
/// may split the marker across several text events, so the paragraph text
/// is reassembled before comparing.
fn find_marker_paragraphs(events: &[Event]) -> HashMap<usize, usize> {
    let mut markers = HashMap::new();
    for (i, event) in events.iter().enumerate() {
        if !matches!(event, Event::Start(Tag::Paragraph)) {
            continue;
        }
        let mut text = String::new();
        let mut only_text = true;
        let mut j = i + 1;
        while j < events.len() && !matches!(events[j], Event::End(TagEnd::Paragraph)) {
            match &events[j] {
                Event::Text(t) => text.push_str(t),
                _ => only_text = false,
            }
            j += 1;
        }
        if j < events.len() && only_text && text == TOC_MARKER {
            markers.insert(i, j);
        }
    }
    markers
}

/// Collect headings in document order, assigning deduplicated slug anchors
/// (`title`, `title-1`, `title-2`, ...).
fn collect_headings(events: &[Event]) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut current: Option<(u8, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((*level as u8, String::new()));
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, title)) = current.as_mut() {
                    title.push_str(t);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current.take() {
                    let base = slug::slugify(&title);
                    let count = seen.entry(base.clone()).or_insert(0);
                    let slug = if *count == 0 {
                        base.clone()
                    } else {
                        format!("{base}-{count}")
                    };
                    *count += 1;
                    entries.push(TocEntry { level, title, slug });
                }
            }
            _ => {}
        }
    }
    entries
}

/// Render the nested contents list, or None when the document has no
/// headings to link.
///
/// Nesting is tracked relative to the shallowest heading in the document,
/// so a document whose first heading is deeper than a later one still
/// produces balanced markup. A deeper list always nests inside a list
/// item; when no item is open at that point, an empty placeholder item is
/// emitted to wrap it.
fn render_toc(entries: &[TocEntry]) -> Option<String> {
    let root = entries.iter().map(|entry| entry.level).min()?;
    let mut html = String::from("<div class=\"toc\">\n<ul>");
    let mut level = root;
    let mut open_item = false;

    for entry in entries {
        while level < entry.level {
            if !open_item {
                html.push_str("\n<li>");
            }
            html.push_str("\n<ul>");
            level += 1;
            open_item = false;
        }
        while level > entry.level {
            if open_item {
                html.push_str("</li>");
            }
            html.push_str("\n</ul></li>");
            level -= 1;
            open_item = false;
        }
        if open_item {
            html.push_str("</li>");
        }
        html.push_str(&format!(
            "\n<li><a href=\"#{}\">{}</a>",
            entry.slug,
            escape_html(&entry.title)
        ));
        open_item = true;
    }

    if open_item {
        html.push_str("</li>");
    }
    while level > root {
        html.push_str("\n</ul></li>");
        level -= 1;
    }
    html.push_str("\n</ul>\n</div>\n");
    Some(html)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fragment_headings_and_emphasis() {
        let fragment = render_fragment("# Title\n\n**bold** and *soft*");
        assert!(fragment.contains("<h1>Title</h1>"));
        assert!(fragment.contains("<strong>bold</strong>"));
        assert!(fragment.contains("<em>soft</em>"));
    }

    #[test]
    fn test_render_fragment_tables_and_strikethrough() {
        let fragment = render_fragment("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(fragment.contains("<table>"));
        assert!(fragment.contains("<del>gone</del>"));
    }

    #[test]
    fn test_render_fragment_malformed_input_passes_through() {
        let fragment = render_fragment("**unclosed and ]( stray");
        assert!(fragment.contains("unclosed"));
    }

    #[test]
    fn test_render_document_dark_theme() {
        let document = render_document("# Title\n\n**bold**", PreviewTheme::Dark);
        assert!(document.contains("<meta charset=\"UTF-8\">"));
        assert!(document.contains("background-color: #2d2d2d"));
        assert!(document.contains("<h1>Title</h1>"));
        assert!(document.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_render_document_deterministic() {
        let text = "# One\n\n[TOC]\n\n## Two\n\nsome *body* text";
        let first = render_document(text, PreviewTheme::EyeCareGreen);
        let second = render_document(text, PreviewTheme::EyeCareGreen);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_basic_document_unthemed() {
        let document = render_basic_document("# Title");
        assert!(document.contains("<h1>Title</h1>"));
        assert!(document.contains("font-family: Arial"));
        assert!(!document.contains("#2d2d2d"));
        assert!(!document.contains("class=\"toc\""));
    }

    #[test]
    fn test_toc_marker_replaced_with_anchored_list() {
        let document = render_document("[TOC]\n\n# One\n\n## Two\n\n# Three", PreviewTheme::Default);
        assert!(document.contains("<div class=\"toc\">"));
        assert!(!document.contains("[TOC]"));
        assert!(document.contains("<h1 id=\"one\">One</h1>"));
        assert!(document.contains("<a href=\"#two\">Two</a>"));
        // Two nests under One
        let one = document.find("<a href=\"#one\">").unwrap();
        let two = document.find("<a href=\"#two\">").unwrap();
        assert!(one < two);
    }

    #[test]
    fn test_toc_duplicate_headings_get_unique_anchors() {
        let document = render_document("[TOC]\n\n# Setup\n\n# Setup", PreviewTheme::Default);
        assert!(document.contains("id=\"setup\""));
        assert!(document.contains("id=\"setup-1\""));
        assert!(document.contains("href=\"#setup-1\""));
    }

    #[test]
    fn test_toc_deeper_first_heading_stays_balanced() {
        let document = render_document("[TOC]\n\n## Sub\n\n# Top", PreviewTheme::Default);
        let toc_start = document.find("<div class=\"toc\">").unwrap();
        let toc_end = document.find("</div>").unwrap();
        let toc = &document[toc_start..toc_end];
        assert_eq!(toc.matches("<ul>").count(), toc.matches("</ul>").count());
        assert_eq!(toc.matches("<li>").count(), toc.matches("</li>").count());
        assert!(toc.contains("<a href=\"#sub\">Sub</a>"));
        assert!(toc.contains("<a href=\"#top\">Top</a>"));
    }

    #[test]
    fn test_dark_theme_pre_rule_overrides_base() {
        let document = render_document("```\ncode\n```", PreviewTheme::Dark);
        let base = document.find("background: #f8f8f8").unwrap();
        let themed = document.find("background: #3d3d3d").unwrap();
        // Equal specificity, so the theme rule must come later to win.
        assert!(themed > base);
    }

    #[test]
    fn test_no_marker_means_no_anchors() {
        let document = render_document("# Title", PreviewTheme::Default);
        assert!(document.contains("<h1>Title</h1>"));
        assert!(!document.contains("id=\"title\""));
    }

    #[test]
    fn test_marker_without_headings_drops_paragraph() {
        let document = render_document("[TOC]\n\njust text", PreviewTheme::Default);
        assert!(!document.contains("[TOC]"));
        assert!(document.contains("just text"));
    }

    #[test]
    fn test_toc_titles_escaped() {
        let document = render_document("[TOC]\n\n# A & B", PreviewTheme::Default);
        assert!(document.contains("<a href=\"#a-b\">A &amp; B</a>"));
    }

    #[test]
    fn test_render_empty_input() {
        let document = render_document("", PreviewTheme::Dark);
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<body>"));
    }
}
