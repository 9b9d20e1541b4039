use std::sync::OnceLock;

use regex_lite::Regex;

/// One ATX heading found in Markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Heading depth, 1 through 6.
    pub level: u8,
    pub title: String,
}

impl OutlineEntry {
    /// Label for a flat outline list, indented two spaces per level below 1.
    pub fn display_label(&self) -> String {
        let indent = "  ".repeat(self.level.saturating_sub(1) as usize);
        format!("{indent}{}", self.title)
    }
}

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("valid heading pattern"))
}

/// Extract the document outline from Markdown source, one entry per ATX
/// heading line, in document order. Feeds the shell's outline dock.
pub fn extract_outline(text: &str) -> Vec<OutlineEntry> {
    let pattern = heading_pattern();
    text.lines()
        .filter_map(|line| {
            let caps = pattern.captures(line)?;
            Some(OutlineEntry {
                level: caps[1].len() as u8,
                title: caps[2].trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_outline_levels() {
        let text = "# One\n\nbody text\n\n## Two\n\n### Three";
        let outline = extract_outline(text);
        assert_eq!(outline.len(), 3);
        assert_eq!(outline[0], OutlineEntry { level: 1, title: "One".to_string() });
        assert_eq!(outline[1].level, 2);
        assert_eq!(outline[2].level, 3);
    }

    #[test]
    fn test_extract_outline_ignores_non_headings() {
        let text = "plain line\n#missing-space\n####### seven hashes\n> # quoted";
        assert!(extract_outline(text).is_empty());
    }

    #[test]
    fn test_extract_outline_trims_titles() {
        let outline = extract_outline("##   Padded title   ");
        assert_eq!(outline[0].title, "Padded title");
    }

    #[test]
    fn test_display_label_indentation() {
        let entry = OutlineEntry { level: 3, title: "Deep".to_string() };
        assert_eq!(entry.display_label(), "    Deep");

        let entry = OutlineEntry { level: 1, title: "Top".to_string() };
        assert_eq!(entry.display_label(), "Top");
    }

    #[test]
    fn test_extract_outline_empty_input() {
        assert!(extract_outline("").is_empty());
    }
}
