//! Markdown snippet builders for the Format menu.
//!
//! Each builder returns the text to insert plus the byte offset where the
//! caret should land, so the shell can position the cursor without knowing
//! any Markdown syntax itself.

/// Text to insert at the caret, and where the caret goes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownSnippet {
    pub text: String,
    /// Byte offset into `text` for the caret after insertion.
    pub cursor: usize,
}

impl MarkdownSnippet {
    fn at_end(text: String) -> Self {
        let cursor = text.len();
        Self { text, cursor }
    }
}

/// Wrap a selection in strong emphasis, or emit an empty `****` pair with
/// the caret centered when nothing is selected.
pub fn bold(selection: &str) -> MarkdownSnippet {
    if selection.is_empty() {
        MarkdownSnippet {
            text: "****".to_string(),
            cursor: 2,
        }
    } else {
        MarkdownSnippet::at_end(format!("**{selection}**"))
    }
}

/// Wrap a selection in emphasis, or emit an empty `**` pair with the caret
/// centered when nothing is selected.
pub fn italic(selection: &str) -> MarkdownSnippet {
    if selection.is_empty() {
        MarkdownSnippet {
            text: "**".to_string(),
            cursor: 1,
        }
    } else {
        MarkdownSnippet::at_end(format!("*{selection}*"))
    }
}

/// ATX heading prefix for the given level, clamped to 1..=6.
pub fn heading(level: u8) -> MarkdownSnippet {
    let level = level.clamp(1, 6) as usize;
    MarkdownSnippet::at_end(format!("{} ", "#".repeat(level)))
}

const TABLE_TEMPLATE: &str = "\
| Column 1 | Column 2 | Column 3 |
|----------|----------|----------|
| Cell     | Cell     | Cell     |
| Cell     | Cell     | Cell     |";

/// The fixed 3x3 pipe-table template.
pub fn table() -> MarkdownSnippet {
    MarkdownSnippet::at_end(TABLE_TEMPLATE.to_string())
}
