/// Word, character and line counts for a block of text.
///
/// Backs the word-count dialog and the status bar, and supplies the
/// statistics footer of the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub lines: usize,
}

impl TextStats {
    /// Count words (Unicode-whitespace separated), characters (not bytes)
    /// and lines (newline count + 1; empty text is one line).
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
            lines: text.matches('\n').count() + 1,
        }
    }
}
