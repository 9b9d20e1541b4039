//! Local text heuristics behind the editor's assistant menu.
//!
//! These run entirely offline: each operation derives its report from the
//! input string alone and never fails, whatever the input looks like.

use super::stats::TextStats;

/// Texts at or below this word count are echoed instead of summarized.
const SHORT_TEXT_WORDS: usize = 50;

/// Fallback summary length when the text has no full-width period.
const FALLBACK_SUMMARY_CHARS: usize = 100;

/// Full-width sentence-ending punctuation.
const SENTENCE_MARKS: [char; 3] = ['。', '！', '？'];

/// Normalize punctuation spacing line by line and wrap the result in an
/// improvement report.
///
/// Every line with non-whitespace content gets a space inserted after each
/// full-width sentence-ending mark that is not already followed by
/// whitespace, then has whitespace runs collapsed to single spaces. Blank
/// lines pass through untouched.
pub fn improve_writing(text: &str) -> String {
    let improved: Vec<String> = text
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                normalize_line(line)
            }
        })
        .collect();

    format!(
        "Improvement suggestions:\n\n{}\n\n* Punctuation and spacing normalized *",
        improved.join("\n")
    )
}

fn normalize_line(line: &str) -> String {
    let mut spaced = String::with_capacity(line.len() + 8);
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        spaced.push(c);
        let followed_by_ws = matches!(chars.peek(), Some(next) if next.is_whitespace());
        if SENTENCE_MARKS.contains(&c) && !followed_by_ws {
            spaced.push(' ');
        }
    }
    collapse_whitespace(&spaced)
}

/// Collapse every run of whitespace into a single ASCII space. Does not
/// trim, so the result is a fixed point of the transform.
fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }
    collapsed
}

/// Produce a short summary report.
///
/// Texts of 50 words or fewer are echoed verbatim. Longer texts keep their
/// first full-width-period sentence (and the second one when at least three
/// period-delimited fragments exist); texts without a period fall back to
/// their first 100 characters plus an ellipsis. Word and character counts
/// are appended.
pub fn summarize(text: &str) -> String {
    let stats = TextStats::of(text);
    if stats.words <= SHORT_TEXT_WORDS {
        return format!("The text is short enough that no summary is needed:\n\n{text}");
    }

    let sentences: Vec<&str> = text.split('。').collect();
    let summary = if sentences.len() > 1 {
        let mut summary = format!("{}。", sentences[0]);
        if sentences.len() > 2 {
            summary.push_str(sentences[1]);
            summary.push('。');
        }
        summary
    } else {
        let head: String = text.chars().take(FALLBACK_SUMMARY_CHARS).collect();
        format!("{head}...")
    };

    format!(
        "Summary:\n\n{summary}\n\nOriginal text: {} words, {} characters",
        stats.words, stats.characters
    )
}

/// Scan for punctuation-style mistakes and report them.
///
/// Two checks are active: a space before a Western comma or period (mixed
/// punctuation styles) and any run of two consecutive spaces.
pub fn check_grammar(text: &str) -> String {
    let mut issues: Vec<&str> = Vec::new();

    if text.contains(" ,") || text.contains(" .") {
        issues.push("Mixed Chinese and Western punctuation styles");
    }
    if text.contains("  ") {
        issues.push("Consecutive spaces");
    }

    if issues.is_empty() {
        "Grammar check complete. No obvious issues found.".to_string()
    } else {
        let list: Vec<String> = issues.iter().map(|issue| format!("- {issue}")).collect();
        format!(
            "Grammar check complete. The following suggestions were found:\n\n{}",
            list.join("\n")
        )
    }
}
