//! Presentation formatter — turns a parsed line-by-line section into display
//! rows and computes reading stats.
//!
//! Everything here is display-only. Code-span truncation in particular never
//! touches the stored explanation text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::explain::parser::parse_sections;

/// Inline code spans longer than this many chars get shortened for display.
const SPAN_LIMIT: usize = 50;
const SPAN_HEAD: usize = 30;
const SPAN_TAIL: usize = 15;

/// Average reading speed used for the estimate.
const WORDS_PER_MINUTE: usize = 200;

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// One rendered line of a line-by-line breakdown. Bullet rows have their
/// marker stripped and render indented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub text: String,
    pub bullet: bool,
}

/// Server-side rendition of the explanation display: parsed overview,
/// formatted breakdown rows, and reading stats over the full raw text.
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationView {
    pub overview: String,
    pub line_by_line: Vec<DisplayRow>,
    pub word_count: usize,
    pub reading_minutes: usize,
}

/// Parses a raw completion and formats it for display.
pub fn render_view(raw: &str) -> ExplanationView {
    let sections = parse_sections(raw);
    let words = word_count(raw);

    ExplanationView {
        overview: sections.overview,
        line_by_line: display_rows(&sections.line_by_line),
        word_count: words,
        reading_minutes: reading_minutes(words),
    }
}

/// Splits a line-by-line section into display rows. Blank lines produce no
/// row; a row whose trimmed content starts with `-` or `•` is a bullet item.
pub fn display_rows(line_by_line: &str) -> Vec<DisplayRow> {
    truncate_code_spans(line_by_line)
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let (text, bullet) = match trimmed
                .strip_prefix('-')
                .or_else(|| trimmed.strip_prefix('•'))
            {
                Some(rest) => (rest.trim_start(), true),
                None => (trimmed, false),
            };
            Some(DisplayRow {
                text: text.to_string(),
                bullet,
            })
        })
        .collect()
}

/// Shortens backtick-delimited spans past the display limit to a fixed head
/// and tail around an ellipsis, keeping the delimiters. Spans at or under
/// the limit pass through unchanged.
pub fn truncate_code_spans(text: &str) -> String {
    CODE_SPAN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let chars: Vec<char> = caps[1].chars().collect();
            if chars.len() <= SPAN_LIMIT {
                return caps[0].to_string();
            }
            let head: String = chars[..SPAN_HEAD].iter().collect();
            let tail: String = chars[chars.len() - SPAN_TAIL..].iter().collect();
            format!("`{head}...{tail}`")
        })
        .into_owned()
}

/// Whitespace-delimited token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reading-time estimate in minutes, rounded up.
pub fn reading_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}
