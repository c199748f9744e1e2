//! Tone-tagged response parser.
//!
//! Recovers an overview section and a line-by-line section from a raw model
//! completion. The model is asked for `##`-prefixed headings but does not
//! reliably produce them, so extraction runs as one ordered fallback chain:
//! heading match → paragraph split → sentence split → raw text. Parsing is
//! total: no input is ever rejected, and the overview is non-empty whenever
//! the trimmed input is.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const HEADING_MARKER: &str = "##";

/// First-line keywords that mark an overview section, across all four tone
/// heading styles ("Quick Summary", "The Gist", "The Tea ☕", "Executive Summary").
const OVERVIEW_KEYWORDS: &[&str] = &["summary", "gist", "tea", "executive summary"];
const OVERVIEW_GLYPH: char = '🎯';

/// First-line keywords that mark a detail section ("Line by Line",
/// "Line by Line Roast", "Breaking It Down, Bestie", "Technical Breakdown").
const DETAIL_KEYWORDS: &[&str] = &[
    "line",
    "breakdown",
    "roast",
    "breaking it down",
    "technical breakdown",
];
const DETAIL_GLYPH: char = '🔍';

/// Overview synthesized when the completion has a detail section but nothing
/// recognizable as a summary.
const PLACEHOLDER_OVERVIEW: &str = "Here's the explanation:";

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// The two logical sections of an explanation. `line_by_line` may be empty;
/// `overview` is empty only when the input trims to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSections {
    pub overview: String,
    pub line_by_line: String,
}

/// Splits a raw completion into overview and line-by-line sections.
///
/// When two sections classify into the same family, the later one wins.
/// That mirrors the observed product behavior for duplicate headings and is
/// an assumption about model output, not a contract.
pub fn parse_sections(raw: &str) -> ParsedSections {
    let mut overview = String::new();
    let mut line_by_line = String::new();

    // Tier 1: heading-driven extraction.
    for section in raw
        .split(HEADING_MARKER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let (header, content) = split_header(section);
        if content.is_empty() {
            continue;
        }
        if is_overview_header(header) {
            overview = content.to_string();
        } else if is_detail_header(header) {
            line_by_line = content.to_string();
        }
    }

    // Tier 2: blank-line-delimited paragraphs, when headings gave us nothing.
    if overview.is_empty() && line_by_line.is_empty() {
        let paragraphs: Vec<&str> = PARAGRAPH_BREAK
            .split(raw.trim())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if paragraphs.len() >= 2 {
            overview = paragraphs[0].to_string();
            line_by_line = paragraphs[1..].join("\n\n");
        }
    }

    // Tier 3: sentence boundaries. Only a text with more than three sentences
    // gets split; shorter text becomes the overview wholesale.
    if overview.is_empty() && line_by_line.is_empty() {
        let sentences = split_sentences(raw);
        if sentences.len() > 3 {
            overview = format!("{}.", sentences[..2].join(". "));
            line_by_line = sentences[2..].join(". ");
        } else {
            overview = raw.trim().to_string();
        }
    }

    // Tier 4: detail without a summary gets a placeholder overview.
    if overview.is_empty() && !line_by_line.is_empty() {
        overview = PLACEHOLDER_OVERVIEW.to_string();
    }

    // Final guarantee: never hand back an empty overview for non-blank input.
    if overview.is_empty() {
        overview = raw.trim().to_string();
    }

    ParsedSections {
        overview,
        line_by_line,
    }
}

/// Splits a candidate section into (first line, remaining content).
fn split_header(section: &str) -> (&str, &str) {
    match section.split_once('\n') {
        Some((header, rest)) => (header.trim(), rest.trim()),
        None => (section.trim(), ""),
    }
}

fn is_overview_header(header: &str) -> bool {
    if header.contains(OVERVIEW_GLYPH) {
        return true;
    }
    let lower = header.to_lowercase();
    OVERVIEW_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn is_detail_header(header: &str) -> bool {
    if header.contains(DETAIL_GLYPH) {
        return true;
    }
    let lower = header.to_lowercase();
    DETAIL_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Non-empty fragments between sentence-ending punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
