//! Social-content parsing.
//!
//! Two sources feed the card deck. The primary path parses the labeled
//! structure the social prompts mandate (`CODE_OVERVIEW`, `QUICK_SUMMARY`,
//! `BREAKDOWN_<n>`). The fallback path composes social content from a
//! previously obtained explanation when the social dispatch fails: canonical
//! section parse, tone-specific hooks, then bullet-or-sentence segmentation.
//! Both paths are total — no input is ever rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::explain::parser::{parse_sections, split_sentences};
use crate::explain::tone::Tone;

/// At most this many breakdown segments make it onto cards.
const MAX_BREAKDOWNS: usize = 5;

/// Fallback segments shorter than this are dropped as not card-worthy.
const MIN_SEGMENT_CHARS: usize = 30;
const MIN_SENTENCE_CHARS: usize = 20;

static BREAKDOWN_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^BREAKDOWN_\d+").unwrap());
static BULLET_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*[-•]\s*").unwrap());

/// Parsed social content: one overview plus up to five breakdown segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialContent {
    pub overview: String,
    pub breakdowns: Vec<String>,
}

/// Extracts labeled sections from a social-content completion.
///
/// Unlabeled and empty sections are discarded. `QUICK_SUMMARY` is preferred
/// as the overview, `CODE_OVERVIEW` is the stand-in, and when neither is
/// present a generic overview naming the tone is synthesized.
pub fn parse_social_content(raw: &str, tone: Tone) -> SocialContent {
    let mut code_overview = String::new();
    let mut overview = String::new();
    let mut breakdowns = Vec::new();

    for section in raw.split("##").map(str::trim).filter(|s| !s.is_empty()) {
        if let Some(rest) = section.strip_prefix("CODE_OVERVIEW") {
            code_overview = rest.trim().to_string();
        } else if let Some(rest) = section.strip_prefix("QUICK_SUMMARY") {
            overview = rest.trim().to_string();
        } else if BREAKDOWN_LABEL.is_match(section) {
            let content = BREAKDOWN_LABEL.replace(section, "").trim().to_string();
            if !content.is_empty() {
                breakdowns.push(content);
            }
        }
    }

    if overview.is_empty() && !code_overview.is_empty() {
        overview = code_overview;
    }

    if overview.is_empty() {
        overview = format!("Check out this {tone} explanation of some code! 🚀");
    }

    breakdowns.truncate(MAX_BREAKDOWNS);

    SocialContent {
        overview,
        breakdowns,
    }
}

/// Composes social content from a stored explanation when the social
/// dispatch failed. The canonical parser supplies the sections; hooks and
/// segmentation make them card-shaped.
pub fn compose_from_explanation(explanation: &str, tone: Tone) -> SocialContent {
    let sections = parse_sections(explanation);

    let overview = format!(
        "{}{}",
        overview_hook(tone),
        collapse_whitespace(&sections.overview)
    );

    // Bullet boundaries first; sentence boundaries when the text has no list
    // shape worth splitting on.
    let mut segments: Vec<String> = BULLET_BREAK
        .split(&sections.line_by_line)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SEGMENT_CHARS)
        .map(String::from)
        .collect();

    if segments.len() <= 1 {
        segments = split_sentences(&sections.line_by_line)
            .into_iter()
            .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
            .map(|s| format!("{s}."))
            .collect();
    }

    let breakdowns: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| format!("{} {}", segment_hook(tone, i), collapse_whitespace(segment)))
        .filter(|card| card.chars().count() > MIN_SEGMENT_CHARS)
        .take(MAX_BREAKDOWNS)
        .collect();

    SocialContent {
        overview,
        breakdowns,
    }
}

/// Tone-specific lead-in prepended to the fallback overview.
fn overview_hook(tone: Tone) -> &'static str {
    match tone {
        Tone::Baby => "🧒 Ever wondered what this code does? Let me explain it like you're 5! ",
        Tone::Sarcastic => "💀 This code looks complicated, but it's actually... ",
        Tone::Influencer => "💅 OMG, this code is giving me LIFE! Here's the tea: ",
        Tone::Professor => "👨\u{200d}🏫 Let's analyze this code systematically: ",
    }
}

/// Rotating lead-ins for fallback breakdown cards, cycled by position.
fn segment_hook(tone: Tone, index: usize) -> &'static str {
    const BABY: [&str; 6] = [
        "🧒 This part is like...",
        "🎈 And then we have...",
        "🎪 Here's the fun part...",
        "🎨 Look at this...",
        "🎯 This does something cool...",
        "🌟 And finally...",
    ];
    const SARCASTIC: [&str; 6] = [
        "💀 Of course, this line...",
        "🎭 And here we go...",
        "🎪 This is where it gets interesting...",
        "🎯 Because why not...",
        "🌟 And the grand finale...",
        "🎨 The cherry on top...",
    ];
    const INFLUENCER: [&str; 6] = [
        "💅 This part is literally...",
        "✨ And then it's giving...",
        "🔥 This is where the magic happens...",
        "💫 It's doing this thing...",
        "🌟 And it's serving...",
        "💎 The finale is...",
    ];
    const PROFESSOR: [&str; 6] = [
        "📚 This component serves to...",
        "🔬 The function implements...",
        "📖 This section establishes...",
        "🎓 The mechanism operates by...",
        "🔍 This element facilitates...",
        "📝 Finally, this ensures...",
    ];

    let hooks = match tone {
        Tone::Baby => &BABY,
        Tone::Sarcastic => &SARCASTIC,
        Tone::Influencer => &INFLUENCER,
        Tone::Professor => &PROFESSOR,
    };
    hooks[index % hooks.len()]
}

/// Collapses newlines and runs of whitespace into single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_sections_are_extracted() {
        let raw = "## CODE_OVERVIEW\nIt adds numbers.\n## QUICK_SUMMARY\nMath, but fast! 🚀\n## BREAKDOWN_1\nReads the inputs.\n## BREAKDOWN_2\nReturns the sum.";
        let content = parse_social_content(raw, Tone::Baby);
        assert_eq!(content.overview, "Math, but fast! 🚀");
        assert_eq!(
            content.breakdowns,
            vec!["Reads the inputs.".to_string(), "Returns the sum.".to_string()]
        );
    }

    #[test]
    fn test_code_overview_stands_in_for_missing_quick_summary() {
        let raw = "## CODE_OVERVIEW\nIt adds numbers.\n## BREAKDOWN_1\nReads the inputs.";
        let content = parse_social_content(raw, Tone::Professor);
        assert_eq!(content.overview, "It adds numbers.");
    }

    #[test]
    fn test_missing_overview_synthesizes_one_naming_the_tone() {
        let raw = "## BREAKDOWN_1\nReads the inputs.";
        let content = parse_social_content(raw, Tone::Sarcastic);
        assert!(content.overview.contains("sarcastic"));
    }

    #[test]
    fn test_breakdowns_are_capped_at_five() {
        let raw = (1..=8)
            .map(|n| format!("## BREAKDOWN_{n}\nsegment number {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let content = parse_social_content(&raw, Tone::Baby);
        assert_eq!(content.breakdowns.len(), 5);
        assert_eq!(content.breakdowns[0], "segment number 1");
        assert_eq!(content.breakdowns[4], "segment number 5");
    }

    #[test]
    fn test_empty_and_unlabeled_sections_are_discarded() {
        let raw = "## BREAKDOWN_1\n\n## Random Heading\nnoise\n## BREAKDOWN_2\nreal content here";
        let content = parse_social_content(raw, Tone::Baby);
        assert_eq!(content.breakdowns, vec!["real content here".to_string()]);
    }

    #[test]
    fn test_compose_splits_on_bullet_boundaries() {
        let explanation = "## Quick Summary\nSorts a list in place.\n## Line by Line\n- walks the whole list comparing each adjacent pair of items\n- swaps any pair that is out of order until none remain";
        let content = compose_from_explanation(explanation, Tone::Professor);
        assert!(content.overview.starts_with("👨\u{200d}🏫"));
        assert!(content.overview.contains("Sorts a list in place."));
        assert_eq!(content.breakdowns.len(), 2);
        assert!(content.breakdowns[0].starts_with("📚"));
        assert!(content.breakdowns[1].starts_with("🔬"));
    }

    #[test]
    fn test_compose_falls_back_to_sentences_without_bullets() {
        let explanation = "## Quick Summary\nA tiny parser.\n## Line by Line\nThe function reads each token from the stream carefully. It then builds a syntax node for every recognized construct it finds.";
        let content = compose_from_explanation(explanation, Tone::Baby);
        assert_eq!(content.breakdowns.len(), 2);
        assert!(content.breakdowns.iter().all(|card| card.ends_with('.')));
    }

    #[test]
    fn test_compose_drops_segments_under_minimum_length() {
        let explanation = "## Quick Summary\nShort one.\n## Line by Line\n- tiny\n- also small";
        let content = compose_from_explanation(explanation, Tone::Influencer);
        assert!(content.breakdowns.is_empty());
    }

    #[test]
    fn test_compose_flattens_newlines_inside_segments() {
        let explanation = "This function sorts a list of items.\n\nIt walks the list\nonce per pass comparing neighbours as it goes along.";
        let content = compose_from_explanation(explanation, Tone::Sarcastic);
        assert!(content
            .breakdowns
            .iter()
            .all(|card| !card.contains('\n')));
    }

    #[test]
    fn test_segment_hooks_cycle_past_six() {
        assert_eq!(segment_hook(Tone::Baby, 0), segment_hook(Tone::Baby, 6));
        assert_ne!(segment_hook(Tone::Baby, 0), segment_hook(Tone::Baby, 1));
    }
}
