//! Share card deck assembly.
//!
//! A deck is one code card, one overview card, then one card per breakdown
//! segment, paired with a visual template id the client renders. Card
//! content is display-bounded here; the stored explanation is never altered.

use serde::Serialize;

use crate::errors::AppError;
use crate::explain::tone::Tone;
use crate::share::social::SocialContent;

/// Display bound for the code card.
const CODE_CARD_CHARS: usize = 90;
const CODE_CARD_LINES: usize = 8;

/// Display bound for the overview card.
const OVERVIEW_CARD_CHARS: usize = 110;

/// One of the five visual templates a card deck can be rendered with.
#[derive(Debug, Clone, Serialize)]
pub struct CardTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CARD_TEMPLATES: [CardTemplate; 5] = [
    CardTemplate {
        id: "modern",
        name: "Modern Gradient",
        description: "Clean gradient design",
    },
    CardTemplate {
        id: "developer",
        name: "Developer Dark",
        description: "Dark theme for developers",
    },
    CardTemplate {
        id: "minimal",
        name: "Minimal White",
        description: "Clean minimal design",
    },
    CardTemplate {
        id: "retro",
        name: "Retro Neon",
        description: "Vibrant neon colors",
    },
    CardTemplate {
        id: "professional",
        name: "Professional",
        description: "LinkedIn-ready design",
    },
];

/// Resolves a requested template id against the known set.
/// `None` selects the first template; an unknown id is a validation error.
pub fn resolve_template(id: Option<&str>) -> Result<&'static CardTemplate, AppError> {
    match id {
        None => Ok(&CARD_TEMPLATES[0]),
        Some(requested) => CARD_TEMPLATES
            .iter()
            .find(|template| template.id == requested)
            .ok_or_else(|| AppError::Validation(format!("Unknown card template '{requested}'"))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Code,
    Overview,
    Breakdown,
}

/// A transient view-model for one share card. Not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ShareCard {
    pub kind: CardKind,
    pub title: String,
    pub content: String,
}

/// Assembles the deck: code, overview, then one card per breakdown segment.
pub fn build_deck(code: &str, content: &SocialContent) -> Vec<ShareCard> {
    let mut deck = vec![
        ShareCard {
            kind: CardKind::Code,
            title: "The Code".to_string(),
            content: smart_truncate(&clamp_lines(code, CODE_CARD_LINES), CODE_CARD_CHARS),
        },
        ShareCard {
            kind: CardKind::Overview,
            title: "Quick Overview".to_string(),
            content: smart_truncate(&content.overview, OVERVIEW_CARD_CHARS),
        },
    ];

    deck.extend(content.breakdowns.iter().enumerate().map(|(i, segment)| {
        ShareCard {
            kind: CardKind::Breakdown,
            title: format!("Breakdown {}", i + 1),
            content: segment.clone(),
        }
    }));

    deck
}

/// Word-aware truncation: cuts at the last sentence, clause, or word
/// boundary near the limit rather than mid-word, then appends an ellipsis.
pub fn smart_truncate(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }

    let truncated = &chars[..max_chars];
    let last_of = |needle: char| truncated.iter().rposition(|&c| c == needle);

    let cut = match (last_of('.'), last_of(','), last_of(' ')) {
        (Some(period), _, _) if period + 50 > max_chars => period + 1,
        (_, Some(comma), _) if comma + 30 > max_chars => comma + 1,
        (_, _, Some(space)) if space + 20 > max_chars => space,
        _ => max_chars,
    };

    let head: String = chars[..cut].iter().collect();
    format!("{}...", head.trim_end())
}

/// Keeps at most `max_lines` lines, marking an elision when lines are cut.
pub fn clamp_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= max_lines {
        return text.to_string();
    }
    format!("{}\n...", lines[..max_lines].join("\n"))
}

/// Tone-specific blurb attached to a deck for the share caption.
pub fn share_blurb(tone: Tone) -> &'static str {
    match tone {
        Tone::Baby => {
            "Simplifying complex code explanations with AI - making development more accessible to everyone!"
        }
        Tone::Sarcastic => {
            "AI-powered code review with personality - sometimes a little humor makes debugging more bearable!"
        }
        Tone::Influencer => {
            "Innovative AI tool transforming how we communicate technical concepts across teams."
        }
        Tone::Professor => {
            "Advanced AI providing comprehensive code analysis and documentation - impressive technological capability!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_template_defaults_to_first() {
        assert_eq!(resolve_template(None).unwrap().id, "modern");
    }

    #[test]
    fn test_resolve_template_accepts_known_ids() {
        for template in &CARD_TEMPLATES {
            assert_eq!(resolve_template(Some(template.id)).unwrap().id, template.id);
        }
    }

    #[test]
    fn test_resolve_template_rejects_unknown_id() {
        let err = resolve_template(Some("vaporwave")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_deck_is_code_then_overview_then_breakdowns() {
        let content = SocialContent {
            overview: "Adds two numbers.".to_string(),
            breakdowns: vec!["first part".to_string(), "second part".to_string()],
        };
        let deck = build_deck("fn add(a: i32, b: i32) -> i32 { a + b }", &content);

        assert_eq!(deck.len(), 4);
        assert_eq!(deck[0].kind, CardKind::Code);
        assert_eq!(deck[1].kind, CardKind::Overview);
        assert_eq!(deck[2].title, "Breakdown 1");
        assert_eq!(deck[3].title, "Breakdown 2");
    }

    #[test]
    fn test_short_text_is_not_truncated() {
        assert_eq!(smart_truncate("short", 90), "short");
    }

    #[test]
    fn test_smart_truncate_prefers_word_boundaries() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let result = smart_truncate(text, 40);
        assert!(result.ends_with("..."));
        // The cut lands on a word boundary, never mid-word.
        let body = result.trim_end_matches("...").trim_end();
        assert!(text.starts_with(body));
        assert!(text.as_bytes()[body.len()] == b' ');
    }

    #[test]
    fn test_smart_truncate_prefers_sentence_boundaries_near_the_limit() {
        let text = format!("{}. {}", "a".repeat(60), "b".repeat(60));
        let result = smart_truncate(&text, 90);
        assert_eq!(result, format!("{}....", "a".repeat(60)));
    }

    #[test]
    fn test_clamp_lines_keeps_short_code_intact() {
        let code = "line one\nline two";
        assert_eq!(clamp_lines(code, 8), code);
    }

    #[test]
    fn test_clamp_lines_marks_elision() {
        let code = (1..=12)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let clamped = clamp_lines(&code, 8);
        assert!(clamped.ends_with("\n..."));
        assert_eq!(clamped.lines().count(), 9);
    }

    #[test]
    fn test_every_tone_has_a_blurb() {
        for tone in Tone::ALL {
            assert!(!share_blurb(tone).is_empty());
        }
    }
}
