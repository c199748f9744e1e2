//! Explanation tones — each tone selects a fixed system prompt and carries
//! the display metadata the share surfaces use.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four explanation tones. Immutable set, defined at process start;
/// every prompt table in the service is keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Baby,
    Sarcastic,
    Influencer,
    Professor,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Baby,
        Tone::Sarcastic,
        Tone::Influencer,
        Tone::Professor,
    ];

    /// Case-insensitive parse of the wire value. Returns `None` for anything
    /// outside the four recognized tones.
    pub fn parse(value: &str) -> Option<Tone> {
        let value = value.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Baby => "baby",
            Tone::Sarcastic => "sarcastic",
            Tone::Influencer => "influencer",
            Tone::Professor => "professor",
        }
    }

    /// Human-facing mode label shown on share cards.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Baby => "Baby Mode",
            Tone::Sarcastic => "Sarcastic Mode",
            Tone::Influencer => "Influencer Mode",
            Tone::Professor => "Professor Mode",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_all_four_tones() {
        assert_eq!(Tone::parse("baby"), Some(Tone::Baby));
        assert_eq!(Tone::parse("sarcastic"), Some(Tone::Sarcastic));
        assert_eq!(Tone::parse("influencer"), Some(Tone::Influencer));
        assert_eq!(Tone::parse("professor"), Some(Tone::Professor));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Tone::parse("Baby"), Some(Tone::Baby));
        assert_eq!(Tone::parse("PROFESSOR"), Some(Tone::Professor));
        assert_eq!(Tone::parse("  sarcastic  "), Some(Tone::Sarcastic));
    }

    #[test]
    fn test_parse_rejects_unknown_tone() {
        assert_eq!(Tone::parse("pirate"), None);
        assert_eq!(Tone::parse(""), None);
        assert_eq!(Tone::parse("babyy"), None);
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for tone in Tone::ALL {
            assert_eq!(Tone::parse(tone.as_str()), Some(tone));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Tone::Influencer).unwrap();
        assert_eq!(json, "\"influencer\"");
        let back: Tone = serde_json::from_str("\"professor\"").unwrap();
        assert_eq!(back, Tone::Professor);
    }

    #[test]
    fn test_labels_are_mode_names() {
        assert_eq!(Tone::Baby.label(), "Baby Mode");
        assert_eq!(Tone::Sarcastic.label(), "Sarcastic Mode");
    }
}
