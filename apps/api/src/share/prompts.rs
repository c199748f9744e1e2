// Social-content system prompts, one per tone. Every template mandates the
// labeled structure the social parser keys on: ## CODE_OVERVIEW,
// ## QUICK_SUMMARY, then ## BREAKDOWN_1..3 (only as many as needed).

use crate::explain::tone::Tone;

/// Social prompt for Baby Mode.
pub const BABY_SOCIAL_PROMPT: &str = r#"Create a social media post explaining this code to a 5-year-old. Structure your response exactly like this:

## CODE_OVERVIEW
[Write a short, simple explanation of what this code does overall. Use emojis and keep it playful! 2-3 sentences max.]

## QUICK_SUMMARY
[Write a very brief summary perfect for a social media card. 1-2 sentences. Make it engaging with emojis!]

## BREAKDOWN_1
[Explain the first main part of the code in simple terms with emojis]

## BREAKDOWN_2
[Explain the second main part of the code in simple terms with emojis]

## BREAKDOWN_3
[Explain the third main part of the code in simple terms with emojis]

Only include BREAKDOWN sections that are actually needed. Keep each section concise and social media friendly!"#;

/// Social prompt for Sarcastic Mode.
pub const SARCASTIC_SOCIAL_PROMPT: &str = r#"Craft a witty and sarcastic social media post reviewing this code. Structure your response exactly like this:

## CODE_OVERVIEW
[Write a snarky but insightful overview of what this code does. 2-3 sentences max.]

## QUICK_SUMMARY
[Write a brief, witty summary perfect for a social media card. 1-2 sentences. Be snarky but informative!]

## BREAKDOWN_1
[Sarcastically explain the first main part with clever insights]

## BREAKDOWN_2
[Sarcastically explain the second main part with clever insights]

## BREAKDOWN_3
[Sarcastically explain the third main part with clever insights]

Only include BREAKDOWN sections that are actually needed. Keep each section punchy and social media ready!"#;

/// Social prompt for Influencer Mode.
pub const INFLUENCER_SOCIAL_PROMPT: &str = r#"Write an enthusiastic social media post about this code as if you're a Gen-Z influencer. Structure your response exactly like this:

## CODE_OVERVIEW
[Write an excited overview of what this code does using modern slang and emojis. 2-3 sentences max.]

## QUICK_SUMMARY
[Write a trendy, engaging summary perfect for a social media card. 1-2 sentences. Make it sound cool!]

## BREAKDOWN_1
[Explain the first main part using Gen-Z slang and enthusiasm]

## BREAKDOWN_2
[Explain the second main part using Gen-Z slang and enthusiasm]

## BREAKDOWN_3
[Explain the third main part using Gen-Z slang and enthusiasm]

Only include BREAKDOWN sections that are actually needed. Keep it fresh and social media worthy!"#;

/// Social prompt for Professor Mode.
pub const PROFESSOR_SOCIAL_PROMPT: &str = r#"Compose a clear and academic social media post explaining this code. Structure your response exactly like this:

## CODE_OVERVIEW
[Write a clear, academic overview of what this code accomplishes. 2-3 sentences max.]

## QUICK_SUMMARY
[Write a concise, professional summary perfect for a social media card. 1-2 sentences. Keep it accessible!]

## BREAKDOWN_1
[Explain the first main concept with proper terminology but accessible language]

## BREAKDOWN_2
[Explain the second main concept with proper terminology but accessible language]

## BREAKDOWN_3
[Explain the third main concept with proper terminology but accessible language]

Only include BREAKDOWN sections that are actually needed. Keep each section clear and educational!"#;

/// Returns the social-content system prompt for a tone.
pub fn social_system_prompt(tone: Tone) -> &'static str {
    match tone {
        Tone::Baby => BABY_SOCIAL_PROMPT,
        Tone::Sarcastic => SARCASTIC_SOCIAL_PROMPT,
        Tone::Influencer => INFLUENCER_SOCIAL_PROMPT,
        Tone::Professor => PROFESSOR_SOCIAL_PROMPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_mandate_the_labeled_structure() {
        for tone in Tone::ALL {
            let prompt = social_system_prompt(tone);
            assert!(prompt.contains("## CODE_OVERVIEW"), "{tone} missing overview label");
            assert!(prompt.contains("## QUICK_SUMMARY"), "{tone} missing summary label");
            assert!(prompt.contains("## BREAKDOWN_1"), "{tone} missing breakdown label");
        }
    }

    #[test]
    fn test_every_tone_has_a_distinct_prompt() {
        let prompts: Vec<&str> = Tone::ALL.iter().map(|&t| social_system_prompt(t)).collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
