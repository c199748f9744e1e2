//! Prompt dispatcher — validates input, picks the tone's system prompt, and
//! forwards the user's code to the chat-completion service.
//!
//! Validation and the credential check both happen before any network
//! traffic. Each action is a single outbound call: no retries, no backoff,
//! and upstream failures surface with their original message.

use tracing::debug;

use crate::errors::AppError;
use crate::explain::prompts::explain_system_prompt;
use crate::explain::tone::Tone;
use crate::llm_client::LlmClient;
use crate::share::prompts::social_system_prompt;

/// Checks request input before any I/O and returns the parsed tone.
pub fn validate(code: &str, tone: &str) -> Result<Tone, AppError> {
    if code.trim().is_empty() {
        return Err(AppError::Validation("Code is required".to_string()));
    }

    Tone::parse(tone).ok_or_else(|| AppError::Validation("Valid tone is required".to_string()))
}

/// Requests a tone-styled explanation for a block of code.
/// The user message carries the code in a fenced block.
pub async fn dispatch_explain(
    llm: &LlmClient,
    code: &str,
    tone: Tone,
) -> Result<String, AppError> {
    debug!("dispatching explain request (tone: {tone})");

    let user = format!("Explain this code with the specified format and tone:\n\n```\n{code}\n```");

    Ok(llm.chat(explain_system_prompt(tone), &user).await?)
}

/// Requests labeled social-media content for a block of code.
/// Same contract as explain with the social prompt table and an unfenced
/// user message.
pub async fn dispatch_social(llm: &LlmClient, code: &str, tone: Tone) -> Result<String, AppError> {
    debug!("dispatching social-content request (tone: {tone})");

    let user = format!(
        "Create a social media post for this code with the specified format and tone:\n\n{code}\n"
    );

    Ok(llm.chat(social_system_prompt(tone), &user).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_code() {
        let err = validate("", "baby").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_whitespace_only_code() {
        let err = validate("   \n\t  ", "professor").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_tone() {
        let err = validate("fn main() {}", "pirate").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    // `validate` is synchronous: rejection is observable before any client
    // or network machinery is involved.
    #[test]
    fn test_validate_accepts_all_recognized_tones() {
        for tone in Tone::ALL {
            assert_eq!(validate("fn main() {}", tone.as_str()).unwrap(), tone);
        }
    }
}
