// Explain feature: tone-selected prompt dispatch, the section parser that
// recovers overview / line-by-line from a raw completion, and the display
// formatter. All LLM calls go through llm_client — no direct API calls here.

pub mod dispatcher;
pub mod format;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod tone;
