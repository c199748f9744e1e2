// Share feature: labeled social-content prompts and parsing, plus card deck
// assembly for the five visual templates.

pub mod cards;
pub mod handlers;
pub mod prompts;
pub mod social;
