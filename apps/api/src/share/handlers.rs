//! Axum route handlers for the Share API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::explain::dispatcher;
use crate::share::cards::{build_deck, resolve_template, share_blurb, ShareCard, CARD_TEMPLATES};
use crate::share::social::{compose_from_explanation, parse_social_content};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SocialContentRequest {
    pub code: String,
    pub tone: String,
}

#[derive(Debug, Serialize)]
pub struct SocialContentResponse {
    #[serde(rename = "socialMediaContent")]
    pub social_media_content: String,
}

/// POST /api/v1/social-content
///
/// Returns the raw labeled completion; parsing into segments is the card
/// endpoint's job.
pub async fn handle_social_content(
    State(state): State<AppState>,
    Json(request): Json<SocialContentRequest>,
) -> Result<Json<SocialContentResponse>, AppError> {
    let tone = dispatcher::validate(&request.code, &request.tone)?;

    let content = dispatcher::dispatch_social(&state.llm, &request.code, tone).await?;

    Ok(Json(SocialContentResponse {
        social_media_content: content,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ShareCardsRequest {
    pub code: String,
    pub tone: String,
    /// Previously obtained explanation, used as fallback material when the
    /// social-content dispatch fails.
    pub explanation: Option<String>,
    /// Visual template id; defaults to the first known template.
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShareCardsResponse {
    pub template: &'static str,
    pub tone: &'static str,
    pub blurb: &'static str,
    pub cards: Vec<ShareCard>,
}

/// POST /api/v1/share/cards
///
/// Builds a card deck from fresh social content. When the dispatch fails and
/// the request carries an explanation, the deck is composed from that
/// instead; without fallback material the error propagates.
pub async fn handle_share_cards(
    State(state): State<AppState>,
    Json(request): Json<ShareCardsRequest>,
) -> Result<Json<ShareCardsResponse>, AppError> {
    let tone = dispatcher::validate(&request.code, &request.tone)?;
    let template = resolve_template(request.template.as_deref())?;

    let content = match dispatcher::dispatch_social(&state.llm, &request.code, tone).await {
        Ok(raw) => parse_social_content(&raw, tone),
        Err(e) => match request
            .explanation
            .as_deref()
            .filter(|text| !text.trim().is_empty())
        {
            Some(explanation) => {
                warn!("social-content dispatch failed, composing deck from stored explanation: {e}");
                compose_from_explanation(explanation, tone)
            }
            None => return Err(e),
        },
    };

    let cards = build_deck(&request.code, &content);

    Ok(Json(ShareCardsResponse {
        template: template.id,
        tone: tone.label(),
        blurb: share_blurb(tone),
        cards,
    }))
}

/// GET /api/v1/share/templates
pub async fn handle_share_templates() -> Json<Value> {
    Json(json!({ "templates": CARD_TEMPLATES }))
}
