//! Axum route handlers for the Explain API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::explain::dispatcher;
use crate::history::NewExplanation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub code: String,
    pub tone: String,
    /// Caller identity; selects the persisted history store when present.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// POST /api/v1/explain
///
/// Validates, dispatches one completion request, then appends the result to
/// the caller's history store. The append is best-effort: a failure is
/// logged and never blocks the explanation.
pub async fn handle_explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    let tone = dispatcher::validate(&request.code, &request.tone)?;

    let explanation = dispatcher::dispatch_explain(&state.llm, &request.code, tone).await?;

    let store = state.history.select(request.user_id);
    if let Err(e) = store
        .append(NewExplanation {
            code: request.code,
            tone,
            explanation: explanation.clone(),
        })
        .await
    {
        warn!("failed to save explanation to history: {e}");
    }

    Ok(Json(ExplainResponse { explanation }))
}
