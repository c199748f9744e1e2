//! Axum route handlers for the History API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::explain::format::{render_view, ExplanationView};
use crate::history::HISTORY_CAP;
use crate::models::history::HistoryEntry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreQuery {
    /// Caller identity; selects the persisted store when present.
    pub user_id: Option<Uuid>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub entries: Vec<HistoryEntry>,
}

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
    Query(params): Query<StoreQuery>,
) -> Result<Json<HistoryListResponse>, AppError> {
    let store = state.history.select(params.user_id);
    let entries = store.list(params.limit.unwrap_or(HISTORY_CAP)).await?;
    Ok(Json(HistoryListResponse { entries }))
}

#[derive(Debug, Serialize)]
pub struct LatestResponse {
    pub entry: Option<HistoryEntry>,
}

/// GET /api/v1/history/latest
pub async fn handle_latest(
    State(state): State<AppState>,
    Query(params): Query<StoreQuery>,
) -> Result<Json<LatestResponse>, AppError> {
    let store = state.history.select(params.user_id);
    let entry = store.latest().await?;
    Ok(Json(LatestResponse { entry }))
}

#[derive(Debug, Serialize)]
pub struct HistoryDetailResponse {
    pub entry: HistoryEntry,
    pub view: ExplanationView,
}

/// GET /api/v1/history/:id
///
/// Returns the stored entry together with its rendered view: parsed
/// overview, formatted line-by-line rows, and reading stats.
pub async fn handle_get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<StoreQuery>,
) -> Result<Json<HistoryDetailResponse>, AppError> {
    let store = state.history.select(params.user_id);
    let entry = store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("explanation {id}")))?;

    let view = render_view(&entry.explanation);

    Ok(Json(HistoryDetailResponse { entry, view }))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// DELETE /api/v1/history/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<StoreQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    let store = state.history.select(params.user_id);
    if !store.delete(id).await? {
        return Err(AppError::NotFound(format!("explanation {id}")));
    }
    Ok(Json(DeleteResponse { deleted: true }))
}
