pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::explain::handlers as explain;
use crate::history::handlers as history;
use crate::share::handlers as share;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Explain API
        .route("/api/v1/explain", post(explain::handle_explain))
        // Share API
        .route("/api/v1/social-content", post(share::handle_social_content))
        .route("/api/v1/share/cards", post(share::handle_share_cards))
        .route("/api/v1/share/templates", get(share::handle_share_templates))
        // History API
        .route("/api/v1/history", get(history::handle_list_history))
        .route("/api/v1/history/latest", get(history::handle_latest))
        .route(
            "/api/v1/history/:id",
            get(history::handle_get_entry).delete(history::handle_delete_entry),
        )
        .with_state(state)
}
