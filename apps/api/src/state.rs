use crate::config::Config;
use crate::history::HistoryStores;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// History store selector: anonymous callers share the in-process bounded
    /// store, identified callers get the Postgres-backed one.
    pub history: HistoryStores,
}
