mod config;
mod db;
mod errors;
mod explain;
mod history;
mod llm_client;
mod models;
mod routes;
mod share;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::history::HistoryStores;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dumbify API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL record store is optional: without it, identified callers
    // get warned no-op history and anonymous callers keep the local store.
    let pool = match &config.database_url {
        Some(url) => Some(create_pool(url).await?),
        None => {
            warn!("DATABASE_URL not set; persisted history disabled");
            None
        }
    };

    // Initialize LLM client. A missing credential is a per-request
    // configuration error, not a boot failure.
    let llm = LlmClient::new(config.llm_settings());
    if !llm.credential_configured() {
        warn!("OPENROUTER_API_KEY not set; explain requests will fail until configured");
    }
    info!("LLM client initialized (model: {})", config.llm_model);

    let history = HistoryStores::new(pool);

    let state = AppState {
        llm,
        config: config.clone(),
        history,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
