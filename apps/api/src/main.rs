mod config;
mod errors;
mod llm_client;
mod models;
mod normalize;
mod routes;
mod search;
mod starters;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::routes::build_router;
use crate::starters::generator::{StarterGenerator, MODEL_VARIANTS};
use crate::state::AppState;
use crate::store::RecordStore;

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

    info!("Starting QueueLess API v{}", env!("CARGO_PKG_VERSION"));

    // Seed data is loaded once and never mutated afterwards
    let store = RecordStore::load(&config.seed_path)?;
    if store.is_empty() {
        warn!("Seed file {} has no records", config.seed_path.display());
    }

    let starters = build_starter_generator(&config)?;

    let state = AppState {
        store: Arc::new(store),
        starters,
        config: config.clone(),
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

/// Wires the LLM client in only when a credential is present.
fn build_starter_generator(config: &Config) -> Result<StarterGenerator> {
    let Some(api_key) = config.openai_api_key.clone() else {
        info!("OPENAI_API_KEY not set; conversation starters use local templates");
        return Ok(StarterGenerator::new(None));
    };

    let llm = LlmClient::new(
        api_key,
        config.openai_base_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!(
        "LLM client initialized (models: {}, timeout: {}s)",
        MODEL_VARIANTS.join(", "),
        config.llm_timeout_secs
    );

    let backend: Arc<dyn TextGenerator> = Arc::new(llm);
    Ok(StarterGenerator::new(Some(backend)))
}
