use std::sync::Arc;

use crate::config::Config;
use crate::starters::generator::StarterGenerator;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only seed listings, shared without locking.
    pub store: Arc<RecordStore>,
    /// Starter generator. Holds the LLM backend only when a credential is configured.
    pub starters: StarterGenerator,
    pub config: Config,
}
