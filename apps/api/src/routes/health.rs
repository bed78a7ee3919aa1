use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "QueueLess API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Reports how many records are loaded and whether LLM starters are enabled.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "recordCount": state.store.len(),
        "hasGenerationCredential": state.config.has_generation_credential()
    }))
}

/// GET /roles
/// Debug helper: every role title in the seed, inactive listings included.
pub async fn roles_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.role_titles())
}
