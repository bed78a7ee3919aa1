//! Axum route handlers for role search and employer lookup.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::search::employer::{lookup_employer, EmployerLookup};
use crate::search::matcher::{effective_top_k, search_roles, SearchHit, DEFAULT_TOP_K};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub role: String,
    #[serde(default = "default_top_k")]
    pub top_k: i64,
}

fn default_top_k() -> i64 {
    DEFAULT_TOP_K
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerRequest {
    pub employer_name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /search
///
/// Who is hiring for a role. `top_k` below 1 is treated as 1.
pub async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(request) = payload?;
    let top_k = effective_top_k(request.top_k);

    let results = search_roles(&state.store, &request.role, top_k);
    Ok(Json(SearchResponse { results }))
}

/// POST /employer
///
/// Tell me about an employer. A miss is `{"found": false}` with 200, not a 404.
pub async fn handle_employer(
    State(state): State<AppState>,
    payload: Result<Json<EmployerRequest>, JsonRejection>,
) -> Result<Json<EmployerLookup>, AppError> {
    let Json(request) = payload?;
    Ok(Json(lookup_employer(&state.store, &request.employer_name)))
}
