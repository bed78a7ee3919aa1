//! Axum route handler for conversation starters.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartersRequest {
    pub employer_name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartersResponse {
    pub starters: Vec<String>,
}

/// POST /starters
///
/// Conversation starters for an employer and role. Both inputs are optional and
/// generation problems are absorbed by the local fallback.
pub async fn handle_starters(
    State(state): State<AppState>,
    payload: Result<Json<StartersRequest>, JsonRejection>,
) -> Result<Json<StartersResponse>, AppError> {
    let Json(request) = payload?;

    let starters = state
        .starters
        .generate(request.employer_name.as_deref(), request.role.as_deref())
        .await;

    Ok(Json(StartersResponse { starters }))
}
