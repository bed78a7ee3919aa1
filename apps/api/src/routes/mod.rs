pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::search::handlers as search;
use crate::starters::handlers as starters;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/roles", get(health::roles_handler))
        .route("/search", post(search::handle_search))
        .route("/employer", post(search::handle_employer))
        .route("/starters", post(starters::handle_starters))
        .fallback(not_found)
        .with_state(state)
}
