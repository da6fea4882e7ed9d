pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::review::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/augment", post(handlers::handle_augment))
        .route("/grader", post(handlers::handle_grade))
        .route("/comparison", post(handlers::handle_comparison))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
