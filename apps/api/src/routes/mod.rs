pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/resumes", get(handlers::handle_list_resumes))
        .route(
            "/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(handlers::MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}
