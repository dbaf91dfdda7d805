pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::state::AppState;
use crate::uploads::handlers as uploads;

/// Headroom over the file size for multipart boundaries and part headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/candidates", post(candidates::handle_add_candidate))
        .route("/candidates/:id", get(candidates::handle_get_candidate))
        .route("/upload", post(uploads::handle_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
