//! HTTP router setup.

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/collections/{slug}", get(handlers::get_collection))
        .route("/collections/{slug}/drop", get(handlers::get_drop_status))
        .route("/collections/{slug}/mint", post(handlers::post_mint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
