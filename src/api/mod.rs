//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.
//! The API is the automation surface: every command maps 1:1 to a timer
//! operation.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/toggle", post(toggle_handler))
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/clear", post(clear_handler))
        .route("/adjust", post(adjust_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
