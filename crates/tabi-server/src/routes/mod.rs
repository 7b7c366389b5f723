//! Route definitions.

mod health;
mod webhook;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/webhook", post(webhook::receive_webhook))
        .with_state(state)
}

pub use health::*;
pub use webhook::*;
