//! tabi-server - LINE webhook server for the tabi itinerary bot.
//!
//! Verifies LINE webhook signatures, answers each text message with the
//! [`tabi_core::Assistant`] and delivers the reply through the LINE
//! reply API.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tabi_server::{create_server, AppState, LineReplyClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let assistant = tabi_core::TabiConfig::from_env()?.load_assistant()?;
//!     let addr = config.bind_addr();
//!     let client = LineReplyClient::new(
//!         &config.api_base,
//!         config.access_token,
//!         std::time::Duration::from_secs(config.reply_timeout_secs),
//!         config.retry_policy,
//!     )?;
//!     let state = AppState::new(assistant, Arc::new(client), config.channel_secret);
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, create_server(state)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod line;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use line::{LineReplyClient, ReplyError, ReplySender, RetryPolicy};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
