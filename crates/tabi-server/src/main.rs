//! tabi-server - LINE webhook server binary.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tabi_core::TabiConfig;
use tabi_server::{create_server, AppState, LineReplyClient, ServerConfig};
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("tabi_server=debug".parse()?),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Every data file is loaded and validated before the port opens.
    let assistant = TabiConfig::from_env()?.load_assistant()?;
    let itinerary = assistant.itinerary();
    match itinerary.date_range() {
        Some((first, last)) => info!(
            days = itinerary.len(),
            events = itinerary.event_count(),
            "Itinerary loaded ({} to {})",
            first,
            last
        ),
        None => info!("Itinerary loaded with no days"),
    }

    let addr: SocketAddr = config.bind_addr().parse()?;
    let client = LineReplyClient::new(
        &config.api_base,
        config.access_token,
        Duration::from_secs(config.reply_timeout_secs),
        config.retry_policy,
    )?;
    info!("Replying through {}", client.endpoint());

    let state = AppState::new(assistant, Arc::new(client), config.channel_secret);
    let app = create_server(state);

    info!("Starting tabi-server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
