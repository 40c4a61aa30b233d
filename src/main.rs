//! Tomatic - a single-slot kitchen timer server
//!
//! This is the main entry point for the tomatic application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use tomatic::{
    api::create_router,
    client::{watch, WatchConfig},
    config::{Command, Config},
    state::AppState,
    storage::TimerStore,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomatic={},tower_http=info", config.log_level()))
        .init();

    match config.command.take() {
        Some(Command::Watch { url, poll_secs }) => watch(WatchConfig { url, poll_secs }).await,
        Some(Command::Serve) | None => serve(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Starting tomatic server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, data_dir={}",
        config.host,
        config.port,
        config.data_dir.display()
    );

    let store = TimerStore::open(&config);
    info!("Using {} storage backend", store.backend());

    // Create application state
    let state = Arc::new(AppState::new(store, config.port, config.host.clone()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /api/timer - Current countdown with remaining time");
    info!("  POST   /api/timer - Start a countdown of durationMs");
    info!("  DELETE /api/timer - Cancel the countdown");
    info!("  GET    /          - Countdown web page");
    info!("  GET    /health    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
