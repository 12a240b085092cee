//! StopFinder HTTP server
//!
//! Main entry point for the web server.

use std::{sync::Arc, time::Duration};

use application::StopFinderService;
use infrastructure::{AppConfig, GeocodingAdapter, StopDirectoryAdapter};
use presentation_http::{Templates, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stopfinder_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("StopFinder v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration; API keys come from the environment
    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        geocoder = %config.geocoding.base_url,
        stops = %config.mbta.base_url,
        "Configuration loaded"
    );

    // Build clients and adapters
    let geocoding_config = config
        .geocoding_client_config()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let mbta_config = config
        .mbta_client_config()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let geocoding = GeocodingAdapter::new(&geocoding_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding client: {e}"))?;
    let stops = StopDirectoryAdapter::new(&mbta_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize stop client: {e}"))?;

    // Initialize services
    let stop_finder = StopFinderService::new(Arc::new(geocoding), Arc::new(stops));
    let templates = Templates::new()?;

    let state = AppState {
        stop_finder: Arc::new(stop_finder),
        templates: Arc::new(templates),
    };

    // Build router with request tracing
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
