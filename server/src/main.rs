//! Encore Server - Main entry point.
//!
//! This binary starts the Encore event-discovery facade with:
//! - Structured JSON logging for production
//! - Graceful shutdown handling (SIGTERM/SIGINT)
//!
//! # Configuration
//!
//! See [`encore_server::config`] for environment variable configuration.
//!
//! # Example
//!
//! ```bash
//! ENCORE_API_KEY="provider-api-key" \
//! ENCORE_EVENTS_URL="https://provider.example/discovery/v2/events" \
//! PORT=8080 \
//! cargo run --release --bin encore-server
//! ```

use std::process::ExitCode;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use encore_server::config::Config;
use encore_server::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging
    init_logging();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            eprintln!("Error: {err}");
            eprintln!();
            eprintln!("Required environment variables:");
            eprintln!("  ENCORE_API_KEY               - Upstream provider API key");
            eprintln!("  ENCORE_EVENTS_URL            - Events base URL (no .json suffix)");
            eprintln!();
            eprintln!("Optional environment variables:");
            eprintln!("  PORT                         - HTTP server port (default: 8080)");
            eprintln!("  ENCORE_PAGE_SIZE             - Upstream page size (default: 200)");
            eprintln!("  ENCORE_UPSTREAM_TIMEOUT_SECS - Upstream timeout (default: 10)");
            eprintln!("  RUST_LOG                     - Log level filter (default: info)");
            return ExitCode::from(1);
        }
    };

    // Log startup information
    info!(
        port = config.port,
        page_size = config.page_size,
        timeout_secs = config.upstream_timeout.as_secs(),
        "Encore server starting"
    );

    // Create application state, including the upstream client
    let state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Failed to initialize upstream client");
            return ExitCode::from(1);
        }
    };

    // Create router
    let app = create_router(state);

    // Bind to address
    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => {
            info!(
                port = config.port,
                address = %bind_addr,
                "Server listening"
            );
            listener
        }
        Err(err) => {
            error!(
                error = %err,
                address = %bind_addr,
                "Failed to bind to address"
            );
            return ExitCode::from(1);
        }
    };

    // Start server with graceful shutdown
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    info!("Server ready to accept connections");

    // Run the server
    if let Err(err) = server.await {
        error!(error = %err, "Server error");
        return ExitCode::from(1);
    }

    info!("Server shutdown complete");
    ExitCode::SUCCESS
}

/// Initialize structured logging with tracing.
///
/// Configures JSON-formatted output for production use with:
/// - Environment-based log level filtering via RUST_LOG
/// - Default log level of `info`
/// - Target and level information
fn init_logging() {
    // Build env filter from RUST_LOG or use default
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Default: info level for our crates, warn for dependencies
        EnvFilter::new("info,tower_http=debug,axum::rejection=trace")
    });

    // JSON format layer for production logging
    let json_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    // Initialize the subscriber
    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .init();
}

/// Creates a future that resolves when a shutdown signal is received.
///
/// Listens for:
/// - SIGTERM (container orchestrator shutdown)
/// - SIGINT (Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
