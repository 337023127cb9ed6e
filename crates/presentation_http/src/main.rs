//! HL7 Mirror HTTP Server
//!
//! Main entry point for the HL7 receiving endpoint.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use infrastructure::{AppConfig, init_logging};
use presentation_http::{ShutdownOutcome, drain_within, routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!("🩺 HL7 Mirror v{} starting...", env!("CARGO_PKG_VERSION"));

    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.environment,
        log_format = %config.logging.format,
        "Configuration loaded"
    );

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let state = AppState::from_config(config).context("Invalid initial chaos configuration")?;

    {
        let chaos = state.chaos_config.current();
        info!(
            enabled = chaos.enabled,
            failure_rate_percent = chaos.failure_rate_percent,
            error_type = %chaos.default_error_type,
            latency_enabled = chaos.latency.enabled,
            delay_ms = chaos.latency.delay_ms,
            "Initial chaos configuration"
        );
    }

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/api-docs/openapi.json", addr);

    let shutdown_started = Arc::new(Notify::new());
    let signalled = Arc::clone(&shutdown_started);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal(shutdown_timeout).await;
        signalled.notify_one();
    });

    match drain_within(server, shutdown_started, shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("👋 Server shutdown complete"),
        ShutdownOutcome::TimedOut => info!("👋 Server shutdown forced after timeout"),
    }

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
