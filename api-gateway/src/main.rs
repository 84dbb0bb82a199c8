// api-gateway/src/main.rs

//! API gateway binary.
//!
//! This binary hosts the baseline health handler over HTTP:
//!
//! - `GET /health` renders the handler's response record as HTTP,
//! - `POST /2015-03-31/functions/function/invocations` returns the record
//!   itself as JSON, the way a local function runtime would.
//!
//! Invocation counts and latencies are exported in Prometheus format on a
//! separate `/metrics` listener.

mod error;
mod proxy;
mod routes;
mod state;

use std::sync::Arc;

use tokio::signal;

use baseline::{HealthResponder, HostConfig, MetricsRegistry, run_prometheus_http_server};
use state::{AppState, SharedState};

#[tokio::main]
async fn main() {
    // Basic tracing setup.
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api_gateway=info,baseline=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cfg = HostConfig::from_env().map_err(|e| format!("invalid configuration: {e}"))?;

    // ---------------------------
    // Metrics
    // ---------------------------

    let metrics = Arc::new(
        MetricsRegistry::new()
            .map_err(|e| format!("failed to initialise metrics registry: {e}"))?,
    );

    if cfg.metrics.enabled {
        let metrics_clone = metrics.clone();
        let addr = cfg.metrics.listen_addr;
        tokio::spawn(async move {
            if let Err(e) = run_prometheus_http_server(metrics_clone, addr).await {
                tracing::error!("metrics HTTP server error: {e}");
            }
        });
        tracing::info!("metrics exporter listening on http://{}/metrics", addr);
    }

    // ---------------------------
    // Shared state + router
    // ---------------------------

    let app_state: SharedState = Arc::new(AppState {
        handler: Arc::new(HealthResponder::new()),
        function_name: cfg.function_name.clone(),
        metrics,
    });

    let app = routes::build_router(app_state);

    // ---------------------------
    // axum 0.8 server
    // ---------------------------

    tracing::info!(
        function = %cfg.function_name,
        "API gateway listening on http://{}",
        cfg.listen_addr
    );

    let listener = tokio::net::TcpListener::bind(cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", cfg.listen_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("API server error: {e}"))?;

    Ok(())
}

/// Waits for Ctrl-C and returns, used for graceful shutdown.
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
