//! Metrics for hosts running an invocation handler.
//!
//! Handlers stay side-effect free; the host records every invocation it
//! dispatches into [`InvocationMetrics`] and exposes them on `/metrics` in
//! Prometheus text format.
//!
//! Typical usage in a host:
//!
//! ```ignore
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//! use baseline::metrics::{MetricsRegistry, run_prometheus_http_server};
//!
//! let registry = Arc::new(MetricsRegistry::new()?);
//! let addr: SocketAddr = "127.0.0.1:9898".parse()?;
//!
//! // Spawn the HTTP exporter in the background:
//! tokio::spawn(run_prometheus_http_server(registry.clone(), addr));
//!
//! // Around each dispatched invocation:
//! registry.invocations.record("health", elapsed_secs);
//! ```

pub mod prometheus;

pub use prometheus::{InvocationMetrics, MetricsRegistry, run_prometheus_http_server};
