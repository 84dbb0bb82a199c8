//! Baseline library crate.
//!
//! This crate provides the health-check handler for the Feature Flagging API
//! infrastructure baseline and the pieces a host needs to serve it:
//!
//! - the response record and payload types (`types`),
//! - the handler seam and the health responder (`responder`),
//! - spaced JSON text serialization for response bodies (`json`),
//! - Prometheus-based invocation metrics (`metrics`),
//! - and host configuration (`config`).
//!
//! The handler is stateless: every invocation gets the same `200` JSON
//! response regardless of its event or context.

pub mod config;
pub mod json;
pub mod metrics;
pub mod responder;
pub mod types;

// Re-export host configuration types.
pub use config::{ConfigError, HostConfig, MetricsConfig};

// Re-export the handler seam and its implementation.
pub use responder::{HealthResponder, InvocationHandler};

// Re-export metrics registry and invocation metrics.
pub use metrics::{InvocationMetrics, MetricsRegistry, run_prometheus_http_server};

// Re-export domain types at the crate root for convenience.
pub use types::*;
