//! Shared application state.

use std::sync::Arc;

use baseline::{InvocationHandler, MetricsRegistry};

/// Shared state held by the request handlers.
///
/// This is wrapped in an [`Arc`] and passed to request handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Handler every invocation is dispatched to.
    pub handler: Arc<dyn InvocationHandler>,
    /// Name reported as `functionName` in invocation contexts.
    pub function_name: String,
    /// Metrics registry shared with the `/metrics` exporter.
    pub metrics: Arc<MetricsRegistry>,
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;
