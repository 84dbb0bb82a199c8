//! HTTP routes exposed by the gateway.

pub mod health;
pub mod invoke;

use axum::{
    Router,
    http::HeaderMap,
    routing::{get, post},
};

use baseline::InvocationContext;

use crate::state::SharedState;

/// Header carrying a caller-assigned request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the gateway router over `state`.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(invoke::INVOKE_PATH, post(invoke::invoke))
        .with_state(state)
}

/// Builds the invocation context for a request.
fn invocation_context(headers: &HeaderMap, function_name: &str) -> InvocationContext {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    InvocationContext {
        request_id,
        function_name: Some(function_name.to_string()),
        deadline_ms: None,
    }
}
