use std::time::Instant;

use axum::{extract::State, http::HeaderMap, response::Response};
use serde_json::Value;

use crate::error::GatewayError;
use crate::proxy::into_http_response;
use crate::state::SharedState;

use super::invocation_context;

/// `GET /health`
///
/// Invokes the handler with an empty event and renders its response record
/// as the HTTP response.
pub async fn health(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let context = invocation_context(&headers, &state.function_name);

    let start = Instant::now();
    let resp = state.handler.handle(&Value::Object(Default::default()), &context);
    state
        .metrics
        .invocations
        .record("health", start.elapsed().as_secs_f64());

    tracing::debug!(
        request_id = context.request_id.as_deref().unwrap_or("-"),
        status_code = resp.status_code,
        "health invocation"
    );

    into_http_response(resp)
}
