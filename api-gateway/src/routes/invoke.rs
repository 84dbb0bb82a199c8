use std::time::Instant;

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use serde_json::Value;

use crate::error::GatewayError;
use crate::state::SharedState;

use super::invocation_context;

/// Path of the function invoke API, as exposed by local runtime emulators.
pub const INVOKE_PATH: &str = "/2015-03-31/functions/function/invocations";

/// Parses an invocation body into an event. An empty body is a `null` event.
fn parse_event(body: &[u8]) -> Result<Value, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| GatewayError::InvalidEvent(e.to_string()))
}

/// `POST /2015-03-31/functions/function/invocations`
///
/// Passes the JSON request body to the handler as the event and returns the
/// handler's response record as JSON.
pub async fn invoke(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<baseline::Response>, GatewayError> {
    let event = match parse_event(&body) {
        Ok(event) => event,
        Err(e) => {
            state.metrics.invocations.rejected_total.inc();
            tracing::warn!("rejected invocation: {e}");
            return Err(e);
        }
    };
    let context = invocation_context(&headers, &state.function_name);

    let start = Instant::now();
    let resp = state.handler.handle(&event, &context);
    state
        .metrics
        .invocations
        .record("invoke", start.elapsed().as_secs_f64());

    tracing::info!(
        request_id = context.request_id.as_deref().unwrap_or("-"),
        status_code = resp.status_code,
        "invocation complete"
    );

    Ok(Json(resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_body_is_null_event() {
        assert_eq!(parse_event(b"").unwrap(), Value::Null);
        assert_eq!(parse_event(b" \n\t").unwrap(), Value::Null);
    }

    #[test]
    fn any_json_value_is_an_event() {
        assert_eq!(parse_event(b"42").unwrap(), Value::from(42));
        assert!(parse_event(br#"{"foo": "bar"}"#).unwrap().is_object());
    }

    #[test]
    fn malformed_body_is_invalid_event() {
        let err = parse_event(b"{not json").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidEvent(_)));
    }
}
