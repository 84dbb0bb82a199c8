//! Invocation handlers.
//!
//! [`InvocationHandler`] is the seam between a hosting runtime and the logic
//! it runs. [`HealthResponder`] is the only handler: it ignores its inputs
//! and answers with the fixed baseline health payload.

use serde_json::Value;

use crate::json::to_spaced_string;
use crate::types::{HealthStatus, InvocationContext, Response};

/// Pluggable handler invoked once per inbound event.
///
/// Implementations should be deterministic and side-effect free. Hosts
/// share a single instance across tasks, hence the `Send + Sync` bound.
pub trait InvocationHandler: Send + Sync {
    fn handle(&self, event: &Value, context: &InvocationContext) -> Response;
}

/// Handler answering every invocation with the baseline health payload.
///
/// Neither the event nor the context is inspected. Each call builds a fresh
/// [`HealthStatus`], serializes it, and wraps it in a `200` JSON response.
#[derive(Clone, Copy, Debug, Default)]
pub struct HealthResponder;

impl HealthResponder {
    pub fn new() -> Self {
        Self
    }
}

impl InvocationHandler for HealthResponder {
    fn handle(&self, _event: &Value, _context: &InvocationContext) -> Response {
        // Fixed two-field struct of plain strings; serialization cannot fail.
        let body = to_spaced_string(&HealthStatus::baseline())
            .expect("baseline health payload should serialize");
        Response::ok_json(body)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::thread;

    use serde_json::json;

    use super::*;

    const EXPECTED_BODY: &str =
        r#"{"status": "ok", "message": "Feature Flagging API infrastructure baseline"}"#;

    fn expected_response() -> Response {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Response {
            status_code: 200,
            headers,
            body: EXPECTED_BODY.to_string(),
        }
    }

    #[test]
    fn empty_event_and_null_context() {
        let resp = HealthResponder::new().handle(&json!({}), &InvocationContext::default());
        assert_eq!(resp, expected_response());
    }

    #[test]
    fn populated_event_and_context_are_ignored() {
        let event = json!({"foo": "bar", "nested": [1, 2, 3]});
        let ctx = InvocationContext::with_request_id("abc-123");

        let resp = HealthResponder::new().handle(&event, &ctx);
        assert_eq!(resp, expected_response());
    }

    #[test]
    fn headers_are_exactly_json_content_type() {
        let resp = HealthResponder::new().handle(&Value::Null, &InvocationContext::default());
        assert_eq!(resp.headers.len(), 1);
        assert_eq!(resp.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn body_parses_to_health_payload() {
        let resp = HealthResponder::new().handle(&json!([true]), &InvocationContext::default());
        let body: Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(
            body,
            json!({"status": "ok", "message": "Feature Flagging API infrastructure baseline"})
        );
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let handler = HealthResponder::new();
        let first = handler.handle(&json!({}), &InvocationContext::default());
        let second = handler.handle(
            &json!({"other": 1}),
            &InvocationContext::with_request_id("r-2"),
        );

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn record_matches_documented_wire_shape() {
        let resp = HealthResponder::new().handle(&json!({}), &InvocationContext::default());
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "headers": {"Content-Type": "application/json"},
                "body": EXPECTED_BODY,
            })
        );
    }

    #[test]
    fn concurrent_callers_all_see_the_same_response() {
        let handler: Arc<dyn InvocationHandler> = Arc::new(HealthResponder::new());

        let workers: Vec<_> = (0..32)
            .map(|i| {
                let handler = handler.clone();
                thread::spawn(move || {
                    let event = json!({"caller": i});
                    let ctx = InvocationContext::with_request_id(format!("req-{i}"));
                    (0..100)
                        .map(|_| handler.handle(&event, &ctx))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let expected = expected_response();
        for worker in workers {
            for resp in worker.join().expect("worker thread panicked") {
                assert_eq!(resp, expected);
            }
        }
    }
}
