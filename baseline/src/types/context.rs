use serde::{Deserialize, Serialize};

/// Runtime metadata describing a single invocation.
///
/// Handlers receive this for parity with the hosting runtime's calling
/// convention but must not change their output based on it. Hosts use it
/// to correlate log lines.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvocationContext {
    /// Identifier assigned to the invocation by the caller, if any.
    pub request_id: Option<String>,
    /// Name the host registered the function under.
    pub function_name: Option<String>,
    /// Milliseconds remaining before the caller gives up, if known.
    pub deadline_ms: Option<u64>,
}

impl InvocationContext {
    /// Context with only a request id set.
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_camel_case_object() {
        let ctx: InvocationContext =
            serde_json::from_str(r#"{"requestId": "abc-123"}"#).unwrap();
        assert_eq!(ctx, InvocationContext::with_request_id("abc-123"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let ctx: InvocationContext =
            serde_json::from_str(r#"{"functionName": "f", "memoryLimitInMB": 128}"#).unwrap();
        assert_eq!(ctx.function_name.as_deref(), Some("f"));
        assert!(ctx.request_id.is_none());
    }
}
