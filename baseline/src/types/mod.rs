//! Core types shared by the handler and its hosts.
//!
//! The handler speaks in terms of a proxy-style [`Response`] record: a
//! numeric status code, a flat header map, and a pre-serialized body. Hosts
//! either hand that record back verbatim (function invoke API) or render it
//! as a real HTTP response (proxy integration).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque runtime context carried alongside an invocation.
pub mod context;

pub use context::InvocationContext;

/// Message reported by the health payload.
pub const BASELINE_MESSAGE: &str = "Feature Flagging API infrastructure baseline";

/// Header name used for the response content type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Content type of every body produced by the handler.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Service status reported in the health payload.
///
/// There is only one state: a handler that is able to answer is healthy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Ok,
}

/// Health payload serialized into the response body.
///
/// Field order is significant: `status` is always emitted before `message`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Status,
    pub message: String,
}

impl HealthStatus {
    /// Builds the fixed baseline payload.
    pub fn baseline() -> Self {
        Self {
            status: Status::Ok,
            message: BASELINE_MESSAGE.to_string(),
        }
    }
}

/// Proxy-style response record returned by an invocation handler.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code the host should answer with.
    pub status_code: u16,
    /// Response headers, keyed by header name.
    pub headers: BTreeMap<String, String>,
    /// Serialized response body.
    pub body: String,
}

impl Response {
    /// Creates a `200` response carrying a JSON `body`.
    pub fn ok_json(body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            CONTENT_TYPE_HEADER.to_string(),
            CONTENT_TYPE_JSON.to_string(),
        );
        Self {
            status_code: 200,
            headers,
            body,
        }
    }

    /// Looks up a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
