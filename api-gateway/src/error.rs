use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors surfaced by the gateway's HTTP routes.
#[derive(Debug)]
pub enum GatewayError {
    /// Invocation request body is not a JSON document.
    InvalidEvent(String),
    /// Handler returned a status code that HTTP cannot carry.
    InvalidStatus(u16),
    /// Handler returned a header name or value that HTTP cannot carry.
    InvalidHeader(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::InvalidEvent(msg) => write!(f, "invalid event: {msg}"),
            GatewayError::InvalidStatus(code) => {
                write!(f, "handler returned invalid status code {code}")
            }
            GatewayError::InvalidHeader(name) => {
                write!(f, "handler returned invalid header {name:?}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidEvent(_) => StatusCode::BAD_REQUEST,
            GatewayError::InvalidStatus(_) | GatewayError::InvalidHeader(_) => {
                tracing::error!("failed to render handler response: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
