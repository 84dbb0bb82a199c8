//! Proxy integration: renders a handler's response record as HTTP.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::GatewayError;

/// Converts a handler [`baseline::Response`] into an HTTP response.
///
/// Status code, headers, and body bytes are copied verbatim; nothing is
/// added on top (in particular no default `content-type`).
pub fn into_http_response(resp: baseline::Response) -> Result<Response, GatewayError> {
    let status = StatusCode::from_u16(resp.status_code)
        .map_err(|_| GatewayError::InvalidStatus(resp.status_code))?;

    let mut headers = HeaderMap::with_capacity(resp.headers.len());
    for (name, value) in &resp.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| GatewayError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| GatewayError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }

    Ok((status, headers, Body::from(resp.body)).into_response())
}
