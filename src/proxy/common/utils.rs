// Utility functions

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Serialize `body` as a JSON response, with a public `Cache-Control` when
/// `cache_ttl` is set.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    cache_ttl: Option<u64>,
) -> Response {
    let (status, payload) = match serde_json::to_vec(body) {
        Ok(bytes) => (status, bytes),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"error":"Internal server error"}"#.to_vec(),
            )
        }
    };

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    if let Some(ttl) = cache_ttl.filter(|ttl| *ttl > 0) {
        if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl)) {
            headers.insert(header::CACHE_CONTROL, value);
        }
    }

    response
}
