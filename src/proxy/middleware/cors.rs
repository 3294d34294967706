// CORS middleware - origin negotiation against the configured allow-list
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Ordered allow-list of browser origins
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Exact match wins, otherwise the first configured origin, otherwise `*`
    pub fn negotiate(&self, origin: Option<&str>) -> &str {
        if let Some(origin) = origin {
            if let Some(allowed) = self.allowed_origins.iter().find(|o| o.as_str() == origin) {
                return allowed;
            }
        }

        self.allowed_origins
            .first()
            .map(String::as_str)
            .unwrap_or("*")
    }

    /// Write the CORS header set for a request from `origin`
    pub fn apply(&self, origin: Option<&str>, headers: &mut HeaderMap) {
        let allow_origin = HeaderValue::from_str(self.negotiate(origin))
            .unwrap_or_else(|_| HeaderValue::from_static("*"));

        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static("86400"),
        );
    }
}

/// Answers preflights on any path with 204 and stamps CORS headers on every
/// other response.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let mut response = if request.method() == Method::OPTIONS {
        let mut preflight = Response::new(Body::empty());
        *preflight.status_mut() = StatusCode::NO_CONTENT;
        preflight
    } else {
        next.run(request).await
    };

    policy.apply(origin.as_deref(), response.headers_mut());
    response
}
