use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::proxy::common::utils::json_response;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Instagram access token is not configured.")]
    MissingToken,

    #[error("Instagram API error: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status reported to the caller for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::MissingToken => json!({ "error": self.to_string() }),
            AppError::Upstream { status, .. } => json!({
                "error": "Instagram API error",
                "status": status,
            }),
            // Details stay in the server log
            _ => {
                tracing::error!("Proxy error: {}", self);
                json!({ "error": "Internal server error" })
            }
        };

        json_response(status, &body, None)
    }
}

// Implement alias for Result to simplify usage
pub type AppResult<T> = Result<T, AppError>;
