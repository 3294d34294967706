// Instagram photo feed handler
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::PhotoFeed;
use crate::proxy::common::utils::json_response;
use crate::proxy::mappers::to_photo_feed;
use crate::proxy::server::AppState;

/// Browser cache lifetime of a successful feed (seconds)
const FEED_MAX_AGE: u64 = 3600;

/// GET /api/instagram
pub async fn handle_photos(State(state): State<AppState>) -> Response {
    match fetch_photo_feed(&state).await {
        Ok(feed) => json_response(StatusCode::OK, &feed, Some(FEED_MAX_AGE)),
        Err(e) => {
            if let AppError::Upstream { status, body } = &e {
                tracing::error!("Instagram API error: {} {}", status, body);
            }
            e.into_response()
        }
    }
}

async fn fetch_photo_feed(state: &AppState) -> AppResult<PhotoFeed> {
    let access_token = state
        .token_manager
        .get_token()
        .await
        .ok_or(AppError::MissingToken)?;

    let count = state.photo_count;
    let page = state.upstream.fetch_media(&access_token, count).await?;
    let feed = to_photo_feed(page, count);

    tracing::debug!("Serving {} photos", feed.count);
    Ok(feed)
}

/// Fallback for every unknown path or method
pub async fn handle_not_found() -> Response {
    json_response(StatusCode::NOT_FOUND, &json!({ "error": "Not found" }), None)
}
