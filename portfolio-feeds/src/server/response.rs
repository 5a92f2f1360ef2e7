//! Response helpers shared by the handlers.

use crate::config::CachePolicy;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// Body of `/api/repos` failures.
pub const REPOS_ERROR: &str = "Failed to fetch repositories";
/// Body of `/api/now-playing` failures.
pub const NOW_PLAYING_ERROR: &str = "Failed to fetch Spotify data";
/// Body of `/api/now-playing` when there is nothing to show.
pub const NO_TRACK_ERROR: &str = "No track data available";

/// Converts a policy into response headers.
pub(crate) fn cache_headers(policy: CachePolicy) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in policy.headers() {
        if let Ok(value) = HeaderValue::from_str(&value) {
            headers.insert(HeaderName::from_static(name), value);
        }
    }
    headers
}

/// A successful JSON body with the configured cache headers.
pub(crate) fn cached_json<T: Serialize>(policy: CachePolicy, body: T) -> Response {
    (cache_headers(policy), Json(body)).into_response()
}

/// A fixed-shape `{"error": ...}` response. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            cache_headers(CachePolicy::NoStore),
            Json(json!({ "error": self.message })),
        )
            .into_response()
    }
}
