//! Permissive cross-origin headers.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::Response,
};

/// Request headers browsers may send cross-origin.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Methods advertised to preflight requests.
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Adds the CORS header set to every response.
pub(super) async fn apply_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    response
}

/// Answers a CORS preflight with an empty success.
pub(super) async fn preflight() -> StatusCode {
    StatusCode::OK
}
