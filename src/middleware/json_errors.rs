use axum::{
    Json,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::response::ErrorResponse;

/// Rewrites error responses produced outside the handlers (body limit,
/// timeout) into the `{"message":"error","error":...}` envelope. Responses
/// that already carry JSON pass through untouched.
pub async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    let message = status.canonical_reason().unwrap_or("Request failed");
    tracing::debug!(status = %status, "wrapping middleware error response");

    let body = Json(ErrorResponse::new(message)).into_response().into_body();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Response::from_parts(parts, body)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
