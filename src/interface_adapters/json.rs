// Shared JSON response helpers used by every handler.

use crate::interface_adapters::protocol::ErrorResponse;
use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt::Debug;

/// Serializes `payload` and writes it with `status` and a JSON content type.
///
/// A payload that fails to serialize yields a bare 500 with no body; the
/// requested status is dropped and the payload is logged.
pub fn respond_with_json<T>(status: StatusCode, payload: &T) -> Response
where
    T: Serialize + Debug + ?Sized,
{
    let body = match serde_json::to_vec(payload) {
        Ok(body) => body,
        Err(error) => {
            tracing::error!(%error, ?payload, "failed to marshal JSON response");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut response = Body::from(body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    *response.status_mut() = status;
    response
}

/// Writes `{"error": message}` with `status`, logging server errors first.
pub fn respond_with_error(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %message, "responding with 5XX error");
    }

    respond_with_json(status, &ErrorResponse { error: message })
}
