use crate::interface_adapters::json::{respond_with_error, respond_with_json};
use crate::interface_adapters::protocol::ReadinessResponse;
use axum::{http::StatusCode, response::Response};

// Fixed status and message for the error demonstration route.
pub const ERR_DEMO_STATUS: StatusCode = StatusCode::BAD_REQUEST;
pub const ERR_DEMO_MESSAGE: &str = "Something went wrong";

// Liveness probe: always 200 with an empty object.
#[tracing::instrument(name = "readiness", skip_all)]
pub async fn readiness() -> Response {
    respond_with_json(StatusCode::OK, &ReadinessResponse::default())
}

// Shows the shape of an error response.
#[tracing::instrument(name = "err_demo", skip_all)]
pub async fn err_demo() -> Response {
    respond_with_error(ERR_DEMO_STATUS, ERR_DEMO_MESSAGE)
}
