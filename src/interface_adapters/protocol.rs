use serde::Serialize;

// Empty JSON object returned by the readiness endpoint.
#[derive(Debug, Default, Serialize)]
pub struct ReadinessResponse {}

// Error envelope for JSON responses; always exactly one field.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
