use crate::frameworks::config::{API_VERSION_PREFIX, CORS_MAX_AGE};
use crate::interface_adapters::handlers::{err_demo, readiness};
use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Build the full HTTP router: versioned API, CORS and request tracing.
pub fn app() -> Router {
    Router::new()
        .nest(API_VERSION_PREFIX, v1())
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

// Version 1 API routes; GET only, everything else is 405.
fn v1() -> Router {
    Router::new()
        .route("/healthz", get(readiness))
        .route("/err", get(err_demo))
}

// Permissive cross-origin policy shared by every route.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([header::LINK])
        .allow_credentials(false)
        .max_age(CORS_MAX_AGE)
}
