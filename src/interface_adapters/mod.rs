// Interface adapters: HTTP routing, handlers and JSON responses.

pub mod handlers;
pub mod json;
pub mod protocol;
pub mod routes;
