// Middleware module - Axum middleware

pub mod cors;
pub mod logging;

pub use cors::{cors_middleware, CorsPolicy};
pub use logging::logging_middleware;
