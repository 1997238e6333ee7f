//! Router configuration for the HTTP API.
//!
//! Routes are unversioned and mounted at the root. Every route shares the
//! same middleware stack: body limit, gzip compression, request tracing and
//! a permissive CORS policy.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Any origin: the API carries no credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.body_limit_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/classes",
            get(handlers::list_classes).post(handlers::create_class),
        )
        .route("/bookings", post(handlers::book_class))
        .route("/bookings/{class_date}", get(handlers::get_bookings_by_date))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
