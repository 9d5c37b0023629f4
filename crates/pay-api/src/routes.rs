//! # Routes
//!
//! Axum router configuration for the reader façade.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /readers - List readers
/// - POST /readers - Register a reader
/// - POST /readers/{reader_id}/checkout - Create a checkout on a reader
///
/// Every unmatched path or method answers 404 with an empty body. The
/// per-route fallbacks matter: without them axum would answer 405 for a
/// known path with the wrong method, which is outside the wire contract.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the reference frontend is a static browser app
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/readers",
            get(handlers::list_readers)
                .post(handlers::create_reader)
                .fallback(handlers::not_found),
        )
        .route(
            "/readers/{reader_id}/checkout",
            post(handlers::create_reader_checkout).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
