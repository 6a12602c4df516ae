//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/cards", get(handlers::list_cards))
        .route("/spreads", get(handlers::list_spreads))
        .route("/reading", post(handlers::create_reading))
        .route("/reading/:reading_id", get(handlers::get_reading))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Router with the deployment layers from `server` configuration applied
pub fn create_server_router(state: AppState, server: &ServerConfig) -> Router {
    let mut router = create_router(state);

    if let Some(dir) = &server.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    if server.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
