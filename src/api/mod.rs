//! HTTP API server

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Landing page that `GET /` redirects to
pub const INDEX_PATH: &str = "/static/index.html";

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:activity_name/signup", post(handlers::signup))
        .route(
            "/activities/:activity_name/participants",
            delete(handlers::withdraw),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router that also serves the landing page assets under `/static`
pub fn create_router_with_static(state: AppState, static_dir: &str) -> Router {
    create_router(state).nest_service("/static", ServeDir::new(static_dir))
}
