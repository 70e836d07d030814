//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{communities, health};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately, outside rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new().route("/subreddit", post(communities::create_community))
}
