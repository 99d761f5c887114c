use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::generate::generate;
use super::health::health;
use super::index::index;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(index))
        // Health
        .route("/health", get(health))
        // Content generation
        .route("/api/generate", post(generate))
}
