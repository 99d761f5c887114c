//! API layer - HTTP endpoint handlers.

mod generate;
mod health;
mod index;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use generate::{generate, GenerateRequest, GenerateResponse, DEFAULT_LENGTH, DEFAULT_TOPIC};
pub use health::{health, HealthResponse};
pub use index::index;
pub use routes::api_routes;
