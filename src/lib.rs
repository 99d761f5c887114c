// Shared components
pub mod config;
pub mod error;
pub mod telemetry;

// Domain layer
pub mod content;

// Application layer
pub mod api;
pub mod server;
