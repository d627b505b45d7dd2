//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Persisted application settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP client configuration.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Prediction request types, validation and the API client.
pub mod prediction;
