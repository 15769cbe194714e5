//! Prediction HTTP API
//!
//! Thin axum layer over the inference service; all classification logic
//! lives behind it.

pub mod predict;
pub mod server;

pub use predict::AppState;
pub use server::ApiServer;
