//! Unified error types for the AASA server.
//!
//! Request handling itself has no failure path: every route is total over its
//! inputs and malformed configuration falls back to defaults. Errors here only
//! occur at startup (binding the listener, reading the environment).

use thiserror::Error;

/// Unified error type for the AASA server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (listener bind, socket accept).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ServerError>;
