//! # Error Module
//!
//! Errors surfaced by the tda binary.
//!
//! The stack's own `StackError` never reaches this level: the greeting demo
//! discards failed pops locally.

use thiserror::Error;

/// Errors that can occur while running a tda command.
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
