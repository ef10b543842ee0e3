//! # CLI Error Type
//!
//! Unified error type for the menu session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  ValidationError (catalog-core)                                        │
//! │       │  caught in the flow ──► "Error: <message>" ──► back to menu    │
//! │                                                                         │
//! │  InputClosed (end of input at a prompt)                                │
//! │       │  caught in Session::run ──► session ends normally              │
//! │                                                                         │
//! │  Io / Json / Config                                                    │
//! │       │  propagated to main ──► logged + exit code 1                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use catalog_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the CLI session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input stream ended while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    /// A product rule was broken.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Flags or environment could not be turned into a config.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON output could not be produced.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                CliError::InputClosed
            }
            dialoguer::Error::IO(e) => CliError::Io(e),
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
