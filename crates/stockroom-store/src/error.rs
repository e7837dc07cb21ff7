//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (stockroom-core)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds output sink failures                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  anyhow::Error (binary) ← printed on exit                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use stockroom_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A domain rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing a report to the output sink failed.
    ///
    /// ## When This Occurs
    /// - stdout closed (broken pipe)
    /// - a custom writer returned an error
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),

    /// The store configuration cannot be used.
    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
