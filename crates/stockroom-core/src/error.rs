//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                      │
//! │  ├── CoreError        - Inventory / cart rule failures                  │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                                │
//! │  └── StoreError       - CoreError + output sink failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → anyhow (binary)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lenient store operations never return these to their caller; they
//! log the error and carry on. The `try_*` variants hand them back.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory and cart rule failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No inventory record carries the requested name.
    #[error("Item not found in inventory: {0}")]
    ItemNotFound(String),

    /// Not enough available stock to move into the cart.
    ///
    /// ## When This Occurs
    /// ```text
    /// Add to Cart (amount: 5)
    ///      │
    ///      ▼
    /// Check stock: availability=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Pencil", available: 3, requested: 5 }
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A price or stock figure left the `i64` range.
    #[error("Arithmetic overflow computing {field} for {name}")]
    Overflow { name: String, field: &'static str },

    /// Checkout was attempted with nothing in the cart.
    #[error("No items in shopping cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value has the wrong length.
    #[error("{field} must be exactly {expected} characters")]
    WrongLength { field: String, expected: usize },

    /// Invalid format (e.g. lowercase letters in an order id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
