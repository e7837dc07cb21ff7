//! # Validation Module
//!
//! Input validation shared by the store.
//!
//! ## Where The Rules Apply
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  add_item_stock_to_inventory ──► validate_item_name                     │
//! │                                                                         │
//! │  add_items_to_cart ────────────► validate_amount                        │
//! │                                                                         │
//! │  OrderId::parse ───────────────► validate_order_id                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_amount, validate_item_name};
//!
//! validate_item_name("Pencil").unwrap();
//! validate_amount(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::ORDER_ID_CHARSET;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be the empty string
///
/// Whitespace is not trimmed: `" "` is a valid (if odd) name.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Lipstick").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates an order identifier.
///
/// ## Rules
/// - Exactly `expected_len` characters
/// - Only `A-Z` and `0-9`
pub fn validate_order_id(id: &str, expected_len: usize) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "order id".to_string(),
        });
    }

    if id.len() != expected_len {
        return Err(ValidationError::WrongLength {
            field: "order id".to_string(),
            expected: expected_len,
        });
    }

    if !id.bytes().all(|b| ORDER_ID_CHARSET.contains(&b)) {
        return Err(ValidationError::InvalidFormat {
            field: "order id".to_string(),
            reason: "must contain only uppercase letters and digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart amount.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Pencil").is_ok());
        assert!(validate_item_name(" ").is_ok());
        assert_eq!(
            validate_item_name(""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(1).is_ok());
        assert!(validate_amount(1000).is_ok());
        assert!(validate_amount(0).is_err());
        assert!(validate_amount(-3).is_err());
    }

    #[test]
    fn test_validate_order_id() {
        assert!(validate_order_id("A1B2C", 5).is_ok());
        assert!(validate_order_id("ZZZZZZZ", 7).is_ok());

        assert!(matches!(
            validate_order_id("", 5),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_order_id("A1B2", 5),
            Err(ValidationError::WrongLength { expected: 5, .. })
        ));
        assert!(matches!(
            validate_order_id("a1b2c", 5),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
