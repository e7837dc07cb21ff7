//! # Money Module
//!
//! Provides the `Money` type for item prices and cart totals.
//!
//! ## Integer Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are whole numbers of the smallest currency unit.                │
//! │                                                                         │
//! │    Pencil: 10000      × 2  = 20000                                      │
//! │    Lipstick: 12000    × 1  = 12000                                      │
//! │                                                                         │
//! │  No decimal point, no rounding, no currency symbol. Display prints      │
//! │  the raw number so the console tables show exactly what is stored.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::from_units(10000);
//! let line_total = price.checked_mul(2).unwrap();
//! assert_eq!(line_total.units(), 20000);
//! assert_eq!(line_total.to_string(), "20000");
//!
//! assert_eq!(Money::from_units(i64::MAX / 2).checked_mul(3), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A price or total in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative prices are representable; store arithmetic
///   goes through the `checked_*` methods and rejects overflow
/// - **Transparent serde**: serialises as a bare integer
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a whole number of units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a quantity, `None` on overflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Item: Pencil 10000
    /// Amount: 2
    ///      │
    ///      ▼
    /// checked_mul(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Cart line price: 20000
    /// ```
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Adds two values, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money(units)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
