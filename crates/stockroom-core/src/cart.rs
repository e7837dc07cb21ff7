//! # Cart
//!
//! The shopper's pending selection.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Store Operation          Cart Method             Cart State Change     │
//! │  ───────────────          ───────────             ─────────────────     │
//! │                                                                         │
//! │  add_items_to_cart() ────► push(line) ──────────► items.push(line)      │
//! │                            (Overflow: unchanged)  total += line.price   │
//! │                                                                         │
//! │  checkout() ─────────────► take_items() ────────► items = []            │
//! │                                                   total = 0             │
//! │                                                                         │
//! │  print_shopping_cart() ──► items() ─────────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `total_price` always equals the sum of the line prices
//! - Lines are kept in insertion order; the same name may appear twice
//!
//! Deserialising ignores any stored `total_price` and rebuilds it from the
//! lines, so the first invariant survives a serde round trip.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Item;

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartLines")]
pub struct Cart {
    items: Vec<Item>,
    total_price: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Creates a cart pre-filled with lines.
    ///
    /// Fails with [`CoreError::Overflow`] when the lines do not fit one total.
    pub fn with_items(items: Vec<Item>) -> CoreResult<Self> {
        let mut cart = Cart::new();
        for line in items {
            cart.push(line)?;
        }
        Ok(cart)
    }

    /// Appends a line and adds its price to the running total.
    ///
    /// On overflow the cart is left untouched.
    pub fn push(&mut self, line: Item) -> CoreResult<()> {
        self.total_price = self
            .total_price
            .checked_add(line.price)
            .ok_or_else(|| CoreError::Overflow {
                name: line.name.clone(),
                field: "total_price",
            })?;
        self.items.push(line);
        Ok(())
    }

    /// Removes and returns every line, leaving an empty cart.
    pub fn take_items(&mut self) -> Vec<Item> {
        self.total_price = Money::zero();
        std::mem::take(&mut self.items)
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_price = Money::zero();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Running total of the line prices.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Wire shape accepted when deserialising a cart; the total is recomputed.
#[derive(Deserialize)]
struct CartLines {
    items: Vec<Item>,
}

impl TryFrom<CartLines> for Cart {
    type Error = CoreError;

    fn try_from(raw: CartLines) -> CoreResult<Self> {
        Cart::with_items(raw.items)
    }
}
