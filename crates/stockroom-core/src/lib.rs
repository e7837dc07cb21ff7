//! # stockroom-core: Pure Domain Types for Stockroom
//!
//! This crate holds the value types the store works with. It has zero I/O
//! dependencies: nothing here prints, logs or draws random numbers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/stockroom-cli (driver)                    │   │
//! │  │     seed inventory ──► list ──► add to cart ──► checkout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stockroom-store (Store)                        │   │
//! │  │       InventoryLog + ShoppingLog, tables, order ids             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │   Order   │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RANDOMNESS • PURE FUNCTIONS                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Category, Order, OrderId)
//! - [`cart`] - The shopping cart and its running total
//! - [`money`] - Integer price type
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules shared by the store
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Cart, Category, Item};
//!
//! let pencil = Item::new("Pencil", 4, 4, 10000, Category::SchoolSupplies);
//!
//! let mut cart = Cart::new();
//! cart.push(pencil).unwrap();
//! assert_eq!(cart.total_price().units(), 10000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Width of every column in the console tables.
pub const DEFAULT_COLUMN_WIDTH: usize = 20;

/// Number of characters in a generated order identifier.
pub const DEFAULT_ORDER_ID_LENGTH: usize = 5;

/// Characters an order identifier may be drawn from.
pub const ORDER_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
