//! # Store Capabilities
//!
//! The two capability sets a store exposes. [`Store`](crate::Store) is the
//! only implementor; the split keeps inventory staff and shoppers on
//! separate surfaces.
//!
//! ```text
//! ┌──────────────────────────────┐    ┌──────────────────────────────┐
//! │        InventoryLog          │    │         ShoppingLog          │
//! │  add_item_stock_to_inventory │    │  add_items_to_cart           │
//! │  print_list_of_items_...     │    │  print_shopping_cart_items   │
//! └──────────────┬───────────────┘    │  checkout                    │
//!                │                    └──────────────┬───────────────┘
//!                └───────────────┬───────────────────┘
//!                                ▼
//!                         Store<W: Write>
//! ```

use stockroom_core::{Category, Item, Order};

use crate::error::StoreResult;

/// Stock management.
pub trait InventoryLog {
    /// Writes the category table for `category`.
    fn print_list_of_items_given_category(&mut self, category: Category) -> StoreResult<()>;

    /// Appends `item` to the inventory. An empty name makes this a no-op.
    ///
    /// Returns `true` when the item was appended.
    fn add_item_stock_to_inventory(&mut self, item: Item) -> bool;
}

/// Shopper-facing operations.
pub trait ShoppingLog {
    /// Moves `amount` units of the inventory record named `item.name` into
    /// the cart. Unknown names and short stock make this a no-op.
    ///
    /// Returns `true` when a cart line was added.
    fn add_items_to_cart(&mut self, item: &Item, amount: i64) -> bool;

    /// Writes the cart table.
    fn print_shopping_cart_items(&mut self) -> StoreResult<()>;

    /// Turns the cart into an [`Order`], prints it and empties the cart.
    ///
    /// An empty cart prints `No items in shopping cart` and yields `None`.
    fn checkout(&mut self) -> StoreResult<Option<Order>>;
}
