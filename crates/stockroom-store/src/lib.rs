//! # stockroom-store: Inventory & Cart Engine
//!
//! Owns the [`Store`] and everything it prints.
//!
//! ## Module Organization
//! ```text
//! stockroom_store/
//! ├── lib.rs        ◄─── You are here (exports)
//! ├── store.rs      ◄─── Store: inventory, cart, checkout
//! ├── log.rs        ◄─── InventoryLog / ShoppingLog traits
//! ├── report.rs     ◄─── Fixed-width console tables
//! ├── order_id.rs   ◄─── Random A-Z0-9 order ids
//! ├── config.rs     ◄─── StoreConfig (column width, id length)
//! └── error.rs      ◄─── StoreError
//! ```
//!
//! ## Example
//! ```rust
//! use stockroom_core::{Cart, Category, Item};
//! use stockroom_store::{InventoryLog, ShoppingLog, Store, StoreConfig};
//!
//! let mut store = Store::with_output(Vec::new(), Cart::new(), StoreConfig::default(), Vec::new())?;
//! let pencil = Item::new("Pencil", 4, 4, 10000, Category::SchoolSupplies);
//!
//! store.add_item_stock_to_inventory(pencil.clone());
//! store.add_items_to_cart(&pencil, 2);
//! let order = store.checkout()?.expect("cart had a line");
//!
//! assert_eq!(order.total().units(), 20000);
//! assert!(store.cart().is_empty());
//! # Ok::<(), stockroom_store::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod log;
pub mod order_id;
pub mod report;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use log::{InventoryLog, ShoppingLog};
pub use order_id::{generate_order_id, generate_order_id_with};
pub use store::Store;
