//! # Stockroom Demo
//!
//! Walks a store through a full shopping session and prints every report.
//!
//! ## Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize logging (stderr, RUST_LOG, default info)                 │
//! │  2. Load StoreConfig from STOCKROOM_* variables                         │
//! │  3. Stock Pencil, Lipstick, <unnamed>, Brush  (unnamed is refused)      │
//! │  4. Print the store description and one table per category             │
//! │  5. Add 2 × Pencil and 1 × Brush to the cart, print the cart            │
//! │  6. Checkout (prints the order), checkout again (prints empty message)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod seed;

use std::io::{self, Write};

use stockroom_core::{Cart, Category, Order};
use stockroom_store::{InventoryLog, ShoppingLog, Store, StoreConfig, StoreResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = config::load()?;
    info!(
        column_width = config.column_width,
        order_id_length = config.order_id_length,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let orders = run(config, stdout.lock())?;
    info!(orders = orders.len(), "Session finished");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs the demo session against `out`, returning the orders placed.
fn run<W: Write>(config: StoreConfig, out: W) -> StoreResult<Vec<Order>> {
    let mut store = Store::with_output(Vec::new(), Cart::new(), config, out)?;

    for item in seed::sample_items() {
        store.add_item_stock_to_inventory(item);
    }
    info!(items = store.inventory().len(), "Inventory stocked");

    store.print_description()?;
    for category in Category::ALL {
        store.print_list_of_items_given_category(category)?;
    }

    store.add_items_to_cart(&seed::pencil(), 2);
    store.add_items_to_cart(&seed::brush(), 1);
    store.print_shopping_cart_items()?;

    let mut orders = Vec::new();
    orders.extend(store.checkout()?);
    orders.extend(store.checkout()?);

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_session() {
        let mut out = Vec::new();
        let orders = run(StoreConfig::default(), &mut out).unwrap();

        assert_eq!(orders.len(), 1);
        let order = &orders[0];
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].name, "Pencil");
        assert_eq!(order.items[1].name, "Brush");
        assert_eq!(order.total().units(), 30000);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("stock: [Item(name: \"Pencil\""));
        assert!(!text.contains("name: \"\""));
        assert_eq!(text.matches("Category            Item(s)").count(), 3);
        assert!(text.contains("BeautyCosmetics     Lipstick            \n"));
        assert!(text.contains("Pencil              20000\n"));
        assert!(text.contains(&order.to_string()));
        assert!(text.ends_with("No items in shopping cart\n"));
    }
}
