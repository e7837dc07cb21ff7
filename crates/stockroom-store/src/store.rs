//! # Store
//!
//! The single active component: one inventory, one cart, one output sink.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Operations                                  │
//! │                                                                         │
//! │  add_item_stock_to_inventory(item)                                      │
//! │       └── name empty? ── yes ──► ignored (debug log)                    │
//! │                        └─ no ──► inventory.push(item)                   │
//! │                                                                         │
//! │  add_items_to_cart(item, amount)                                        │
//! │       ├── find first stock record named item.name                       │
//! │       ├── availability < amount? ──► ignored (debug log)                │
//! │       ├── price × amount or stock - amount overflows? ──► ignored       │
//! │       ├── cart.push(line: amount units, price × amount)                 │
//! │       ├── inventory.retain(name != item.name)                           │
//! │       └── inventory.push(record with stock and availability reduced)    │
//! │                                                                         │
//! │  checkout()                                                             │
//! │       ├── cart empty? ──► "No items in shopping cart"                   │
//! │       └── take cart lines ──► Order { random id, now, lines } ──► print │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation needs `&mut self`; the store is owned by exactly one caller.

use std::fmt;
use std::io::{self, Write};

use chrono::Utc;
use stockroom_core::validation::{validate_amount, validate_item_name};
use stockroom_core::{Cart, Category, CoreError, CoreResult, Item, Order};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::log::{InventoryLog, ShoppingLog};
use crate::order_id::generate_order_id;
use crate::report::{render_cart_table, render_category_table};

/// An in-memory store writing its reports to `W`.
#[derive(Debug)]
pub struct Store<W = io::Stdout> {
    stock_inventory: Vec<Item>,
    shopping_cart: Cart,
    config: StoreConfig,
    out: W,
}

impl Store<io::Stdout> {
    /// Creates a store that prints to stdout with the default layout.
    pub fn new(stock_inventory: Vec<Item>, shopping_cart: Cart) -> Self {
        Store {
            stock_inventory,
            shopping_cart,
            config: StoreConfig::default(),
            out: io::stdout(),
        }
    }
}

impl<W: Write> Store<W> {
    /// Creates a store with an explicit configuration and output sink.
    pub fn with_output(
        stock_inventory: Vec<Item>,
        shopping_cart: Cart,
        config: StoreConfig,
        out: W,
    ) -> StoreResult<Self> {
        config.validate()?;
        Ok(Store {
            stock_inventory,
            shopping_cart,
            config,
            out,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn inventory(&self) -> &[Item] {
        &self.stock_inventory
    }

    pub fn cart(&self) -> &Cart {
        &self.shopping_cart
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the store and hands back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// `(category, name)` pairs for every inventory record in `category`,
    /// in inventory order. Cloning the iterator restarts the walk.
    pub fn items_by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (Category, &str)> + Clone + '_ {
        self.stock_inventory
            .iter()
            .filter(move |item| item.category == category)
            .map(|item| (item.category, item.name.as_str()))
    }

    /// Writes the store description (`stock: [...]`) to the output.
    pub fn print_description(&mut self) -> StoreResult<()> {
        let text = self.to_string();
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Appends `item` to the inventory, rejecting an empty name.
    pub fn try_add_item_stock_to_inventory(&mut self, item: Item) -> CoreResult<()> {
        validate_item_name(&item.name)?;
        debug!(item = %item.name, category = %item.category, "stock added");
        self.stock_inventory.push(item);
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Moves `amount` units of the first inventory record named `item.name`
    /// into the cart.
    ///
    /// Only `item.name` is read from the argument; stock, availability, price
    /// and category come from the inventory record. Every record sharing the
    /// name is replaced by a single reduced record appended at the end.
    ///
    /// A move whose line price, stock or cart total leaves the `i64` range
    /// fails with [`CoreError::Overflow`] before anything is changed.
    pub fn try_add_items_to_cart(&mut self, item: &Item, amount: i64) -> CoreResult<()> {
        validate_amount(amount)?;

        let stock = self
            .stock_inventory
            .iter()
            .find(|stock| stock.name == item.name)
            .cloned()
            .ok_or_else(|| CoreError::ItemNotFound(item.name.clone()))?;

        if !stock.can_supply(amount) {
            return Err(CoreError::InsufficientStock {
                name: stock.name,
                available: stock.availability,
                requested: amount,
            });
        }

        let overflow = |field| CoreError::Overflow {
            name: stock.name.clone(),
            field,
        };
        let line_price = stock.price.checked_mul(amount).ok_or_else(|| overflow("price"))?;
        let quantity_stock = stock
            .quantity_stock
            .checked_sub(amount)
            .ok_or_else(|| overflow("quantity_stock"))?;
        // availability >= amount > 0, so this stays in range
        let remaining = stock.availability - amount;

        self.shopping_cart.push(Item {
            name: stock.name.clone(),
            quantity_stock: amount,
            availability: remaining,
            price: line_price,
            category: stock.category,
        })?;

        self.stock_inventory.retain(|record| record.name != stock.name);
        debug!(item = %stock.name, amount, remaining, "moved stock into cart");
        self.stock_inventory.push(Item {
            quantity_stock,
            availability: remaining,
            ..stock
        });

        Ok(())
    }

    /// Checks out without printing anything.
    ///
    /// Returns [`CoreError::EmptyCart`] when there is nothing to buy.
    pub fn try_checkout(&mut self) -> StoreResult<Order> {
        if self.shopping_cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let order_id = generate_order_id(self.config.order_id_length)?;
        let order = Order::new(order_id, Utc::now(), self.shopping_cart.take_items());

        info!(
            order_id = %order.order_id,
            lines = order.items.len(),
            total = %order.total(),
            "checkout complete"
        );
        Ok(order)
    }
}

impl<W: Write> InventoryLog for Store<W> {
    fn print_list_of_items_given_category(&mut self, category: Category) -> StoreResult<()> {
        let table = render_category_table(self.items_by_category(category), self.config.column_width);
        self.out.write_all(table.as_bytes())?;
        Ok(())
    }

    fn add_item_stock_to_inventory(&mut self, item: Item) -> bool {
        match self.try_add_item_stock_to_inventory(item) {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "ignoring inventory addition");
                false
            }
        }
    }
}

impl<W: Write> ShoppingLog for Store<W> {
    fn add_items_to_cart(&mut self, item: &Item, amount: i64) -> bool {
        match self.try_add_items_to_cart(item, amount) {
            Ok(()) => true,
            Err(err) => {
                debug!(item = %item.name, amount, error = %err, "ignoring add to cart");
                false
            }
        }
    }

    fn print_shopping_cart_items(&mut self) -> StoreResult<()> {
        let table = render_cart_table(self.shopping_cart.items(), self.config.column_width);
        self.out.write_all(table.as_bytes())?;
        Ok(())
    }

    fn checkout(&mut self) -> StoreResult<Option<Order>> {
        match self.try_checkout() {
            Ok(order) => {
                writeln!(self.out, "{order}")?;
                Ok(Some(order))
            }
            Err(StoreError::Core(err @ CoreError::EmptyCart)) => {
                writeln!(self.out, "{err}")?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// `stock: [Item(...), Item(...)]` followed by a newline.
impl<W> fmt::Display for Store<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stock: [")?;
        for (i, item) in self.stock_inventory.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]\n")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pencil() -> Item {
        Item::new("Pencil", 4, 4, 10000, Category::SchoolSupplies)
    }

    fn lipstick() -> Item {
        Item::new("Lipstick", 3, 3, 12000, Category::BeautyCosmetics)
    }

    fn brush() -> Item {
        Item::new("Brush", 1, 1, 10000, Category::BeautyCosmetics)
    }

    fn test_store(inventory: Vec<Item>) -> Store<Vec<u8>> {
        Store::with_output(inventory, Cart::new(), StoreConfig::default(), Vec::new()).unwrap()
    }

    fn printed(store: &Store<Vec<u8>>) -> String {
        String::from_utf8(store.output().clone()).unwrap()
    }

    // -------------------------------------------------------------------------
    // Inventory
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_stock_with_empty_name_is_ignored() {
        let mut store = test_store(vec![pencil()]);

        let added = store.add_item_stock_to_inventory(Item::new(
            "",
            0,
            0,
            0,
            Category::BeautyCosmetics,
        ));

        assert!(!added);
        assert_eq!(store.inventory().len(), 1);
    }

    #[test]
    fn test_add_stock_appends_exact_item() {
        let mut store = test_store(vec![pencil()]);

        assert!(store.add_item_stock_to_inventory(lipstick()));

        assert_eq!(store.inventory().len(), 2);
        assert_eq!(store.inventory().last(), Some(&lipstick()));
    }

    #[test]
    fn test_add_stock_keeps_duplicate_names() {
        let mut store = test_store(vec![pencil()]);

        assert!(store.add_item_stock_to_inventory(pencil()));

        assert_eq!(store.inventory(), &[pencil(), pencil()]);
    }

    #[test]
    fn test_try_add_stock_reports_validation_error() {
        let mut store = test_store(Vec::new());
        let err = store
            .try_add_item_stock_to_inventory(Item::new("", 1, 1, 1, Category::HomeFurnishing))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_items_by_category_filters_in_order() {
        let store = test_store(vec![lipstick(), pencil(), brush()]);

        let matches: Vec<_> = store.items_by_category(Category::BeautyCosmetics).collect();
        assert_eq!(
            matches,
            vec![
                (Category::BeautyCosmetics, "Lipstick"),
                (Category::BeautyCosmetics, "Brush"),
            ]
        );

        assert_eq!(store.items_by_category(Category::HomeFurnishing).count(), 0);
    }

    #[test]
    fn test_items_by_category_is_restartable() {
        let store = test_store(vec![pencil(), brush()]);
        let iter = store.items_by_category(Category::SchoolSupplies);

        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_print_category_table() {
        let mut store = test_store(vec![lipstick(), pencil(), brush()]);

        store
            .print_list_of_items_given_category(Category::BeautyCosmetics)
            .unwrap();

        assert_eq!(
            printed(&store),
            format!(
                "Category            Item(s)             \n{}\n\
                 BeautyCosmetics     Lipstick            \n\
                 BeautyCosmetics     Brush               \n",
                "-".repeat(40)
            )
        );
    }

    #[test]
    fn test_print_category_table_with_no_matches_prints_header() {
        let mut store = test_store(vec![pencil()]);

        store
            .print_list_of_items_given_category(Category::HomeFurnishing)
            .unwrap();

        let out = printed(&store);
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("Category"));
    }

    #[test]
    fn test_print_does_not_mutate() {
        let mut store = test_store(vec![pencil()]);
        store.add_items_to_cart(&pencil(), 1);
        let inventory_before = store.inventory().to_vec();
        let cart_before = store.cart().clone();

        store
            .print_list_of_items_given_category(Category::SchoolSupplies)
            .unwrap();
        store.print_shopping_cart_items().unwrap();

        assert_eq!(store.inventory(), inventory_before.as_slice());
        assert_eq!(store.cart(), &cart_before);
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_to_cart_moves_stock() {
        let mut store = test_store(vec![pencil()]);

        assert!(store.add_items_to_cart(&pencil(), 2));

        assert_eq!(
            store.cart().items(),
            &[Item::new("Pencil", 2, 2, 20000, Category::SchoolSupplies)]
        );
        assert!(!store.inventory().contains(&pencil()));
        assert_eq!(
            store.inventory(),
            &[Item::new("Pencil", 2, 2, 10000, Category::SchoolSupplies)]
        );
        assert_eq!(store.cart().total_price().units(), 20000);
    }

    #[test]
    fn test_add_to_cart_replacement_goes_to_the_end() {
        let mut store = test_store(vec![pencil(), lipstick()]);

        assert!(store.add_items_to_cart(&pencil(), 1));

        let names: Vec<_> = store.inventory().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Lipstick", "Pencil"]);
        assert_eq!(store.inventory()[1].quantity_stock, 3);
        assert_eq!(store.inventory()[1].availability, 3);
    }

    #[test]
    fn test_add_to_cart_exceeding_availability_is_ignored() {
        let mut store = test_store(vec![pencil()]);

        assert!(!store.add_items_to_cart(&pencil(), 5));

        assert!(store.cart().is_empty());
        assert_eq!(store.inventory(), &[pencil()]);
    }

    #[test]
    fn test_add_to_cart_unknown_item_is_ignored() {
        let mut store = test_store(vec![pencil()]);

        assert!(!store.add_items_to_cart(&lipstick(), 1));

        assert!(store.cart().is_empty());
        assert_eq!(store.inventory(), &[pencil()]);
    }

    #[test]
    fn test_add_to_cart_non_positive_amount_is_ignored() {
        let mut store = test_store(vec![pencil()]);

        assert!(!store.add_items_to_cart(&pencil(), 0));
        assert!(!store.add_items_to_cart(&pencil(), -1));

        assert!(store.cart().is_empty());
        assert_eq!(store.inventory(), &[pencil()]);
    }

    #[test]
    fn test_add_to_cart_whole_availability() {
        let mut store = test_store(vec![brush()]);

        assert!(store.add_items_to_cart(&brush(), 1));
        assert!(!store.add_items_to_cart(&brush(), 1));

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.inventory()[0].availability, 0);
    }

    #[test]
    fn test_add_to_cart_reads_inventory_not_argument() {
        let mut store = test_store(vec![pencil()]);
        let stale = Item::new("Pencil", 99, 99, 1, Category::HomeFurnishing);

        assert!(store.add_items_to_cart(&stale, 2));

        let line = &store.cart().items()[0];
        assert_eq!(line.price.units(), 20000);
        assert_eq!(line.category, Category::SchoolSupplies);
        assert_eq!(store.inventory()[0].quantity_stock, 2);
    }

    #[test]
    fn test_add_to_cart_with_duplicate_names_adds_one_line() {
        let mut store = test_store(vec![pencil(), brush(), pencil()]);

        assert!(store.add_items_to_cart(&pencil(), 1));

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(
            store.inventory(),
            &[brush(), Item::new("Pencil", 3, 3, 10000, Category::SchoolSupplies)]
        );
    }

    #[test]
    fn test_try_add_to_cart_errors() {
        let mut store = test_store(vec![pencil()]);

        assert_eq!(
            store.try_add_items_to_cart(&lipstick(), 1),
            Err(CoreError::ItemNotFound("Lipstick".to_string()))
        );
        assert_eq!(
            store.try_add_items_to_cart(&pencil(), 9),
            Err(CoreError::InsufficientStock {
                name: "Pencil".to_string(),
                available: 4,
                requested: 9,
            })
        );
    }

    #[test]
    fn test_add_to_cart_price_overflow_is_ignored() {
        let gold = Item::new("Gold", 10, 10, i64::MAX / 2, Category::HomeFurnishing);
        let mut store = test_store(vec![gold.clone()]);

        assert!(!store.add_items_to_cart(&gold, 3));
        assert_eq!(
            store.try_add_items_to_cart(&gold, 3),
            Err(CoreError::Overflow {
                name: "Gold".to_string(),
                field: "price",
            })
        );

        assert!(store.cart().is_empty());
        assert_eq!(store.inventory(), &[gold]);
    }

    #[test]
    fn test_add_to_cart_total_overflow_is_ignored() {
        let gold = Item::new("Gold", 1, 1, i64::MAX, Category::HomeFurnishing);
        let pin = Item::new("Pin", 1, 1, 1, Category::HomeFurnishing);
        let mut store = test_store(vec![gold.clone(), pin.clone()]);

        assert!(store.add_items_to_cart(&gold, 1));
        let inventory_before = store.inventory().to_vec();

        assert!(!store.add_items_to_cart(&pin, 1));

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.cart().total_price().units(), i64::MAX);
        assert_eq!(store.inventory(), inventory_before.as_slice());
    }

    #[test]
    fn test_add_to_cart_stock_overflow_is_ignored() {
        let odd = Item::new("Odd", i64::MIN, 5, 100, Category::SchoolSupplies);
        let mut store = test_store(vec![odd.clone()]);

        assert_eq!(
            store.try_add_items_to_cart(&odd, 1),
            Err(CoreError::Overflow {
                name: "Odd".to_string(),
                field: "quantity_stock",
            })
        );
        assert!(store.cart().is_empty());
        assert_eq!(store.inventory(), &[odd]);
    }

    #[test]
    fn test_print_cart_table() {
        let mut store = test_store(vec![pencil(), brush()]);
        store.add_items_to_cart(&pencil(), 2);
        store.add_items_to_cart(&brush(), 1);

        store.print_shopping_cart_items().unwrap();

        assert_eq!(
            printed(&store),
            "Shopping Cart       \n\
             --------------------\n\
             Pencil              20000\n\
             Brush               10000\n"
        );
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    #[test]
    fn test_checkout_empty_cart_prints_message() {
        let mut store = test_store(vec![pencil()]);

        let order = store.checkout().unwrap();

        assert!(order.is_none());
        assert_eq!(printed(&store), "No items in shopping cart\n");
        assert_eq!(store.inventory(), &[pencil()]);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_checkout_builds_order_and_empties_cart() {
        let mut store = test_store(vec![pencil(), brush()]);
        store.add_items_to_cart(&pencil(), 2);
        store.add_items_to_cart(&brush(), 1);
        let cart_before = store.cart().items().to_vec();

        let order = store.checkout().unwrap().unwrap();

        assert_eq!(order.items, cart_before);
        assert_eq!(order.total().units(), 30000);
        assert_eq!(order.order_id.as_str().len(), 5);
        assert!(order
            .order_id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert!(store.cart().is_empty());
        assert!(store.cart().total_price().is_zero());
        assert_eq!(printed(&store), format!("{order}\n"));
    }

    #[test]
    fn test_checkout_twice() {
        let mut store = test_store(vec![pencil()]);
        store.add_items_to_cart(&pencil(), 1);

        assert!(store.checkout().unwrap().is_some());
        assert!(store.checkout().unwrap().is_none());
        assert!(printed(&store).ends_with("No items in shopping cart\n"));
    }

    #[test]
    fn test_try_checkout_empty_cart() {
        let mut store = test_store(Vec::new());
        assert!(matches!(
            store.try_checkout(),
            Err(StoreError::Core(CoreError::EmptyCart))
        ));
        assert!(printed(&store).is_empty());
    }

    #[test]
    fn test_order_id_length_follows_config() {
        let config = StoreConfig::default().with_order_id_length(8);
        let mut store =
            Store::with_output(vec![pencil()], Cart::new(), config, Vec::new()).unwrap();
        store.add_items_to_cart(&pencil(), 1);

        let order = store.try_checkout().unwrap();
        assert_eq!(order.order_id.as_str().len(), 8);
    }

    #[test]
    fn test_prefilled_cart_checks_out() {
        let cart =
            Cart::with_items(vec![Item::new("Vase", 1, 0, 7000, Category::HomeFurnishing)])
                .unwrap();
        let mut store = Store::with_output(Vec::new(), cart, StoreConfig::default(), Vec::new())
            .unwrap();

        let order = store.checkout().unwrap().unwrap();
        assert_eq!(order.items[0].name, "Vase");
    }

    // -------------------------------------------------------------------------
    // Misc
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_uses_default_layout() {
        let store = Store::new(vec![pencil()], Cart::new());
        assert_eq!(store.config(), &StoreConfig::default());
        assert_eq!(store.inventory(), &[pencil()]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StoreConfig::default().with_column_width(0);
        assert!(matches!(
            Store::with_output(Vec::new(), Cart::new(), config, Vec::new()),
            Err(StoreError::Config(_))
        ));
    }

    #[test]
    fn test_store_description() {
        let store = test_store(vec![pencil(), brush()]);
        assert_eq!(store.to_string(), format!("stock: [{}, {}]\n", pencil(), brush()));
        assert_eq!(test_store(Vec::new()).to_string(), "stock: []\n");
    }

    #[test]
    fn test_print_description() {
        let mut store = test_store(vec![brush()]);
        store.print_description().unwrap();
        assert_eq!(printed(&store), format!("stock: [{}]\n", brush()));
    }

    #[test]
    fn test_narrow_columns() {
        let config = StoreConfig::default().with_column_width(10);
        let mut store =
            Store::with_output(vec![pencil()], Cart::new(), config, Vec::new()).unwrap();

        store.print_list_of_items_given_category(Category::SchoolSupplies).unwrap();

        let out = String::from_utf8(store.into_output()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Category  Item(s)   ");
        assert_eq!(lines[1], "-".repeat(20));
        assert_eq!(lines[2], "SchoolSuppliesPencil    ");
    }
}
