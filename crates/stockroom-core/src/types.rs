//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Order      │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  order_id       │   │  HomeFurnishing │       │
//! │  │  quantity_stock │   │  date_purchased │   │  BeautyCosmetics│       │
//! │  │  availability   │   │  items          │   │  SchoolSupplies │       │
//! │  │  price          │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Items have no surrogate key. The `name` is what the store matches on, and
//! nothing stops two inventory records from sharing one.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_order_id;

// =============================================================================
// Category
// =============================================================================

/// The department an item is shelved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    HomeFurnishing,
    BeautyCosmetics,
    SchoolSupplies,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 3] = [
        Category::HomeFurnishing,
        Category::BeautyCosmetics,
        Category::SchoolSupplies,
    ];

    /// The variant name, as printed in the category table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::HomeFurnishing => "HomeFurnishing",
            Category::BeautyCosmetics => "BeautyCosmetics",
            Category::SchoolSupplies => "SchoolSupplies",
        }
    }
}

/// Honours width and alignment flags, so `{:<20}` pads like a `&str`.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A stock keeping unit, either on the shelf or as a cart line.
///
/// ## Field Meaning By Location
/// ```text
/// ┌──────────────────┬─────────────────────────┬──────────────────────────┐
/// │ field            │ in inventory            │ in cart                  │
/// ├──────────────────┼─────────────────────────┼──────────────────────────┤
/// │ quantity_stock   │ units held              │ units being bought       │
/// │ availability     │ units sellable          │ availability left behind │
/// │ price            │ unit price              │ unit price × amount      │
/// └──────────────────┴─────────────────────────┴──────────────────────────┘
/// ```
///
/// No invariant ties `availability` to `quantity_stock`, and neither is
/// required to be non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the matching key.
    pub name: String,

    /// Total units held.
    pub quantity_stock: i64,

    /// Units that can currently be sold.
    pub availability: i64,

    /// Unit price (inventory) or line price (cart).
    pub price: Money,

    pub category: Category,
}

impl Item {
    /// Creates an item with a unit price in whole units.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Category, Item};
    ///
    /// let brush = Item::new("Brush", 1, 1, 10000, Category::BeautyCosmetics);
    /// assert_eq!(brush.price.units(), 10000);
    /// ```
    pub fn new(
        name: impl Into<String>,
        quantity_stock: i64,
        availability: i64,
        price: i64,
        category: Category,
    ) -> Self {
        Item {
            name: name.into(),
            quantity_stock,
            availability,
            price: Money::from_units(price),
            category,
        }
    }

    /// Checks whether `amount` units can be taken from this record.
    #[inline]
    pub fn can_supply(&self, amount: i64) -> bool {
        self.availability >= amount
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item(name: {:?}, quantity_stock: {}, availability: {}, price: {}, category: {})",
            self.name, self.quantity_stock, self.availability, self.price, self.category
        )
    }
}

// =============================================================================
// Order Id
// =============================================================================

/// Short alphanumeric order reference (`A-Z`, `0-9`).
///
/// Not guaranteed unique; two checkouts may draw the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Parses an order id, checking its length and alphabet.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::OrderId;
    ///
    /// assert!(OrderId::parse("AB12C", 5).is_ok());
    /// assert!(OrderId::parse("ab12c", 5).is_err());
    /// assert!(OrderId::parse("AB12", 5).is_err());
    /// ```
    pub fn parse(id: impl Into<String>, expected_len: usize) -> Result<Self, ValidationError> {
        let id = id.into();
        validate_order_id(&id, expected_len)?;
        Ok(OrderId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Order
// =============================================================================

/// A completed checkout.
///
/// Uses the snapshot pattern: `items` is a copy of the cart lines at the
/// moment of checkout, so later cart changes never reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub date_purchased: DateTime<Utc>,
    pub items: Vec<Item>,
}

impl Order {
    pub fn new(order_id: OrderId, date_purchased: DateTime<Utc>, items: Vec<Item>) -> Self {
        Order {
            order_id,
            date_purchased,
            items,
        }
    }

    /// Sum of the line prices.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(order_id: {:?}, date_purchased: {}, items: [",
            self.order_id.as_str(),
            self.date_purchased.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("])")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
