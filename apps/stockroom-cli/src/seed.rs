//! # Sample Data
//!
//! The fixed set of items the demo stocks the store with. One entry has an
//! empty name on purpose: the store should refuse it.

use stockroom_core::{Category, Item};

pub fn pencil() -> Item {
    Item::new("Pencil", 4, 4, 10000, Category::SchoolSupplies)
}

pub fn lipstick() -> Item {
    Item::new("Lipstick", 3, 3, 12000, Category::BeautyCosmetics)
}

pub fn unnamed() -> Item {
    Item::new("", 0, 0, 0, Category::BeautyCosmetics)
}

pub fn brush() -> Item {
    Item::new("Brush", 1, 1, 10000, Category::BeautyCosmetics)
}

/// Items offered to the store, in the order they are added.
pub fn sample_items() -> Vec<Item> {
    vec![pencil(), lipstick(), unnamed(), brush()]
}
