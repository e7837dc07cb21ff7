//! # Console Tables
//!
//! Fixed-width renderings of the category listing and the cart.
//!
//! ## Layout
//! ```text
//! Category            Item(s)             ◄── header, each cell padded to width
//! ----------------------------------------    ◄── '-' × header width
//! SchoolSupplies      Pencil              ◄── one row per match
//!
//! Shopping Cart       ◄── header padded to width
//! --------------------
//! Pencil              20000   ◄── name padded, raw price appended
//! ```
//!
//! Cells longer than the column are not truncated; they push the rest of the
//! row to the right.

use stockroom_core::{Category, Item};

pub const CATEGORY_HEADER: &str = "Category";
pub const ITEMS_HEADER: &str = "Item(s)";
pub const CART_HEADER: &str = "Shopping Cart";

/// Renders the two-column category table.
///
/// ## Example
/// ```rust
/// use stockroom_core::Category;
/// use stockroom_store::report::render_category_table;
///
/// let table = render_category_table([(Category::SchoolSupplies, "Pencil")], 16);
/// assert_eq!(
///     table,
///     "Category        Item(s)         \n\
///      --------------------------------\n\
///      SchoolSupplies  Pencil          \n"
/// );
/// ```
pub fn render_category_table<'a, I>(rows: I, width: usize) -> String
where
    I: IntoIterator<Item = (Category, &'a str)>,
{
    let header = format!("{CATEGORY_HEADER:<width$}{ITEMS_HEADER:<width$}");
    let mut out = header_block(&header);
    for (category, name) in rows {
        out.push_str(&format!("{category:<width$}{name:<width$}\n"));
    }
    out
}

/// Renders the single-column cart table (name, then price).
pub fn render_cart_table(lines: &[Item], width: usize) -> String {
    let header = format!("{CART_HEADER:<width$}");
    let mut out = header_block(&header);
    for line in lines {
        out.push_str(&format!("{:<width$}{}\n", line.name, line.price));
    }
    out
}

fn header_block(header: &str) -> String {
    let rule = "-".repeat(header.chars().count());
    format!("{header}\n{rule}\n")
}
