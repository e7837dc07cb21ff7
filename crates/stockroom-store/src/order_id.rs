//! Random order identifiers.
//!
//! Each character is drawn uniformly from `A-Z0-9`. Ids are short and carry
//! no uniqueness guarantee.

use rand::Rng;
use stockroom_core::{OrderId, ValidationError, ORDER_ID_CHARSET};

/// Generates an order id using the thread-local RNG.
///
/// ## Example
/// ```rust
/// use stockroom_store::generate_order_id;
///
/// let id = generate_order_id(5).unwrap();
/// assert_eq!(id.as_str().len(), 5);
/// ```
pub fn generate_order_id(length: usize) -> Result<OrderId, ValidationError> {
    generate_order_id_with(&mut rand::rng(), length)
}

/// Generates an order id from the supplied RNG.
///
/// Fails only when `length` is zero.
pub fn generate_order_id_with<R: Rng>(
    rng: &mut R,
    length: usize,
) -> Result<OrderId, ValidationError> {
    let id: String = (0..length)
        .map(|_| ORDER_ID_CHARSET[rng.random_range(0..ORDER_ID_CHARSET.len())] as char)
        .collect();
    OrderId::parse(id, length)
}
