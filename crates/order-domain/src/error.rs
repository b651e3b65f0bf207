//! Order domain error types.
//!
//! These are the hard-failure channel: a call that returns one of these
//! produced no event and the caller must not persist or publish anything
//! from it.

use common::{Money, ProductId, RestaurantId};
use thiserror::Error;

/// Errors that can occur during order saga operations.
#[derive(Debug, Error)]
pub enum OrderDomainError {
    /// The restaurant is not accepting orders.
    #[error("restaurant {restaurant_id} is currently not active")]
    RestaurantNotActive { restaurant_id: RestaurantId },

    /// An order item references a product the restaurant does not list.
    #[error("product {product_id} is not in the restaurant catalog")]
    ProductNotInCatalog { product_id: ProductId },

    /// The order has already gone through initiation.
    #[error("order is not in the correct state for initialization")]
    AlreadyInitiated,

    /// Total price must be strictly positive.
    #[error("order total price {total} must be greater than zero")]
    InvalidTotalPrice { total: Money },

    /// An item's pricing is internally inconsistent.
    #[error("item price {unit_price} for product {product_id} is not valid")]
    InvalidItemPrice {
        product_id: ProductId,
        unit_price: Money,
    },

    /// The order total does not equal the sum of its items.
    #[error("order total {total} does not match items total {items_total}")]
    TotalPriceMismatch { total: Money, items_total: Money },

    /// The order is not in the expected status for the operation.
    #[error("cannot {action} order in {current} status")]
    InvalidStateTransition {
        current: String,
        action: &'static str,
    },
}
