//! Read-only restaurant catalog snapshot.

use std::collections::HashMap;

use common::{Money, ProductId, RestaurantId};
use serde::{Deserialize, Serialize};

/// A product as listed in a restaurant's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The product identifier.
    pub id: ProductId,

    /// Authoritative product name.
    pub name: String,

    /// Authoritative unit price.
    pub price: Money,
}

impl Product {
    /// Creates a new catalog product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Snapshot of a restaurant at validation time.
///
/// Supplied by the caller and never mutated here; the catalog is the
/// source of truth for item names and prices during order validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    active: bool,
    products: Vec<Product>,
}

impl Restaurant {
    /// Creates a new restaurant snapshot.
    pub fn new(id: RestaurantId, active: bool, products: Vec<Product>) -> Self {
        Self {
            id,
            active,
            products,
        }
    }

    /// Returns the restaurant ID.
    pub fn id(&self) -> RestaurantId {
        self.id
    }

    /// Returns true if the restaurant currently accepts orders.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the product catalog.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Builds a lookup map over the catalog, keyed by product ID.
    ///
    /// Built once per validation call so item reconciliation stays O(1)
    /// per item regardless of catalog size.
    pub fn products_by_id(&self) -> HashMap<ProductId, &Product> {
        self.products.iter().map(|p| (p.id, p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_by_id_indexes_whole_catalog() {
        let first = Product::new(ProductId::new(), "Margherita", Money::from_cents(1200));
        let second = Product::new(ProductId::new(), "Calzone", Money::from_cents(1400));
        let restaurant = Restaurant::new(
            RestaurantId::new(),
            true,
            vec![first.clone(), second.clone()],
        );

        let map = restaurant.products_by_id();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&first.id].name, "Margherita");
        assert_eq!(map[&second.id].price, Money::from_cents(1400));
    }
}
