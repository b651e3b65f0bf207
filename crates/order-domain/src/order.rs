//! Order aggregate implementation.

use common::{CustomerId, Money, OrderId, ProductId, RestaurantId};
use serde::{Deserialize, Serialize};

use crate::OrderDomainError;
use crate::state::OrderStatus;

/// A priced line item in an order.
///
/// Name and unit price are client-submitted on construction and
/// overwritten with catalog values during validation; they are never
/// trusted past that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The product being ordered.
    pub product_id: ProductId,

    /// Product name, confirmed against the catalog during validation.
    pub product_name: String,

    /// Price per unit, confirmed against the catalog during validation.
    pub unit_price: Money,

    /// Quantity ordered.
    pub quantity: u32,

    /// Line total, expected to equal `unit_price * quantity`.
    pub sub_total: Money,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        sub_total: Money,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            unit_price,
            quantity,
            sub_total,
        }
    }

    /// Overwrites name and price with the catalog's authoritative values.
    ///
    /// The sub-total is recomputed from the confirmed price so a later
    /// reconciliation pass is a no-op.
    pub(crate) fn confirm_name_and_price(&mut self, name: &str, price: Money) {
        self.product_name = name.to_string();
        self.unit_price = price;
        self.sub_total = price.multiply(self.quantity);
    }

    fn is_price_valid(&self) -> bool {
        self.unit_price.is_positive() && self.sub_total == self.unit_price.multiply(self.quantity)
    }
}

/// Order aggregate root.
///
/// Created by the orchestrator, mutated only by `OrderDomainService`,
/// terminal at `Approved` or `Cancelled`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    items: Vec<OrderItem>,
    price: Money,
    status: Option<OrderStatus>,
    failure_messages: Vec<String>,
}

// Query methods
impl Order {
    /// Creates a new, not-yet-initiated order.
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        items: Vec<OrderItem>,
        price: Money,
    ) -> Self {
        Self {
            id,
            customer_id,
            restaurant_id,
            items,
            price,
            status: None,
            failure_messages: Vec::new(),
        }
    }

    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the customer who placed the order.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the restaurant the order targets.
    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    /// Returns the order items.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the order total.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the current status, or `None` before initiation.
    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    /// Returns the failure messages recorded during cancellation.
    pub fn failure_messages(&self) -> &[String] {
        &self.failure_messages
    }

    pub(crate) fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }

    fn status_label(&self) -> String {
        match self.status {
            Some(status) => status.to_string(),
            None => "uninitiated".to_string(),
        }
    }
}

// Command methods
impl Order {
    /// Runs structural validation on a not-yet-initiated order.
    pub(crate) fn validate(&self) -> Result<(), OrderDomainError> {
        self.validate_initial()?;
        self.validate_total_price()?;
        self.validate_items_price()
    }

    /// Transitions the order into its initial `Pending` status.
    pub(crate) fn initialize(&mut self) {
        self.status = Some(OrderStatus::Pending);
    }

    /// Transitions `Pending` into `Paid`.
    pub(crate) fn pay(&mut self) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_pay()) {
            return Err(self.transition_error("pay"));
        }
        self.status = Some(OrderStatus::Paid);
        Ok(())
    }

    /// Transitions `Paid` into `Approved`.
    pub(crate) fn approve(&mut self) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_approve()) {
            return Err(self.transition_error("approve"));
        }
        self.status = Some(OrderStatus::Approved);
        Ok(())
    }

    /// Begins compensation: `Paid` into `Cancelling`.
    pub(crate) fn init_cancel(
        &mut self,
        failure_messages: Vec<String>,
    ) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_init_cancel()) {
            return Err(self.transition_error("begin cancelling"));
        }
        self.status = Some(OrderStatus::Cancelling);
        self.record_failure_messages(failure_messages);
        Ok(())
    }

    /// Finalizes cancellation: `Pending` or `Cancelling` into `Cancelled`.
    pub(crate) fn cancel(
        &mut self,
        failure_messages: Vec<String>,
    ) -> Result<(), OrderDomainError> {
        if !self.status.is_some_and(|s| s.can_cancel()) {
            return Err(self.transition_error("cancel"));
        }
        self.status = Some(OrderStatus::Cancelled);
        self.record_failure_messages(failure_messages);
        Ok(())
    }

    fn validate_initial(&self) -> Result<(), OrderDomainError> {
        if self.status.is_some() {
            return Err(OrderDomainError::AlreadyInitiated);
        }
        Ok(())
    }

    fn validate_total_price(&self) -> Result<(), OrderDomainError> {
        if !self.price.is_positive() {
            return Err(OrderDomainError::InvalidTotalPrice { total: self.price });
        }
        Ok(())
    }

    fn validate_items_price(&self) -> Result<(), OrderDomainError> {
        let mut items_total = Money::zero();
        for item in &self.items {
            if !item.is_price_valid() {
                return Err(OrderDomainError::InvalidItemPrice {
                    product_id: item.product_id,
                    unit_price: item.unit_price,
                });
            }
            items_total += item.sub_total;
        }

        if items_total != self.price {
            return Err(OrderDomainError::TotalPriceMismatch {
                total: self.price,
                items_total,
            });
        }
        Ok(())
    }

    fn record_failure_messages(&mut self, failure_messages: Vec<String>) {
        self.failure_messages
            .extend(failure_messages.into_iter().filter(|m| !m.is_empty()));
    }

    fn transition_error(&self, action: &'static str) -> OrderDomainError {
        OrderDomainError::InvalidStateTransition {
            current: self.status_label(),
            action,
        }
    }
}
