//! Payment aggregate implementation.

use chrono::{DateTime, Utc};
use common::{CustomerId, Money, OrderId, PaymentId};
use serde::{Deserialize, Serialize};

use crate::state::PaymentStatus;

/// Payment aggregate root, tied to exactly one order.
///
/// Created by the orchestrator, mutated only by `PaymentDomainService`,
/// terminal at `Completed`, `Failed`, or `Cancelled`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    id: PaymentId,
    order_id: OrderId,
    customer_id: CustomerId,
    price: Money,
    status: Option<PaymentStatus>,
    created_at: Option<DateTime<Utc>>,
}

impl Payment {
    /// Creates a new, not-yet-processed payment.
    pub fn new(id: PaymentId, order_id: OrderId, customer_id: CustomerId, price: Money) -> Self {
        Self {
            id,
            order_id,
            customer_id,
            price,
            status: None,
            created_at: None,
        }
    }

    /// Returns the payment ID.
    pub fn id(&self) -> PaymentId {
        self.id
    }

    /// Returns the order this payment belongs to.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Returns the paying customer.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the payment amount.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the current status, or `None` before processing.
    pub fn status(&self) -> Option<PaymentStatus> {
        self.status
    }

    /// Returns when the payment was initialized.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Structural validation; soft violations go into the accumulator.
    pub(crate) fn validate(&self, failure_messages: &mut Vec<String>) {
        if !self.price.is_positive() {
            failure_messages.push(format!(
                "total price must be greater than zero for payment {}",
                self.id
            ));
        }
    }

    /// Stamps the payment's creation time.
    pub(crate) fn initialize(&mut self, created_at: DateTime<Utc>) {
        self.created_at = Some(created_at);
    }

    pub(crate) fn update_status(&mut self, status: PaymentStatus) {
        self.status = Some(status);
    }
}
