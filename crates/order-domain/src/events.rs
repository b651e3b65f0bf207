//! Order domain events.
//!
//! Immutable snapshots of a completed order state transition. Events
//! carry no transport behavior; the messaging layer routes them.

use chrono::{DateTime, Utc};
use common::DomainEvent;
use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Order passed validation and entered `Pending`.
///
/// The carried order has already been reconciled against the restaurant
/// catalog; downstream consumers can trust its prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    /// Snapshot of the order at creation time.
    pub order: Order,

    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

impl OrderCreatedEvent {
    /// Creates a new event from an order snapshot.
    pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
        Self { order, created_at }
    }
}

impl DomainEvent for OrderCreatedEvent {
    fn event_type(&self) -> &'static str {
        "OrderCreated"
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Order transitioned `Pending` → `Paid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    /// Snapshot of the order at payment time.
    pub order: Order,

    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

impl OrderPaidEvent {
    /// Creates a new event from an order snapshot.
    pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
        Self { order, created_at }
    }
}

impl DomainEvent for OrderPaidEvent {
    fn event_type(&self) -> &'static str {
        "OrderPaid"
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Order began cancelling; triggers the compensating payment reversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    /// Snapshot of the order, with failure messages recorded.
    pub order: Order,

    /// When the event was created.
    pub created_at: DateTime<Utc>,

    /// Why the order is being cancelled.
    pub failure_messages: Vec<String>,
}

impl OrderCancelledEvent {
    /// Creates a new event from an order snapshot.
    ///
    /// The failure messages are taken from the order itself so event and
    /// aggregate cannot disagree about the cancellation reasons.
    pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
        let failure_messages = order.failure_messages().to_vec();
        Self {
            order,
            created_at,
            failure_messages,
        }
    }
}

impl DomainEvent for OrderCancelledEvent {
    fn event_type(&self) -> &'static str {
        "OrderCancelled"
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CustomerId, Money, OrderId, RestaurantId};

    fn order() -> Order {
        Order::new(
            OrderId::new(),
            CustomerId::new(),
            RestaurantId::new(),
            vec![],
            Money::from_cents(1000),
        )
    }

    #[test]
    fn event_types() {
        let now = Utc::now();
        assert_eq!(
            OrderCreatedEvent::new(order(), now).event_type(),
            "OrderCreated"
        );
        assert_eq!(OrderPaidEvent::new(order(), now).event_type(), "OrderPaid");
        assert_eq!(
            OrderCancelledEvent::new(order(), now).event_type(),
            "OrderCancelled"
        );
    }

    #[test]
    fn created_event_payload_carries_the_order_snapshot() {
        let event = OrderCreatedEvent::new(order(), Utc::now());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["order"]["id"], event.order.id().to_string());
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn cancelled_event_copies_messages_from_the_order() {
        let event = OrderCancelledEvent::new(order(), Utc::now());
        // A fresh order has no recorded failures.
        assert!(event.failure_messages.is_empty());
    }
}
