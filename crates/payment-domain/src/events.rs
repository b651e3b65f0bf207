//! Payment domain events.

use chrono::{DateTime, Utc};
use common::DomainEvent;
use serde::{Deserialize, Serialize};

use crate::payment::Payment;

/// Outcome of one payment saga step.
///
/// `Failed` carries the full accumulator of violated preconditions so a
/// single round trip reports everything that went wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PaymentEvent {
    /// The debit went through and the ledger is consistent.
    Completed(PaymentEventData),

    /// The compensating credit went through.
    Cancelled(PaymentEventData),

    /// One or more preconditions were violated.
    Failed(PaymentFailedData),
}

/// Payload of a successful payment event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEventData {
    /// Snapshot of the payment at completion time.
    pub payment: Payment,

    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

/// Payload of a failed payment event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentFailedData {
    /// Snapshot of the payment at failure time.
    pub payment: Payment,

    /// When the event was created.
    pub created_at: DateTime<Utc>,

    /// Every violated precondition, in check order. Never empty.
    pub failure_messages: Vec<String>,
}

impl PaymentEvent {
    /// Creates a `Completed` event.
    pub fn completed(payment: Payment, created_at: DateTime<Utc>) -> Self {
        PaymentEvent::Completed(PaymentEventData {
            payment,
            created_at,
        })
    }

    /// Creates a `Cancelled` event.
    pub fn cancelled(payment: Payment, created_at: DateTime<Utc>) -> Self {
        PaymentEvent::Cancelled(PaymentEventData {
            payment,
            created_at,
        })
    }

    /// Creates a `Failed` event carrying the accumulated violations.
    pub fn failed(
        payment: Payment,
        created_at: DateTime<Utc>,
        failure_messages: Vec<String>,
    ) -> Self {
        PaymentEvent::Failed(PaymentFailedData {
            payment,
            created_at,
            failure_messages,
        })
    }

    /// Returns the payment snapshot.
    pub fn payment(&self) -> &Payment {
        match self {
            PaymentEvent::Completed(data) | PaymentEvent::Cancelled(data) => &data.payment,
            PaymentEvent::Failed(data) => &data.payment,
        }
    }

    /// Returns the failure messages; empty for success variants.
    pub fn failure_messages(&self) -> &[String] {
        match self {
            PaymentEvent::Failed(data) => &data.failure_messages,
            _ => &[],
        }
    }

    /// Returns true for the `Failed` variant.
    pub fn is_failed(&self) -> bool {
        matches!(self, PaymentEvent::Failed(_))
    }
}

impl DomainEvent for PaymentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PaymentEvent::Completed(_) => "PaymentCompleted",
            PaymentEvent::Cancelled(_) => "PaymentCancelled",
            PaymentEvent::Failed(_) => "PaymentFailed",
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        match self {
            PaymentEvent::Completed(data) | PaymentEvent::Cancelled(data) => data.created_at,
            PaymentEvent::Failed(data) => data.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CustomerId, Money, OrderId, PaymentId};

    fn payment() -> Payment {
        Payment::new(
            PaymentId::new(),
            OrderId::new(),
            CustomerId::new(),
            Money::from_cents(3000),
        )
    }

    #[test]
    fn event_types() {
        let now = Utc::now();
        assert_eq!(
            PaymentEvent::completed(payment(), now).event_type(),
            "PaymentCompleted"
        );
        assert_eq!(
            PaymentEvent::cancelled(payment(), now).event_type(),
            "PaymentCancelled"
        );
        assert_eq!(
            PaymentEvent::failed(payment(), now, vec!["boom".into()]).event_type(),
            "PaymentFailed"
        );
    }

    #[test]
    fn failure_messages_accessor() {
        let now = Utc::now();
        assert!(
            PaymentEvent::completed(payment(), now)
                .failure_messages()
                .is_empty()
        );

        let failed = PaymentEvent::failed(payment(), now, vec!["boom".into()]);
        assert!(failed.is_failed());
        assert_eq!(failed.failure_messages(), ["boom"]);
    }

    #[test]
    fn serializes_with_type_tag() {
        let event = PaymentEvent::completed(payment(), Utc::now());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Completed");
        assert!(json["data"]["payment"].is_object());
    }
}
