//! Transport acknowledgment contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Where a delivered message landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Destination topic.
    pub topic: String,

    /// Partition the message was written to.
    pub partition: i32,

    /// Offset within the partition.
    pub offset: i64,

    /// Broker-side timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Errors reported through the acknowledgment callback.
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    /// The transport refused or lost the message.
    #[error("transport rejected message for topic {topic}: {reason}")]
    Rejected { topic: String, reason: String },

    /// The event payload could not be serialized.
    #[error("failed to serialize event payload: {0}")]
    Serialization(String),
}

/// Callback observing the delivery outcome of one published message.
pub type AckHandler = Box<dyn FnOnce(Result<DeliveryReceipt, PublishError>) + Send>;

/// Fire-and-forget event transport.
///
/// `publish` hands a message off for delivery and returns; the outcome
/// arrives later through `on_ack`, on the transport's own completion
/// path. Implementations must not block publication on delivery, and
/// callers must not retry based on the ack — it exists purely for
/// observability.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes `payload` to `topic`, partitioned by `partition_key`.
    async fn publish(&self, topic: &str, partition_key: &str, payload: Vec<u8>, on_ack: AckHandler);
}
