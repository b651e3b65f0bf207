//! In-memory publisher for tests.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::publisher::{AckHandler, DeliveryReceipt, EventPublisher, PublishError};

/// A message captured by the in-memory publisher.
#[derive(Debug, Clone)]
pub struct PublishedRecord {
    /// Destination topic.
    pub topic: String,

    /// Partition key the message was published under.
    pub partition_key: String,

    /// Raw payload bytes.
    pub payload: Vec<u8>,
}

#[derive(Debug, Default)]
struct InMemoryPublisherState {
    records: Vec<PublishedRecord>,
    fail_on_publish: bool,
}

/// In-memory event publisher for testing.
///
/// Records every published message and invokes acknowledgments inline.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublisher {
    state: Arc<RwLock<InMemoryPublisherState>>,
}

impl InMemoryPublisher {
    /// Creates a new in-memory publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the publisher to reject subsequent publishes.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.state.write().unwrap().fail_on_publish = fail;
    }

    /// Returns the number of captured messages.
    pub fn record_count(&self) -> usize {
        self.state.read().unwrap().records.len()
    }

    /// Returns the captured messages for one topic.
    pub fn records_for(&self, topic: &str) -> Vec<PublishedRecord> {
        self.state
            .read()
            .unwrap()
            .records
            .iter()
            .filter(|r| r.topic == topic)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventPublisher for InMemoryPublisher {
    async fn publish(
        &self,
        topic: &str,
        partition_key: &str,
        payload: Vec<u8>,
        on_ack: AckHandler,
    ) {
        let mut state = self.state.write().unwrap();

        if state.fail_on_publish {
            drop(state);
            on_ack(Err(PublishError::Rejected {
                topic: topic.to_string(),
                reason: "broker unavailable".to_string(),
            }));
            return;
        }

        let offset = state.records.len() as i64;
        state.records.push(PublishedRecord {
            topic: topic.to_string(),
            partition_key: partition_key.to_string(),
            payload,
        });
        drop(state);

        on_ack(Ok(DeliveryReceipt {
            topic: topic.to_string(),
            partition: 0,
            offset,
            timestamp: Utc::now(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn capture() -> (
        Arc<Mutex<Option<Result<DeliveryReceipt, PublishError>>>>,
        AckHandler,
    ) {
        let slot = Arc::new(Mutex::new(None));
        let writer = Arc::clone(&slot);
        let handler: AckHandler = Box::new(move |result| {
            *writer.lock().unwrap() = Some(result);
        });
        (slot, handler)
    }

    #[tokio::test]
    async fn publish_records_message_and_acks_success() {
        let publisher = InMemoryPublisher::new();
        let (ack, handler) = capture();

        publisher
            .publish("payment-request", "order-1", b"{}".to_vec(), handler)
            .await;

        assert_eq!(publisher.record_count(), 1);
        let records = publisher.records_for("payment-request");
        assert_eq!(records[0].partition_key, "order-1");

        let receipt = ack.lock().unwrap().take().unwrap().unwrap();
        assert_eq!(receipt.topic, "payment-request");
        assert_eq!(receipt.offset, 0);
    }

    #[tokio::test]
    async fn offsets_increase_per_publish() {
        let publisher = InMemoryPublisher::new();

        for expected in 0..3 {
            let (ack, handler) = capture();
            publisher
                .publish("t", "k", Vec::new(), handler)
                .await;
            let receipt = ack.lock().unwrap().take().unwrap().unwrap();
            assert_eq!(receipt.offset, expected);
        }
    }

    #[tokio::test]
    async fn failure_injection_reports_through_ack_only() {
        let publisher = InMemoryPublisher::new();
        publisher.set_fail_on_publish(true);
        let (ack, handler) = capture();

        publisher
            .publish("payment-request", "order-1", b"{}".to_vec(), handler)
            .await;

        assert_eq!(publisher.record_count(), 0);
        let result = ack.lock().unwrap().take().unwrap();
        assert!(matches!(result, Err(PublishError::Rejected { .. })));
    }
}
