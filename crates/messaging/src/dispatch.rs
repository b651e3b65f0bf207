//! Event dispatch table.
//!
//! Maps each outbound event variant to its destination topic and
//! partition key, serializes the payload, and installs the logging
//! acknowledgment callback. The orchestrator hands events here after
//! persisting the aggregates; the domain core never sees this layer.

use common::DomainEvent;
use order_domain::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};
use payment_domain::PaymentEvent;
use serde::Serialize;

use crate::config::TopicConfig;
use crate::publisher::{AckHandler, EventPublisher, PublishError};

/// An event on its way out of the service, tagged by variant.
#[derive(Debug, Clone)]
pub enum OutboundEvent {
    /// Order created; requests the payment debit.
    OrderCreated(OrderCreatedEvent),

    /// Order paid; requests restaurant approval.
    OrderPaid(OrderPaidEvent),

    /// Order cancelling; requests the compensating payment reversal.
    OrderCancelled(OrderCancelledEvent),

    /// Payment outcome flowing back to the order service.
    Payment(PaymentEvent),
}

impl From<OrderCreatedEvent> for OutboundEvent {
    fn from(event: OrderCreatedEvent) -> Self {
        OutboundEvent::OrderCreated(event)
    }
}

impl From<OrderPaidEvent> for OutboundEvent {
    fn from(event: OrderPaidEvent) -> Self {
        OutboundEvent::OrderPaid(event)
    }
}

impl From<OrderCancelledEvent> for OutboundEvent {
    fn from(event: OrderCancelledEvent) -> Self {
        OutboundEvent::OrderCancelled(event)
    }
}

impl From<PaymentEvent> for OutboundEvent {
    fn from(event: PaymentEvent) -> Self {
        OutboundEvent::Payment(event)
    }
}

/// Routes outbound events to the publisher.
pub struct EventDispatcher<P> {
    publisher: P,
    topics: TopicConfig,
}

impl<P: EventPublisher> EventDispatcher<P> {
    /// Creates a dispatcher over the given publisher and topic names.
    pub fn new(publisher: P, topics: TopicConfig) -> Self {
        Self { publisher, topics }
    }

    /// Publishes one event to its destination.
    ///
    /// Partition key is always the aggregate's order ID so all events of
    /// one saga land on one partition. Returns an error only when the
    /// payload cannot be serialized; delivery failures go through the
    /// acknowledgment callback and are logged, never propagated.
    #[tracing::instrument(skip(self, event), fields(event_type = tracing::field::Empty))]
    pub async fn dispatch(&self, event: impl Into<OutboundEvent>) -> Result<(), PublishError> {
        let event = event.into();
        let (topic, key, event_type, payload) = self.route(&event)?;
        tracing::Span::current().record("event_type", event_type);

        metrics::counter!("saga_events_published").increment(1);
        tracing::info!(%key, topic, event_type, "dispatching event");

        let ack = Self::logging_ack(key.clone(), event_type);
        self.publisher.publish(topic, &key, payload, ack).await;
        Ok(())
    }

    fn route(
        &self,
        event: &OutboundEvent,
    ) -> Result<(&str, String, &'static str, Vec<u8>), PublishError> {
        match event {
            OutboundEvent::OrderCreated(e) => Ok((
                self.topics.payment_request_topic.as_str(),
                e.order.id().to_string(),
                e.event_type(),
                to_payload(e)?,
            )),
            OutboundEvent::OrderPaid(e) => Ok((
                self.topics.restaurant_approval_request_topic.as_str(),
                e.order.id().to_string(),
                e.event_type(),
                to_payload(e)?,
            )),
            OutboundEvent::OrderCancelled(e) => Ok((
                self.topics.payment_request_topic.as_str(),
                e.order.id().to_string(),
                e.event_type(),
                to_payload(e)?,
            )),
            OutboundEvent::Payment(e) => Ok((
                self.topics.payment_response_topic.as_str(),
                e.payment().order_id().to_string(),
                e.event_type(),
                to_payload(e)?,
            )),
        }
    }

    /// Ack callback logging the delivery outcome, in the shape the
    /// broker reports it: topic, partition, offset, timestamp.
    fn logging_ack(key: String, event_type: &'static str) -> AckHandler {
        Box::new(move |result| match result {
            Ok(receipt) => {
                tracing::info!(
                    %key,
                    event_type,
                    topic = %receipt.topic,
                    partition = receipt.partition,
                    offset = receipt.offset,
                    timestamp = %receipt.timestamp,
                    "event delivered"
                );
            }
            Err(error) => {
                metrics::counter!("saga_publish_failures").increment(1);
                tracing::error!(%key, event_type, %error, "event delivery failed");
            }
        })
    }
}

fn to_payload<E: Serialize>(event: &E) -> Result<Vec<u8>, PublishError> {
    serde_json::to_vec(event).map_err(|e| PublishError::Serialization(e.to_string()))
}
