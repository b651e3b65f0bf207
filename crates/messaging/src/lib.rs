//! Transport boundary for the order/payment saga.
//!
//! The domain services return plain event values; this crate owns
//! getting them onto the wire:
//! - `EventPublisher`, the fire-and-forget transport contract with an
//!   acknowledgment callback for observability
//! - `InMemoryPublisher`, the test double
//! - `TopicConfig`, destination naming
//! - `EventDispatcher`, the event-variant → destination table the
//!   orchestrator hands events to
//!
//! Delivery failures are logged and counted here; they are never
//! surfaced back into the domain core, and nothing retries.

mod config;
mod dispatch;
mod memory;
mod publisher;

pub use config::TopicConfig;
pub use dispatch::{EventDispatcher, OutboundEvent};
pub use memory::{InMemoryPublisher, PublishedRecord};
pub use publisher::{AckHandler, DeliveryReceipt, EventPublisher, PublishError};
