//! Core domain event trait.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Trait for domain events.
///
/// Domain events are immutable records of a completed state transition,
/// named in past tense. They carry the aggregate snapshot and a UTC
/// timestamp, and no behavior beyond accessors: delivery is the
/// messaging layer's job, not the event's.
pub trait DomainEvent: Serialize + Send + Sync + Clone {
    /// Returns the event type name, used for routing and logging.
    fn event_type(&self) -> &'static str;

    /// Returns when the event was created.
    fn created_at(&self) -> DateTime<Utc>;
}
