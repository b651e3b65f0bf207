//! Shared value objects for the order/payment saga.
//!
//! This crate provides the types both domain crates speak in:
//! - UUID-backed ID newtypes for every aggregate and entity
//! - `Money`, a cents-based amount type
//! - the `DomainEvent` trait implemented by all saga events
//! - a `Clock` seam so event timestamps can be fixed in tests

pub mod clock;
pub mod event;
pub mod ids;
pub mod money;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event::DomainEvent;
pub use ids::{CreditHistoryId, CustomerId, OrderId, PaymentId, ProductId, RestaurantId};
pub use money::Money;
