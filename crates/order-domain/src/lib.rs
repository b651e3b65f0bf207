//! Order side of the order/payment saga.
//!
//! This crate provides:
//! - the `Order` aggregate with its status state machine
//! - the read-only `Restaurant` catalog snapshot used during validation
//! - order domain events (created, paid, cancelled)
//! - `OrderDomainService`, the saga entry points that decide which event
//!   comes next from the current aggregate state
//!
//! The service is synchronous and side-effect free beyond the aggregates
//! passed in: persistence and event delivery belong to the orchestrator.

mod error;
mod events;
mod order;
mod restaurant;
mod service;
mod state;

pub use error::OrderDomainError;
pub use events::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};
pub use order::{Order, OrderItem};
pub use restaurant::{Product, Restaurant};
pub use service::OrderDomainService;
pub use state::OrderStatus;
