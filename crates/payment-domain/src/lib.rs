//! Payment side of the order/payment saga.
//!
//! This crate provides:
//! - the `Payment` aggregate and its status
//! - the customer credit ledger (`CreditEntry` balance plus append-only
//!   `CreditHistory` movements)
//! - the pure ledger consistency checker
//! - `PaymentDomainService`, the debit-then-verify / credit-then-verify
//!   saga steps
//!
//! Validation uses collect-all-errors semantics: every violated
//! precondition of one call lands in the caller-supplied accumulator and
//! the call always returns an event, `Failed` when the accumulator is
//! non-empty. There is no hard-error channel on this side.

mod credit;
mod events;
pub mod ledger;
mod payment;
mod service;
mod state;

pub use credit::{CreditEntry, CreditHistory, TransactionKind};
pub use events::{PaymentEvent, PaymentEventData, PaymentFailedData};
pub use ledger::LedgerViolation;
pub use payment::Payment;
pub use service::PaymentDomainService;
pub use state::PaymentStatus;
