//! Order status state machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its saga lifecycle.
///
/// Status transitions:
/// ```text
/// Pending ──► Paid ──┬──► Approved
///    │               │
///    │               └──► Cancelling ──► Cancelled
///    └────────────────────────────────────────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order passed validation and awaits payment.
    Pending,

    /// Payment completed, awaiting restaurant approval.
    Paid,

    /// Restaurant approved the order (terminal state).
    Approved,

    /// Compensation in flight: waiting for the payment to be reversed.
    Cancelling,

    /// Order was cancelled (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order can be paid in this status.
    pub fn can_pay(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Returns true if the order can be approved in this status.
    pub fn can_approve(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    /// Returns true if payment cancellation can begin in this status.
    pub fn can_init_cancel(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    /// Returns true if cancellation can be finalized in this status.
    ///
    /// `Pending` is allowed so an order that never got paid can still be
    /// cancelled directly, without the compensation detour.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Cancelling)
    }

    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Approved | OrderStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Approved => "Approved",
            OrderStatus::Cancelling => "Cancelling",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
