//! Payment status.

use serde::{Deserialize, Serialize};

/// The outcome status of a payment attempt.
///
/// A payment has no intermediate states: one saga step takes it from
/// unset straight to a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// The debit went through and the ledger is consistent.
    Completed,

    /// The compensating credit went through (terminal state).
    Cancelled,

    /// Validation or the ledger check reported violations (terminal state).
    Failed,
}

impl PaymentStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Cancelled => "Cancelled",
            PaymentStatus::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
