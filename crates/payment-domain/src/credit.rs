//! Customer credit ledger types.

use common::{CreditHistoryId, CustomerId, Money};
use serde::{Deserialize, Serialize};

/// The direction of a ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Credit added to the customer's balance.
    Credit,

    /// Credit spent by the customer.
    Debit,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransactionKind::Credit => "Credit",
            TransactionKind::Debit => "Debit",
        };
        write!(f, "{s}")
    }
}

/// A customer's current credit balance.
///
/// Mutated in place by the payment saga (debit on initialization, credit
/// on cancellation). Must equal the net effect of the customer's
/// `CreditHistory` at every point the consistency checker runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditEntry {
    customer_id: CustomerId,
    total_credit_amount: Money,
}

impl CreditEntry {
    /// Creates a credit entry with the given balance.
    pub fn new(customer_id: CustomerId, total_credit_amount: Money) -> Self {
        Self {
            customer_id,
            total_credit_amount,
        }
    }

    /// Returns the customer this balance belongs to.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the current balance.
    pub fn total_credit_amount(&self) -> Money {
        self.total_credit_amount
    }

    /// Adds to the balance.
    pub(crate) fn add_credit_amount(&mut self, amount: Money) {
        self.total_credit_amount += amount;
    }

    /// Subtracts from the balance.
    pub(crate) fn subtract_credit_amount(&mut self, amount: Money) {
        self.total_credit_amount -= amount;
    }
}

/// One signed, append-only ledger movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditHistory {
    /// Unique identifier of the movement.
    pub id: CreditHistoryId,

    /// The customer whose balance moved.
    pub customer_id: CustomerId,

    /// Whether the movement added or spent credit.
    pub kind: TransactionKind,

    /// Magnitude of the movement (always positive).
    pub amount: Money,
}

impl CreditHistory {
    /// Creates a new ledger movement.
    pub fn new(
        id: CreditHistoryId,
        customer_id: CustomerId,
        kind: TransactionKind,
        amount: Money,
    ) -> Self {
        Self {
            id,
            customer_id,
            kind,
            amount,
        }
    }
}
