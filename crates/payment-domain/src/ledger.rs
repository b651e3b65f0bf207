//! Ledger consistency checker.
//!
//! A pure function over a credit balance and its history of signed
//! movements. It never fails and never corrects anything: it only
//! reports violations for the caller's accumulator.

use common::{CustomerId, Money};
use thiserror::Error;

use crate::credit::{CreditEntry, CreditHistory, TransactionKind};

/// A consistency violation between a credit balance and its history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerViolation {
    /// The history records more spent than granted.
    #[error("customer {customer_id} does not have enough credit according to credit history")]
    DebitExceedsCredit { customer_id: CustomerId },

    /// The balance does not equal the net effect of the history.
    #[error("credit history total does not equal current credit for customer {customer_id}")]
    BalanceMismatch { customer_id: CustomerId },
}

/// Checks that `entry`'s balance is consistent with `histories`.
///
/// Two independent checks, both of which may fire:
/// - total debits must not exceed total credits
/// - the balance must equal total credits minus total debits
pub fn check(entry: &CreditEntry, histories: &[CreditHistory]) -> Vec<LedgerViolation> {
    let total_credit = total_amount(histories, TransactionKind::Credit);
    let total_debit = total_amount(histories, TransactionKind::Debit);

    let mut violations = Vec::new();

    if total_debit > total_credit {
        violations.push(LedgerViolation::DebitExceedsCredit {
            customer_id: entry.customer_id(),
        });
    }

    if entry.total_credit_amount() != total_credit - total_debit {
        violations.push(LedgerViolation::BalanceMismatch {
            customer_id: entry.customer_id(),
        });
    }

    violations
}

fn total_amount(histories: &[CreditHistory], kind: TransactionKind) -> Money {
    histories
        .iter()
        .filter(|h| h.kind == kind)
        .map(|h| h.amount)
        .sum()
}
