//! Payment saga entry points.

use common::{Clock, CreditHistoryId, SystemClock};

use crate::credit::{CreditEntry, CreditHistory, TransactionKind};
use crate::events::PaymentEvent;
use crate::ledger;
use crate::payment::Payment;
use crate::state::PaymentStatus;

/// Drives the payment state machine and the customer credit ledger.
///
/// Both entry points apply their ledger mutation optimistically, before
/// the consistency check completes: one linear pass performs the
/// mutation and validates the resulting world-state. On a `Failed`
/// outcome the mutated aggregates are scratch-work; the caller must not
/// persist them.
pub struct PaymentDomainService<C = SystemClock> {
    clock: C,
}

impl PaymentDomainService<SystemClock> {
    /// Creates a service stamping events with the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for PaymentDomainService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PaymentDomainService<C> {
    /// Creates a service with an explicit time source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Validates and debits a payment.
    ///
    /// Every check writes into `failure_messages` instead of stopping on
    /// the first violation, so one round trip reports all of them. The
    /// debit and its history entry are applied regardless of the
    /// available-credit check (debit-then-verify).
    pub fn validate_and_initialize_payment(
        &self,
        payment: &mut Payment,
        credit_entry: &mut CreditEntry,
        credit_histories: &mut Vec<CreditHistory>,
        failure_messages: &mut Vec<String>,
    ) -> PaymentEvent {
        payment.validate(failure_messages);
        payment.initialize(self.clock.now());

        Self::validate_credit_entry(payment, credit_entry, failure_messages);
        credit_entry.subtract_credit_amount(payment.price());
        Self::append_history(payment, credit_histories, TransactionKind::Debit);
        Self::validate_credit_history(credit_entry, credit_histories, failure_messages);

        if failure_messages.is_empty() {
            payment.update_status(PaymentStatus::Completed);
            PaymentEvent::completed(payment.clone(), self.clock.now())
        } else {
            payment.update_status(PaymentStatus::Failed);
            PaymentEvent::failed(payment.clone(), self.clock.now(), failure_messages.clone())
        }
    }

    /// Validates and reverses a payment: the compensating credit.
    ///
    /// Algebraic inverse of initialization on the ledger: adds the price
    /// back and appends a `Credit` movement, then re-checks consistency.
    pub fn validate_and_cancel_payment(
        &self,
        payment: &mut Payment,
        credit_entry: &mut CreditEntry,
        credit_histories: &mut Vec<CreditHistory>,
        failure_messages: &mut Vec<String>,
    ) -> PaymentEvent {
        payment.validate(failure_messages);

        credit_entry.add_credit_amount(payment.price());
        Self::append_history(payment, credit_histories, TransactionKind::Credit);
        Self::validate_credit_history(credit_entry, credit_histories, failure_messages);

        if failure_messages.is_empty() {
            payment.update_status(PaymentStatus::Cancelled);
            PaymentEvent::cancelled(payment.clone(), self.clock.now())
        } else {
            payment.update_status(PaymentStatus::Failed);
            PaymentEvent::failed(payment.clone(), self.clock.now(), failure_messages.clone())
        }
    }

    /// Available-credit check against the pre-mutation balance.
    fn validate_credit_entry(
        payment: &Payment,
        credit_entry: &CreditEntry,
        failure_messages: &mut Vec<String>,
    ) {
        if payment.price() > credit_entry.total_credit_amount() {
            failure_messages.push(format!(
                "customer {} does not have enough credit for payment",
                credit_entry.customer_id()
            ));
        }
    }

    fn append_history(
        payment: &Payment,
        credit_histories: &mut Vec<CreditHistory>,
        kind: TransactionKind,
    ) {
        credit_histories.push(CreditHistory::new(
            CreditHistoryId::new(),
            payment.customer_id(),
            kind,
            payment.price(),
        ));
    }

    fn validate_credit_history(
        credit_entry: &CreditEntry,
        credit_histories: &[CreditHistory],
        failure_messages: &mut Vec<String>,
    ) {
        failure_messages.extend(
            ledger::check(credit_entry, credit_histories)
                .into_iter()
                .map(|violation| violation.to_string()),
        );
    }
}
