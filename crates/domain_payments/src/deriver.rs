//! Pure derivations over a policy portfolio
//!
//! The payment screens are fed by three read-only views computed here:
//! upcoming payments inside a day window, the next pending installment per
//! policy, and the settled-payment history. All three borrow an immutable
//! snapshot and take the reference date as a parameter; nothing reads the
//! system clock and nothing is cached. Callers re-derive after any external
//! mutation.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::temporal::{days_between, DayWindow};
use core_kernel::{Currency, PolicyId};

use crate::policy::Policy;
use crate::schedule::{PaymentSchedule, DUE_SOON_DAYS};

/// Default forward-looking window for the upcoming-payments view
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 20;

/// An unpaid installment inside the upcoming window, annotated with its
/// owning policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingPayment {
    pub policy_id: PolicyId,
    pub policy_number: String,
    pub currency: Currency,
    pub schedule: PaymentSchedule,
}

/// The earliest unsettled installment of one policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextPayment<'a> {
    pub policy: &'a Policy,
    pub payment: &'a PaymentSchedule,
}

/// A settled installment with its owning policy, for history rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaidPayment<'a> {
    pub policy: &'a Policy,
    pub schedule: &'a PaymentSchedule,
}

/// Collects unpaid installments due within `window_days` of `today`
///
/// The window is inclusive at both ends and compared at day granularity:
/// `window_days = 0` selects only installments due exactly today. Settled
/// entries are skipped regardless of due date, entries without a
/// normalizable due date are skipped, and duplicate rows are collapsed by
/// their `(policy, schedule)` identity. The result is sorted ascending by
/// due date; ties keep input order.
pub fn upcoming_payments(
    policies: &[Policy],
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingPayment> {
    let window = DayWindow::forward(today, window_days);
    let mut seen = HashSet::new();
    let mut rows = Vec::new();

    for policy in policies {
        for entry in &policy.payment_schedules {
            if entry.is_settled() {
                continue;
            }
            let Some(due) = entry.due_on() else {
                continue;
            };
            if !window.contains(due) {
                continue;
            }
            if !seen.insert((policy.id, entry.id)) {
                continue;
            }
            rows.push(UpcomingPayment {
                policy_id: policy.id,
                policy_number: policy.policy_number.clone(),
                currency: policy.currency,
                schedule: entry.clone(),
            });
        }
    }

    rows.sort_by_key(|row| row.schedule.due_on());
    tracing::debug!(
        count = rows.len(),
        window_days,
        "derived upcoming payments"
    );
    rows
}

/// Selects the unsettled installment with the earliest due date
///
/// Entries without a due date cannot be ordered and are skipped. Ties
/// resolve to the first occurrence in input order. A policy with nothing
/// pending yields `None`; that is an empty result, not an error.
pub fn next_pending_payment(policy: &Policy) -> Option<&PaymentSchedule> {
    policy
        .pending_schedules()
        .filter_map(|entry| entry.due_on().map(|due| (due, entry)))
        .min_by_key(|(due, _)| *due)
        .map(|(_, entry)| entry)
}

/// One `{policy, payment}` pair per policy that has a pending installment
///
/// Policies with nothing pending are omitted. Pair order follows the input
/// policy order.
pub fn next_pending_payments(policies: &[Policy]) -> Vec<NextPayment<'_>> {
    let rows: Vec<_> = policies
        .iter()
        .filter_map(|policy| {
            next_pending_payment(policy).map(|payment| NextPayment { policy, payment })
        })
        .collect();
    tracing::debug!(count = rows.len(), "derived next pending payments");
    rows
}

/// All settled installments across the portfolio, newest first
///
/// Sorted descending by `paid_date`; ties keep input order.
pub fn payment_history(policies: &[Policy]) -> Vec<PaidPayment<'_>> {
    let mut rows: Vec<_> = policies
        .iter()
        .flat_map(|policy| {
            policy
                .paid_schedules()
                .map(move |schedule| PaidPayment { policy, schedule })
        })
        .collect();

    rows.sort_by(|a, b| b.schedule.paid_date.cmp(&a.schedule.paid_date));
    tracing::debug!(count = rows.len(), "derived payment history");
    rows
}

/// Returns true if `due` falls within [`DUE_SOON_DAYS`] days of `today`,
/// both ends inclusive
pub fn is_due_soon(due: NaiveDate, today: NaiveDate) -> bool {
    (0..=DUE_SOON_DAYS).contains(&days_between(today, due))
}
