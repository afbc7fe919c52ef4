//! Per-policy payment aggregates
//!
//! Account pages show, next to the raw schedule, how much of a policy has
//! been paid and what is still outstanding. Amounts are summed with
//! currency-checked arithmetic: an installment whose currency contradicts
//! its policy is a data fault worth surfacing, not something to coerce.

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::{Currency, Money, PolicyId};

use crate::deriver::next_pending_payment;
use crate::error::PaymentsError;
use crate::policy::Policy;

/// Payment position of one policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicySummary {
    pub policy_id: PolicyId,
    pub currency: Currency,
    /// Total number of installments on the schedule
    pub installments: usize,
    pub paid_count: usize,
    pub pending_count: usize,
    /// Sum of settled installment amounts
    pub total_paid: Money,
    /// Sum of unsettled installment amounts
    pub outstanding: Money,
    /// Due date of the next pending installment, if any
    pub next_due: Option<NaiveDate>,
}

/// Aggregates one policy's schedule into a [`PolicySummary`]
pub fn summarize_policy(policy: &Policy) -> Result<PolicySummary, PaymentsError> {
    for entry in &policy.payment_schedules {
        if entry.due_amount.currency() != policy.currency {
            return Err(PaymentsError::CurrencyMismatch {
                policy: policy.id,
                schedule: entry.id,
                expected: policy.currency,
                found: entry.due_amount.currency(),
            });
        }
    }

    let total_paid = Money::sum(
        policy.paid_schedules().map(|s| &s.due_amount),
        policy.currency,
    )?;
    let outstanding = Money::sum(
        policy.pending_schedules().map(|s| &s.due_amount),
        policy.currency,
    )?;

    Ok(PolicySummary {
        policy_id: policy.id,
        currency: policy.currency,
        installments: policy.payment_schedules.len(),
        paid_count: policy.paid_schedules().count(),
        pending_count: policy.pending_schedules().count(),
        total_paid,
        outstanding,
        next_due: next_pending_payment(policy).and_then(|s| s.due_on()),
    })
}

/// Aggregates every policy in the portfolio, in input order
pub fn summarize_portfolio(policies: &[Policy]) -> Result<Vec<PolicySummary>, PaymentsError> {
    policies.iter().map(summarize_policy).collect()
}
