//! Display classification for admin views
//!
//! The back-office tables label installments beyond the PENDING/PAID pair
//! the schedule itself carries. These labels are derived per render against
//! an injected reference date and are never written back; the underlying
//! state machine stays PENDING to PAID.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::schedule::PaymentSchedule;

/// Admin-facing installment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstallmentDisplayStatus {
    /// Unpaid, due today or later
    Pending,
    /// Unpaid and past its due date
    Overdue,
    /// A processor attempt was recorded but never settled
    Failed,
    /// Settled
    Paid,
}

impl fmt::Display for InstallmentDisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstallmentDisplayStatus::Pending => "Pending",
            InstallmentDisplayStatus::Overdue => "Overdue",
            InstallmentDisplayStatus::Failed => "Failed",
            InstallmentDisplayStatus::Paid => "Paid",
        };
        write!(f, "{}", label)
    }
}

/// Classifies one installment for display
///
/// A recorded `transaction_id` without a `paid_date` reads as a failed
/// attempt; otherwise unpaid entries split on whether the due date has
/// passed. Entries with no due date stay `Pending` rather than guessing.
pub fn classify_installment(
    schedule: &PaymentSchedule,
    today: NaiveDate,
) -> InstallmentDisplayStatus {
    if schedule.is_settled() {
        return InstallmentDisplayStatus::Paid;
    }
    if schedule.transaction_id.is_some() {
        return InstallmentDisplayStatus::Failed;
    }
    match schedule.due_on() {
        Some(due) if due < today => InstallmentDisplayStatus::Overdue,
        _ => InstallmentDisplayStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::PaymentSchedule;
    use chrono::NaiveDate;
    use core_kernel::temporal::start_of_day;
    use core_kernel::{Currency, Money, ScheduleId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(due: NaiveDate) -> PaymentSchedule {
        PaymentSchedule::new(ScheduleId::new(7), Money::new(dec!(80), Currency::EUR), due)
    }

    #[test]
    fn test_pending_and_overdue() {
        let today = date(2025, 1, 10);
        assert_eq!(
            classify_installment(&entry(date(2025, 1, 10)), today),
            InstallmentDisplayStatus::Pending
        );
        assert_eq!(
            classify_installment(&entry(date(2025, 1, 9)), today),
            InstallmentDisplayStatus::Overdue
        );
    }

    #[test]
    fn test_paid_wins_over_everything() {
        let today = date(2025, 1, 10);
        let mut e = entry(date(2025, 1, 1));
        e.settle("txn-5", start_of_day(date(2025, 1, 2)));
        assert_eq!(
            classify_installment(&e, today),
            InstallmentDisplayStatus::Paid
        );
    }

    #[test]
    fn test_unsettled_attempt_reads_as_failed() {
        let today = date(2025, 1, 10);
        let mut e = entry(date(2025, 1, 1));
        e.transaction_id = Some("txn-9".to_string());
        assert_eq!(
            classify_installment(&e, today),
            InstallmentDisplayStatus::Failed
        );
    }

    #[test]
    fn test_missing_due_date_stays_pending() {
        let today = date(2025, 1, 10);
        let mut e = entry(date(2025, 1, 1));
        e.due_date = None;
        assert_eq!(
            classify_installment(&e, today),
            InstallmentDisplayStatus::Pending
        );
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(InstallmentDisplayStatus::Overdue.to_string(), "Overdue");
    }
}
