//! Payment schedule entries
//!
//! A [`PaymentSchedule`] is one installment obligation within a policy's
//! payment plan. Entries are created by the policy admin system when a policy
//! is issued or renewed; this crate only reads and classifies them. The one
//! lifecycle transition it models is PENDING to PAID.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{days_between, flexible_datetime, start_of_day};
use core_kernel::{Money, ScheduleId};

/// Days ahead (inclusive) within which an unpaid installment counts as due soon
pub const DUE_SOON_DAYS: i64 = 3;

/// Settlement status as last written by the policy admin system
///
/// Display-only: derivations judge settlement by `paid_date` presence, which
/// is the authoritative signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleStatus {
    Pending,
    Paid,
}

/// One installment obligation within a policy's payment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    /// Row id assigned upstream, unique within the owning policy
    pub id: ScheduleId,
    /// Amount owed for this installment
    pub due_amount: Money,
    /// When the installment is owed; `None` when the upstream value was
    /// absent or failed normalization
    #[serde(default, with = "flexible_datetime")]
    pub due_date: Option<NaiveDateTime>,
    /// When the installment settled; presence means paid
    #[serde(default, with = "flexible_datetime")]
    pub paid_date: Option<NaiveDateTime>,
    /// Status as last written upstream
    pub status: ScheduleStatus,
    /// External payment processor reference, recorded once an attempt is made
    pub transaction_id: Option<String>,
}

impl PaymentSchedule {
    /// Creates a pending installment due on the given day
    pub fn new(id: ScheduleId, due_amount: Money, due_on: NaiveDate) -> Self {
        Self {
            id,
            due_amount,
            due_date: Some(start_of_day(due_on)),
            paid_date: None,
            status: ScheduleStatus::Pending,
            transaction_id: None,
        }
    }

    /// Returns true once the installment has settled
    ///
    /// `paid_date` presence is authoritative; `status` is not consulted.
    pub fn is_settled(&self) -> bool {
        self.paid_date.is_some()
    }

    /// The due date at day granularity
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_date.map(|dt| dt.date())
    }

    /// Whole days until the installment is due; negative when past due
    pub fn due_in_days(&self, today: NaiveDate) -> Option<i64> {
        self.due_on().map(|due| days_between(today, due))
    }

    /// Returns true if the installment is unpaid and due within the next
    /// [`DUE_SOON_DAYS`] days, today included
    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        if self.is_settled() {
            return false;
        }
        matches!(self.due_in_days(today), Some(days) if (0..=DUE_SOON_DAYS).contains(&days))
    }

    /// Records external settlement of this installment
    ///
    /// This is the only state transition the domain models; it happens after
    /// the payment processor confirms, never as part of a derivation.
    pub fn settle(&mut self, transaction_id: impl Into<String>, paid_at: NaiveDateTime) {
        self.paid_date = Some(paid_at);
        self.status = ScheduleStatus::Paid;
        self.transaction_id = Some(transaction_id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(due: NaiveDate) -> PaymentSchedule {
        PaymentSchedule::new(
            ScheduleId::new(1),
            Money::new(dec!(120.50), Currency::USD),
            due,
        )
    }

    #[test]
    fn test_new_entry_is_pending() {
        let e = entry(date(2025, 1, 5));
        assert!(!e.is_settled());
        assert_eq!(e.status, ScheduleStatus::Pending);
        assert_eq!(e.due_on(), Some(date(2025, 1, 5)));
        assert!(e.transaction_id.is_none());
    }

    #[test]
    fn test_settle_transition() {
        let mut e = entry(date(2025, 1, 5));
        e.settle("txn-991", date(2025, 1, 4).and_hms_opt(14, 30, 0).unwrap());

        assert!(e.is_settled());
        assert_eq!(e.status, ScheduleStatus::Paid);
        assert_eq!(e.transaction_id.as_deref(), Some("txn-991"));
    }

    #[test]
    fn test_due_soon_window() {
        let today = date(2025, 1, 1);

        assert!(entry(today).is_due_soon(today));
        assert!(entry(date(2025, 1, 4)).is_due_soon(today));
        assert!(!entry(date(2025, 1, 5)).is_due_soon(today));
        assert!(!entry(date(2024, 12, 31)).is_due_soon(today));
    }

    #[test]
    fn test_due_soon_ignores_settled_entries() {
        let today = date(2025, 1, 1);
        let mut e = entry(today);
        e.settle("txn-1", start_of_day(today));
        assert!(!e.is_due_soon(today));
    }

    #[test]
    fn test_due_soon_without_due_date() {
        let mut e = entry(date(2025, 1, 1));
        e.due_date = None;
        assert!(!e.is_due_soon(date(2025, 1, 1)));
        assert_eq!(e.due_in_days(date(2025, 1, 1)), None);
    }
}
