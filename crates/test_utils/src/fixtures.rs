//! Pre-built test fixtures
//!
//! Every windowing test needs a reference date; fixing it here keeps tests
//! deterministic and off the wall clock. The fixed "today" is 2025-01-01.

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::temporal::start_of_day;
use core_kernel::{Currency, Money};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

static FIXED_TODAY: Lazy<NaiveDate> = Lazy::new(|| NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

/// The reference "today" used across the test suite (2025-01-01)
pub fn fixed_today() -> NaiveDate {
    *FIXED_TODAY
}

/// A calendar date `days` after the fixed "today"; negative goes backwards
pub fn days_from_today(days: i64) -> NaiveDate {
    fixed_today() + chrono::Duration::days(days)
}

/// Midnight timestamp `days` after the fixed "today"
pub fn timestamp_days_from_today(days: i64) -> NaiveDateTime {
    start_of_day(days_from_today(days))
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical monthly premium installment
    pub fn monthly_premium() -> Money {
        Money::new(dec!(120.50), Currency::USD)
    }

    /// A typical annual premium installment
    pub fn annual_premium() -> Money {
        Money::new(dec!(1380.00), Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_premium() -> Money {
        Money::new(dec!(95.00), Currency::EUR)
    }

    /// A zero USD amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }
}
