//! Property-based test generators
//!
//! Proptest strategies for policies and installment schedules. Strategies
//! are anchored to the fixed reference date from `fixtures`, never the wall
//! clock, so shrunk failures replay byte-for-byte.

use chrono::NaiveDate;
use core_kernel::{Currency, Money, ScheduleId};
use domain_payments::{PaymentFrequency, PaymentSchedule, Policy};
use proptest::prelude::*;

use crate::builders::{PolicyBuilder, ScheduleBuilder};
use crate::fixtures::days_from_today;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::INR),
        Just(Currency::AUD),
        Just(Currency::CAD),
    ]
}

/// Strategy for generating payment frequencies
pub fn frequency_strategy() -> impl Strategy<Value = PaymentFrequency> {
    prop_oneof![
        Just(PaymentFrequency::Monthly),
        Just(PaymentFrequency::Quarterly),
        Just(PaymentFrequency::Annual),
    ]
}

/// Strategy for positive installment amounts in a fixed currency
pub fn amount_strategy(currency: Currency) -> impl Strategy<Value = Money> {
    (100i64..5_000_000i64).prop_map(move |minor| Money::from_minor(minor, currency))
}

/// Strategy for due-date offsets around the reference date, spanning well
/// past both window edges
pub fn due_offset_strategy() -> impl Strategy<Value = i64> {
    -60i64..90i64
}

/// Strategy for one installment: due somewhere around the reference date,
/// sometimes already settled, occasionally missing its due date
pub fn schedule_strategy(id: i64, currency: Currency) -> impl Strategy<Value = PaymentSchedule> {
    (
        amount_strategy(currency),
        due_offset_strategy(),
        proptest::option::weighted(0.4, -30i64..0i64),
        proptest::bool::weighted(0.05),
    )
        .prop_map(move |(amount, due_offset, paid_offset, drop_due_date)| {
            let mut builder = ScheduleBuilder::new(id)
                .with_amount(amount)
                .due_in_days(due_offset);
            if drop_due_date {
                builder = builder.without_due_date();
            }
            if let Some(paid) = paid_offset {
                builder = builder.paid_on(days_from_today(paid));
            }
            builder.build()
        })
}

/// Strategy for a policy with up to `max_schedules` installments
///
/// Generated ids are reassigned sequentially so they stay unique within the
/// policy, matching what the upstream admin system guarantees.
pub fn policy_strategy(max_schedules: usize) -> impl Strategy<Value = Policy> {
    (currency_strategy(), frequency_strategy()).prop_flat_map(move |(currency, frequency)| {
        proptest::collection::vec(schedule_strategy(0, currency), 0..=max_schedules).prop_map(
            move |mut schedules| {
                for (idx, schedule) in schedules.iter_mut().enumerate() {
                    schedule.id = ScheduleId::new(idx as i64 + 1);
                }
                PolicyBuilder::new()
                    .with_currency(currency)
                    .with_frequency(frequency)
                    .with_schedules(schedules)
                    .build()
            },
        )
    })
}

/// Strategy for a small portfolio of policies
pub fn portfolio_strategy(max_policies: usize) -> impl Strategy<Value = Vec<Policy>> {
    proptest::collection::vec(policy_strategy(6), 0..=max_policies)
}

/// Due dates inside the default upcoming window, for targeted cases
pub fn windowed_due_date_strategy(window_days: u32) -> impl Strategy<Value = NaiveDate> {
    (0i64..=i64::from(window_days)).prop_map(days_from_today)
}
