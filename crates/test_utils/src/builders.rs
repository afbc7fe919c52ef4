//! Test data builders
//!
//! Builder patterns for constructing policies and installment schedules with
//! sensible defaults, so tests only spell out the fields they care about.

use chrono::{NaiveDate, NaiveDateTime};
use core_kernel::temporal::start_of_day;
use core_kernel::{Currency, Money, PartyId, PolicyId, ScheduleId};
use domain_payments::{PaymentFrequency, PaymentSchedule, Policy, PolicyStatus, ScheduleStatus};

use crate::fixtures::{days_from_today, MoneyFixtures};

/// Builder for installment schedule entries
pub struct ScheduleBuilder {
    id: ScheduleId,
    due_amount: Money,
    due_date: Option<NaiveDateTime>,
    paid_date: Option<NaiveDateTime>,
    transaction_id: Option<String>,
}

impl ScheduleBuilder {
    /// Creates a builder for a pending installment due `days_from_today`
    /// days after the fixed reference date
    pub fn new(id: i64) -> Self {
        Self {
            id: ScheduleId::new(id),
            due_amount: MoneyFixtures::monthly_premium(),
            due_date: Some(start_of_day(days_from_today(10))),
            paid_date: None,
            transaction_id: None,
        }
    }

    /// Sets the installment amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.due_amount = amount;
        self
    }

    /// Sets the due date
    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(start_of_day(date));
        self
    }

    /// Sets the due date relative to the fixed reference date
    pub fn due_in_days(mut self, days: i64) -> Self {
        self.due_date = Some(start_of_day(days_from_today(days)));
        self
    }

    /// Clears the due date, simulating an upstream value that failed
    /// normalization
    pub fn without_due_date(mut self) -> Self {
        self.due_date = None;
        self
    }

    /// Marks the installment settled on the given day
    pub fn paid_on(mut self, date: NaiveDate) -> Self {
        self.paid_date = Some(start_of_day(date));
        if self.transaction_id.is_none() {
            self.transaction_id = Some(format!("txn-{}", self.id.value()));
        }
        self
    }

    /// Marks the installment settled at an exact timestamp
    pub fn paid_at(mut self, at: NaiveDateTime) -> Self {
        self.paid_date = Some(at);
        if self.transaction_id.is_none() {
            self.transaction_id = Some(format!("txn-{}", self.id.value()));
        }
        self
    }

    /// Records a processor reference without settlement (a failed attempt)
    pub fn with_transaction(mut self, reference: impl Into<String>) -> Self {
        self.transaction_id = Some(reference.into());
        self
    }

    /// Builds the installment
    pub fn build(self) -> PaymentSchedule {
        let status = if self.paid_date.is_some() {
            ScheduleStatus::Paid
        } else {
            ScheduleStatus::Pending
        };
        PaymentSchedule {
            id: self.id,
            due_amount: self.due_amount,
            due_date: self.due_date,
            paid_date: self.paid_date,
            status,
            transaction_id: self.transaction_id,
        }
    }
}

/// Builder for policies
pub struct PolicyBuilder {
    id: PolicyId,
    policy_number: String,
    holder_id: PartyId,
    currency: Currency,
    payment_frequency: PaymentFrequency,
    status: PolicyStatus,
    schedules: Vec<PaymentSchedule>,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a builder with default values: an active USD monthly policy
    /// with an empty schedule
    pub fn new() -> Self {
        Self {
            id: PolicyId::new(),
            policy_number: "PN-2025-0001".to_string(),
            holder_id: PartyId::new(),
            currency: Currency::USD,
            payment_frequency: PaymentFrequency::Monthly,
            status: PolicyStatus::Active,
            schedules: Vec::new(),
        }
    }

    /// Sets the policy ID
    pub fn with_id(mut self, id: PolicyId) -> Self {
        self.id = id;
        self
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the payment frequency
    pub fn with_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.payment_frequency = frequency;
        self
    }

    /// Sets the lifecycle status
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Appends one installment
    pub fn with_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedules.push(schedule);
        self
    }

    /// Appends several installments
    pub fn with_schedules(mut self, schedules: impl IntoIterator<Item = PaymentSchedule>) -> Self {
        self.schedules.extend(schedules);
        self
    }

    /// Builds the policy
    pub fn build(self) -> Policy {
        let mut policy = Policy::new(
            self.id,
            self.policy_number,
            self.holder_id,
            self.currency,
            self.payment_frequency,
        )
        .with_status(self.status);
        policy.payment_schedules = self.schedules;
        policy
    }
}
