//! Policies and their payment plans
//!
//! Only the payment-facing slice of a policy is modelled here: identity,
//! currency, payment frequency, and the installment schedule. Underwriting,
//! coverages, and claims live with their own collaborators.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, PartyId, PolicyId, ScheduleId};

use crate::schedule::PaymentSchedule;

/// Premium payment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    Annual,
}

impl PaymentFrequency {
    /// Returns the number of installments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Annual => 1,
        }
    }

    /// Calendar months between consecutive installments
    pub fn months_between_installments(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 1,
            PaymentFrequency::Quarterly => 3,
            PaymentFrequency::Annual => 12,
        }
    }

    /// The due date following `from_date` at this frequency
    ///
    /// Month arithmetic clamps to the end of shorter months, so a Jan 31
    /// monthly installment is followed by Feb 28 (or 29).
    pub fn next_due_date(&self, from_date: NaiveDate) -> NaiveDate {
        from_date
            .checked_add_months(Months::new(self.months_between_installments()))
            .unwrap_or(from_date)
    }
}

/// Policy lifecycle status
///
/// Carried for display; the payment derivations run over whatever policies
/// the caller hands in, regardless of status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyStatus {
    Active,
    Lapsed,
    Cancelled,
    Expired,
}

impl PolicyStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, PolicyStatus::Active)
    }
}

/// The payment-facing view of an issued policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Human-readable policy number
    pub policy_number: String,
    /// Policyholder
    pub holder_id: PartyId,
    /// Premium currency; installments are expected to match
    pub currency: Currency,
    /// How often premium falls due
    pub payment_frequency: PaymentFrequency,
    /// Lifecycle status
    pub status: PolicyStatus,
    /// Installment schedule; upstream order is not guaranteed, consumers sort
    pub payment_schedules: Vec<PaymentSchedule>,
}

impl Policy {
    /// Creates a policy with an empty schedule
    pub fn new(
        id: PolicyId,
        policy_number: impl Into<String>,
        holder_id: PartyId,
        currency: Currency,
        payment_frequency: PaymentFrequency,
    ) -> Self {
        Self {
            id,
            policy_number: policy_number.into(),
            holder_id,
            currency,
            payment_frequency,
            status: PolicyStatus::Active,
            payment_schedules: Vec::new(),
        }
    }

    /// Replaces the installment schedule
    pub fn with_schedules(mut self, schedules: Vec<PaymentSchedule>) -> Self {
        self.payment_schedules = schedules;
        self
    }

    /// Sets the lifecycle status
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Unsettled installments, in upstream order
    pub fn pending_schedules(&self) -> impl Iterator<Item = &PaymentSchedule> {
        self.payment_schedules.iter().filter(|s| !s.is_settled())
    }

    /// Settled installments, in upstream order
    pub fn paid_schedules(&self) -> impl Iterator<Item = &PaymentSchedule> {
        self.payment_schedules.iter().filter(|s| s.is_settled())
    }

    /// Returns true if any installment is still unsettled
    pub fn has_pending(&self) -> bool {
        self.pending_schedules().next().is_some()
    }

    /// Looks up an installment by its row id
    pub fn schedule(&self, id: ScheduleId) -> Option<&PaymentSchedule> {
        self.payment_schedules.iter().find(|s| s.id == id)
    }
}
