//! Payments domain errors

use core_kernel::{Currency, MoneyError, PolicyId, ScheduleId};
use thiserror::Error;

/// Errors that can occur in the payments domain
///
/// Derivations that merely classify degrade to empty output; errors are
/// reserved for data that contradicts itself.
#[derive(Debug, Error)]
pub enum PaymentsError {
    /// An installment's currency contradicts its policy's currency
    #[error("installment {schedule} on policy {policy} is denominated in {found}, expected {expected}")]
    CurrencyMismatch {
        policy: PolicyId,
        schedule: ScheduleId,
        expected: Currency,
        found: Currency,
    },

    /// Monetary arithmetic failed
    #[error("money error: {0}")]
    Money(#[from] MoneyError),
}
