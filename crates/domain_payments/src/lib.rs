//! Payments Domain - Premium Schedule Derivation
//!
//! This crate turns a customer's policy portfolio into the read-only views
//! the payment screens are built from:
//!
//! - **Upcoming payments**: unpaid installments due inside a forward-looking
//!   day window (20 days by default)
//! - **Next pending payment**: the earliest unpaid installment per policy
//! - **Payment history**: settled installments, most recent first
//!
//! Every derivation is pure: it borrows an immutable snapshot of policies and
//! the caller supplies the reference date, so the same input always produces
//! the same output. After a payment is processed externally the caller
//! re-fetches its snapshot and derives again; nothing is cached here.
//!
//! Settlement is judged by `paid_date` alone. The `status` field mirrors what
//! the policy admin system last wrote and is kept for display.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_payments::{upcoming_payments, DEFAULT_UPCOMING_WINDOW_DAYS};
//!
//! let due = upcoming_payments(&policies, today, DEFAULT_UPCOMING_WINDOW_DAYS);
//! for row in &due {
//!     println!("{} owes {} by {:?}", row.policy_number, row.schedule.due_amount, row.schedule.due_on());
//! }
//! ```

pub mod classify;
pub mod deriver;
pub mod error;
pub mod policy;
pub mod schedule;
pub mod summary;

pub use classify::{classify_installment, InstallmentDisplayStatus};
pub use deriver::{
    is_due_soon, next_pending_payment, next_pending_payments, payment_history, upcoming_payments,
    NextPayment, PaidPayment, UpcomingPayment, DEFAULT_UPCOMING_WINDOW_DAYS,
};
pub use error::PaymentsError;
pub use policy::{PaymentFrequency, Policy, PolicyStatus};
pub use schedule::{PaymentSchedule, ScheduleStatus, DUE_SOON_DAYS};
pub use summary::{summarize_policy, summarize_portfolio, PolicySummary};
