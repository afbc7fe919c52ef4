//! Core Kernel - Foundational types for the payments core
//!
//! This crate provides the building blocks used across the domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar handling and lenient normalization of upstream date shapes
//! - Strongly-typed identifiers

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{PartyId, PolicyId, ScheduleId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{days_between, DateInput, DayWindow, Timezone, DATE_UNAVAILABLE};
