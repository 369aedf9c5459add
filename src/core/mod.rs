//! Core domain models.
//!
//! Amounts, denominations, and dispense records. These are pure value types
//! with no I/O dependencies.

pub mod amount;
pub mod record;

pub use amount::{Amount, Denomination};
pub use record::{DispenseRecord, Tranche};
