//! Amounts and denominations.
//!
//! Both are thin newtypes over unsigned integers. An [`Amount`] is never
//! mutated: every remainder produced while walking the chain is a new value.

use crate::error::DispenseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// A non-negative integral quantity of currency to be decomposed.
///
/// # Examples
///
/// ```
/// use atm_chain::core::{Amount, Denomination};
///
/// let amount = Amount::new(140);
/// let fifty = Denomination::new(50).unwrap();
/// let (count, remainder) = amount.split(fifty);
/// assert_eq!(count, 2);
/// assert_eq!(remainder, Amount::new(40));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// The empty amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` if nothing is left to dispense.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Splits the amount into whole notes of `denomination` and the remainder.
    ///
    /// Returns `(count, remainder)`. When the amount is smaller than the
    /// denomination the count is zero and the remainder is the amount itself.
    #[must_use]
    pub const fn split(self, denomination: Denomination) -> (u64, Self) {
        let d = denomination.value();
        (self.0 / d, Self(self.0 % d))
    }

    /// Returns `true` if the amount is an exact multiple of `denomination`.
    #[must_use]
    pub const fn is_multiple_of(self, denomination: Denomination) -> bool {
        self.0 % denomination.value() == 0
    }
}

impl TryFrom<i64> for Amount {
    type Error = DispenseError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| DispenseError::invalid_amount(raw, "amount must not be negative"))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positive note value handled by one link of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denomination(NonZeroU64);

impl Denomination {
    /// Creates a denomination, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InvalidConfiguration`] if `value` is zero.
    pub fn new(value: u64) -> Result<Self, DispenseError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| DispenseError::invalid_configuration("denominations must be positive"))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
