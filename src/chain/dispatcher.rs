//! Request front-end.
//!
//! Validates raw requests against the configured chain before handing them to
//! the head handler. Validation happens up front, so a rejected request never
//! produces a partial record.

use crate::chain::builder::{Chain, build_chain};
use crate::core::{Amount, Denomination, DispenseRecord};
use crate::error::{DispenseError, Result};
use tracing::{info, warn};

/// Accepts dispense requests and routes them through a [`Chain`].
///
/// A dispatcher holds only immutable configuration, so it can be shared
/// across threads once built.
///
/// # Examples
///
/// ```
/// use atm_chain::chain::Dispatcher;
///
/// let dispatcher = Dispatcher::default();
/// assert!(dispatcher.dispense_request(25).is_err());
/// assert!(dispatcher.dispense_request(0).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatcher {
    chain: Chain,
}

impl Dispatcher {
    /// Creates a dispatcher over an existing chain.
    #[must_use]
    pub const fn new(chain: Chain) -> Self {
        Self { chain }
    }

    /// Builds the chain from denominations (highest first) and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InvalidConfiguration`] if the list is not a
    /// valid chain.
    pub fn from_denominations(denominations: &[u64]) -> Result<Self> {
        build_chain(denominations).map(Self::from)
    }

    /// The underlying chain.
    #[must_use]
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Every request must be a multiple of this denomination.
    #[must_use]
    pub fn smallest(&self) -> Denomination {
        self.chain.smallest()
    }

    /// Dispenses a raw, possibly negative, amount.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InvalidAmount`] if `raw_amount` is negative or
    /// not a multiple of the smallest denomination, and
    /// [`DispenseError::InsufficientDenominations`] if the chain cannot
    /// represent the amount.
    pub fn dispense_request(&self, raw_amount: i64) -> Result<DispenseRecord> {
        let amount = Amount::try_from(raw_amount).inspect_err(|e| {
            warn!(amount = raw_amount, error = %e, "rejected request");
        })?;
        self.dispense(amount)
    }

    /// Dispenses a typed amount.
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::dispense_request`], minus the negative case.
    pub fn dispense(&self, amount: Amount) -> Result<DispenseRecord> {
        let smallest = self.smallest();
        if !amount.is_multiple_of(smallest) {
            let err = DispenseError::invalid_amount(
                amount,
                format!("amount must be a multiple of {smallest}"),
            );
            warn!(amount = amount.value(), error = %err, "rejected request");
            return Err(err.into());
        }

        match self.chain.dispense(amount) {
            Ok(record) => {
                info!(
                    amount = amount.value(),
                    tiers = record.len(),
                    notes = record.notes(),
                    "dispensed"
                );
                Ok(record)
            }
            Err(e) => {
                warn!(amount = amount.value(), error = %e, "dispense failed");
                Err(e)
            }
        }
    }

    /// Parses a line of text as an amount and dispenses it.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InvalidAmount`] if `input` is not an integer,
    /// plus everything [`Dispatcher::dispense_request`] can return.
    pub fn parse_request(&self, input: &str) -> Result<DispenseRecord> {
        let trimmed = input.trim();
        let raw = trimmed.parse::<i64>().map_err(|_| {
            let err = DispenseError::invalid_amount(trimmed, "amount must be a whole number");
            warn!(input = trimmed, error = %err, "rejected request");
            err
        })?;
        self.dispense_request(raw)
    }
}

impl From<Chain> for Dispatcher {
    fn from(chain: Chain) -> Self {
        Self::new(chain)
    }
}
