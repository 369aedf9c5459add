//! Dispense records.
//!
//! A record is the ordered list of `(denomination, count)` pairs produced by
//! a successful request, highest denomination first. Records are only built
//! by the chain, so their fields are read-only to callers.

use crate::core::{Amount, Denomination};
use serde::Serialize;
use std::fmt;

/// Notes dispensed at a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tranche {
    denomination: Denomination,
    count: u64,
}

impl Tranche {
    /// Denomination of the notes.
    #[must_use]
    pub const fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Number of notes, always at least one.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Value covered by this tranche.
    #[must_use]
    pub fn value(&self) -> u128 {
        u128::from(self.denomination.value()) * u128::from(self.count)
    }
}

impl fmt::Display for Tranche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dispensing {} {}$ note", self.count, self.denomination)
    }
}

/// The outcome of a successful dispense request.
///
/// # Examples
///
/// ```
/// use atm_chain::chain::Dispatcher;
///
/// let dispatcher = Dispatcher::default();
/// let record = dispatcher.dispense_request(80).unwrap();
/// assert_eq!(record.pairs(), vec![(50, 1), (20, 1), (10, 1)]);
/// assert_eq!(record.total(), 80);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispenseRecord {
    amount: Amount,
    // Strictly descending by denomination, every count >= 1.
    tranches: Vec<Tranche>,
}

impl DispenseRecord {
    /// Creates an empty record for `amount`.
    #[must_use]
    pub const fn new(amount: Amount) -> Self {
        Self {
            amount,
            tranches: Vec::new(),
        }
    }

    /// Appends a tranche below the existing ones. Zero counts are ignored.
    pub(crate) fn push(&mut self, denomination: Denomination, count: u64) {
        if count == 0 {
            return;
        }
        debug_assert!(
            self.tranches
                .last()
                .is_none_or(|last| last.denomination > denomination),
            "tranches must be pushed in descending order"
        );
        self.tranches.push(Tranche {
            denomination,
            count,
        });
    }

    /// Amount that was requested.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Tranches in descending-denomination order.
    #[must_use]
    pub fn tranches(&self) -> &[Tranche] {
        &self.tranches
    }

    /// Returns `true` if no notes were dispensed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tranches.is_empty()
    }

    /// Number of tiers that dispensed notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tranches.len()
    }

    /// Iterates over the tranches in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tranche> {
        self.tranches.iter()
    }

    /// Sum of `denomination * count` over all tranches.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.tranches.iter().map(Tranche::value).sum()
    }

    /// Total number of notes across all tiers.
    #[must_use]
    pub fn notes(&self) -> u64 {
        self.tranches
            .iter()
            .fold(0, |acc, t| acc.saturating_add(t.count))
    }

    /// The record as plain `(denomination, count)` pairs.
    #[must_use]
    pub fn pairs(&self) -> Vec<(u64, u64)> {
        self.tranches
            .iter()
            .map(|t| (t.denomination.value(), t.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DispenseRecord {
    type Item = &'a Tranche;
    type IntoIter = std::slice::Iter<'a, Tranche>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
