//! Chain assembly.
//!
//! A [`Chain`] is an arena of handlers where `handlers[i].next == Some(i + 1)`
//! and the tail has no successor. Links are assigned once, here, so a chain
//! can neither be partially wired nor contain a cycle.

use crate::chain::handler::{Handler, Step};
use crate::core::{Amount, Denomination, DispenseRecord};
use crate::error::{DispenseError, Result};
use std::collections::BTreeSet;

/// Denominations used when none are configured.
pub const DEFAULT_DENOMINATIONS: [u64; 3] = [50, 20, 10];

/// An immutable, ordered sequence of handlers, highest denomination first.
///
/// # Examples
///
/// ```
/// use atm_chain::chain::build_chain;
/// use atm_chain::core::Amount;
///
/// let chain = build_chain(&[50, 20, 10]).unwrap();
/// let record = chain.dispense(Amount::new(140)).unwrap();
/// assert_eq!(record.pairs(), vec![(50, 2), (20, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    // Never empty.
    handlers: Vec<Handler>,
}

impl Default for Chain {
    fn default() -> Self {
        Self::wire(
            DEFAULT_DENOMINATIONS
                .iter()
                .filter_map(|&d| Denomination::new(d).ok())
                .collect(),
        )
    }
}

/// Builds a chain from denominations given highest first.
///
/// # Errors
///
/// Returns [`DispenseError::InvalidConfiguration`] if the list is empty,
/// contains zero or a duplicate, or is not strictly decreasing.
pub fn build_chain(denominations: &[u64]) -> Result<Chain> {
    if denominations.is_empty() {
        return Err(DispenseError::invalid_configuration("denomination list is empty").into());
    }

    let mut seen = BTreeSet::new();
    for &d in denominations {
        if !seen.insert(d) {
            return Err(
                DispenseError::invalid_configuration(format!("duplicate denomination {d}")).into(),
            );
        }
    }

    if let Some(pair) = denominations.windows(2).find(|w| w[0] <= w[1]) {
        return Err(DispenseError::invalid_configuration(format!(
            "denominations must be strictly decreasing, but {} precedes {}",
            pair[0], pair[1]
        ))
        .into());
    }

    let denominations = denominations
        .iter()
        .map(|&d| Denomination::new(d))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Chain::wire(denominations))
}

impl Chain {
    /// Links already-validated denominations into an arena.
    fn wire(denominations: Vec<Denomination>) -> Self {
        let last = denominations.len().saturating_sub(1);
        let handlers = denominations
            .into_iter()
            .enumerate()
            .map(|(i, d)| Handler::new(d, (i < last).then_some(i + 1)))
            .collect();
        Self { handlers }
    }

    /// The first handler of the chain.
    #[must_use]
    pub fn head(&self) -> &Handler {
        &self.handlers[0]
    }

    /// The handler at arena index `index`.
    #[must_use]
    pub fn handler(&self, index: usize) -> Option<&Handler> {
        self.handlers.get(index)
    }

    /// Number of tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if the chain has no tiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The smallest denomination, held by the tail handler.
    #[must_use]
    pub fn smallest(&self) -> Denomination {
        self.handlers[self.handlers.len() - 1].denomination()
    }

    /// Denominations in dispatch order.
    #[must_use]
    pub fn denominations(&self) -> Vec<u64> {
        self.iter().map(|h| h.denomination().value()).collect()
    }

    /// Walks the chain from the head along the `next` links.
    #[must_use]
    pub const fn iter(&self) -> Links<'_> {
        Links {
            chain: self,
            cursor: Some(0),
        }
    }

    /// Returns a new chain with `denomination` inserted in order.
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InvalidConfiguration`] if `denomination` is
    /// zero or already present.
    pub fn extended(&self, denomination: u64) -> Result<Self> {
        ChainBuilder::from(self)
            .with_denomination(denomination)
            .build()
    }

    /// Dispenses `amount` starting at the head of the chain.
    ///
    /// Each handler takes what it can and forwards the remainder to its
    /// successor. On failure no record is returned, even if upper tiers had
    /// already taken their share.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InsufficientDenominations`] if a nonzero
    /// remainder reaches the tail.
    pub fn dispense(&self, amount: Amount) -> Result<DispenseRecord> {
        let mut record = DispenseRecord::new(amount);
        let mut cursor = Some((0, amount));

        while let Some((index, amount)) = cursor {
            cursor = match self.handlers[index].dispense(amount, &mut record)? {
                Step::Done => None,
                Step::Forward { to, amount } => Some((to, amount)),
            };
        }

        Ok(record)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Handler;
    type IntoIter = Links<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator following `next` links from the head of a [`Chain`].
#[derive(Debug, Clone)]
pub struct Links<'a> {
    chain: &'a Chain,
    cursor: Option<usize>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Handler;

    fn next(&mut self) -> Option<Self::Item> {
        let handler = self.chain.handler(self.cursor?)?;
        self.cursor = handler.next();
        Some(handler)
    }
}

/// Collects denominations in any order and builds a [`Chain`].
///
/// # Examples
///
/// ```
/// use atm_chain::chain::ChainBuilder;
///
/// let chain = ChainBuilder::new()
///     .with_denomination(10)
///     .with_denomination(50)
///     .with_denomination(20)
///     .build()
///     .unwrap();
/// assert_eq!(chain.denominations(), vec![50, 20, 10]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    denominations: Vec<u64>,
}

impl ChainBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            denominations: Vec::new(),
        }
    }

    /// Adds one denomination.
    #[must_use]
    pub fn with_denomination(mut self, denomination: u64) -> Self {
        self.denominations.push(denomination);
        self
    }

    /// Adds several denominations.
    #[must_use]
    pub fn with_denominations(mut self, denominations: impl IntoIterator<Item = u64>) -> Self {
        self.denominations.extend(denominations);
        self
    }

    /// Sorts the collected denominations highest first and builds the chain.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InvalidConfiguration`] if nothing was added,
    /// or if a denomination is zero or appears twice.
    pub fn build(mut self) -> Result<Chain> {
        self.denominations.sort_unstable_by(|a, b| b.cmp(a));
        build_chain(&self.denominations)
    }
}

impl From<&Chain> for ChainBuilder {
    fn from(chain: &Chain) -> Self {
        Self {
            denominations: chain.denominations(),
        }
    }
}
