//! A single link of the dispense chain.

use crate::core::{Amount, Denomination, DispenseRecord};
use crate::error::{DispenseError, Result};
use tracing::debug;

/// What the chain should do after a handler has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing is left to dispense.
    Done,
    /// Hand `amount` to the handler at index `to`.
    Forward {
        /// Arena index of the next handler.
        to: usize,
        /// Remainder to dispense.
        amount: Amount,
    },
}

/// One denomination tier.
///
/// Handlers live in the chain's arena and refer to their successor by index,
/// so a handler never owns or mutates another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler {
    denomination: Denomination,
    next: Option<usize>,
}

impl Handler {
    pub(crate) const fn new(denomination: Denomination, next: Option<usize>) -> Self {
        Self { denomination, next }
    }

    /// The denomination this handler dispenses.
    #[must_use]
    pub const fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Arena index of the next handler, `None` for the tail.
    #[must_use]
    pub const fn next(&self) -> Option<usize> {
        self.next
    }

    /// Returns `true` if this is the last handler of the chain.
    #[must_use]
    pub const fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Dispenses as many notes of this denomination as fit into `amount`.
    ///
    /// The tranche (if any) is appended to `record` and the remainder is
    /// returned as a [`Step::Forward`] to the next handler. An amount smaller
    /// than the denomination is forwarded unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DispenseError::InsufficientDenominations`] if this is the
    /// tail and a nonzero remainder is left over.
    pub fn dispense(&self, amount: Amount, record: &mut DispenseRecord) -> Result<Step> {
        if amount.is_zero() {
            return Ok(Step::Done);
        }

        let (count, remainder) = amount.split(self.denomination);
        if count > 0 {
            debug!(
                denomination = self.denomination.value(),
                count,
                remainder = remainder.value(),
                "dispensing tier"
            );
            record.push(self.denomination, count);
        }

        if remainder.is_zero() {
            return Ok(Step::Done);
        }

        match self.next {
            Some(to) => Ok(Step::Forward {
                to,
                amount: remainder,
            }),
            None => Err(DispenseError::InsufficientDenominations {
                remainder: remainder.value(),
                smallest: self.denomination.value(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn handler(value: u64, next: Option<usize>) -> Handler {
        Handler::new(Denomination::new(value).unwrap(), next)
    }

    #[test]
    fn test_dispense_forwards_remainder() {
        let h = handler(50, Some(1));
        let mut record = DispenseRecord::new(Amount::new(80));
        let step = h.dispense(Amount::new(80), &mut record).unwrap();
        assert_eq!(
            step,
            Step::Forward {
                to: 1,
                amount: Amount::new(30)
            }
        );
        assert_eq!(record.pairs(), vec![(50, 1)]);
    }

    #[test]
    fn test_dispense_below_denomination_forwards_unchanged() {
        let h = handler(50, Some(1));
        let mut record = DispenseRecord::new(Amount::new(30));
        let step = h.dispense(Amount::new(30), &mut record).unwrap();
        assert_eq!(
            step,
            Step::Forward {
                to: 1,
                amount: Amount::new(30)
            }
        );
        assert!(record.is_empty());
    }

    #[test]
    fn test_dispense_exact_is_done() {
        let h = handler(20, Some(2));
        let mut record = DispenseRecord::new(Amount::new(60));
        let step = h.dispense(Amount::new(60), &mut record).unwrap();
        assert_eq!(step, Step::Done);
        assert_eq!(record.pairs(), vec![(20, 3)]);
    }

    #[test]
    fn test_dispense_zero_is_done() {
        let h = handler(10, None);
        let mut record = DispenseRecord::new(Amount::ZERO);
        assert_eq!(h.dispense(Amount::ZERO, &mut record).unwrap(), Step::Done);
        assert!(record.is_empty());
    }

    #[test]
    fn test_tail_with_remainder_fails() {
        let h = handler(10, None);
        let mut record = DispenseRecord::new(Amount::new(15));
        let err = h.dispense(Amount::new(15), &mut record).unwrap_err();
        assert!(matches!(
            err,
            Error::Dispense(DispenseError::InsufficientDenominations {
                remainder: 5,
                smallest: 10
            })
        ));
    }

    #[test]
    fn test_tail_below_denomination_fails() {
        let h = handler(10, None);
        let mut record = DispenseRecord::new(Amount::new(5));
        assert!(h.dispense(Amount::new(5), &mut record).is_err());
        assert!(record.is_empty());
    }

    #[test]
    fn test_accessors() {
        let h = handler(20, Some(2));
        assert_eq!(h.denomination().value(), 20);
        assert_eq!(h.next(), Some(2));
        assert!(!h.is_tail());
        assert!(handler(10, None).is_tail());
    }
}
