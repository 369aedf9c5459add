//! # atm-chain
//!
//! Chain-of-responsibility note dispenser.
//!
//! A requested amount is passed down an ordered chain of denomination
//! handlers, highest first. Each handler dispenses as many of its own notes
//! as fit and forwards the remainder to the next one.
//!
//! ## Features
//!
//! - **Immutable chain**: handlers live in an arena and link by index, so a
//!   chain is validated once and can never be cyclic or half-wired
//! - **Checked requests**: negative amounts, amounts that are not a multiple
//!   of the smallest denomination, and undispensable remainders are errors
//! - **CLI**: single dispense, interactive session, text or JSON output
//!
//! ```
//! use atm_chain::Dispatcher;
//!
//! let dispatcher = Dispatcher::from_denominations(&[50, 20, 10]).unwrap();
//! let record = dispatcher.dispense_request(80).unwrap();
//! assert_eq!(record.pairs(), vec![(50, 1), (20, 1), (10, 1)]);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{CommandError, DispenseError, Error, Result};

// Re-export core domain types
pub use core::{Amount, Denomination, DispenseRecord, Tranche};

// Re-export chain types
pub use chain::{Chain, ChainBuilder, DEFAULT_DENOMINATIONS, Dispatcher, Handler, build_chain};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
