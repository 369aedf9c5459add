//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::chain::{DEFAULT_DENOMINATIONS, Dispatcher};
use crate::error::Result;
use clap::{Parser, Subcommand};

/// atm-chain: dispense an amount through a chain of denomination handlers.
///
/// Each handler dispenses as many notes of its own denomination as fit and
/// forwards the remainder to the next, smaller one.
#[derive(Parser, Debug)]
#[command(name = "atm-chain")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Denominations, highest first, comma separated.
    ///
    /// Defaults to 50,20,10.
    #[arg(
        short,
        long,
        env = "ATM_DENOMINATIONS",
        value_delimiter = ',',
        global = true
    )]
    pub denominations: Vec<u64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dispense a single amount.
    Dispense {
        /// Amount to dispense.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Prompt for amounts on stdin until EOF, `quit` or `exit`.
    #[command(alias = "repl")]
    Session,

    /// Show the configured chain in dispatch order.
    Chain,
}

impl Cli {
    /// Returns the configured denominations, using the default if none were given.
    #[must_use]
    pub fn get_denominations(&self) -> Vec<u64> {
        if self.denominations.is_empty() {
            DEFAULT_DENOMINATIONS.to_vec()
        } else {
            self.denominations.clone()
        }
    }

    /// Builds the dispatcher for the configured denominations.
    pub fn dispatcher(&self) -> Result<Dispatcher> {
        Dispatcher::from_denominations(&self.get_denominations())
    }
}
