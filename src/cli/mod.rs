//! CLI layer for atm-chain.
//!
//! Provides the command-line interface using clap, with commands for
//! dispensing a single amount, running an interactive session, and
//! inspecting the configured chain.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, run_session};
pub use output::{OutputFormat, SessionStats};
pub use parser::{Cli, Commands};
