//! Error types for dispenser operations.
//!
//! This module provides the error hierarchy using `thiserror` for chain
//! assembly, request dispatch, and CLI commands.

use thiserror::Error;

/// Result type alias for dispenser operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Chain assembly or dispatch errors.
    #[error("dispense error: {0}")]
    Dispense(#[from] DispenseError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// I/O errors (terminal reads and writes).
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Returns a stable snake_case tag identifying the error kind.
    ///
    /// Used by machine-readable output so callers can branch without
    /// parsing messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Dispense(e) => e.kind(),
            Self::Command(_) => "command",
            Self::Io(_) => "io",
        }
    }
}

/// Errors raised while building a chain or dispensing an amount.
///
/// None of these are transient: each one describes bad caller input, so
/// nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispenseError {
    /// The chain was built from an empty, zero-valued, duplicated, or
    /// non-decreasing denomination list.
    #[error("invalid chain configuration: {reason}")]
    InvalidConfiguration {
        /// Reason the configuration was rejected.
        reason: String,
    },

    /// The requested amount was rejected before any note was dispensed.
    #[error("invalid amount {amount}: {reason}")]
    InvalidAmount {
        /// The amount as the caller supplied it.
        amount: String,
        /// Reason the amount was rejected.
        reason: String,
    },

    /// A nonzero remainder reached the tail handler.
    #[error("cannot dispense remainder {remainder} with smallest denomination {smallest}")]
    InsufficientDenominations {
        /// Remainder left at the tail of the chain.
        remainder: u64,
        /// Denomination of the tail handler.
        smallest: u64,
    },
}

impl DispenseError {
    /// Returns a stable snake_case tag identifying the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => "invalid_configuration",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InsufficientDenominations { .. } => "insufficient_denominations",
        }
    }

    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_amount(amount: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.into(),
        }
    }
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
