//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::chain::Chain;
use crate::core::{Amount, DispenseRecord, Tranche};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Counters for an interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Amounts read.
    pub requests: usize,
    /// Requests that dispensed successfully.
    pub dispensed: usize,
    /// Requests that were rejected.
    pub rejected: usize,
}

#[derive(Serialize)]
struct RecordOutput<'a> {
    amount: Amount,
    tranches: &'a [Tranche],
    notes: u64,
}

impl<'a> From<&'a DispenseRecord> for RecordOutput<'a> {
    fn from(record: &'a DispenseRecord) -> Self {
        Self {
            amount: record.amount(),
            tranches: record.tranches(),
            notes: record.notes(),
        }
    }
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: String,
}

impl<'a> From<&'a Error> for ErrorOutput<'a> {
    fn from(err: &'a Error) -> Self {
        Self {
            error: ErrorBody {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Formats a dispense record.
pub fn format_record(record: &DispenseRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_record_text(record)),
        OutputFormat::Json => format_json(&RecordOutput::from(record)),
    }
}

fn format_record_text(record: &DispenseRecord) -> String {
    if record.is_empty() {
        return "Nothing to dispense\n".to_string();
    }

    let mut output = String::new();
    for tranche in record {
        let _ = writeln!(output, "{tranche}");
    }
    output
}

/// Formats the configured chain.
pub fn format_chain(chain: &Chain, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Dispense chain ({} tiers):", chain.len());
            for (index, handler) in chain.iter().enumerate() {
                match handler.next() {
                    Some(next) => {
                        let _ = writeln!(
                            output,
                            "  [{index}] {}$ -> [{next}]",
                            handler.denomination()
                        );
                    }
                    None => {
                        let _ = writeln!(output, "  [{index}] {}$ (tail)", handler.denomination());
                    }
                }
            }
            Ok(output)
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ChainOutput {
                denominations: Vec<u64>,
                smallest: u64,
            }
            format_json(&ChainOutput {
                denominations: chain.denominations(),
                smallest: chain.smallest().value(),
            })
        }
    }
}

/// Formats one session entry.
///
/// JSON entries are compact, one object per line, so a session can be
/// consumed as newline-delimited JSON.
pub fn format_session_entry(
    result: &Result<DispenseRecord>,
    format: OutputFormat,
) -> Result<String> {
    match (result, format) {
        (Ok(record), OutputFormat::Text) => Ok(format_record_text(record)),
        (Err(err), OutputFormat::Text) => Ok(format!("Error: {err}\n")),
        (Ok(record), OutputFormat::Json) => format_json_line(&RecordOutput::from(record)),
        (Err(err), OutputFormat::Json) => format_json_line(&ErrorOutput::from(err)),
    }
}

/// Formats the closing summary of a session.
pub fn format_session_summary(stats: &SessionStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Session ended: {} requests, {} dispensed, {} rejected\n",
            stats.requests, stats.dispensed, stats.rejected
        )),
        OutputFormat::Json => format_json_line(stats),
    }
}

/// Formats an error for display.
///
/// Never fails: if JSON encoding breaks, the plain message is returned.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            format_json(&ErrorOutput::from(err)).unwrap_or_else(|_| err.to_string())
        }
    }
}

/// Formats a value as pretty JSON.
fn format_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(crate::error::CommandError::from)?;
    json.push('\n');
    Ok(json)
}

/// Formats a value as a single JSON line.
fn format_json_line<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string(value).map_err(crate::error::CommandError::from)?;
    json.push('\n');
    Ok(json)
}
