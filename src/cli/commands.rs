//! CLI command implementations.
//!
//! Contains the logic behind each CLI command.

use crate::chain::Dispatcher;
use crate::cli::output::{
    OutputFormat, SessionStats, format_chain, format_record, format_session_entry,
    format_session_summary,
};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Prompt written before each session read.
pub const SESSION_PROMPT: &str = "Enter amount to dispense";

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success. The session command writes to
/// stdout as it goes and returns an empty string.
///
/// # Errors
///
/// Returns an error if the chain configuration is invalid or the command
/// fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let dispatcher = cli.dispatcher()?;
    debug!(denominations = ?dispatcher.chain().denominations(), "chain ready");

    match &cli.command {
        Commands::Dispense { amount } => cmd_dispense(&dispatcher, *amount, format),
        Commands::Session => cmd_session(&dispatcher, format),
        Commands::Chain => format_chain(dispatcher.chain(), format),
    }
}

fn cmd_dispense(dispatcher: &Dispatcher, amount: i64, format: OutputFormat) -> Result<String> {
    let record = dispatcher.dispense_request(amount)?;
    format_record(&record, format)
}

fn cmd_session(dispatcher: &Dispatcher, format: OutputFormat) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = run_session(dispatcher, stdin.lock(), &mut out, format)?;
    out.write_all(format_session_summary(&stats, format)?.as_bytes())?;
    Ok(String::new())
}

/// Runs an interactive dispense loop.
///
/// Reads one amount per line from `input` and writes the dispensed notes or
/// the error to `output`. Rejected amounts do not end the session; it stops
/// at EOF or on a `quit`/`exit` line. Blank lines are skipped. The prompt is
/// only written in text mode.
///
/// # Errors
///
/// Returns an error only if reading or writing fails.
pub fn run_session<R: BufRead, W: Write>(
    dispatcher: &Dispatcher,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();
    let mut lines = input.lines();

    loop {
        if format == OutputFormat::Text {
            writeln!(output, "{SESSION_PROMPT}")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| {
            CommandError::ExecutionFailed(format!("Failed to read from stdin: {e}"))
        })?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        stats.requests += 1;
        let result = dispatcher.parse_request(line);
        if result.is_ok() {
            stats.dispensed += 1;
        } else {
            stats.rejected += 1;
        }
        output.write_all(format_session_entry(&result, format)?.as_bytes())?;
    }

    debug!(
        requests = stats.requests,
        dispensed = stats.dispensed,
        rejected = stats.rejected,
        "session ended"
    );
    Ok(stats)
}
