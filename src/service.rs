//! Batch driver
//!
//! Reads a JSON array of commands, runs it through a [`MatcherEngine`], and
//! writes the trade log and residual book snapshots. Either the whole
//! command stream is consumed and both outputs are produced, or the run
//! fails and nothing is written.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::Config;
use crate::engine::{EngineError, MatcherEngine};
use crate::models::{MatchReport, RawCommand};

/// Errors surfaced by the batch driver
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a well-formed array of commands
    #[error("malformed command stream: {0}")]
    MalformedCommand(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Run an already-parsed command batch through a fresh engine
pub fn process_commands(commands: &[RawCommand]) -> Result<MatchReport, EngineError> {
    let mut engine = MatcherEngine::new();
    for cmd in commands {
        engine.ingest(cmd)?;
    }
    Ok(engine.finish())
}

/// Read and process a command file
pub fn process_file(path: &Path) -> Result<MatchReport, ServiceError> {
    let raw = fs::read_to_string(path)?;
    let commands: Vec<RawCommand> = serde_json::from_str(&raw)?;
    tracing::debug!(count = commands.len(), path = %path.display(), "parsed command stream");
    Ok(process_commands(&commands)?)
}

/// Write the report to the configured output paths, pretty-printed
pub fn write_report(report: &MatchReport, config: &Config) -> Result<(), ServiceError> {
    fs::write(
        &config.orderbook_path,
        serde_json::to_string_pretty(&report.orderbooks)?,
    )?;
    fs::write(
        &config.trades_path,
        serde_json::to_string_pretty(&report.trades)?,
    )?;
    Ok(())
}

/// Full batch run: input file in, both output files out
pub fn run(config: &Config) -> Result<MatchReport, ServiceError> {
    let report = process_file(&config.input_path)?;
    write_report(&report, config)?;
    tracing::info!(
        orderbooks = report.orderbooks.len(),
        trades = report.trades.len(),
        "run complete"
    );
    Ok(report)
}
