//! Glue between the input sources, the parser, and the viewer state.
//!
//! Everything here runs once, before the terminal is taken over.

use crate::model::{AppError, ParseError};
use crate::parser::{self, ParsedBatch};
use crate::source::InputSource;
use crate::state::{replay, startup_events, ViewOptions, ViewState};
use tracing::{info, warn};

/// Parse raw lines, logging every skipped line.
///
/// # Errors
///
/// Returns `ParseError::NoValidRecords` when nothing parsed.
pub fn ingest_lines<S: AsRef<str>>(lines: &[S]) -> Result<ParsedBatch, ParseError> {
    let batch = parser::parse_raw_lines(lines)?;

    for error in &batch.skipped {
        warn!(line = ?error.line(), "Skipped line: {}", error);
    }
    info!(
        records = batch.records.len(),
        skipped = batch.skipped.len(),
        "Input parsed"
    );

    Ok(batch)
}

/// Read the source to the end and parse it.
///
/// # Errors
///
/// Returns `AppError::InputRead` if the source fails and `AppError::Parse`
/// if no record could be parsed.
pub fn load_batch(source: InputSource) -> Result<ParsedBatch, AppError> {
    info!(source = %source.describe(), "Reading input");
    let lines = source.read_lines()?;
    Ok(ingest_lines(&lines)?)
}

/// One-line stderr summary of skipped lines, if there were any.
pub fn skipped_summary(skipped: &[ParseError]) -> Option<String> {
    let first = skipped.first()?;
    let more = skipped.len() - 1;
    Some(if more == 0 {
        format!("elv: skipped 1 line ({})", first)
    } else {
        format!("elv: skipped {} lines (first: {})", skipped.len(), first)
    })
}

/// Build the initial viewer state and apply any startup search and jump.
pub fn build_state(
    batch: ParsedBatch,
    options: ViewOptions,
    search: Option<&str>,
    line: Option<usize>,
) -> ViewState {
    let state = ViewState::new(batch.records).with_options(options);
    replay(state, startup_events(search, line))
}
