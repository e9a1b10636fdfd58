//! JSON log ingestion.
//!
//! Turns raw text lines into [`LogRecord`]s. Two input shapes are accepted:
//! a single top-level JSON array of objects (possibly spread over many lines),
//! or one JSON object per line. Lines that cannot be used are reported back
//! as non-fatal [`ParseError`]s next to the records that did parse.

use crate::model::{LogRecord, ParseError};
use serde_json::{Map, Value};

/// Result of ingesting a batch of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBatch {
    /// Records in input order, with strictly increasing line numbers.
    pub records: Vec<LogRecord>,
    /// Lines that were skipped, in input order.
    pub skipped: Vec<ParseError>,
}

/// Parse a single line as a JSON object.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` when the line is not a JSON object.
pub fn parse_line(line: &str, line_number: usize) -> Result<LogRecord, ParseError> {
    let fields: Map<String, Value> =
        serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
            line: line_number,
            message: e.to_string(),
        })?;
    Ok(LogRecord::new(line, fields, line_number))
}

/// Parse a batch of raw lines into records.
///
/// The whole input is first tried as one JSON array of objects; each element
/// then gets `line_number = index + 1`. Otherwise every line shaped like
/// `{...}` is parsed on its own and keeps its 1-based input line number.
/// Blank lines are ignored; other lines are reported in `skipped`.
///
/// # Errors
///
/// Returns `ParseError::NoValidRecords` if nothing could be parsed.
pub fn parse_raw_lines<S: AsRef<str>>(lines: &[S]) -> Result<ParsedBatch, ParseError> {
    if let Some(records) = parse_as_array(lines) {
        if records.is_empty() {
            return Err(ParseError::NoValidRecords);
        }
        return Ok(ParsedBatch {
            records,
            skipped: Vec::new(),
        });
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;
        let line = line.as_ref();
        let shape = line.trim();

        if shape.is_empty() {
            continue;
        }

        if shape.starts_with('{') && shape.ends_with('}') {
            match parse_line(line, line_number) {
                Ok(record) => records.push(record),
                Err(err) => skipped.push(err),
            }
        } else {
            skipped.push(ParseError::NotJson { line: line_number });
        }
    }

    if records.is_empty() {
        return Err(ParseError::NoValidRecords);
    }

    Ok(ParsedBatch { records, skipped })
}

/// Try the whole input as a top-level array of objects.
fn parse_as_array<S: AsRef<str>>(lines: &[S]) -> Option<Vec<LogRecord>> {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");

    if !joined.trim_start().starts_with('[') {
        return None;
    }

    let entries: Vec<Map<String, Value>> = serde_json::from_str(&joined).ok()?;

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(idx, fields)| {
            let raw = Value::Object(fields.clone()).to_string();
            LogRecord::new(raw, fields, idx + 1)
        })
        .collect();

    Some(records)
}
