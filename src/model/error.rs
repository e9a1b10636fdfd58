//! Error types for the elv application.
//!
//! One `thiserror` enum per failure domain, composed into [`AppError`] via
//! `From` so `?` works at every boundary.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - stdin / container log acquisition failures
//!   - [`ParseError`] - JSON ingestion failures
//!
//! # Recovery Strategy
//!
//! Individual malformed lines are **non-fatal**: they are collected, logged and
//! skipped, and the viewer starts with whatever parsed. Input errors and an
//! empty batch are fatal and reported before the TUI ever starts. Terminal
//! failures are [`crate::view::TuiError`].

use std::process::ExitStatus;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to acquire raw log lines.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to turn raw lines into records.
    #[error("Failed to parse logs: {0}")]
    Parse(#[from] ParseError),
}

/// Errors encountered when acquiring raw log lines.
#[derive(Debug, Error)]
pub enum InputError {
    /// Stdin is a terminal and no container source was configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use elv::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("pipe logs to stdin"));
    /// ```
    #[error("No input source: pipe logs to stdin or set pod, namespace and container")]
    NoInput,

    /// The log command ran but exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    Command {
        /// Command line that was run, for display.
        command: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing JSON log lines.
///
/// `InvalidJson` and `NotJson` describe single skipped lines; only
/// `NoValidRecords` aborts startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line looked like a JSON object but failed to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use elv::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson { line: 3, message: "EOF".to_string() };
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based input line.
        line: usize,
        /// serde_json error message.
        message: String,
    },

    /// A line was not a JSON object at all and was skipped.
    #[error("Skipping non-JSON log line {line}")]
    NotJson {
        /// 1-based input line.
        line: usize,
    },

    /// The input contained no usable record.
    #[error("No valid JSON logs found")]
    NoValidRecords,
}

impl ParseError {
    /// Input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::InvalidJson { line, .. } | ParseError::NotJson { line } => Some(*line),
            ParseError::NoValidRecords => None,
        }
    }
}
