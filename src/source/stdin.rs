//! Stdin-based log source for piped input.
//!
//! Reads everything that was piped in (`cat access.log | elv`) up to EOF.
//! The viewer does not tail, so the read happens once before the TUI starts.

use crate::model::error::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};

/// Stdin source for piped log input.
pub struct StdinSource<R: Read> {
    reader: BufReader<R>,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    /// This prevents the viewer from blocking on keyboard input when the
    /// user forgot to pipe data.
    pub fn new() -> Result<Self, InputError> {
        if Self::is_tty() {
            return Err(InputError::NoInput);
        }
        Ok(Self {
            reader: BufReader::new(std::io::stdin()),
        })
    }

    /// Check if stdin is a TTY (interactive terminal).
    pub fn is_tty() -> bool {
        std::io::stdin().is_terminal()
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader.
    ///
    /// Bypasses the TTY check.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read all remaining lines until EOF.
    ///
    /// Line terminators (`\n` and `\r\n`) are stripped. A final line without
    /// a trailing newline is still returned.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors, including invalid UTF-8.
    pub fn read_lines(self) -> Result<Vec<String>, InputError> {
        let mut lines = Vec::new();
        for line in self.reader.lines() {
            let line = line?;
            lines.push(line.trim_end_matches('\r').to_string());
        }
        Ok(lines)
    }
}

impl<R: Read> std::fmt::Debug for StdinSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lines_returns_each_line() {
        let data = b"{\"line\": 1}\n{\"line\": 2}\n";
        let source = StdinSource::from_reader(&data[..]);

        let lines = source.read_lines().unwrap();
        assert_eq!(lines, vec!["{\"line\": 1}", "{\"line\": 2}"]);
    }

    #[test]
    fn read_lines_keeps_last_line_without_newline() {
        let data = b"first\nsecond";
        let source = StdinSource::from_reader(&data[..]);

        let lines = source.read_lines().unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn read_lines_strips_carriage_returns() {
        let data = b"a\r\nb\r\n";
        let source = StdinSource::from_reader(&data[..]);

        let lines = source.read_lines().unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn read_lines_returns_empty_for_empty_input() {
        let data = b"";
        let source = StdinSource::from_reader(&data[..]);

        assert!(source.read_lines().unwrap().is_empty());
    }

    #[test]
    fn read_lines_rejects_invalid_utf8() {
        let data = [0xff, 0xfe, b'\n'];
        let source = StdinSource::from_reader(&data[..]);

        assert!(matches!(source.read_lines(), Err(InputError::Io(_))));
    }
}
