//! Log input sources.
//!
//! This module provides the sources of raw log lines:
//! - Stdin for piped input
//! - Container logs fetched once through kubectl
//! - Unified InputSource enum for both

use crate::model::error::InputError;

pub mod container;
pub mod stdin;

pub use container::{ContainerSource, ContainerTarget};
pub use stdin::StdinSource;

/// Unified input source for raw log lines.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Piped stdin, read to EOF.
    Stdin(StdinSource<std::io::Stdin>),
    /// Container logs, fetched once.
    Container(ContainerSource),
}

impl InputSource {
    /// Read every available line from the source.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O or command failures.
    pub fn read_lines(self) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::Stdin(s) => s.read_lines(),
            InputSource::Container(c) => c.read_lines(),
        }
    }

    /// Short human-readable description, used in logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin(_) => "stdin".to_string(),
            InputSource::Container(c) => {
                let t = c.target();
                format!("container {}/{}/{}", t.namespace, t.pod, t.container)
            }
        }
    }
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. If stdin is piped: use StdinSource
/// 2. Else if a container target is configured: use ContainerSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if stdin is a terminal and no container
/// target is available.
pub fn detect_input_source(
    container: Option<ContainerTarget>,
    kubectl: &str,
) -> Result<InputSource, InputError> {
    select_source(StdinSource::is_tty(), container, kubectl)
}

fn select_source(
    stdin_is_tty: bool,
    container: Option<ContainerTarget>,
    kubectl: &str,
) -> Result<InputSource, InputError> {
    if !stdin_is_tty {
        return Ok(InputSource::Stdin(StdinSource::new()?));
    }

    match container {
        Some(target) => Ok(InputSource::Container(ContainerSource::new(target, kubectl))),
        None => Err(InputError::NoInput),
    }
}
