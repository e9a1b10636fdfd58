//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod key_action;
pub mod log_record;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use key_action::KeyAction;
pub use log_record::{value_to_string, LogRecord};
