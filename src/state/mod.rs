//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod event_handler;
pub mod filter;
pub mod view_state;

// Re-export for convenience
pub use event_handler::{handle_event, replay, startup_events, Transition, ViewEvent};
pub use filter::{filter, filter_indices};
pub use view_state::{Mode, ViewOptions, ViewState, DEFAULT_RAW_PANEL_HEIGHT};
