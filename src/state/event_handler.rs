//! View state transitions (pure).
//!
//! One function, [`handle_event`], takes the current state and a discrete
//! event and returns the next state plus whether the program should stop.
//! No I/O happens here, so every transition is testable without a terminal.

use crate::model::KeyAction;
use crate::state::filter::filter_indices;
use crate::state::view_state::{Mode, ViewState};
use tracing::debug;

/// Discrete input consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// A bound key was pressed.
    Action(KeyAction),
    /// An unbound printable character was typed.
    Input(char),
    /// Backspace was pressed.
    Backspace,
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

/// Outcome of a transition, observed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Continue,
    /// Stop dispatching events and exit.
    Quit,
}

/// Apply one event to the state.
///
/// Bound actions are honored in every mode: moving the selection and
/// opening a prompt work while a prompt is already open, and opening a
/// prompt always starts from an empty buffer. Unbound characters and
/// backspace only edit the buffer while a prompt is open.
pub fn handle_event(mut state: ViewState, event: ViewEvent) -> (ViewState, Transition) {
    match event {
        ViewEvent::Action(KeyAction::Quit) => return (state, Transition::Quit),
        ViewEvent::Action(KeyAction::SelectPrevious) => {
            state.selected = state.selected.saturating_sub(1);
        }
        ViewEvent::Action(KeyAction::SelectNext) => {
            if state.selected + 1 < state.visible.len() {
                state.selected += 1;
            }
        }
        ViewEvent::Action(KeyAction::StartJump) => {
            state = open_prompt(state, Mode::JumpingToLine);
        }
        ViewEvent::Action(KeyAction::StartSearch) => {
            state = open_prompt(state, Mode::Searching);
        }
        ViewEvent::Action(KeyAction::Cancel) => {
            state.mode = Mode::Normal;
            state.input_buffer.clear();
        }
        ViewEvent::Action(KeyAction::Submit) => {
            state = match state.mode {
                Mode::JumpingToLine => commit_jump(state),
                Mode::Searching => commit_search(state),
                Mode::Normal => state,
            };
        }
        ViewEvent::Input(ch) => {
            if state.mode.accepts_input() && !ch.is_control() {
                state.input_buffer.push(ch);
            }
        }
        ViewEvent::Backspace => {
            if state.mode.accepts_input() {
                state.input_buffer.pop();
            }
        }
        ViewEvent::Resize { width, height } => {
            debug!(width, height, "Viewport resized");
            state.viewport_width = width;
            state.viewport_height = height;
        }
    }

    (state, Transition::Continue)
}

/// Apply a sequence of events, stopping early if one of them quits.
pub fn replay(state: ViewState, events: impl IntoIterator<Item = ViewEvent>) -> ViewState {
    let mut state = state;
    for event in events {
        let (next, transition) = handle_event(state, event);
        state = next;
        if transition == Transition::Quit {
            break;
        }
    }
    state
}

/// Events equivalent to the user typing an initial search and jump.
///
/// The search is committed first so that the jump target is looked up in
/// the filtered list, exactly as if the keys had been pressed in that order.
pub fn startup_events(search: Option<&str>, line: Option<usize>) -> Vec<ViewEvent> {
    let mut events = Vec::new();
    if let Some(query) = search {
        events.push(ViewEvent::Action(KeyAction::StartSearch));
        events.extend(query.chars().map(ViewEvent::Input));
        events.push(ViewEvent::Action(KeyAction::Submit));
    }
    if let Some(line) = line {
        events.push(ViewEvent::Action(KeyAction::StartJump));
        events.extend(line.to_string().chars().map(ViewEvent::Input));
        events.push(ViewEvent::Action(KeyAction::Submit));
    }
    events
}

fn open_prompt(mut state: ViewState, mode: Mode) -> ViewState {
    state.mode = mode;
    state.input_buffer.clear();
    state
}

/// Jump to the record with the typed 1-based line number.
///
/// Unparsable or out-of-range input, and line numbers hidden by the current
/// filter, leave the selection where it was. The prompt closes either way.
fn commit_jump(mut state: ViewState) -> ViewState {
    if let Ok(line) = state.input_buffer.trim().parse::<usize>() {
        if (1..=state.all_records.len()).contains(&line) {
            let position = state
                .visible
                .iter()
                .position(|&idx| state.all_records[idx].line_number() == line);
            if let Some(position) = position {
                state.selected = position;
            }
            debug!(line, ?position, "Jump committed");
        }
    }

    state.mode = Mode::Normal;
    state.input_buffer.clear();
    state
}

/// Replace the visible list with the records matching the typed query.
///
/// A search with no results keeps the selection index untouched; rendering
/// handles the empty list.
fn commit_search(mut state: ViewState) -> ViewState {
    state.visible = filter_indices(&state.all_records, &state.input_buffer);
    if !state.visible.is_empty() {
        state.selected = 0;
    }
    debug!(
        query = %state.input_buffer,
        matches = state.visible.len(),
        "Search committed"
    );

    state.mode = Mode::Normal;
    state.input_buffer.clear();
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "event_handler_tests.rs"]
mod tests;
