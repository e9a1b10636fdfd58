//! TUI rendering and terminal management (impure shell)
//!
//! [`render`] turns a [`ViewState`] into a frame buffer and touches nothing
//! else. [`TuiApp`] owns the terminal, feeds key and resize events through
//! the pure state machine, and redraws after each one.

mod detail_panel;
mod helpers;
mod input_overlay;
mod layout;
mod list_panel;
mod raw_panel;
mod styles;

pub use detail_panel::{detail_lines, display_value, FieldGroup, DETAIL_TITLE, FIELD_GROUPS};
pub use helpers::truncate;
pub use input_overlay::prompt_text;
pub use layout::{compute_layout, fit_raw_height, PanelLayout};
pub use list_panel::{preview, visible_window, LIST_TITLE};
pub use raw_panel::{pretty_json, RAW_TITLE};
pub use styles::{severity_for_flags, Palette, Severity};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{handle_event, Transition, ViewEvent, ViewState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use detail_panel::DetailPanel;
use input_overlay::InputOverlay;
use list_panel::ListPanel;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
    Terminal,
};
use raw_panel::RawPanel;
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Shown instead of the panels when nothing is visible.
pub const EMPTY_MESSAGE: &str = "No valid logs found. Press 'q' to quit.";

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

// ===== Pure rendering =====

/// Header line for a non-empty visible list.
pub fn header_text(state: &ViewState) -> String {
    format!(
        "Log {} of {} | Press 's' to search, '/' to jump, 'q' to quit",
        state.selected_index() + 1,
        state.visible_len()
    )
}

/// The whole screen as a widget.
pub struct LogViewer<'a> {
    state: &'a ViewState,
}

impl<'a> LogViewer<'a> {
    /// Screen widget for `state`.
    pub fn new(state: &'a ViewState) -> Self {
        Self { state }
    }
}

impl Widget for LogViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let options = state.options();
        let palette = Palette::new(options.colors_enabled);
        let mode = state.mode();

        let raw_lines = state
            .selected_record()
            .map_or(0, |record| pretty_json(record.raw_text()).lines().count());
        let raw_height = fit_raw_height(area.height, options.raw_panel_height, raw_lines);
        let layout = compute_layout(area.width, area.height, raw_height, mode.accepts_input());
        let place = |rect: Rect| Rect::new(area.x + rect.x, area.y + rect.y, rect.width, rect.height);

        match state.selected_record() {
            None => {
                Paragraph::new(Line::styled(EMPTY_MESSAGE, palette.error()))
                    .render(place(layout.header), buf);
            }
            Some(record) => {
                Paragraph::new(Line::styled(header_text(state), palette.header()))
                    .render(place(layout.header), buf);
                ListPanel::new(state, palette).render(place(layout.list), buf);
                RawPanel::new(record, palette).render(place(layout.raw), buf);
                DetailPanel::new(record, palette).render(place(layout.detail), buf);
            }
        }

        if let Some(overlay) = layout.overlay {
            InputOverlay::new(mode, state.input_buffer(), palette).render(place(overlay), buf);
        }
    }
}

/// Render a state into a fresh buffer the size of its viewport.
pub fn render(state: &ViewState) -> Buffer {
    let (width, height) = state.viewport();
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    LogViewer::new(state).render(area, &mut buf);
    buf
}

// ===== Input mapping =====

/// Translate a key press into a state-machine event.
///
/// Ctrl+C always quits. Bound keys become actions; backspace and unbound
/// printable characters become edits, which the state machine ignores
/// outside a prompt. Releases and repeats are dropped.
pub fn key_to_event(bindings: &KeyBindings, key: KeyEvent) -> Option<ViewEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ViewEvent::Action(KeyAction::Quit));
    }

    if let Some(action) = bindings.get(key) {
        return Some(ViewEvent::Action(action));
    }

    match key.code {
        KeyCode::Backspace => Some(ViewEvent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(ViewEvent::Input(ch))
        }
        _ => None,
    }
}

// ===== Terminal shell =====

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: ViewState,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(state: ViewState) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, state))
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an already initialized terminal.
    ///
    /// The state's viewport is set from the terminal size when it is known.
    pub fn with_terminal(terminal: Terminal<B>, state: ViewState) -> Self {
        let state = match terminal.size() {
            Ok(size) if size.width > 0 && size.height > 0 => {
                state.with_viewport(size.width, size.height)
            }
            _ => state,
        };

        Self {
            terminal,
            state,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events and redraws after each one that maps to a
    /// transition. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let view_event = match event::read()? {
                Event::Key(key) => key_to_event(&self.key_bindings, key),
                Event::Resize(width, height) => Some(ViewEvent::Resize { width, height }),
                _ => None,
            };

            let Some(view_event) = view_event else {
                continue;
            };

            if self.apply(view_event) == Transition::Quit {
                info!("Quit requested");
                return Ok(());
            }
            self.draw()?;
        }
    }

    /// Feed one event through the state machine.
    pub fn apply(&mut self, event: ViewEvent) -> Transition {
        let state = std::mem::take(&mut self.state);
        let (next, transition) = handle_event(state, event);
        self.state = next;
        transition
    }

    /// Handle a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key_to_event(&self.key_bindings, key) {
            Some(event) => self.apply(event) == Transition::Quit,
            None => false,
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        self.terminal.draw(|frame| {
            frame.render_widget(LogViewer::new(state), frame.area());
        })?;
        debug!(mode = ?state.mode(), selected = state.selected_index(), "Frame drawn");
        Ok(())
    }

    /// Underlying terminal (test-only accessor)
    #[cfg(test)]
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    #[cfg(test)]
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Take over the terminal, run the viewer until the user quits, and restore
/// the terminal on every exit path.
///
/// Logging must be initialized by caller before calling this function.
pub fn run_with_state(state: ViewState) -> Result<(), TuiError> {
    let result = TuiApp::new(state).and_then(|mut app| app.run());

    // Always restore terminal state
    let restored = restore_terminal();
    result?;
    restored
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
