//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::integration;
use crate::source::StdinSource;
use crate::state::{ViewEvent, ViewOptions, ViewState};
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::fs::File;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Trailing whitespace and empty lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load fixture into test app with default terminal size (80x24)
    pub fn from_fixture(path: &str) -> Result<Self, TuiError> {
        Self::from_fixture_with_size(path, 80, 24)
    }

    /// Load fixture with custom terminal size
    ///
    /// The fixture is read the same way piped stdin is.
    ///
    /// # Panics
    /// Panics if the fixture contains no valid record.
    pub fn from_fixture_with_size(path: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        let file = File::open(path)?;
        let lines = StdinSource::from_reader(file)
            .read_lines()
            .expect("fixture should be readable");
        let batch = integration::ingest_lines(&lines).expect("fixture should contain records");
        let state = integration::build_state(batch, ViewOptions::default(), None, None);
        Self::from_state(state, width, height)
    }

    /// Build a harness from raw lines.
    pub fn from_lines(lines: &[&str], width: u16, height: u16) -> Result<Self, TuiError> {
        let batch = integration::ingest_lines(lines).expect("lines should contain records");
        let state = integration::build_state(batch, ViewOptions::default(), None, None);
        Self::from_state(state, width, height)
    }

    /// Wrap an existing state.
    pub fn from_state(state: ViewState, width: u16, height: u16) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            app: TuiApp::with_terminal(terminal, state),
            running: true,
        })
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    ///
    /// Characters that are key bindings act as bindings, exactly as when a
    /// user types them.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Read-only view state for assertions.
    pub fn state(&self) -> &ViewState {
        self.app.state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Simulate a terminal resize: the backend shrinks or grows and the
    /// matching resize event reaches the state machine.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.apply(ViewEvent::Resize { width, height });
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
