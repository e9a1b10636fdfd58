//! Prompt line shown while a search or jump is being typed.

use crate::state::Mode;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Input overlay widget.
///
/// Renders `"<label>: <buffer>"` followed by a block cursor. Draws nothing
/// in [`Mode::Normal`].
pub struct InputOverlay<'a> {
    mode: Mode,
    buffer: &'a str,
    palette: Palette,
}

impl<'a> InputOverlay<'a> {
    /// Prompt for `mode` showing `buffer`.
    pub fn new(mode: Mode, buffer: &'a str, palette: Palette) -> Self {
        Self {
            mode,
            buffer,
            palette,
        }
    }
}

/// Text of the prompt line, without the cursor.
pub fn prompt_text(mode: Mode, buffer: &str) -> String {
    format!("{}: {}", mode.label(), buffer)
}

impl Widget for InputOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.mode.accepts_input() || area.is_empty() {
            return;
        }

        let style = self.palette.prompt();
        let line = Line::from(vec![
            Span::styled(prompt_text(self.mode, self.buffer), style),
            Span::styled(" ", style.add_modifier(Modifier::REVERSED)),
        ]);

        Paragraph::new(line).style(style).render(area, buf);
    }
}
