//! Scrolling list of visible records.

use crate::model::LogRecord;
use crate::state::ViewState;
use crate::view::helpers::truncate;
use crate::view::styles::{severity_for_flags, Palette};
use chrono::DateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use serde_json::Value;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Title of the list panel.
pub const LIST_TITLE: &str = "Log List (use ↑↓ to navigate)";

const CURSOR: &str = "▶ ";
const NO_CURSOR: &str = "  ";

/// List panel widget.
pub struct ListPanel<'a> {
    state: &'a ViewState,
    palette: Palette,
}

impl<'a> ListPanel<'a> {
    /// List panel over the visible records of `state`.
    pub fn new(state: &'a ViewState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for ListPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(Span::styled(LIST_TITLE, self.palette.header()));
        let inner = block.inner(area);

        let selected = self.state.selected_index();
        let window = visible_window(selected, self.state.visible_len(), inner.height as usize);

        let lines: Vec<Line> = window
            .filter_map(|pos| self.state.visible_record(pos).map(|record| (pos, record)))
            .map(|(pos, record)| {
                let is_selected = pos == selected;
                let text = row_text(record, is_selected, inner.width as usize);
                let base = if is_selected {
                    self.palette.selected_row()
                } else {
                    self.palette.row()
                };
                let severity = record
                    .field("response_flags")
                    .and_then(Value::as_str)
                    .and_then(severity_for_flags);
                Line::styled(text, self.palette.with_severity(base, severity))
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Range of list positions to draw: `capacity` rows centered on `selected`,
/// shifted up when the end of the list is reached.
pub fn visible_window(selected: usize, len: usize, capacity: usize) -> Range<usize> {
    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(len);
    if end - start.min(end) < capacity {
        start = end.saturating_sub(capacity);
    }
    start..end
}

/// Cursor marker, line number, and preview, fitted to `width` columns.
pub fn row_text(record: &LogRecord, selected: bool, width: usize) -> String {
    let cursor = if selected { CURSOR } else { NO_CURSOR };
    let prefix = format!("{}{:>3}:", cursor, record.line_number());
    let room = width.saturating_sub(prefix.width() + 1);
    format!("{} {}", prefix, preview(record, room))
}

/// One-line summary of a record.
///
/// Built from the start time (as `HH:MM:SS`), `[response_code]`, flags,
/// method and path, skipping whatever is absent. Falls back to the raw text
/// when none of those are present.
pub fn preview(record: &LogRecord, max_width: usize) -> String {
    let mut parts = Vec::new();

    if let Some(Value::String(start)) = record.field("start_time") {
        if let Ok(time) = DateTime::parse_from_rfc3339(start) {
            parts.push(time.format("%H:%M:%S").to_string());
        }
    }

    if let Some(Value::Number(code)) = record.field("response_code") {
        let code = code
            .as_i64()
            .or_else(|| code.as_f64().map(|f| f as i64))
            .map(|c| c.to_string())
            .unwrap_or_else(|| code.to_string());
        parts.push(format!("[{}]", code));
    }

    if let Some(Value::String(flags)) = record.field("response_flags") {
        if !flags.is_empty() {
            parts.push(flags.clone());
        }
    }

    for name in ["method", "path"] {
        if let Some(Value::String(text)) = record.field(name) {
            if !text.is_empty() && text != "null" {
                parts.push(text.clone());
            }
        }
    }

    if parts.is_empty() {
        truncate(record.raw_text(), max_width)
    } else {
        truncate(&parts.join(" "), max_width)
    }
}
