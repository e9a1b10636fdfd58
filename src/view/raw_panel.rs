//! Raw JSON of the selected record.

use crate::model::LogRecord;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use serde_json::Value;

/// Title of the raw panel.
pub const RAW_TITLE: &str = "Raw Log";

/// Raw panel widget.
pub struct RawPanel<'a> {
    record: &'a LogRecord,
    palette: Palette,
}

impl<'a> RawPanel<'a> {
    /// Raw panel for `record`.
    pub fn new(record: &'a LogRecord, palette: Palette) -> Self {
        Self { record, palette }
    }
}

impl Widget for RawPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .title(Span::styled(RAW_TITLE, self.palette.header()));

        let lines: Vec<Line> = pretty_json(self.record.raw_text())
            .lines()
            .map(|line| Line::styled(line.to_string(), self.palette.value()))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Pretty-print `raw` with two-space indentation, or return it verbatim if
/// it is not valid JSON.
pub fn pretty_json(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| raw.to_string())
}
