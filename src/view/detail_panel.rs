//! Grouped, annotated fields of the selected record.
//!
//! Which fields are shown, and in which order, is decided by the
//! [`FIELD_GROUPS`] table alone; [`detail_lines`] is the one routine that
//! renders any group.

use crate::annotate::explain_field;
use crate::model::LogRecord;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

/// Title of the detail panel.
pub const DETAIL_TITLE: &str = "Parsed Log Details";

/// Placeholder for a missing value.
pub const MISSING: &str = "-";

/// Shown under a group heading when none of its fields are present.
pub const NO_DATA: &str = "No data available";

/// Column width for field names.
const NAME_WIDTH: usize = 30;

/// A named group of fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    /// Group heading.
    pub name: &'static str,
    /// Field names, in display order.
    pub fields: &'static [&'static str],
}

/// Groups shown in the detail panel, top to bottom.
pub const FIELD_GROUPS: &[FieldGroup] = &[
    FieldGroup {
        name: "Request Info",
        fields: &[
            "start_time",
            "method",
            "protocol",
            "authority",
            "path",
            "request_id",
            "user_agent",
            "client_ip",
            "x_forwarded_for",
        ],
    },
    FieldGroup {
        name: "Response Info",
        fields: &[
            "response_code",
            "response_code_details",
            "response_flags",
            "duration",
            "bytes_sent",
            "bytes_received",
        ],
    },
    FieldGroup {
        name: "Upstream Info",
        fields: &[
            "upstream_cluster",
            "upstream_host",
            "upstream_local_address",
            "upstream_service_time",
            "upstream_transport_failure_reason",
        ],
    },
    FieldGroup {
        name: "Downstream Info",
        fields: &[
            "downstream_local_address",
            "downstream_remote_address",
            "requested_server_name",
            "route_name",
        ],
    },
];

/// Detail panel widget.
pub struct DetailPanel<'a> {
    record: &'a LogRecord,
    palette: Palette,
}

impl<'a> DetailPanel<'a> {
    /// Detail panel for `record`.
    pub fn new(record: &'a LogRecord, palette: Palette) -> Self {
        Self { record, palette }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .padding(Padding::horizontal(1))
            .title(Span::styled(DETAIL_TITLE, self.palette.header()));

        Paragraph::new(detail_lines(self.record, self.palette))
            .block(block)
            .render(area, buf);
    }
}

/// Displayable value of `field`, or `None` when it is missing, null, empty,
/// or the literal string `"null"`.
pub fn display_value(record: &LogRecord, field: &str) -> Option<String> {
    let text = record.field_string(field)?;
    (!text.is_empty() && text != "null").then_some(text)
}

/// Every line of the panel body, group by group.
pub fn detail_lines(record: &LogRecord, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for group in FIELD_GROUPS {
        lines.push(Line::styled(group.name, palette.header()));

        let mut has_data = false;
        for &field in group.fields {
            let mut spans = vec![
                Span::styled(format!("{:<width$}", field, width = NAME_WIDTH), palette.field_name()),
                Span::raw(": "),
            ];
            match display_value(record, field) {
                Some(value) => {
                    has_data = true;
                    let explanation = explain_field(field, &value);
                    spans.push(Span::styled(value, palette.value()));
                    if let Some(explanation) = explanation {
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(format!("({})", explanation), palette.explanation()));
                    }
                }
                None => spans.push(Span::styled(MISSING, palette.null())),
            }
            lines.push(Line::from(spans));
        }

        if !has_data {
            lines.push(Line::styled(NO_DATA, palette.null()));
        }
        lines.push(Line::default());
    }

    lines
}
