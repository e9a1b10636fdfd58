//! Vertical budgeting of the screen.
//!
//! Pure geometry: computes where each panel goes without painting anything,
//! so the split ratios can be tested directly.

use ratatui::layout::Rect;

/// Rows above the panels: the header line and a spacer.
pub const HEADER_HEIGHT: u16 = 2;
/// Rows reserved outside the content budget (header plus overlay area).
pub const RESERVED_ROWS: u16 = 4;
/// Share of the content height given to the list, in percent.
pub const LIST_PERCENT: u16 = 20;
/// Smallest list panel height.
pub const MIN_LIST_HEIGHT: u16 = 5;
/// Smallest detail panel height.
pub const MIN_DETAIL_HEIGHT: u16 = 10;

/// Rectangles for every region of the screen.
///
/// Panels are stacked top to bottom and clipped to the screen; a panel that
/// falls entirely outside it has an empty rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// Header line.
    pub header: Rect,
    /// Record list.
    pub list: Rect,
    /// Raw JSON of the selected record.
    pub raw: Rect,
    /// Annotated fields of the selected record.
    pub detail: Rect,
    /// Bottom line for the input prompt, present only while typing.
    pub overlay: Option<Rect>,
}

fn list_height(content: u16) -> u16 {
    let share = u32::from(content) * u32::from(LIST_PERCENT) / 100;
    u16::try_from(share).unwrap_or(u16::MAX).max(MIN_LIST_HEIGHT)
}

/// Raw panel height that fits `content_lines` lines plus borders.
///
/// The panel grows into the detail remainder only as far as the detail
/// panel keeps its minimum height, and never shrinks below `floor`.
pub fn fit_raw_height(height: u16, floor: u16, content_lines: usize) -> u16 {
    let content = height.saturating_sub(RESERVED_ROWS);
    let room = content
        .saturating_sub(list_height(content))
        .saturating_sub(MIN_DETAIL_HEIGHT);
    let wanted = u16::try_from(content_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    wanted.min(room).max(floor)
}

/// Compute panel rectangles for a `width` x `height` screen.
///
/// The content height is `height - 4`. The list takes 20% of it but never
/// less than 5 rows, the raw panel takes exactly `raw_height` rows, and the
/// detail panel takes the rest but never less than 10 rows. The minimums
/// may push panels past the bottom edge; they are clipped.
pub fn compute_layout(width: u16, height: u16, raw_height: u16, overlay: bool) -> PanelLayout {
    let screen = Rect::new(0, 0, width, height);
    let content = height.saturating_sub(RESERVED_ROWS);

    let list_height = list_height(content);
    let detail_height = content
        .saturating_sub(list_height)
        .saturating_sub(raw_height)
        .max(MIN_DETAIL_HEIGHT);

    let list_y = HEADER_HEIGHT;
    let raw_y = list_y.saturating_add(list_height);
    let detail_y = raw_y.saturating_add(raw_height);

    let clip = |y: u16, h: u16| {
        let rect = Rect::new(0, y, width, h).intersection(screen);
        if rect.is_empty() {
            Rect::default()
        } else {
            rect
        }
    };

    PanelLayout {
        header: clip(0, 1),
        list: clip(list_y, list_height),
        raw: clip(raw_y, raw_height),
        detail: clip(detail_y, detail_height),
        overlay: (overlay && height > 0).then(|| Rect::new(0, height - 1, width, 1)),
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
