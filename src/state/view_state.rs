//! View state owned by the interactive engine.

use crate::model::LogRecord;

/// Default height of the raw-JSON panel: one content line plus borders.
pub const DEFAULT_RAW_PANEL_HEIGHT: u16 = 3;

/// Fallback viewport used until the terminal reports its size.
pub const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

/// Interaction mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the list.
    #[default]
    Normal,
    /// Typing a search query.
    Searching,
    /// Typing a line number to jump to.
    JumpingToLine,
}

impl Mode {
    /// Whether keystrokes are collected into the input buffer.
    pub fn accepts_input(self) -> bool {
        matches!(self, Mode::Searching | Mode::JumpingToLine)
    }

    /// Prompt label shown in the input overlay.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "",
            Mode::Searching => "Search",
            Mode::JumpingToLine => "Jump to line",
        }
    }
}

/// Rendering options fixed at startup from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Height of the raw-JSON panel, borders included.
    pub raw_panel_height: u16,
    /// Whether the fixed color palette is applied.
    pub colors_enabled: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            raw_panel_height: DEFAULT_RAW_PANEL_HEIGHT,
            colors_enabled: true,
        }
    }
}

/// Complete state of the viewer.
///
/// `visible` holds indices into `all_records` and is always an ordered
/// subsequence of it. `selected` indexes `visible`; it is in range whenever
/// `visible` is non-empty.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub(crate) all_records: Vec<LogRecord>,
    pub(crate) visible: Vec<usize>,
    pub(crate) selected: usize,
    pub(crate) mode: Mode,
    pub(crate) input_buffer: String,
    pub(crate) viewport_width: u16,
    pub(crate) viewport_height: u16,
    pub(crate) options: ViewOptions,
}

impl ViewState {
    /// Create the initial state: everything visible, first record selected.
    pub fn new(records: Vec<LogRecord>) -> Self {
        let visible = (0..records.len()).collect();
        Self {
            all_records: records,
            visible,
            selected: 0,
            mode: Mode::Normal,
            input_buffer: String::new(),
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
            options: ViewOptions::default(),
        }
    }

    /// Builder: set the initial viewport.
    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Builder: set rendering options.
    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    /// Every ingested record, in input order.
    pub fn all_records(&self) -> &[LogRecord] {
        &self.all_records
    }

    /// Indices into [`Self::all_records`] of the records currently shown.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Number of records currently shown.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Whether the current filter hides everything.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Record at position `idx` of the visible list.
    pub fn visible_record(&self, idx: usize) -> Option<&LogRecord> {
        self.visible
            .get(idx)
            .and_then(|&record_idx| self.all_records.get(record_idx))
    }

    /// Records currently shown, in order.
    pub fn visible_records(&self) -> impl Iterator<Item = &LogRecord> + '_ {
        self.visible.iter().map(|&idx| &self.all_records[idx])
    }

    /// Position of the selection within the visible list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected record, if the visible list is non-empty.
    pub fn selected_record(&self) -> Option<&LogRecord> {
        self.visible_record(self.selected)
    }

    /// Current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Text typed into the open prompt.
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Last known terminal size as `(width, height)`.
    pub fn viewport(&self) -> (u16, u16) {
        (self.viewport_width, self.viewport_height)
    }

    /// Rendering options.
    pub fn options(&self) -> ViewOptions {
        self.options
    }
}
