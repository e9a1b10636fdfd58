//! Color palette and row severity.
//!
//! The palette is fixed; the only choice is whether colors are applied at
//! all. With colors disabled every style collapses to the terminal default
//! except for modifiers (bold, italic), so selection stays visible.

use ratatui::style::{Color, Modifier, Style};

// ===== Palette =====

const HIGHLIGHT: Color = Color::Indexed(39);
const NORMAL: Color = Color::Indexed(252);
const HEADER: Color = Color::Indexed(105);
const ERROR: Color = Color::Indexed(196);
const WARN: Color = Color::Indexed(214);
const STRING: Color = Color::Indexed(83);
const NULL: Color = Color::Indexed(245);
const EXPLANATION: Color = Color::Indexed(242);
const SELECTED_BG: Color = Color::Indexed(236);

/// Styles used by the panels.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colors: bool,
}

impl Palette {
    /// Palette honoring the color switch.
    pub fn new(colors_enabled: bool) -> Self {
        Self {
            colors: colors_enabled,
        }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Header line and panel titles.
    pub fn header(self) -> Style {
        self.fg(HEADER).add_modifier(Modifier::BOLD)
    }

    /// Panel borders.
    pub fn border(self) -> Style {
        self.fg(NORMAL)
    }

    /// Unselected list row.
    pub fn row(self) -> Style {
        self.fg(NORMAL)
    }

    /// Selected list row.
    pub fn selected_row(self) -> Style {
        let style = self.fg(HIGHLIGHT).add_modifier(Modifier::BOLD);
        if self.colors {
            style.bg(SELECTED_BG)
        } else {
            style
        }
    }

    /// Overlay prompt line.
    pub fn prompt(self) -> Style {
        let style = self.fg(HIGHLIGHT);
        if self.colors {
            style.bg(SELECTED_BG)
        } else {
            style
        }
    }

    /// Field names in the detail panel.
    pub fn field_name(self) -> Style {
        self.fg(HEADER).add_modifier(Modifier::BOLD)
    }

    /// Present values.
    pub fn value(self) -> Style {
        self.fg(STRING)
    }

    /// Placeholders for missing values.
    pub fn null(self) -> Style {
        self.fg(NULL)
    }

    /// Parenthesized explanations.
    pub fn explanation(self) -> Style {
        self.fg(EXPLANATION).add_modifier(Modifier::ITALIC)
    }

    /// The empty-state message.
    pub fn error(self) -> Style {
        self.fg(ERROR).add_modifier(Modifier::BOLD)
    }

    /// Overlay a row's severity on top of its base style.
    pub fn with_severity(self, base: Style, severity: Option<Severity>) -> Style {
        match severity {
            Some(Severity::Error) if self.colors => base.fg(ERROR),
            Some(Severity::Warning) if self.colors => base.fg(WARN),
            _ => base,
        }
    }
}

// ===== Severity =====

/// Row severity derived from `response_flags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Upstream connection failure or timeout.
    Error,
    /// Upstream unhealthy or overflowing.
    Warning,
}

/// First matching rule wins; a rule matches when the flags contain any of
/// its substrings.
pub const SEVERITY_RULES: &[(&[&str], Severity)] = &[
    (&["UF", "URX"], Severity::Error),
    (&["UH", "UO"], Severity::Warning),
];

/// Classify a `response_flags` value.
pub fn severity_for_flags(flags: &str) -> Option<Severity> {
    SEVERITY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| flags.contains(needle)))
        .map(|(_, severity)| *severity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_error_flags() {
        assert_eq!(severity_for_flags("UF"), Some(Severity::Error));
        assert_eq!(severity_for_flags("URX,UF"), Some(Severity::Error));
    }

    #[test]
    fn severity_warning_flags() {
        assert_eq!(severity_for_flags("UH"), Some(Severity::Warning));
        assert_eq!(severity_for_flags("UO"), Some(Severity::Warning));
    }

    #[test]
    fn error_beats_warning() {
        assert_eq!(severity_for_flags("UH,UF"), Some(Severity::Error));
    }

    #[test]
    fn unknown_flags_have_no_severity() {
        assert_eq!(severity_for_flags("-"), None);
        assert_eq!(severity_for_flags(""), None);
        assert_eq!(severity_for_flags("NR"), None);
    }

    #[test]
    fn palette_without_colors_has_no_foreground() {
        let palette = Palette::new(false);
        assert_eq!(palette.row().fg, None);
        assert_eq!(palette.selected_row().bg, None);
        assert!(palette.selected_row().add_modifier.contains(Modifier::BOLD));
        let styled = palette.with_severity(palette.row(), Some(Severity::Error));
        assert_eq!(styled.fg, None);
    }

    #[test]
    fn palette_with_colors_applies_severity() {
        let palette = Palette::new(true);
        let styled = palette.with_severity(palette.row(), Some(Severity::Warning));
        assert_eq!(styled.fg, Some(WARN));
    }
}
