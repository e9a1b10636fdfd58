//! Domain-level keyboard actions independent of key bindings.

/// Actions a bound key can trigger.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Keys without a binding are treated as text input while a prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the selection one row up. Default: k/↑
    SelectPrevious,
    /// Move the selection one row down. Default: j/↓
    SelectNext,
    /// Open the search prompt. Default: s
    StartSearch,
    /// Open the jump-to-line prompt. Default: /
    StartJump,
    /// Commit the open prompt. Default: Enter
    Submit,
    /// Close the open prompt without committing. Default: Esc
    Cancel,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
