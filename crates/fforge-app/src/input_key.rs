//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] before handing
//! them to the update loop, so the builder state machine and its tests never
//! depend on a terminal library.

/// A key press as seen by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+C quits)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    /// Moves focus between preview controls
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Character carried by the key when it edits text
    pub fn text_char(&self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_distinct_from_plain_char() {
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_text_char() {
        assert_eq!(InputKey::Char('x').text_char(), Some('x'));
        assert_eq!(InputKey::CharCtrl('x').text_char(), None);
        assert_eq!(InputKey::Enter.text_char(), None);
    }
}
