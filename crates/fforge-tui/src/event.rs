//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use fforge_app::message::Message;
use fforge_app::InputKey;
use fforge_core::prelude::*;
use std::time::Duration;

/// Approximate width of one terminal cell in logical pixels
///
/// Drag distances are measured in cells and scaled so the onboarding swipe
/// threshold keeps the same feel as on a touch screen.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Turns press/release pairs of the left mouse button into drag messages
#[derive(Debug, Default)]
pub struct DragTracker {
    start_column: Option<u16>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one mouse event; a completed horizontal drag yields a message
    pub fn handle(&mut self, mouse: MouseEvent) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start_column = Some(mouse.column);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.start_column.take()?;
                let cells = f32::from(mouse.column) - f32::from(start);
                if cells == 0.0 {
                    return None;
                }
                Some(Message::OnboardingDrag {
                    offset: cells * CELL_WIDTH_PX,
                })
            }
            _ => None,
        }
    }
}

/// Poll for terminal events with timeout
pub fn poll(drag: &mut DragTracker) -> Result<Option<Message>> {
    // 50ms keeps the loop responsive to channel messages (20 FPS)
    if !event::poll(Duration::from_millis(50))? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        Event::Mouse(mouse) => Ok(drag.handle(mouse)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputKey::Left)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(InputKey::Right)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)),
            Some(InputKey::Home)
        );
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_drag_right_produces_positive_offset() {
        let mut drag = DragTracker::new();
        assert!(drag
            .handle(mouse(MouseEventKind::Down(MouseButton::Left), 10))
            .is_none());
        assert!(drag
            .handle(mouse(MouseEventKind::Drag(MouseButton::Left), 15))
            .is_none());
        match drag.handle(mouse(MouseEventKind::Up(MouseButton::Left), 25)) {
            Some(Message::OnboardingDrag { offset }) => assert_eq!(offset, 120.0),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_drag_left_produces_negative_offset() {
        let mut drag = DragTracker::new();
        drag.handle(mouse(MouseEventKind::Down(MouseButton::Left), 30));
        match drag.handle(mouse(MouseEventKind::Up(MouseButton::Left), 10)) {
            Some(Message::OnboardingDrag { offset }) => assert_eq!(offset, -160.0),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_click_and_stray_release_are_ignored() {
        let mut drag = DragTracker::new();
        drag.handle(mouse(MouseEventKind::Down(MouseButton::Left), 12));
        assert!(drag
            .handle(mouse(MouseEventKind::Up(MouseButton::Left), 12))
            .is_none());
        // no press in flight
        assert!(drag
            .handle(mouse(MouseEventKind::Up(MouseButton::Left), 40))
            .is_none());
    }
}
