//! Status bar widget
//!
//! Left: error, busy job or last status. Right: key hints for the mode.

use fforge_app::state::UiMode;
use fforge_app::{AppState, BuilderStep};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn message(&self) -> Option<Span<'static>> {
        if let Some(error) = &self.state.error {
            return Some(Span::styled(
                format!(" ✗ {} ", error),
                styles::status_red().add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(busy) = &self.state.busy {
            return Some(Span::styled(format!(" ↻ {} ", busy), styles::status_yellow()));
        }
        self.state
            .status
            .as_ref()
            .map(|status| Span::styled(format!(" ✓ {} ", status), styles::status_green()))
    }

    /// `(key, action)` pairs for the current mode
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::TextInput => vec![("Enter", "save"), ("Esc", "cancel")],
            UiMode::PageDialog => vec![("Tab", "field"), ("Enter", "next/submit"), ("Esc", "cancel")],
            UiMode::PagesPanel => vec![("Enter", "toggle"), ("d", "remove"), ("Esc", "close")],
            UiMode::Normal => {
                let mut hints = Vec::new();
                if self.state.error.is_some() {
                    hints.push(("Esc", "dismiss"));
                }
                if self.state.step.shows_preview() {
                    hints.extend([("←/→", "screens"), ("Tab", "focus"), ("Enter", "tap"), ("t", "theme")]);
                }
                match self.state.step {
                    BuilderStep::Configure => hints.push(("v", "preview")),
                    BuilderStep::Preview => hints.extend([("g", "generate"), ("b", "back")]),
                    BuilderStep::Generating => {}
                    BuilderStep::Complete => {
                        hints.extend([("z", "zip"), ("b", "build"), ("r", "start over")])
                    }
                }
                hints.push(("q", "quit"));
                hints
            }
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut hint_spans = Vec::new();
        for (key, action) in self.hints() {
            hint_spans.push(Span::styled(key, styles::keybinding()));
            hint_spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        let hints = Line::from(hint_spans);
        let hints_width = hints.width() as u16;

        let message = self.message().map(Line::from);
        let message_width = message.as_ref().map(|m| m.width() as u16).unwrap_or(0);

        if let Some(message) = &message {
            buf.set_line(area.x, area.y, message, area.width);
        }
        // hints yield to the message when space runs out
        if message_width + hints_width < area.width {
            let x = area.x + area.width - hints_width;
            buf.set_line(x, area.y, &hints, hints_width);
        }
    }
}
