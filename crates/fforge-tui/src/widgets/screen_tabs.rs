//! Screen tabs row above the phone
//!
//! Shows the `i of n` badge, the preview theme and the navigable screens
//! with the current one highlighted.

use fforge_core::{PreviewTheme, ScreenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct ScreenTabs<'a> {
    screens: &'a ScreenSet,
    current: &'a str,
    theme: PreviewTheme,
}

impl<'a> ScreenTabs<'a> {
    pub fn new(screens: &'a ScreenSet, current: &'a str, theme: PreviewTheme) -> Self {
        Self {
            screens,
            current,
            theme,
        }
    }

    /// `"3 of 5"`, or `"- of 5"` when the current screen left the set
    pub fn badge(&self) -> String {
        match self.screens.index_of(self.current) {
            Some(index) => format!("{} of {}", index + 1, self.screens.len()),
            None => format!("- of {}", self.screens.len()),
        }
    }
}

impl Widget for ScreenTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let theme_icon = if self.theme.is_dark() { "☾" } else { "☀" };
        let mut spans = vec![
            Span::styled(format!(" {} ", self.badge()), styles::focused_selected()),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", theme_icon, self.theme.label()),
                styles::text_secondary(),
            ),
            Span::raw("  "),
        ];

        // Start one tab before the current screen so it stays visible
        let start = self
            .screens
            .index_of(self.current)
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        if start > 0 {
            spans.push(Span::styled("‹ ", styles::text_muted()));
        }
        for (i, screen) in self.screens.iter().enumerate().skip(start) {
            if i > start {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            let style = if screen == self.current {
                styles::accent().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(screen.to_string(), style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
