//! Pages panel modal: toggle standard pages, remove custom ones

use fforge_app::state::PageRow;
use fforge_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::modal_frame;
use crate::theme::styles;

pub struct PagesPanel<'a> {
    state: &'a AppState,
}

impl<'a> PagesPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn row_line(&self, row: PageRow, selected: bool) -> Line<'static> {
        let config = &self.state.config;
        let cursor = if selected { "▸ " } else { "  " };
        let (mark, label, hint) = match row {
            PageRow::Standard(name) => {
                let mark = if config.has_page(name) { "[x]" } else { "[ ]" };
                (mark, name.to_string(), String::new())
            }
            PageRow::Custom(index) => {
                let Some(page) = config.custom_pages.get(index) else {
                    return Line::default();
                };
                let hint = if page.is_generated() {
                    "  AI-generated".to_string()
                } else {
                    "  awaiting generation".to_string()
                };
                (" ✦ ", page.name.clone(), hint)
            }
        };

        let style = if selected {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(format!("{}{} {}", cursor, mark, label), style),
            Span::styled(hint, styles::text_muted()),
        ])
    }
}

impl Widget for PagesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.state.page_rows();
        let inner = modal_frame(buf, area, 48, rows.len() as u16 + 5, " Pages ");
        if inner.height == 0 {
            return;
        }

        let visible = inner.height.saturating_sub(2) as usize;
        let cursor = self.state.pages_cursor;
        let skip = (cursor + 1).saturating_sub(visible);

        let mut lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(skip)
            .take(visible)
            .map(|(i, row)| self.row_line(*row, i == cursor))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" [Enter]", styles::keybinding()),
            Span::styled(" toggle  ", styles::text_muted()),
            Span::styled("[d]", styles::keybinding()),
            Span::styled(" remove custom  ", styles::text_muted()),
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};

    #[test]
    fn test_lists_standard_and_custom_pages() {
        let state = create_test_state();
        let mut term = TestTerminal::new();
        term.render_widget(PagesPanel::new(&state), term.area());

        assert!(term.buffer_contains("Pages"));
        assert!(term.buffer_contains("▸ [x] Splash Screen"));
        assert!(term.buffer_contains("[ ] Login"));
        assert!(term.buffer_contains("[x] Profile"));
        assert!(term.buffer_contains("Loyalty Card"));
        assert!(term.buffer_contains("awaiting generation"));
    }

    #[test]
    fn test_cursor_row_stays_visible_in_short_terminal() {
        let mut state = create_test_state();
        state.pages_cursor = 11;
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(PagesPanel::new(&state), term.area());

        assert!(term.buffer_contains("Loyalty Card"));
        assert!(!term.buffer_contains("Splash Screen"));
    }
}
