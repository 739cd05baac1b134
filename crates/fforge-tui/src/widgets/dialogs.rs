//! Custom page dialog: name and description form

use fforge_app::state::{DialogField, PageDialogState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::modal_frame;
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 12;

pub struct PageDialog<'a> {
    dialog: &'a PageDialogState,
    error: Option<&'a str>,
}

impl<'a> PageDialog<'a> {
    pub fn new(dialog: &'a PageDialogState) -> Self {
        Self {
            dialog,
            error: None,
        }
    }

    /// Show a validation message under the form
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn field_lines(&self, label: &str, value: &str, field: DialogField) -> [Line<'static>; 2] {
        let focused = self.dialog.focus == field;
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let value_style = if focused {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::DEEPEST_BG)
        } else {
            styles::text_primary()
        };
        let cursor = if focused { "▏" } else { "" };
        [
            Line::styled(format!(" {}", label), label_style),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{}{}", value, cursor), value_style),
            ]),
        ]
    }
}

impl Widget for PageDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal_frame(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT, " Add Custom Page ");

        let mut lines = Vec::new();
        lines.extend(self.field_lines("Page Name", &self.dialog.name, DialogField::Name));
        lines.push(Line::default());
        lines.extend(self.field_lines(
            "Description",
            &self.dialog.description,
            DialogField::Description,
        ));
        lines.push(Line::default());
        if let Some(error) = self.error {
            lines.push(Line::styled(format!(" {}", error), styles::status_red()));
        }
        lines.push(Line::from(vec![
            Span::styled(" [Tab]", styles::keybinding()),
            Span::styled(" next field  ", styles::text_muted()),
            Span::styled("[Enter]", styles::keybinding()),
            Span::styled(" generate  ", styles::text_muted()),
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
