//! Configuration panel for the Configure and Preview steps

use fforge_app::state::{ConfigField, UiMode};
use fforge_app::{AppState, BuilderStep};
use fforge_core::{ColorSlot, FeatureFlags};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette::hex_color, styles};

/// Fields in display order with their shortcut keys
const FIELDS: [(char, ConfigField); 5] = [
    ('1', ConfigField::AppName),
    ('2', ConfigField::Description),
    ('3', ConfigField::Color(ColorSlot::Primary)),
    ('4', ConfigField::Color(ColorSlot::Secondary)),
    ('5', ConfigField::Color(ColorSlot::Accent)),
];

pub struct ConfigPanel<'a> {
    state: &'a AppState,
}

impl<'a> ConfigPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn field_line(&self, key: char, field: ConfigField) -> Line<'static> {
        let editing = self
            .state
            .text_input
            .as_ref()
            .filter(|_| self.state.ui_mode == UiMode::TextInput)
            .filter(|input| input.field == field);

        let mut spans = vec![
            Span::styled(format!(" [{}] ", key), styles::keybinding()),
            Span::styled(format!("{:<12}", field.label()), styles::text_secondary()),
        ];

        if let ConfigField::Color(slot) = field {
            let value = self.state.config.colors.get(slot);
            spans.push(Span::styled("■ ", Style::default().fg(hex_color(value))));
        }

        match editing {
            Some(input) => {
                spans.push(Span::styled(
                    format!("{}▏", input.buffer),
                    styles::focused_selected(),
                ));
            }
            None => {
                let value = field.current_value(&self.state.config);
                if value.trim().is_empty() {
                    spans.push(Span::styled("(empty)", styles::text_muted()));
                } else {
                    spans.push(Span::styled(value.to_string(), styles::text_primary()));
                }
            }
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let config = &self.state.config;
        let mut lines = Vec::new();

        for (key, field) in FIELDS.iter().take(2) {
            lines.push(self.field_line(*key, *field));
        }
        lines.push(Line::from(vec![
            Span::styled(" [m] ", styles::keybinding()),
            Span::styled(format!("{:<12}", "Theme"), styles::text_secondary()),
            Span::styled(config.theme.label(), styles::text_primary()),
        ]));
        for (key, field) in FIELDS.iter().skip(2) {
            lines.push(self.field_line(*key, *field));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" Pages ", styles::accent_bold()),
            Span::styled("[p]", styles::keybinding()),
        ]));
        if config.pages.is_empty() {
            lines.push(Line::styled("   (none)", styles::text_muted()));
        } else {
            lines.push(Line::styled(
                format!("   {}", config.pages.join(" · ")),
                styles::text_primary(),
            ));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" Custom Pages ", styles::accent_bold()),
            Span::styled("[n]", styles::keybinding()),
        ]));
        if config.custom_pages.is_empty() && self.state.pending_pages == 0 {
            lines.push(Line::styled("   (none)", styles::text_muted()));
        }
        for page in &config.custom_pages {
            let (icon, style) = if page.is_generated() {
                ("✦", styles::status_green())
            } else {
                ("◌", styles::status_yellow())
            };
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(icon, style),
                Span::raw(" "),
                Span::styled(page.name.clone(), styles::text_primary()),
                Span::styled(format!("  {}", page.description), styles::text_muted()),
            ]));
        }
        if self.state.pending_pages > 0 {
            lines.push(Line::styled(
                format!("   ↻ generating {} page(s)...", self.state.pending_pages),
                styles::status_yellow(),
            ));
        }

        let features = feature_labels(&config.features);
        if !features.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(" Features ", styles::accent_bold()),
                Span::styled(features.join(" · "), styles::text_primary()),
            ]));
        }

        lines.push(Line::default());
        match self.state.step {
            BuilderStep::Preview => {
                lines.push(Line::from(vec![
                    Span::styled(" [g] ", styles::keybinding()),
                    Span::styled(
                        "Approve & generate",
                        styles::status_green().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("   [b] ", styles::keybinding()),
                    Span::styled("Back to configure", styles::text_secondary()),
                ]));
            }
            _ => {
                lines.push(Line::from(vec![
                    Span::styled(" [v] ", styles::keybinding()),
                    Span::styled("Preview full app", styles::accent_bold()),
                ]));
            }
        }
        lines
    }
}

fn feature_labels(features: &FeatureFlags) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if features.firebase {
        labels.push("Firebase");
    }
    if features.supabase_db {
        labels.push("Supabase");
    }
    if features.offline_mode {
        labels.push("Offline mode");
    }
    labels
}

impl Widget for ConfigPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let focused = self.state.step == BuilderStep::Configure;
        let title = if focused { " Configure " } else { " Review " };
        let block = styles::glass_block(focused).title(title);
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
