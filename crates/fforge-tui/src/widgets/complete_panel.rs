//! Results panel for the Generating and Complete steps

use fforge_app::{AppState, BuilderStep};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Files listed before the panel collapses the rest into a count
const MAX_LISTED_FILES: usize = 12;

pub struct ResultsPanel<'a> {
    state: &'a AppState,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn generating_lines(&self) -> Vec<Line<'static>> {
        let busy = self
            .state
            .busy
            .clone()
            .unwrap_or_else(|| "Generating your Flutter app...".to_string());
        vec![
            Line::default(),
            Line::styled(format!(" ↻ {}", busy), styles::status_yellow()),
            Line::default(),
            Line::styled(
                " The preview stays interactive while the code is written.",
                styles::text_muted(),
            ),
        ]
    }

    fn complete_lines(&self) -> Vec<Line<'static>> {
        let state = self.state;
        let files = &state.generated_files;
        let mut lines = vec![
            Line::styled(
                format!(" ✓ Generated {} file(s)", files.len()),
                styles::status_green().add_modifier(Modifier::BOLD),
            ),
            Line::default(),
        ];

        for file in files.iter().take(MAX_LISTED_FILES) {
            lines.push(Line::from(vec![
                Span::styled("   ", styles::text_muted()),
                Span::styled(file.path.clone(), styles::text_primary()),
                Span::styled(
                    format!("  {} lines", file.content.lines().count()),
                    styles::text_muted(),
                ),
            ]));
        }
        if files.len() > MAX_LISTED_FILES {
            lines.push(Line::styled(
                format!("   … and {} more", files.len() - MAX_LISTED_FILES),
                styles::text_muted(),
            ));
        }

        lines.push(Line::default());
        if let Some(path) = &state.archive_path {
            lines.push(Line::from(vec![
                Span::styled(" Archive  ", styles::text_secondary()),
                Span::styled(path.display().to_string(), styles::text_primary()),
            ]));
        }
        if let Some(build) = &state.build_result {
            let style = if build.success {
                styles::status_green()
            } else {
                styles::status_red()
            };
            lines.push(Line::from(vec![
                Span::styled(" Build    ", styles::text_secondary()),
                Span::styled(build.message.clone(), style),
            ]));
            if build.success {
                lines.push(Line::from(vec![
                    Span::styled(" Preview  ", styles::text_secondary()),
                    Span::styled(build.preview_url.clone(), styles::accent()),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" [z] ", styles::keybinding()),
            Span::styled("Download zip  ", styles::text_secondary()),
            Span::styled("[b] ", styles::keybinding()),
            Span::styled("Build web preview  ", styles::text_secondary()),
            Span::styled("[r] ", styles::keybinding()),
            Span::styled("Start over", styles::text_secondary()),
        ]));
        lines
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let (title, lines) = match self.state.step {
            BuilderStep::Complete => (" Your App ", self.complete_lines()),
            _ => (" Generating ", self.generating_lines()),
        };
        Paragraph::new(lines)
            .block(styles::glass_block(true).title(title))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
