//! Header bar widget
//!
//! Title, app name and the builder step pipeline.

use fforge_app::{AppState, BuilderStep};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const STEPS: [BuilderStep; 4] = [
    BuilderStep::Configure,
    BuilderStep::Preview,
    BuilderStep::Generating,
    BuilderStep::Complete,
];

/// Main header showing the tool title, app name and current step
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let step = self.state.step;
        let (icon, icon_style) = styles::step_indicator(step);

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled("Flutter Forge", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(
                self.state.config.display_name().to_string(),
                styles::text_secondary(),
            ),
        ]);
        let left_width = left.width() as u16;

        let mut pipeline = Vec::new();
        for (i, s) in STEPS.iter().enumerate() {
            if i > 0 {
                pipeline.push(Span::styled(" › ", styles::text_muted()));
            }
            let style = if *s == step {
                styles::accent().add_modifier(Modifier::BOLD)
            } else {
                styles::text_muted()
            };
            pipeline.push(Span::styled(s.label(), style));
        }
        pipeline.push(Span::raw(" "));
        let pipeline = Line::from(pipeline);
        let pipeline_width = pipeline.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);
        if left_width + pipeline_width + 2 <= inner.width {
            let x = inner.x + inner.width - pipeline_width;
            buf.set_line(x, inner.y, &pipeline, pipeline_width);
        }
    }
}
