//! Phone frame widget
//!
//! Paints a [`ScreenView`] inside a device bezel. The view model decides
//! what is on screen; this widget only decides how it looks in a terminal.

use fforge_app::screen_view::{
    AppBar, Backdrop, BuiltInScreen, ButtonStyle, Control, ScreenKind, ScreenView, ViewBlock,
};
use fforge_core::ThemeColors;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::palette::{self, hex_color, preview_surface, PreviewSurface};
use crate::theme::styles;

/// Marker drawn before the focused control
const FOCUS_MARKER: &str = "▸ ";

pub struct PhoneFrame<'a> {
    view: &'a ScreenView,
    colors: &'a ThemeColors,
    focus: Option<usize>,
}

impl<'a> PhoneFrame<'a> {
    pub fn new(view: &'a ScreenView, colors: &'a ThemeColors) -> Self {
        Self {
            view,
            colors,
            focus: None,
        }
    }

    /// Highlight the control at this index of [`ScreenView::controls`]
    pub fn focus(mut self, index: usize) -> Self {
        self.focus = Some(index);
        self
    }
}

impl Widget for PhoneFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bezel = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(palette::PHONE_BEZEL))
            .title_top(Line::from(" ● ").centered())
            .title_bottom(Line::from(" ━━━ ").centered());
        let inner = bezel.inner(area);
        bezel.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let surface = surface_for(self.view);
        let mut painter = Painter::new(
            inner.width as usize,
            surface,
            hex_color(&self.colors.primary),
            self.focus,
            centered_layout(self.view.kind),
        );
        if let Some(bar) = &self.view.app_bar {
            painter.app_bar(bar);
        }
        for block in &self.view.blocks {
            painter.block(block);
        }

        let scroll = painter
            .focus_line
            .map(|line| (line + 1).saturating_sub(inner.height as usize))
            .unwrap_or(0);

        Paragraph::new(painter.lines)
            .style(Style::default().bg(surface.background).fg(surface.text))
            .scroll((scroll.min(u16::MAX as usize) as u16, 0))
            .render(inner, buf);
    }
}

fn surface_for(view: &ScreenView) -> PreviewSurface {
    match &view.backdrop {
        Backdrop::Plain => preview_surface(view.theme),
        Backdrop::Gradient(from, to) => PreviewSurface {
            background: hex_color(from),
            card: hex_color(to),
            text: Color::White,
            muted: Color::Rgb(229, 231, 235),
        },
    }
}

fn centered_layout(kind: ScreenKind) -> bool {
    matches!(
        kind,
        ScreenKind::BuiltIn(BuiltInScreen::Splash)
            | ScreenKind::BuiltIn(BuiltInScreen::Onboarding)
            | ScreenKind::BuiltIn(BuiltInScreen::Login)
            | ScreenKind::BuiltIn(BuiltInScreen::Register)
    )
}

/// Accumulates the lines of one screen
struct Painter {
    width: usize,
    surface: PreviewSurface,
    primary: Color,
    focus: Option<usize>,
    centered: bool,
    next_control: usize,
    focus_line: Option<usize>,
    lines: Vec<Line<'static>>,
}

impl Painter {
    fn new(
        width: usize,
        surface: PreviewSurface,
        primary: Color,
        focus: Option<usize>,
        centered: bool,
    ) -> Self {
        Self {
            width,
            surface,
            primary,
            focus,
            centered,
            next_control: 0,
            focus_line: None,
            lines: Vec::new(),
        }
    }

    /// Count an actionable control; true when it holds the focus
    fn claim(&mut self, control: &Control) -> bool {
        if !control.is_actionable() {
            return false;
        }
        let index = self.next_control;
        self.next_control += 1;
        let focused = self.focus == Some(index);
        if focused {
            self.focus_line = Some(self.lines.len());
        }
        focused
    }

    fn push(&mut self, line: Line<'static>, centered: bool) {
        self.lines.push(if centered { line.centered() } else { line });
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn wrapped(&mut self, text: &str, style: Style, centered: bool) {
        for row in wrap_text(text, self.width) {
            self.push(Line::styled(row, style), centered);
        }
    }

    fn text_style(&self) -> Style {
        Style::default().fg(self.surface.text)
    }

    fn muted_style(&self) -> Style {
        Style::default().fg(self.surface.muted)
    }

    fn app_bar(&mut self, bar: &AppBar) {
        let bar_style = Style::default().bg(self.surface.card).fg(self.surface.text);
        let mut spans = vec![Span::raw(" ")];

        if let Some(back) = &bar.back {
            let focused = self.claim(back);
            spans.push(Span::styled(format!("{} ", back.label), self.focusable(focused, bar_style)));
        }
        spans.push(Span::styled(bar.title.clone(), bar_style.add_modifier(Modifier::BOLD)));

        if let Some(action) = &bar.action {
            let focused = self.claim(action);
            let used: usize = spans.iter().map(|s| s.width()).sum();
            let label_width = action.label.width() + 1;
            let gap = self.width.saturating_sub(used + label_width);
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(
                format!("{} ", action.label),
                self.focusable(focused, bar_style),
            ));
        }

        self.push(Line::from(spans).style(bar_style), false);
        self.blank();
    }

    fn focusable(&self, focused: bool, style: Style) -> Style {
        if focused {
            styles::focused_selected()
        } else {
            style
        }
    }

    fn block(&mut self, block: &ViewBlock) {
        match block {
            ViewBlock::Badge { glyph, color } => {
                let style = Style::default()
                    .fg(hex_color(color))
                    .add_modifier(Modifier::BOLD);
                self.push(Line::styled(format!("( {} )", glyph), style), true);
                self.blank();
            }
            ViewBlock::Title(text) => {
                let style = self.text_style().add_modifier(Modifier::BOLD);
                self.wrapped(text, style, true);
            }
            ViewBlock::Heading(text) => {
                self.blank();
                let style = self.text_style().add_modifier(Modifier::BOLD);
                let centered = self.centered;
                self.wrapped(text, style, centered);
            }
            ViewBlock::Text(text) => {
                let (style, centered) = (self.text_style(), self.centered);
                self.wrapped(text, style, centered);
            }
            ViewBlock::Hint(text) => {
                let style = self.muted_style().add_modifier(Modifier::ITALIC);
                let centered = self.centered;
                self.wrapped(text, style, centered);
            }
            ViewBlock::Status { label, generated } => {
                let (icon, color) = if *generated {
                    ("✦", palette::STATUS_GREEN)
                } else {
                    ("◌", palette::STATUS_YELLOW)
                };
                let line = Line::styled(format!("{} {}", icon, label), Style::default().fg(color));
                self.push(line, false);
            }
            ViewBlock::Dots {
                count,
                active,
                color,
            } => {
                let mut spans = Vec::with_capacity(count * 2);
                for i in 0..*count {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    if i == *active {
                        spans.push(Span::styled("●", Style::default().fg(hex_color(color))));
                    } else {
                        spans.push(Span::styled("○", self.muted_style()));
                    }
                }
                self.push(Line::from(spans), true);
            }
            ViewBlock::Input { placeholder } => {
                let field = pad_right(&format!(" {}", placeholder), self.width.saturating_sub(2));
                let style = Style::default().bg(self.surface.card).fg(self.surface.muted);
                self.push(Line::from(vec![Span::raw(" "), Span::styled(field, style)]), false);
            }
            ViewBlock::Button(control) => self.button(control),
            ViewBlock::Card {
                title,
                subtitle,
                color,
                control,
            } => {
                let focused = self.claim(control);
                let bar = Style::default().fg(hex_color(color));
                let title_style =
                    self.focusable(focused, self.text_style().add_modifier(Modifier::BOLD));
                let marker = if focused { FOCUS_MARKER } else { "" };
                self.push(
                    Line::from(vec![
                        Span::styled("▌ ", bar),
                        Span::styled(format!("{}{}", marker, title), title_style),
                    ]),
                    false,
                );
                self.push(
                    Line::from(vec![
                        Span::styled("▌ ", bar),
                        Span::styled(subtitle.clone(), self.muted_style()),
                    ]),
                    false,
                );
            }
            ViewBlock::ListItem { label, control } => {
                let focused = control.as_ref().map(|c| self.claim(c)).unwrap_or(false);
                let trailing = control.as_ref().map(|c| c.label.clone()).unwrap_or_default();
                let used = label.width() + trailing.width() + 2;
                let gap = self.width.saturating_sub(used).max(1);
                let style = self.focusable(focused, self.text_style());
                self.push(
                    Line::from(vec![
                        Span::styled(format!(" {}", label), style),
                        Span::raw(" ".repeat(gap)),
                        Span::styled(trailing, self.muted_style()),
                    ]),
                    false,
                );
            }
        }
    }

    fn button(&mut self, control: &Control) {
        let focused = self.claim(control);
        let label = if focused {
            format!("{}{}", FOCUS_MARKER, control.label)
        } else {
            control.label.clone()
        };

        let (text, style) = if !control.enabled {
            (format!("[ {} ]", label), self.muted_style())
        } else {
            match control.style {
                ButtonStyle::Filled => {
                    let inner = self.width.saturating_sub(4).max(label.width() + 2);
                    (
                        pad_center(&label, inner),
                        Style::default()
                            .bg(self.primary)
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                }
                ButtonStyle::Outline => (format!("[ {} ]", label), Style::default().fg(self.primary)),
                ButtonStyle::Ghost => (label, self.text_style()),
                ButtonStyle::Link => (
                    label,
                    Style::default()
                        .fg(self.primary)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            }
        };

        let style = self.focusable(focused, style);
        self.push(Line::styled(text, style), true);
    }
}

/// Greedy word wrap by display width; over-long words are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let sep = usize::from(!current.is_empty());
        if current.width() + sep + word.width() <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            if current.width() + c.width().unwrap_or(0) > width {
                rows.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

fn pad_center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_config, TestTerminal};
    use fforge_app::render_screen;
    use fforge_core::PreviewTheme;

    fn render(screen: &str, theme: PreviewTheme, focus: Option<usize>) -> TestTerminal {
        let config = test_config();
        let view = render_screen(screen, &config, theme, 0);
        let mut term = TestTerminal::with_size(38, 30);
        let mut frame = PhoneFrame::new(&view, &config.colors);
        if let Some(index) = focus {
            frame = frame.focus(index);
        }
        term.render_widget(frame, term.area());
        term
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("Welcome to your app!", 10),
            vec!["Welcome to", "your app!"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_splash_renders_app_name_and_button() {
        let term = render("Splash Screen", PreviewTheme::Light, None);
        assert!(term.buffer_contains("Bloom"));
        assert!(term.buffer_contains("Welcome to your app!"));
        assert!(term.buffer_contains("[ Get Started ]"));
    }

    #[test]
    fn test_focused_control_is_marked() {
        let term = render("Splash Screen", PreviewTheme::Light, Some(0));
        assert!(term.buffer_contains("▸ Get Started"));
    }

    #[test]
    fn test_home_shows_cards_and_custom_entry() {
        let term = render("Home", PreviewTheme::Light, None);
        assert!(term.buffer_contains("Profile"));
        assert!(term.buffer_contains("Your account"));
        assert!(term.buffer_contains("Quick Actions"));
        assert!(term.buffer_contains("Loyalty Card"));
        assert!(!term.buffer_contains("Dashboard"));
    }

    #[test]
    fn test_custom_page_shows_generation_status() {
        let term = render("Loyalty Card", PreviewTheme::Dark, None);
        assert!(term.buffer_contains("Loyalty Card Page"));
        assert!(term.buffer_contains("Awaiting generation"));
        assert!(term.buffer_contains("Feature 1"));
    }

    #[test]
    fn test_dark_theme_paints_dark_background() {
        let term = render("Profile", PreviewTheme::Dark, None);
        let dark = preview_surface(PreviewTheme::Dark).background;
        // first cell inside the bezel, below the app bar
        assert_eq!(term.buffer()[(2, 3)].bg, dark);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let config = test_config();
        let view = render_screen("Home", &config, PreviewTheme::Light, 0);
        let mut term = TestTerminal::with_size(5, 3);
        term.render_widget(PhoneFrame::new(&view, &config.colors), term.area());
    }
}
