//! Main render/view function (View in TEA pattern)


use fforge_app::{render_current, AppState, BuilderStep, UiMode};
use fforge_core::ScreenSet;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    if areas.panel.width > 0 {
        match state.step {
            BuilderStep::Configure | BuilderStep::Preview => {
                frame.render_widget(widgets::ConfigPanel::new(state), areas.panel);
            }
            BuilderStep::Generating | BuilderStep::Complete => {
                frame.render_widget(widgets::ResultsPanel::new(state), areas.panel);
            }
        }
    }

    let screens = ScreenSet::compute(&state.config);
    let navigator = &state.navigator;
    frame.render_widget(
        widgets::ScreenTabs::new(&screens, navigator.current_screen(), navigator.current_theme()),
        areas.tabs,
    );

    let screen = render_current(navigator, &state.config);
    let controls = screen.controls().len();
    let mut phone = widgets::PhoneFrame::new(&screen, &state.config.colors);
    if controls > 0 {
        phone = phone.focus(state.focus % controls);
    }
    frame.render_widget(phone, areas.phone);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modal overlays
    match state.ui_mode {
        UiMode::PagesPanel => {
            frame.render_widget(widgets::PagesPanel::new(state), area);
        }
        UiMode::PageDialog => {
            let dialog = widgets::PageDialog::new(&state.page_dialog).error(state.error.as_deref());
            frame.render_widget(dialog, area);
        }
        UiMode::Normal | UiMode::TextInput => {}
    }
}
