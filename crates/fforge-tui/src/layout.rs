//! Screen layout definitions for the TUI
//!
//! Header on top, status bar at the bottom, and in between the side panel
//! (configuration or results) next to the phone preview column.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the phone column, bezel included
pub const PHONE_WIDTH: u16 = 38;

/// Below this width the side panel is dropped and the phone fills the body
pub const COMPACT_WIDTH: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Configuration or results panel; zero-sized in compact mode
    pub panel: Rect,
    /// Screen tabs row above the phone
    pub tabs: Rect,
    pub phone: Rect,
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    let (panel, phone_column) = if body.width < COMPACT_WIDTH {
        (Rect::new(body.x, body.y, 0, body.height), body)
    } else {
        let [panel, phone_column] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(PHONE_WIDTH)]).areas(body);
        (panel, phone_column)
    };

    let [tabs, phone] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).areas(phone_column);

    ScreenAreas {
        header,
        panel,
        tabs,
        phone,
        status,
    }
}
