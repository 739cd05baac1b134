//! Color palette for the builder chrome and the phone preview.

use fforge_core::PreviewTheme;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Phone frame ---
pub const PHONE_BEZEL: Color = Color::Rgb(31, 41, 55);

/// Surface colors of the simulated device for one preview theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSurface {
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub muted: Color,
}

pub fn preview_surface(theme: PreviewTheme) -> PreviewSurface {
    match theme {
        PreviewTheme::Light => PreviewSurface {
            background: Color::Rgb(255, 255, 255),
            card: Color::Rgb(243, 244, 246),
            text: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(107, 114, 128),
        },
        PreviewTheme::Dark => PreviewSurface {
            background: Color::Rgb(17, 24, 39),
            card: Color::Rgb(31, 41, 55),
            text: Color::Rgb(243, 244, 246),
            muted: Color::Rgb(156, 163, 175),
        },
    }
}

/// Parse a `#RRGGBB` color from the app configuration
///
/// Anything else falls back to the chrome accent so a half-typed color
/// never breaks the preview.
pub fn hex_color(value: &str) -> Color {
    parse_hex(value).unwrap_or(ACCENT)
}

fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
