//! fforge-tui - Terminal UI for Flutter Forge
//!
//! Renders the builder state from fforge-app: the configuration panel next
//! to a phone frame with the live preview, plus the dialogs and status bar.
//! Terminal events are translated into [`fforge_app::Message`] values.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
