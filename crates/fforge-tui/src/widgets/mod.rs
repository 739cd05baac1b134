//! Custom widget components

mod complete_panel;
mod config_panel;
mod dialogs;
mod header;
pub mod modal_overlay;
mod pages_panel;
pub mod phone_frame;
mod screen_tabs;
mod status_bar;

pub use complete_panel::ResultsPanel;
pub use config_panel::ConfigPanel;
pub use dialogs::PageDialog;
pub use header::MainHeader;
pub use pages_panel::PagesPanel;
pub use phone_frame::PhoneFrame;
pub use screen_tabs::ScreenTabs;
pub use status_bar::StatusBar;
