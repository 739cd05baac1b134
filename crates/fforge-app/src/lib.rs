//! fforge-app - Builder state machine for Flutter Forge
//!
//! Implements the TEA (The Elm Architecture) pattern: [`Message`] values flow
//! through [`handler::update`], which mutates [`AppState`] and may request an
//! [`UpdateAction`]. Actions run on tokio tasks and report back as messages.
//!
//! The preview engine lives here too: the [`navigator`] state machine, the
//! [`onboarding`] carousel and the pure [`screen_view`] renderer.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigator;
pub mod onboarding;
pub mod process;
pub mod screen_view;
pub mod signals;
pub mod state;
pub mod watcher;

// Re-export primary types
pub use actions::Services;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigator::{NavOutcome, PreviewNavigator, TimerRequest, SPLASH_DELAY};
pub use screen_view::{render_current, render_screen, ScreenIntent, ScreenKind, ScreenView};
pub use state::{AppState, BuilderStep, UiMode};
