//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `preview`: Preview navigator messages
//! - `config_edit`: Configuration editor, pages panel and page dialog
//! - `workflow`: Builder steps, generation, packaging and builds

pub(crate) mod config_edit;
pub(crate) mod keys;
pub(crate) mod preview;
pub(crate) mod update;
pub(crate) mod workflow;

#[cfg(test)]
mod tests;

use fforge_core::CustomPage;
use fforge_gen::{GeneratedFile, PageGenerationRequest};

use crate::message::Message;
use crate::navigator::TimerRequest;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Sleep, then report `SplashTimerFired` with the token
    ArmSplashTimer(TimerRequest),

    /// Generate content for a custom page; the page is added on completion
    GeneratePage {
        page: CustomPage,
        request: PageGenerationRequest,
    },

    /// Generate the whole project from a prompt
    GenerateApp { prompt: String },

    /// Write a zip of the generated files into the archive directory
    WriteArchive {
        app_name: String,
        files: Vec<GeneratedFile>,
    },

    /// Build the generated project and publish a preview
    BuildProject {
        project_name: String,
        files: Vec<GeneratedFile>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
