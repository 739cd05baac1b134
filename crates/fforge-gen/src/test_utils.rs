//! Test utilities for generation
//!
//! Provides a scripted [`TextGenerator`] that replays canned replies and
//! records the prompts it received.

use std::collections::VecDeque;
use std::sync::Mutex;

use fforge_core::prelude::*;

use crate::client::TextGenerator;

/// Generator that returns queued replies in order
///
/// Once the queue is drained every call fails with a generation error.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Generator that answers with each reply in turn
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Generator whose first call fails with `message`
    pub fn failing(message: &str) -> Self {
        let generator = Self::default();
        generator.push_error(message);
        generator
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        if let Ok(mut queue) = self.replies.lock() {
            queue.push_back(Ok(reply.into()));
        }
    }

    pub fn push_error(&self, message: impl Into<String>) {
        if let Ok(mut queue) = self.replies.lock() {
            queue.push_back(Err(message.into()));
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let next = self
            .replies
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());
        match next {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(Error::generation(message)),
            None => Err(Error::generation("no scripted reply left")),
        }
    }
}
