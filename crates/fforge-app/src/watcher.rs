//! Watches `fforge.toml` and reloads the app configuration on change
//!
//! The project root is watched non-recursively with debouncing; only events
//! touching the configuration file trigger a reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;

use fforge_core::prelude::*;

use crate::config::{load_app_config, WatcherSettings, APP_CONFIG_FILENAME};
use crate::message::Message;

/// Default debounce duration in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// File name watched inside the project root
    pub file_name: String,
    pub debounce: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            file_name: APP_CONFIG_FILENAME.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl WatcherConfig {
    pub fn from_settings(settings: &WatcherSettings) -> Self {
        Self::default().with_debounce_ms(settings.debounce_ms)
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }
}

/// Manages the configuration file watcher
pub struct ConfigWatcher {
    project_root: PathBuf,
    config: WatcherConfig,
    /// Handle to stop the watcher
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl ConfigWatcher {
    pub fn new(project_root: PathBuf, config: WatcherConfig) -> Self {
        Self {
            project_root,
            config,
            stop_tx: None,
        }
    }

    /// Start watching; reload results arrive as messages
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<()> {
        if self.is_running() {
            return Err(Error::config("Watcher is already running"));
        }

        let project_root = self.project_root.clone();
        let config = self.config.clone();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        self.stop_tx = Some(stop_tx);

        tokio::task::spawn_blocking(move || {
            Self::run_watcher(project_root, config, message_tx, stop_rx);
        });

        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    fn run_watcher(
        project_root: PathBuf,
        config: WatcherConfig,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        let tx_clone = message_tx.clone();
        let root = project_root.clone();
        let file_name = config.file_name.clone();

        let debouncer_result = new_debouncer(
            config.debounce,
            None,
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    let touched = events
                        .iter()
                        .any(|event| event.paths.iter().any(|p| is_watched_file(p, &file_name)));
                    if touched {
                        debug!("{} changed on disk", file_name);
                        let _ = tx_clone.blocking_send(reload_message(&root));
                    }
                }
                Err(errors) => {
                    for error in errors {
                        warn!("Config watcher error: {:?}", error);
                        let _ = tx_clone.blocking_send(Message::WatcherError {
                            message: error.to_string(),
                        });
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create config watcher: {}", e);
                let _ = message_tx.blocking_send(Message::WatcherError {
                    message: format!("Failed to create watcher: {}", e),
                });
                return;
            }
        };

        if let Err(e) = debouncer.watch(&project_root, RecursiveMode::NonRecursive) {
            warn!("Failed to watch {}: {}", project_root.display(), e);
            let _ = message_tx.blocking_send(Message::WatcherError {
                message: e.to_string(),
            });
            return;
        }
        info!("Watching {}", project_root.join(&config.file_name).display());

        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    info!("Config watcher stopping");
                    break;
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn is_watched_file(path: &Path, file_name: &str) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(file_name)
}

/// Load the configuration and wrap the outcome as a message
pub fn reload_message(project_root: &Path) -> Message {
    match load_app_config(project_root) {
        Ok(config) => Message::ConfigurationReloaded(Box::new(config)),
        Err(e) => Message::ConfigReloadFailed {
            error: e.to_string(),
        },
    }
}
