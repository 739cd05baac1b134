//! Configuration types for Flutter Forge
//!
//! Defines:
//! - `Settings` - Tool settings from `.fforge/config.toml`
//! - Section types for the generator, HTTP server, output, watcher and UI

use serde::{Deserialize, Serialize};
use std::time::Duration;

use fforge_gen::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application settings (.fforge/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub watcher: WatcherSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// LLM generator settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorSettings {
    /// Gemini model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// API root, overridable for proxies
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeneratorSettings {
    /// Client settings, reading the key from the configured variable
    pub fn to_gemini_config(&self) -> GeminiConfig {
        let api_key = std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        GeminiConfig {
            api_key,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// HTTP service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Listen address for `fforge serve`
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory served to browsers (relative to the project root)
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            public_dir: default_public_dir(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

/// Where archives and build workspaces go
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Directory for downloaded zip archives
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,

    /// Scratch directory for project builds
    #[serde(default = "default_workspace_dir")]
    pub workspace_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            archive_dir: default_archive_dir(),
            workspace_dir: default_workspace_dir(),
        }
    }
}

fn default_archive_dir() -> String {
    ".".to_string()
}

fn default_workspace_dir() -> String {
    ".fforge/builds".to_string()
}

/// Watcher for the app configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WatcherSettings {
    /// Reload `fforge.toml` when it changes
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Debounce duration in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Capture the mouse for swipe gestures in the preview
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { mouse: true }
    }
}
