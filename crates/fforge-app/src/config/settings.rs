//! Settings parser for .fforge/config.toml and loader for fforge.toml

use super::types::Settings;
use fforge_core::prelude::*;
use fforge_core::AppConfiguration;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const FFORGE_DIR: &str = ".fforge";

/// App configuration file at the project root
pub const APP_CONFIG_FILENAME: &str = "fforge.toml";

pub fn app_config_path(project_path: &Path) -> PathBuf {
    project_path.join(APP_CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .fforge/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(FFORGE_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the default config file in .fforge/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let fforge_dir = project_path.join(FFORGE_DIR);

    if !fforge_dir.exists() {
        std::fs::create_dir_all(&fforge_dir)
            .map_err(|e| Error::config(format!("Failed to create .fforge dir: {}", e)))?;
    }

    let config_path = fforge_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Flutter Forge Configuration

[generator]
model = "gemini-2.5-flash"
api_key_env = "GEMINI_API_KEY"   # Variable holding the Gemini API key
base_url = "https://generativelanguage.googleapis.com"
timeout_secs = 120

[server]
bind = "127.0.0.1:5000"          # Address for `fforge serve`
public_dir = "public"            # Built previews land in public/flutter_apps/

[output]
archive_dir = "."                # Where zip downloads are written
workspace_dir = ".fforge/builds" # Scratch space for project builds

[watcher]
enabled = true                   # Reload fforge.toml on change
debounce_ms = 500

[ui]
mouse = true                     # Drag to swipe onboarding slides
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// App Configuration (fforge.toml)
// ─────────────────────────────────────────────────────────────────────────────

/// Parse an app configuration from TOML text
pub fn parse_app_config(content: &str) -> Result<AppConfiguration> {
    toml::from_str(content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", APP_CONFIG_FILENAME, e)))
}

/// Load fforge.toml, or the default configuration when there is none
///
/// A file that exists but does not parse is an error so that the caller
/// can report it instead of silently discarding the user's work.
pub fn load_app_config(project_path: &Path) -> Result<AppConfiguration> {
    let path = app_config_path(project_path);
    if !path.exists() {
        debug!("No {} at {:?}, starting from defaults", APP_CONFIG_FILENAME, path);
        return Ok(AppConfiguration::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let config = parse_app_config(&content)?;
    debug!(
        "Loaded app configuration '{}' with {} pages",
        config.app_name,
        config.pages.len() + config.custom_pages.len()
    );
    Ok(config)
}

/// Write a sample fforge.toml unless one exists
pub fn write_sample_app_config(project_path: &Path) -> Result<bool> {
    let path = app_config_path(project_path);
    if path.exists() {
        return Ok(false);
    }
    let content = r##"# Flutter Forge app configuration
# Edits are picked up live by `fforge preview`.

appName = "My App"
description = "Describe what your app does"
theme = "light"                  # light | dark | custom
pages = ["Splash Screen", "Home", "Profile", "Settings"]
# icon = "icon.png"

[colors]
primary = "#667EEA"
secondary = "#4F46E5"
accent = "#06B6D4"

[features]
firebase = false
supabaseDb = false
offlineMode = false

# [[customPages]]
# name = "Loyalty Card"
# description = "Collect a stamp for every purchase"
"##;
    std::fs::write(&path, content)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", APP_CONFIG_FILENAME, e)))?;
    info!("Created {:?}", path);
    Ok(true)
}
