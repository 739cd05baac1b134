//! Configuration file parsing for Flutter Forge
//!
//! Supports:
//! - `.fforge/config.toml` - Tool settings
//! - `fforge.toml` - The app configuration being previewed

pub mod settings;
pub mod types;

pub use settings::{
    app_config_path, init_config_dir, load_app_config, load_settings, parse_app_config,
    write_sample_app_config, APP_CONFIG_FILENAME,
};
pub use types::*;
