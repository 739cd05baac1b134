//! # fforge-core - Core Domain Types
//!
//! Foundation crate for Flutter Forge. Provides the app configuration model,
//! the page classifier, the screen registry, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppConfiguration`] - The app concept being built (name, colors, pages)
//! - [`CustomPage`] - User-described page with optional generated content
//! - [`ThemeChoice`], [`PreviewTheme`], [`ThemeColors`] - Theme selection
//!
//! ### Classification (`classify`)
//! - [`classify()`] - Ordered keyword rules mapping a page to an [`Archetype`]
//!
//! ### Screen Registry (`screens`)
//! - [`ScreenSet`] - Ordered, de-duplicated navigable screens
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use fforge_core::prelude::*;
//! ```

pub mod classify;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod screens;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use classify::{classify, Archetype};
pub use error::{Error, Result};
pub use screens::{Direction, ScreenSet, CORE_SCREENS, ONBOARDING, SPLASH_SCREEN};
pub use types::{
    is_hex_color, route_name, screen_class_name, screen_file_path, snake_case_name, AppConfiguration,
    AppPhase, ColorSlot, CustomPage, FeatureFlags, PageContent, PreviewTheme, ThemeChoice,
    ThemeColors, STANDARD_PAGES,
};
