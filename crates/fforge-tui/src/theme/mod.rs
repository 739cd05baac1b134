//! Centralized theme system for the builder chrome and the phone preview.
//!
//! This module provides:
//! - `palette` - Chrome color constants and preview color resolution
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;
