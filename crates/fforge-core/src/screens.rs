//! Screen registry: the ordered, de-duplicated set of navigable screens

use crate::types::AppConfiguration;

pub const SPLASH_SCREEN: &str = "Splash Screen";
pub const ONBOARDING: &str = "Onboarding";

/// Screens every preview starts with, in order
pub const CORE_SCREENS: [&str; 2] = [SPLASH_SCREEN, ONBOARDING];

/// Carousel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Ordered screen identifiers for one configuration
///
/// Always starts with the core screens; configured pages follow, then
/// custom page names, keeping only the first occurrence of each name.
/// Computed on demand from the configuration and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSet {
    screens: Vec<String>,
}

impl ScreenSet {
    pub fn compute(config: &AppConfiguration) -> Self {
        let mut screens: Vec<String> = CORE_SCREENS.iter().map(|s| s.to_string()).collect();

        let configured = config
            .pages
            .iter()
            .map(String::as_str)
            .chain(config.custom_pages.iter().map(|p| p.name.as_str()));

        for name in configured {
            if !screens.iter().any(|s| s == name) {
                screens.push(name.to_string());
            }
        }

        Self { screens }
    }

    pub fn index_of(&self, screen: &str) -> Option<usize> {
        self.screens.iter().position(|s| s == screen)
    }

    pub fn contains(&self, screen: &str) -> bool {
        self.index_of(screen).is_some()
    }

    /// Neighbor of `index` with wraparound at both ends
    ///
    /// An out-of-range index is clamped to the last entry first.
    pub fn neighbor(&self, index: usize, direction: Direction) -> &str {
        let len = self.screens.len();
        let index = index.min(len - 1);
        let target = match direction {
            Direction::Previous => (index + len - 1) % len,
            Direction::Next => (index + 1) % len,
        };
        &self.screens[target]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.screens.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Never true: the core screens are always present
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.screens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.screens
    }
}
