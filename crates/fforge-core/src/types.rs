//! Core domain type definitions: the app configuration being built

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Application state enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Application is initializing
    #[default]
    Initializing,
    /// Builder loop is running
    Running,
    /// Application is shutting down
    Quitting,
}

/// Standard page catalogue offered by the configuration editor
pub const STANDARD_PAGES: [&str; 11] = [
    "Splash Screen",
    "Login",
    "Register",
    "Home",
    "Profile",
    "Settings",
    "Chat",
    "Notifications",
    "Search",
    "Dashboard",
    "About",
];

// ─────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────

/// Theme selector stored in the configuration (display-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
    Custom,
}

impl ThemeChoice {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
            ThemeChoice::Custom => "custom",
        }
    }

    /// Next choice in editor order, wrapping around
    pub fn cycle(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Custom,
            ThemeChoice::Custom => ThemeChoice::Light,
        }
    }
}

/// Light/dark mode of a running preview, owned by the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTheme {
    #[default]
    Light,
    Dark,
}

impl PreviewTheme {
    pub fn toggled(self) -> Self {
        match self {
            PreviewTheme::Light => PreviewTheme::Dark,
            PreviewTheme::Dark => PreviewTheme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreviewTheme::Light => "Light",
            PreviewTheme::Dark => "Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, PreviewTheme::Dark)
    }
}

/// Which of the three configured colors a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
}

impl ColorSlot {
    pub fn label(&self) -> &'static str {
        match self {
            ColorSlot::Primary => "Primary",
            ColorSlot::Secondary => "Secondary",
            ColorSlot::Accent => "Accent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#667EEA".to_string(),
            secondary: "#4F46E5".to_string(),
            accent: "#06B6D4".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::Accent => &self.accent,
        }
    }

    /// Set a color from the editor; only `#RRGGBB` values are accepted
    pub fn set(&mut self, slot: ColorSlot, value: &str) -> Result<()> {
        let value = value.trim();
        if !is_hex_color(value) {
            return Err(Error::validation(format!(
                "{} color must be a #RRGGBB hex value, got '{}'",
                slot.label(),
                value
            )));
        }
        let target = match slot {
            ColorSlot::Primary => &mut self.primary,
            ColorSlot::Secondary => &mut self.secondary,
            ColorSlot::Accent => &mut self.accent,
        };
        *target = value.to_string();
        Ok(())
    }
}

/// Optional integrations requested for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    pub firebase: bool,
    pub supabase_db: bool,
    pub offline_mode: bool,
}

// ─────────────────────────────────────────────────────────────────
// Custom pages
// ─────────────────────────────────────────────────────────────────

/// Generated content for a custom page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageContent {
    pub code: String,
    pub pubspec_yaml: Option<String>,
    pub widget_structure: Option<String>,
}

/// A user-described page, optionally carrying AI-generated content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPage {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubspec_yaml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
}

impl CustomPage {
    /// Create a page from form input; both fields must be non-blank
    pub fn new(name: &str, description: &str) -> Result<Self> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(Error::validation(
                "Please provide both page name and description",
            ));
        }
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            code: None,
            pubspec_yaml: None,
            widget_structure: None,
            screen_file_path: None,
            class_name: None,
            route_name: None,
        })
    }

    /// Attach generated content along with the derived file/class/route names
    pub fn with_generated(mut self, content: PageContent) -> Self {
        self.code = Some(content.code);
        self.pubspec_yaml = content.pubspec_yaml;
        self.widget_structure = content.widget_structure;
        self.fill_derived_names();
        self
    }

    /// Attach the stub used when generation failed
    pub fn with_fallback(mut self) -> Self {
        self.code = Some(fallback_stub(&self.description));
        self.pubspec_yaml = None;
        self.widget_structure = None;
        self.fill_derived_names();
        self
    }

    fn fill_derived_names(&mut self) {
        self.screen_file_path = Some(screen_file_path(&self.name));
        self.class_name = Some(screen_class_name(&self.name));
        self.route_name = Some(route_name(&self.name));
    }

    /// Whether content has been attached; the renderer shows this distinctly
    pub fn is_generated(&self) -> bool {
        self.code.is_some()
    }

    pub fn resolved_file_path(&self) -> String {
        self.screen_file_path
            .clone()
            .unwrap_or_else(|| screen_file_path(&self.name))
    }

    pub fn resolved_class_name(&self) -> String {
        self.class_name
            .clone()
            .unwrap_or_else(|| screen_class_name(&self.name))
    }

    pub fn resolved_route_name(&self) -> String {
        self.route_name
            .clone()
            .unwrap_or_else(|| route_name(&self.name))
    }
}

fn fallback_stub(description: &str) -> String {
    format!(
        "// AI generation failed, but page structure created\n// {}",
        description
    )
}

// ─────────────────────────────────────────────────────────────────
// App configuration
// ─────────────────────────────────────────────────────────────────

/// The app concept being built: everything the preview and prompts read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfiguration {
    pub app_name: String,
    pub description: String,
    pub theme: ThemeChoice,
    pub colors: ThemeColors,
    /// Ordered standard page names; duplicates are allowed here
    pub pages: Vec<String>,
    pub custom_pages: Vec<CustomPage>,
    pub features: FeatureFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Default for AppConfiguration {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            description: String::new(),
            theme: ThemeChoice::default(),
            colors: ThemeColors::default(),
            pages: vec!["Splash Screen".to_string(), "Home".to_string()],
            custom_pages: Vec::new(),
            features: FeatureFlags::default(),
            icon: None,
        }
    }
}

impl AppConfiguration {
    pub fn is_ready_for_preview(&self) -> bool {
        !self.app_name.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn validate_for_preview(&self) -> Result<()> {
        if self.is_ready_for_preview() {
            Ok(())
        } else {
            Err(Error::validation("Please provide app name and description"))
        }
    }

    pub fn has_page(&self, name: &str) -> bool {
        self.pages.iter().any(|p| p == name)
    }

    /// Remove every occurrence of a standard page, or append it when absent
    pub fn toggle_page(&mut self, name: &str) {
        if self.has_page(name) {
            self.pages.retain(|p| p != name);
        } else {
            self.pages.push(name.to_string());
        }
    }

    pub fn add_custom_page(&mut self, page: CustomPage) {
        self.custom_pages.push(page);
    }

    /// Remove a custom page by position; out-of-range is a no-op
    pub fn remove_custom_page(&mut self, index: usize) -> Option<CustomPage> {
        if index < self.custom_pages.len() {
            Some(self.custom_pages.remove(index))
        } else {
            None
        }
    }

    /// First custom page with this name (names are not unique)
    pub fn find_custom_page(&self, name: &str) -> Option<&CustomPage> {
        self.custom_pages.iter().find(|p| p.name == name)
    }

    /// Context line handed to page generation
    pub fn project_context(&self) -> String {
        format!("{}: {}", self.app_name, self.description)
    }

    /// App name shown in the preview, with a placeholder while blank
    pub fn display_name(&self) -> &str {
        if self.app_name.trim().is_empty() {
            "Your App"
        } else {
            &self.app_name
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Derived names
// ─────────────────────────────────────────────────────────────────

/// Lower-case name with whitespace runs replaced by `_`
pub fn snake_case_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

pub fn screen_file_path(name: &str) -> String {
    format!("lib/screens/{}_screen.dart", snake_case_name(name))
}

pub fn screen_class_name(name: &str) -> String {
    let compact: String = name.split_whitespace().collect();
    format!("{}Screen", compact)
}

pub fn route_name(name: &str) -> String {
    format!("/{}", snake_case_name(name))
}

/// `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
