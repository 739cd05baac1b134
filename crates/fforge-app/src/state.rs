//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use fforge_core::{AppConfiguration, AppPhase, ColorSlot, STANDARD_PAGES};
use fforge_gen::{BuildResult, GeneratedFile};

use crate::config::Settings;
use crate::navigator::PreviewNavigator;

/// Builder workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderStep {
    /// Editing the configuration with a live preview
    #[default]
    Configure,
    /// Full preview awaiting approval
    Preview,
    /// Waiting for app generation
    Generating,
    /// Generated files available for download or build
    Complete,
}

impl BuilderStep {
    pub fn label(&self) -> &'static str {
        match self {
            BuilderStep::Configure => "Configure",
            BuilderStep::Preview => "Preview",
            BuilderStep::Generating => "Generating",
            BuilderStep::Complete => "Complete",
        }
    }

    /// Steps with an interactive phone preview
    pub fn shows_preview(&self) -> bool {
        matches!(self, BuilderStep::Configure | BuilderStep::Preview)
    }
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// Editing one configuration field
    TextInput,
    /// Custom page form
    PageDialog,
    /// Page list with toggles
    PagesPanel,
}

/// Configuration field editable from the text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    AppName,
    Description,
    Color(ColorSlot),
}

impl ConfigField {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::AppName => "App Name",
            ConfigField::Description => "Description",
            ConfigField::Color(slot) => slot.label(),
        }
    }

    pub fn current_value<'a>(&self, config: &'a AppConfiguration) -> &'a str {
        match self {
            ConfigField::AppName => &config.app_name,
            ConfigField::Description => &config.description,
            ConfigField::Color(slot) => config.colors.get(*slot),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputState {
    pub field: ConfigField,
    pub buffer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Name,
    Description,
}

/// Custom page form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDialogState {
    pub name: String,
    pub description: String,
    pub focus: DialogField,
}

impl PageDialogState {
    pub fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            DialogField::Name => &mut self.name,
            DialogField::Description => &mut self.description,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            DialogField::Name => DialogField::Description,
            DialogField::Description => DialogField::Name,
        };
    }
}

/// Row of the pages panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRow {
    Standard(&'static str),
    Custom(usize),
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub step: BuilderStep,
    pub ui_mode: UiMode,

    /// Directory holding `fforge.toml` and `.fforge/`
    pub project_path: PathBuf,
    pub settings: Settings,
    pub config: AppConfiguration,

    pub navigator: PreviewNavigator,
    /// Index into the current screen's actionable controls
    pub focus: usize,

    pub text_input: Option<TextInputState>,
    pub page_dialog: PageDialogState,
    pub pages_cursor: usize,
    /// Custom pages waiting for generation
    pub pending_pages: usize,

    pub generated_files: Vec<GeneratedFile>,
    pub build_result: Option<BuildResult>,
    pub archive_path: Option<PathBuf>,
    /// Label of the background job in flight, if any
    pub busy: Option<String>,

    pub error: Option<String>,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(project_path: PathBuf, settings: Settings, config: AppConfiguration) -> Self {
        let (navigator, _) = PreviewNavigator::mount();
        Self {
            phase: AppPhase::Initializing,
            step: BuilderStep::Configure,
            ui_mode: UiMode::Normal,
            project_path,
            settings,
            config,
            navigator,
            focus: 0,
            text_input: None,
            page_dialog: PageDialogState::default(),
            pages_cursor: 0,
            pending_pages: 0,
            generated_files: Vec::new(),
            build_result: None,
            archive_path: None,
            busy: None,
            error: None,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Standard catalogue followed by the custom pages
    pub fn page_rows(&self) -> Vec<PageRow> {
        STANDARD_PAGES
            .into_iter()
            .map(PageRow::Standard)
            .chain((0..self.config.custom_pages.len()).map(PageRow::Custom))
            .collect()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Directory archives are written to
    pub fn archive_dir(&self) -> PathBuf {
        self.project_path.join(&self.settings.output.archive_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(PathBuf::from("/tmp/app"), Settings::default(), AppConfiguration::default())
    }

    #[test]
    fn test_new_state_starts_on_configure_with_fresh_preview() {
        let state = state();
        assert_eq!(state.phase, AppPhase::Initializing);
        assert_eq!(state.step, BuilderStep::Configure);
        assert_eq!(state.navigator.current_screen(), "Splash Screen");
        assert!(!state.should_quit());
    }

    #[test]
    fn test_page_rows_list_catalogue_then_custom() {
        let mut state = state();
        state
            .config
            .add_custom_page(fforge_core::CustomPage::new("Loyalty", "stamps").unwrap());
        let rows = state.page_rows();
        assert_eq!(rows.len(), STANDARD_PAGES.len() + 1);
        assert_eq!(rows[0], PageRow::Standard("Splash Screen"));
        assert_eq!(rows.last(), Some(&PageRow::Custom(0)));
    }

    #[test]
    fn test_dialog_field_cycle() {
        let mut dialog = PageDialogState::default();
        dialog.focused_buffer().push('a');
        dialog.next_field();
        dialog.focused_buffer().push('b');
        assert_eq!(dialog.name, "a");
        assert_eq!(dialog.description, "b");
        dialog.next_field();
        assert_eq!(dialog.focus, DialogField::Name);
    }

    #[test]
    fn test_archive_dir_is_relative_to_project() {
        assert_eq!(state().archive_dir(), PathBuf::from("/tmp/app/."));
    }
}
