//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use fforge_core::{AppConfiguration, CustomPage};
use fforge_gen::{BuildResult, GeneratedFile, PageGenerationResponse};

use crate::input_key::InputKey;
use crate::screen_view::OnboardingAction;
use crate::state::ConfigField;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Request to quit
    Quit,

    /// Dismiss the error banner
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Preview Navigator
    // ─────────────────────────────────────────────────────────
    /// Start a fresh preview session on the splash screen
    MountPreview,
    NavigateTo(String),
    PreviousScreen,
    NextScreen,
    ToggleTheme,
    /// Splash auto-advance elapsed
    SplashTimerFired {
        token: u64,
    },
    Onboarding(OnboardingAction),
    /// Horizontal drag released over the phone frame
    OnboardingDrag {
        offset: f32,
    },
    /// Move focus between the controls of the current screen
    FocusNext,
    FocusPrevious,
    /// Activate the focused control
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Configuration Editor
    // ─────────────────────────────────────────────────────────
    StartEdit(ConfigField),
    InputChar(char),
    InputBackspace,
    CommitEdit,
    CancelEdit,
    CycleTheme,
    TogglePage(String),
    RemoveCustomPage(usize),

    OpenPagesPanel,
    ClosePagesPanel,
    PagesCursorUp,
    PagesCursorDown,
    /// Toggle the standard page, or remove the custom page, under the cursor
    PagesPanelActivate,
    PagesPanelRemove,

    OpenPageDialog,
    ClosePageDialog,
    PageDialogNextField,
    SubmitPageDialog,
    /// Page generation finished (successfully or with fallback content)
    PageGenerated {
        page: CustomPage,
        response: PageGenerationResponse,
    },

    /// `fforge.toml` changed on disk and parsed
    ConfigurationReloaded(Box<AppConfiguration>),
    /// `fforge.toml` changed on disk but could not be loaded
    ConfigReloadFailed {
        error: String,
    },
    /// Watcher failed to start or reported an error
    WatcherError {
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Builder Workflow
    // ─────────────────────────────────────────────────────────
    StartPreview,
    BackToConfigure,
    ApproveAndGenerate,
    AppGenerated {
        files: Vec<GeneratedFile>,
    },
    AppGenerationFailed {
        error: String,
    },
    DownloadArchive,
    ArchiveWritten {
        path: PathBuf,
    },
    ArchiveFailed {
        error: String,
    },
    BuildProject,
    BuildFinished(BuildResult),
    BuildFailed {
        error: String,
    },
    StartOver,
}
