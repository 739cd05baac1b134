//! Main update function - handles state transitions (TEA pattern)

use fforge_core::prelude::*;
use fforge_core::AppPhase;

use crate::message::Message;
use crate::state::AppState;

use super::{config_edit, keys::handle_key, preview, workflow, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the event loop to execute
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::DismissError => {
            state.clear_error();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Preview Navigator
        // ─────────────────────────────────────────────────────────
        Message::MountPreview => {
            if state.phase == AppPhase::Initializing {
                state.phase = AppPhase::Running;
            }
            preview::mount(state)
        }
        Message::NavigateTo(target) => preview::handle_navigate(state, &target),
        Message::PreviousScreen => preview::handle_previous(state),
        Message::NextScreen => preview::handle_next(state),
        Message::ToggleTheme => preview::handle_toggle_theme(state),
        Message::SplashTimerFired { token } => preview::handle_splash_timer(state, token),
        Message::Onboarding(action) => preview::handle_onboarding(state, action),
        Message::OnboardingDrag { offset } => preview::handle_drag(state, offset),
        Message::FocusNext => preview::handle_focus_next(state),
        Message::FocusPrevious => preview::handle_focus_previous(state),
        Message::ActivateFocused => preview::handle_activate(state),

        // ─────────────────────────────────────────────────────────
        // Configuration Editor
        // ─────────────────────────────────────────────────────────
        Message::StartEdit(field) => config_edit::handle_start_edit(state, field),
        Message::InputChar(c) => config_edit::handle_input_char(state, c),
        Message::InputBackspace => config_edit::handle_backspace(state),
        Message::CommitEdit => config_edit::handle_commit_edit(state),
        Message::CancelEdit => config_edit::handle_cancel_edit(state),
        Message::CycleTheme => config_edit::handle_cycle_theme(state),
        Message::TogglePage(name) => config_edit::handle_toggle_page(state, &name),
        Message::RemoveCustomPage(index) => config_edit::handle_remove_custom_page(state, index),

        Message::OpenPagesPanel => config_edit::handle_open_pages_panel(state),
        Message::ClosePagesPanel => config_edit::handle_close_pages_panel(state),
        Message::PagesCursorUp => config_edit::handle_pages_cursor_up(state),
        Message::PagesCursorDown => config_edit::handle_pages_cursor_down(state),
        Message::PagesPanelActivate => config_edit::handle_pages_activate(state),
        Message::PagesPanelRemove => config_edit::handle_pages_remove(state),

        Message::OpenPageDialog => config_edit::handle_open_page_dialog(state),
        Message::ClosePageDialog => config_edit::handle_close_page_dialog(state),
        Message::PageDialogNextField => config_edit::handle_dialog_next_field(state),
        Message::SubmitPageDialog => config_edit::handle_submit_page_dialog(state),
        Message::PageGenerated { page, response } => {
            config_edit::handle_page_generated(state, page, response)
        }

        Message::ConfigurationReloaded(config) => config_edit::handle_config_reloaded(state, *config),
        Message::ConfigReloadFailed { error } => config_edit::handle_config_reload_failed(state, error),
        Message::WatcherError { message } => {
            warn!("Config watcher: {}", message);
            state.set_error(format!("Watcher error: {}", message));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Builder Workflow
        // ─────────────────────────────────────────────────────────
        Message::StartPreview => workflow::handle_start_preview(state),
        Message::BackToConfigure => workflow::handle_back_to_configure(state),
        Message::ApproveAndGenerate => workflow::handle_approve(state),
        Message::AppGenerated { files } => workflow::handle_app_generated(state, files),
        Message::AppGenerationFailed { error } => workflow::handle_app_generation_failed(state, error),
        Message::DownloadArchive => workflow::handle_download(state),
        Message::ArchiveWritten { path } => workflow::handle_archive_written(state, path),
        Message::ArchiveFailed { error } => workflow::handle_archive_failed(state, error),
        Message::BuildProject => workflow::handle_build(state),
        Message::BuildFinished(result) => workflow::handle_build_finished(state, result),
        Message::BuildFailed { error } => workflow::handle_build_failed(state, error),
        Message::StartOver => workflow::handle_start_over(state),
    }
}
