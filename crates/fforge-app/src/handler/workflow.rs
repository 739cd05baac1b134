//! Builder workflow handlers: Configure -> Preview -> Generating -> Complete

use std::path::PathBuf;

use fforge_core::prelude::*;
use fforge_gen::{app_prompt, BuildResult, GeneratedFile};

use crate::state::{AppState, BuilderStep};

use super::{preview, UpdateAction, UpdateResult};

/// Validate the configuration and open a fresh full preview
pub(super) fn handle_start_preview(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.config.validate_for_preview() {
        state.set_error(e.to_string());
        return UpdateResult::none();
    }
    state.clear_error();
    state.step = BuilderStep::Preview;
    preview::mount(state)
}

pub(super) fn handle_back_to_configure(state: &mut AppState) -> UpdateResult {
    if state.step != BuilderStep::Preview {
        return UpdateResult::none();
    }
    state.step = BuilderStep::Configure;
    preview::mount(state)
}

pub(super) fn handle_approve(state: &mut AppState) -> UpdateResult {
    if state.step != BuilderStep::Preview {
        return UpdateResult::none();
    }
    state.clear_error();
    state.step = BuilderStep::Generating;
    state.generated_files.clear();
    state.build_result = None;
    state.archive_path = None;
    state.busy = Some("Generating your Flutter app...".to_string());
    info!("Preview approved, generating '{}'", state.config.app_name);

    UpdateResult::action(UpdateAction::GenerateApp {
        prompt: app_prompt(&state.config),
    })
}

pub(super) fn handle_app_generated(state: &mut AppState, files: Vec<GeneratedFile>) -> UpdateResult {
    state.busy = None;
    info!("App generated with {} files", files.len());
    state.status = Some(format!("Generated {} files", files.len()));
    state.generated_files = files;
    state.step = BuilderStep::Complete;
    UpdateResult::none()
}

pub(super) fn handle_app_generation_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.busy = None;
    error!("App generation failed: {}", error);
    state.set_error(error);
    state.step = BuilderStep::Configure;
    UpdateResult::none()
}

pub(super) fn handle_download(state: &mut AppState) -> UpdateResult {
    if state.generated_files.is_empty() {
        state.set_error("No files available for download");
        return UpdateResult::none();
    }
    state.busy = Some("Writing archive...".to_string());
    UpdateResult::action(UpdateAction::WriteArchive {
        app_name: state.config.app_name.clone(),
        files: state.generated_files.clone(),
    })
}

pub(super) fn handle_archive_written(state: &mut AppState, path: PathBuf) -> UpdateResult {
    state.busy = None;
    state.status = Some(format!("Saved {}", path.display()));
    state.archive_path = Some(path);
    UpdateResult::none()
}

pub(super) fn handle_archive_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.busy = None;
    state.set_error(format!("Error preparing download: {}", error));
    UpdateResult::none()
}

pub(super) fn handle_build(state: &mut AppState) -> UpdateResult {
    if state.generated_files.is_empty() {
        state.set_error("No generated project to build");
        return UpdateResult::none();
    }
    state.clear_error();
    state.busy = Some("Building project...".to_string());
    UpdateResult::action(UpdateAction::BuildProject {
        project_name: state.config.app_name.clone(),
        files: state.generated_files.clone(),
    })
}

pub(super) fn handle_build_finished(state: &mut AppState, result: BuildResult) -> UpdateResult {
    state.busy = None;
    state.status = Some(result.message.clone());
    state.build_result = Some(result);
    UpdateResult::none()
}

pub(super) fn handle_build_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.busy = None;
    state.set_error(error);
    UpdateResult::none()
}

/// Back to Configure with all results cleared; the configuration is kept
pub(super) fn handle_start_over(state: &mut AppState) -> UpdateResult {
    state.step = BuilderStep::Configure;
    state.generated_files.clear();
    state.build_result = None;
    state.archive_path = None;
    state.busy = None;
    state.status = None;
    state.clear_error();
    UpdateResult::none()
}
