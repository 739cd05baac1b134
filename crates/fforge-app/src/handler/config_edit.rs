//! Configuration editor handlers: fields, pages panel, custom page dialog

use fforge_core::prelude::*;
use fforge_core::{AppConfiguration, CustomPage};
use fforge_gen::{PageGenerationRequest, PageGenerationResponse};

use crate::state::{AppState, ConfigField, PageDialogState, PageRow, TextInputState, UiMode};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Field editing
// ─────────────────────────────────────────────────────────

pub(super) fn handle_start_edit(state: &mut AppState, field: ConfigField) -> UpdateResult {
    state.text_input = Some(TextInputState {
        field,
        buffer: field.current_value(&state.config).to_string(),
    });
    state.ui_mode = UiMode::TextInput;
    UpdateResult::none()
}

pub(super) fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    match state.ui_mode {
        UiMode::TextInput => {
            if let Some(input) = state.text_input.as_mut() {
                input.buffer.push(c);
            }
        }
        UiMode::PageDialog => state.page_dialog.focused_buffer().push(c),
        _ => {}
    }
    UpdateResult::none()
}

pub(super) fn handle_backspace(state: &mut AppState) -> UpdateResult {
    match state.ui_mode {
        UiMode::TextInput => {
            if let Some(input) = state.text_input.as_mut() {
                input.buffer.pop();
            }
        }
        UiMode::PageDialog => {
            state.page_dialog.focused_buffer().pop();
        }
        _ => {}
    }
    UpdateResult::none()
}

/// Apply the edited value; invalid colors keep the input open
pub(super) fn handle_commit_edit(state: &mut AppState) -> UpdateResult {
    let Some(input) = state.text_input.take() else {
        state.ui_mode = UiMode::Normal;
        return UpdateResult::none();
    };

    match input.field {
        ConfigField::AppName => state.config.app_name = input.buffer,
        ConfigField::Description => state.config.description = input.buffer,
        ConfigField::Color(slot) => {
            if let Err(e) = state.config.colors.set(slot, &input.buffer) {
                state.set_error(e.to_string());
                state.text_input = Some(input);
                return UpdateResult::none();
            }
        }
    }

    state.clear_error();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub(super) fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    state.text_input = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub(super) fn handle_cycle_theme(state: &mut AppState) -> UpdateResult {
    state.config.theme = state.config.theme.cycle();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────

pub(super) fn handle_toggle_page(state: &mut AppState, name: &str) -> UpdateResult {
    state.config.toggle_page(name);
    UpdateResult::none()
}

pub(super) fn handle_remove_custom_page(state: &mut AppState, index: usize) -> UpdateResult {
    if let Some(page) = state.config.remove_custom_page(index) {
        info!("Removed custom page '{}'", page.name);
        state.status = Some(format!("Removed page '{}'", page.name));
    }
    clamp_pages_cursor(state);
    UpdateResult::none()
}

fn clamp_pages_cursor(state: &mut AppState) {
    let rows = state.page_rows().len();
    state.pages_cursor = state.pages_cursor.min(rows.saturating_sub(1));
}

pub(super) fn handle_open_pages_panel(state: &mut AppState) -> UpdateResult {
    clamp_pages_cursor(state);
    state.ui_mode = UiMode::PagesPanel;
    UpdateResult::none()
}

pub(super) fn handle_close_pages_panel(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub(super) fn handle_pages_cursor_up(state: &mut AppState) -> UpdateResult {
    state.pages_cursor = state.pages_cursor.saturating_sub(1);
    UpdateResult::none()
}

pub(super) fn handle_pages_cursor_down(state: &mut AppState) -> UpdateResult {
    let last = state.page_rows().len().saturating_sub(1);
    state.pages_cursor = (state.pages_cursor + 1).min(last);
    UpdateResult::none()
}

pub(super) fn handle_pages_activate(state: &mut AppState) -> UpdateResult {
    match state.page_rows().get(state.pages_cursor) {
        Some(PageRow::Standard(name)) => handle_toggle_page(state, name),
        _ => UpdateResult::none(),
    }
}

pub(super) fn handle_pages_remove(state: &mut AppState) -> UpdateResult {
    match state.page_rows().get(state.pages_cursor) {
        Some(PageRow::Custom(index)) => handle_remove_custom_page(state, *index),
        _ => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────
// Custom page dialog
// ─────────────────────────────────────────────────────────

pub(super) fn handle_open_page_dialog(state: &mut AppState) -> UpdateResult {
    state.page_dialog = PageDialogState::default();
    state.ui_mode = UiMode::PageDialog;
    UpdateResult::none()
}

pub(super) fn handle_close_page_dialog(state: &mut AppState) -> UpdateResult {
    state.page_dialog = PageDialogState::default();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub(super) fn handle_dialog_next_field(state: &mut AppState) -> UpdateResult {
    state.page_dialog.next_field();
    UpdateResult::none()
}

/// Validate the form and request generation for the new page
pub(super) fn handle_submit_page_dialog(state: &mut AppState) -> UpdateResult {
    let page = match CustomPage::new(&state.page_dialog.name, &state.page_dialog.description) {
        Ok(page) => page,
        Err(e) => {
            state.set_error(e.to_string());
            return UpdateResult::none();
        }
    };

    let request = page_request(&page, &state.config);
    state.clear_error();
    state.page_dialog = PageDialogState::default();
    state.ui_mode = UiMode::Normal;
    state.pending_pages += 1;
    state.status = Some(format!("Generating page '{}'...", page.name));
    info!("Requesting generation for custom page '{}'", page.name);

    UpdateResult::action(UpdateAction::GeneratePage { page, request })
}

pub(crate) fn page_request(page: &CustomPage, config: &AppConfiguration) -> PageGenerationRequest {
    PageGenerationRequest {
        name: page.name.clone(),
        description: page.description.clone(),
        project_context: Some(config.project_context()),
        theme_colors: Some(config.colors.clone()),
    }
}

/// Attach generated or fallback content and add the page
pub(super) fn handle_page_generated(
    state: &mut AppState,
    page: CustomPage,
    response: PageGenerationResponse,
) -> UpdateResult {
    state.pending_pages = state.pending_pages.saturating_sub(1);

    let page = if response.success {
        state.status = Some(format!("Added page '{}'", page.name));
        page.with_generated(response.into_content())
    } else {
        let reason = response.error.as_deref().unwrap_or("Unknown error");
        warn!("Custom page '{}' added with fallback content: {}", page.name, reason);
        state.set_error(format!("AI Generation Error: {}", reason));
        page.with_fallback()
    };
    state.config.add_custom_page(page);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Config file reload
// ─────────────────────────────────────────────────────────

/// Replace the configuration; the navigator is left as is
pub(super) fn handle_config_reloaded(state: &mut AppState, config: AppConfiguration) -> UpdateResult {
    info!(
        "Configuration reloaded: '{}' with {} pages",
        config.app_name,
        config.pages.len() + config.custom_pages.len()
    );
    state.config = config;
    clamp_pages_cursor(state);
    state.status = Some("Reloaded fforge.toml".to_string());
    UpdateResult::none()
}

pub(super) fn handle_config_reload_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Keeping previous configuration: {}", error);
    state.set_error(error);
    UpdateResult::none()
}
