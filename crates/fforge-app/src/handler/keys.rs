//! Key event handlers for the UI modes

use fforge_core::ColorSlot;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::screen_view::OnboardingAction;
use crate::state::{AppState, BuilderStep, ConfigField, DialogField, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::TextInput => handle_key_text_input(key),
        UiMode::PageDialog => handle_key_page_dialog(state, key),
        UiMode::PagesPanel => handle_key_pages_panel(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_text_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Enter => Some(Message::CommitEdit),
        InputKey::Esc => Some(Message::CancelEdit),
        _ => None,
    }
}

fn handle_key_page_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::PageDialogNextField)
        }
        InputKey::Enter => match state.page_dialog.focus {
            DialogField::Name => Some(Message::PageDialogNextField),
            DialogField::Description => Some(Message::SubmitPageDialog),
        },
        InputKey::Esc => Some(Message::ClosePageDialog),
        _ => None,
    }
}

fn handle_key_pages_panel(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Up | InputKey::Char('k') => Some(Message::PagesCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::PagesCursorDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::PagesPanelActivate),
        InputKey::Char('d') | InputKey::Delete => Some(Message::PagesPanelRemove),
        InputKey::Esc | InputKey::Char('p') | InputKey::Char('q') => Some(Message::ClosePagesPanel),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Esc if state.error.is_some() => return Some(Message::DismissError),
        _ => {}
    }

    if state.step.shows_preview() {
        if let Some(msg) = preview_key(key) {
            return Some(msg);
        }
    }

    match state.step {
        BuilderStep::Configure => configure_key(key),
        BuilderStep::Preview => match key {
            InputKey::Char('g') => Some(Message::ApproveAndGenerate),
            InputKey::Char('b') | InputKey::Esc => Some(Message::BackToConfigure),
            _ => None,
        },
        BuilderStep::Generating => None,
        BuilderStep::Complete => match key {
            InputKey::Char('z') => Some(Message::DownloadArchive),
            InputKey::Char('b') => Some(Message::BuildProject),
            InputKey::Char('r') => Some(Message::StartOver),
            _ => None,
        },
    }
}

/// Keys driving the phone preview
fn preview_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left => Some(Message::PreviousScreen),
        InputKey::Right => Some(Message::NextScreen),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevious),
        InputKey::Enter => Some(Message::ActivateFocused),
        InputKey::Char('h') => Some(Message::Onboarding(OnboardingAction::Back)),
        InputKey::Char('l') => Some(Message::Onboarding(OnboardingAction::Next)),
        InputKey::Char('s') => Some(Message::Onboarding(OnboardingAction::Skip)),
        InputKey::Home => Some(Message::MountPreview),
        _ => None,
    }
}

fn configure_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('1') => Some(Message::StartEdit(ConfigField::AppName)),
        InputKey::Char('2') => Some(Message::StartEdit(ConfigField::Description)),
        InputKey::Char('3') => Some(Message::StartEdit(ConfigField::Color(ColorSlot::Primary))),
        InputKey::Char('4') => Some(Message::StartEdit(ConfigField::Color(ColorSlot::Secondary))),
        InputKey::Char('5') => Some(Message::StartEdit(ConfigField::Color(ColorSlot::Accent))),
        InputKey::Char('m') => Some(Message::CycleTheme),
        InputKey::Char('p') => Some(Message::OpenPagesPanel),
        InputKey::Char('n') => Some(Message::OpenPageDialog),
        InputKey::Char('v') => Some(Message::StartPreview),
        _ => None,
    }
}
