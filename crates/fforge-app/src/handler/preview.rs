//! Preview navigator message handlers

use fforge_core::prelude::*;

use crate::message::Message;
use crate::navigator::{NavOutcome, PreviewNavigator};
use crate::screen_view::{render_current, OnboardingAction, ScreenIntent};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Turn a navigator outcome into the loop's follow-up
///
/// Any move resets control focus; entering splash schedules its timer.
pub(super) fn apply_outcome(state: &mut AppState, outcome: NavOutcome) -> UpdateResult {
    match outcome {
        NavOutcome::Moved { timer } => {
            state.focus = 0;
            match timer {
                Some(timer) => UpdateResult::action(UpdateAction::ArmSplashTimer(timer)),
                None => UpdateResult::none(),
            }
        }
        NavOutcome::Rejected | NavOutcome::Unchanged => UpdateResult::none(),
    }
}

/// Replace the preview session with a fresh one
pub(super) fn mount(state: &mut AppState) -> UpdateResult {
    let (navigator, timer) = PreviewNavigator::mount();
    state.navigator = navigator;
    state.focus = 0;
    debug!("Preview mounted");
    UpdateResult::action(UpdateAction::ArmSplashTimer(timer))
}

pub(super) fn handle_navigate(state: &mut AppState, target: &str) -> UpdateResult {
    let outcome = state.navigator.navigate(target, &state.config);
    apply_outcome(state, outcome)
}

pub(super) fn handle_previous(state: &mut AppState) -> UpdateResult {
    let outcome = state.navigator.previous(&state.config);
    apply_outcome(state, outcome)
}

pub(super) fn handle_next(state: &mut AppState) -> UpdateResult {
    let outcome = state.navigator.next(&state.config);
    apply_outcome(state, outcome)
}

pub(super) fn handle_toggle_theme(state: &mut AppState) -> UpdateResult {
    let theme = state.navigator.toggle_theme();
    trace!("Preview theme: {}", theme.label());
    UpdateResult::none()
}

pub(super) fn handle_splash_timer(state: &mut AppState, token: u64) -> UpdateResult {
    let outcome = state.navigator.splash_timer_fired(token, &state.config);
    apply_outcome(state, outcome)
}

pub(super) fn handle_onboarding(state: &mut AppState, action: OnboardingAction) -> UpdateResult {
    let outcome = match action {
        OnboardingAction::Next => state.navigator.onboarding_forward(&state.config),
        OnboardingAction::Back => state.navigator.onboarding_back(),
        OnboardingAction::Skip => state.navigator.onboarding_skip(&state.config),
    };
    apply_outcome(state, outcome)
}

pub(super) fn handle_drag(state: &mut AppState, offset: f32) -> UpdateResult {
    let outcome = state.navigator.onboarding_drag(offset);
    apply_outcome(state, outcome)
}

fn control_count(state: &AppState) -> usize {
    render_current(&state.navigator, &state.config).controls().len()
}

pub(super) fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    let count = control_count(state);
    if count > 0 {
        state.focus = (state.focus + 1) % count;
    }
    UpdateResult::none()
}

pub(super) fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    let count = control_count(state);
    if count > 0 {
        state.focus = (state.focus + count - 1) % count;
    }
    UpdateResult::none()
}

/// Activate the focused control by emitting its intent as a message
pub(super) fn handle_activate(state: &mut AppState) -> UpdateResult {
    let view = render_current(&state.navigator, &state.config);
    let controls = view.controls();
    if controls.is_empty() {
        return UpdateResult::none();
    }
    let control = controls[state.focus % controls.len()];
    match &control.intent {
        Some(intent) => UpdateResult::message(intent_message(intent)),
        None => UpdateResult::none(),
    }
}

pub(crate) fn intent_message(intent: &ScreenIntent) -> Message {
    match intent {
        ScreenIntent::Navigate(target) => Message::NavigateTo(target.clone()),
        ScreenIntent::ToggleTheme => Message::ToggleTheme,
        ScreenIntent::Onboarding(action) => Message::Onboarding(*action),
    }
}
