//! Tests for the update function and key handling

use std::path::PathBuf;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::screen_view::OnboardingAction;
use crate::state::{AppState, BuilderStep, ConfigField, UiMode};
use fforge_core::{AppConfiguration, AppPhase, ColorSlot, CustomPage, PreviewTheme, ThemeChoice};
use fforge_gen::{BuildResult, GeneratedFile, PageGenerationResponse};

fn test_state() -> AppState {
    let config = AppConfiguration {
        app_name: "Bloom".into(),
        description: "Plant care reminders".into(),
        pages: vec!["Splash Screen".into(), "Home".into(), "Profile".into()],
        ..Default::default()
    };
    AppState::new(PathBuf::from("/tmp/bloom"), Settings::default(), config)
}

/// Run a message and every follow-up, collecting the requested actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn sample_files() -> Vec<GeneratedFile> {
    vec![GeneratedFile::new("lib/main.dart", "void main() {}")]
}

// ─────────────────────────────────────────────────────────
// Global keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_keys() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('q'));
    assert_eq!(state.phase, AppPhase::Quitting);

    let mut state = test_state();
    state.ui_mode = UiMode::PageDialog;
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_q_in_text_input_is_text() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('1'));
    assert_eq!(state.ui_mode, UiMode::TextInput);
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.text_input.as_ref().unwrap().buffer, "Bloomq");
}

#[test]
fn test_mount_preview_enters_running_and_arms_timer() {
    let mut state = test_state();
    let actions = run(&mut state, Message::MountPreview);
    assert_eq!(state.phase, AppPhase::Running);
    assert!(matches!(actions.as_slice(), [UpdateAction::ArmSplashTimer(_)]));
}

// ─────────────────────────────────────────────────────────
// Preview navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_arrow_keys_walk_the_carousel() {
    let mut state = test_state();
    press(&mut state, InputKey::Right);
    assert_eq!(state.navigator.current_screen(), "Onboarding");
    press(&mut state, InputKey::Right);
    assert_eq!(state.navigator.current_screen(), "Home");
    press(&mut state, InputKey::Left);
    press(&mut state, InputKey::Left);
    assert_eq!(state.navigator.current_screen(), "Splash Screen");

    // wrapping back onto splash re-arms the timer
    let actions = press(&mut state, InputKey::Left);
    assert_eq!(state.navigator.current_screen(), "Profile");
    assert!(actions.is_empty());
    let actions = press(&mut state, InputKey::Right);
    assert_eq!(state.navigator.current_screen(), "Splash Screen");
    assert!(matches!(actions.as_slice(), [UpdateAction::ArmSplashTimer(_)]));
}

#[test]
fn test_late_splash_timer_is_ignored_after_navigation() {
    let mut state = test_state();
    let actions = run(&mut state, Message::MountPreview);
    let token = match actions.as_slice() {
        [UpdateAction::ArmSplashTimer(timer)] => timer.token,
        other => panic!("unexpected actions: {:?}", other),
    };

    run(&mut state, Message::NavigateTo("Home".into()));
    run(&mut state, Message::SplashTimerFired { token });
    assert_eq!(state.navigator.current_screen(), "Home");
}

#[test]
fn test_theme_toggle_key() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.navigator.current_theme(), PreviewTheme::Dark);
    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.navigator.current_theme(), PreviewTheme::Light);
    assert_eq!(state.navigator.current_screen(), "Splash Screen");
}

#[test]
fn test_activate_focused_control_follows_intent() {
    let mut state = test_state();
    // splash has a single "Get Started" control
    press(&mut state, InputKey::Enter);
    assert_eq!(state.navigator.current_screen(), "Onboarding");

    // onboarding: Skip is first, Next second (Back is disabled)
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, 1);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.navigator.onboarding().slide(), 1);
    assert_eq!(state.focus, 0);

    press(&mut state, InputKey::Enter);
    assert_eq!(state.navigator.current_screen(), "Home");
}

#[test]
fn test_focus_wraps_over_controls() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo("Home".into()));
    // toggle + profile card
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.focus, 1);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, 0);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.navigator.current_theme(), PreviewTheme::Dark);
}

#[test]
fn test_onboarding_keys_and_drag() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo("Onboarding".into()));
    press(&mut state, InputKey::Char('l'));
    press(&mut state, InputKey::Char('l'));
    assert_eq!(state.navigator.onboarding().slide(), 2);
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.navigator.onboarding().slide(), 1);
    run(&mut state, Message::OnboardingDrag { offset: 120.0 });
    assert_eq!(state.navigator.onboarding().slide(), 0);
    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.navigator.current_screen(), "Home");
}

#[test]
fn test_onboarding_skip_without_home_uses_second_page() {
    let mut state = test_state();
    state.config.pages = vec!["Splash Screen".into(), "Login".into(), "Register".into()];
    run(&mut state, Message::NavigateTo("Onboarding".into()));
    run(&mut state, Message::Onboarding(OnboardingAction::Skip));
    assert_eq!(state.navigator.current_screen(), "Login");
}

// ─────────────────────────────────────────────────────────
// Configuration editor
// ─────────────────────────────────────────────────────────

#[test]
fn test_edit_app_name() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('1'));
    for _ in 0.."Bloom".len() {
        press(&mut state, InputKey::Backspace);
    }
    type_text(&mut state, "Sprout");
    press(&mut state, InputKey::Enter);
    assert_eq!(state.config.app_name, "Sprout");
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_cancel_edit_keeps_value() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    type_text(&mut state, " extra");
    press(&mut state, InputKey::Esc);
    assert_eq!(state.config.description, "Plant care reminders");
    assert!(state.text_input.is_none());
}

#[test]
fn test_invalid_color_keeps_input_open() {
    let mut state = test_state();
    run(&mut state, Message::StartEdit(ConfigField::Color(ColorSlot::Accent)));
    state.text_input.as_mut().unwrap().buffer = "teal".into();
    run(&mut state, Message::CommitEdit);
    assert!(state.error.is_some());
    assert_eq!(state.ui_mode, UiMode::TextInput);
    assert_eq!(state.config.colors.accent, "#06B6D4");

    state.text_input.as_mut().unwrap().buffer = "#00AA88".into();
    run(&mut state, Message::CommitEdit);
    assert!(state.error.is_none());
    assert_eq!(state.config.colors.accent, "#00AA88");
}

#[test]
fn test_cycle_theme_choice() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('m'));
    assert_eq!(state.config.theme, ThemeChoice::Dark);
    // preview mode is independent of the configured theme
    assert_eq!(state.navigator.current_theme(), PreviewTheme::Light);
}

#[test]
fn test_pages_panel_toggles_and_removes() {
    let mut state = test_state();
    state
        .config
        .add_custom_page(CustomPage::new("Loyalty Card", "stamps").unwrap());

    press(&mut state, InputKey::Char('p'));
    assert_eq!(state.ui_mode, UiMode::PagesPanel);

    // row 1 is "Login"
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert!(state.config.has_page("Login"));
    press(&mut state, InputKey::Char(' '));
    assert!(!state.config.has_page("Login"));

    // 'd' on a standard row does nothing
    press(&mut state, InputKey::Char('d'));
    assert_eq!(state.config.custom_pages.len(), 1);

    for _ in 0..20 {
        press(&mut state, InputKey::Down);
    }
    assert_eq!(state.pages_cursor, 11);
    press(&mut state, InputKey::Char('d'));
    assert!(state.config.custom_pages.is_empty());
    assert_eq!(state.pages_cursor, 10);

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_remove_custom_page_out_of_range_is_noop() {
    let mut state = test_state();
    run(&mut state, Message::RemoveCustomPage(3));
    assert!(state.config.custom_pages.is_empty());
    assert!(state.status.is_none());
}

#[test]
fn test_stale_screen_survives_page_removal() {
    let mut state = test_state();
    state
        .config
        .add_custom_page(CustomPage::new("Loyalty Card", "stamps").unwrap());
    run(&mut state, Message::NavigateTo("Loyalty Card".into()));
    run(&mut state, Message::RemoveCustomPage(0));
    assert_eq!(state.navigator.current_screen(), "Loyalty Card");

    press(&mut state, InputKey::Right);
    assert_eq!(state.navigator.current_screen(), "Onboarding");
}

#[test]
fn test_page_dialog_requires_both_fields() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.ui_mode, UiMode::PageDialog);
    type_text(&mut state, "Rewards");
    press(&mut state, InputKey::Enter); // to description
    let actions = press(&mut state, InputKey::Enter);
    assert!(actions.is_empty());
    assert_eq!(
        state.error.as_deref(),
        Some("Please provide both page name and description")
    );
    assert_eq!(state.ui_mode, UiMode::PageDialog);
}

#[test]
fn test_page_dialog_submit_requests_generation() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, " Loyalty Card ");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Collect stamps");
    let actions = press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.pending_pages, 1);
    // the page is only added once generation reports back
    assert!(state.config.custom_pages.is_empty());
    match actions.as_slice() {
        [UpdateAction::GeneratePage { page, request }] => {
            assert_eq!(page.name, "Loyalty Card");
            assert_eq!(
                request.project_context.as_deref(),
                Some("Bloom: Plant care reminders")
            );
            assert_eq!(request.theme_colors.as_ref(), Some(&state.config.colors));
        }
        other => panic!("unexpected actions: {:?}", other),
    }
}

#[test]
fn test_page_generated_success_attaches_content() {
    let mut state = test_state();
    state.pending_pages = 1;
    let page = CustomPage::new("Loyalty Card", "Collect stamps").unwrap();
    let response = PageGenerationResponse {
        success: true,
        code: "class LoyaltyCardScreen {}".into(),
        pubspec_yaml: "name: loyalty".into(),
        widget_structure: "Scaffold".into(),
        error: None,
    };
    run(&mut state, Message::PageGenerated { page, response });

    assert_eq!(state.pending_pages, 0);
    let added = &state.config.custom_pages[0];
    assert_eq!(added.code.as_deref(), Some("class LoyaltyCardScreen {}"));
    assert_eq!(
        added.screen_file_path.as_deref(),
        Some("lib/screens/loyalty_card_screen.dart")
    );
    assert!(state.error.is_none());
}

#[test]
fn test_page_generated_failure_adds_fallback_and_reports() {
    let mut state = test_state();
    let page = CustomPage::new("Loyalty Card", "Collect stamps").unwrap();
    let response = PageGenerationResponse {
        success: false,
        code: "fallback".into(),
        pubspec_yaml: String::new(),
        widget_structure: String::new(),
        error: Some("quota exceeded".into()),
    };
    run(&mut state, Message::PageGenerated { page, response });

    assert_eq!(
        state.error.as_deref(),
        Some("AI Generation Error: quota exceeded")
    );
    let added = &state.config.custom_pages[0];
    assert_eq!(
        added.code.as_deref(),
        Some("// AI generation failed, but page structure created\n// Collect stamps")
    );
    assert_eq!(added.class_name.as_deref(), Some("LoyaltyCardScreen"));
}

#[test]
fn test_config_reload_keeps_navigator() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo("Profile".into()));

    let reloaded = AppConfiguration {
        app_name: "Sprout".into(),
        pages: vec!["Home".into()],
        ..Default::default()
    };
    run(&mut state, Message::ConfigurationReloaded(Box::new(reloaded)));
    assert_eq!(state.config.app_name, "Sprout");
    assert_eq!(state.navigator.current_screen(), "Profile");
}

#[test]
fn test_config_reload_failure_keeps_config() {
    let mut state = test_state();
    run(
        &mut state,
        Message::ConfigReloadFailed {
            error: "Configuration error: bad".into(),
        },
    );
    assert_eq!(state.config.app_name, "Bloom");
    assert!(state.error.is_some());
    press(&mut state, InputKey::Esc);
    assert!(state.error.is_none());
}

// ─────────────────────────────────────────────────────────
// Workflow
// ─────────────────────────────────────────────────────────

#[test]
fn test_start_preview_requires_name_and_description() {
    let mut state = test_state();
    state.config.description = "   ".into();
    let actions = press(&mut state, InputKey::Char('v'));
    assert!(actions.is_empty());
    assert_eq!(state.step, BuilderStep::Configure);
    assert_eq!(
        state.error.as_deref(),
        Some("Please provide app name and description")
    );
}

#[test]
fn test_start_preview_mounts_fresh_navigator() {
    let mut state = test_state();
    run(&mut state, Message::NavigateTo("Profile".into()));
    state.navigator.toggle_theme();

    let actions = press(&mut state, InputKey::Char('v'));
    assert_eq!(state.step, BuilderStep::Preview);
    assert_eq!(state.navigator.current_screen(), "Splash Screen");
    assert_eq!(state.navigator.current_theme(), PreviewTheme::Light);
    assert!(matches!(actions.as_slice(), [UpdateAction::ArmSplashTimer(_)]));
}

#[test]
fn test_approve_generates_app() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('v'));
    let actions = press(&mut state, InputKey::Char('g'));
    assert_eq!(state.step, BuilderStep::Generating);
    assert!(state.busy.is_some());
    match actions.as_slice() {
        [UpdateAction::GenerateApp { prompt }] => assert!(prompt.contains("Bloom")),
        other => panic!("unexpected actions: {:?}", other),
    }

    // keys other than quit do nothing while generating
    assert!(press(&mut state, InputKey::Char('b')).is_empty());
    assert_eq!(state.step, BuilderStep::Generating);
}

#[test]
fn test_generation_failure_returns_to_configure() {
    let mut state = test_state();
    state.step = BuilderStep::Generating;
    run(
        &mut state,
        Message::AppGenerationFailed {
            error: "Generation failed: No files generated".into(),
        },
    );
    assert_eq!(state.step, BuilderStep::Configure);
    assert!(state.busy.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("Generation failed: No files generated")
    );
}

#[test]
fn test_complete_step_download_build_and_start_over() {
    let mut state = test_state();
    state.step = BuilderStep::Generating;
    run(&mut state, Message::AppGenerated { files: sample_files() });
    assert_eq!(state.step, BuilderStep::Complete);

    match press(&mut state, InputKey::Char('z')).as_slice() {
        [UpdateAction::WriteArchive { app_name, files }] => {
            assert_eq!(app_name, "Bloom");
            assert_eq!(files.len(), 1);
        }
        other => panic!("unexpected actions: {:?}", other),
    }
    run(
        &mut state,
        Message::ArchiveWritten {
            path: PathBuf::from("/tmp/bloom/Bloom-Project-1.zip"),
        },
    );
    assert!(state.archive_path.is_some());

    assert!(matches!(
        press(&mut state, InputKey::Char('b')).as_slice(),
        [UpdateAction::BuildProject { .. }]
    ));
    run(
        &mut state,
        Message::BuildFinished(BuildResult {
            success: true,
            project_id: "bloom-abc12345".into(),
            preview_url: "/flutter_apps/bloom-abc12345".into(),
            message: "published".into(),
        }),
    );
    assert_eq!(
        state.build_result.as_ref().map(|r| r.preview_url.as_str()),
        Some("/flutter_apps/bloom-abc12345")
    );

    press(&mut state, InputKey::Char('r'));
    assert_eq!(state.step, BuilderStep::Configure);
    assert!(state.generated_files.is_empty());
    assert!(state.build_result.is_none());
    assert!(state.archive_path.is_none());
    assert_eq!(state.config.app_name, "Bloom");
}

#[test]
fn test_build_and_download_without_files() {
    let mut state = test_state();
    state.step = BuilderStep::Complete;
    assert!(run(&mut state, Message::BuildProject).is_empty());
    assert_eq!(state.error.as_deref(), Some("No generated project to build"));
    assert!(run(&mut state, Message::DownloadArchive).is_empty());
    assert_eq!(state.error.as_deref(), Some("No files available for download"));
}

#[test]
fn test_back_to_configure_from_preview() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('v'));
    let actions = press(&mut state, InputKey::Char('b'));
    assert_eq!(state.step, BuilderStep::Configure);
    assert!(matches!(actions.as_slice(), [UpdateAction::ArmSplashTimer(_)]));
}

#[test]
fn test_handle_key_is_mode_dependent() {
    let mut state = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('n')),
        Some(Message::OpenPageDialog)
    ));
    state.ui_mode = UiMode::PagesPanel;
    assert!(matches!(
        handle_key(&state, InputKey::Char('n')),
        None
    ));
    state.ui_mode = UiMode::PageDialog;
    assert!(matches!(
        handle_key(&state, InputKey::Char('n')),
        Some(Message::InputChar('n'))
    ));
}
