//! Preview navigator: current screen and theme of one preview session
//!
//! All transitions are synchronous and infallible. Operations that do not
//! apply are silent no-ops reported as [`NavOutcome::Rejected`] or
//! [`NavOutcome::Unchanged`]. The only asynchronous piece, the splash
//! auto-advance, is requested through a [`TimerRequest`] and comes back as a
//! token that must still match the armed one.

use std::time::Duration;

use fforge_core::prelude::*;
use fforge_core::{AppConfiguration, Direction, PreviewTheme, ScreenSet, ONBOARDING, SPLASH_SCREEN};

use crate::onboarding::{onboarding_exit_target, OnboardingState, OnboardingStep};

/// Delay before the splash screen advances to onboarding
pub const SPLASH_DELAY: Duration = Duration::from_secs(3);

/// Single-shot timer the host must schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: u64,
    pub delay: Duration,
}

/// What a navigator operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Target is not a navigable screen
    Rejected,
    /// Nothing observable changed
    Unchanged,
    /// Current screen or slide changed; `timer` is set when splash was entered
    Moved { timer: Option<TimerRequest> },
}

impl NavOutcome {
    pub fn timer(&self) -> Option<TimerRequest> {
        match self {
            NavOutcome::Moved { timer } => *timer,
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewNavigator {
    current_screen: String,
    current_theme: PreviewTheme,
    onboarding: OnboardingState,
    /// Token of the pending splash timer, if one is armed
    armed_timer: Option<u64>,
    next_token: u64,
}

impl PreviewNavigator {
    /// Fresh session on the splash screen in light mode
    ///
    /// The returned timer must be scheduled by the host.
    pub fn mount() -> (Self, TimerRequest) {
        let mut navigator = Self {
            current_screen: SPLASH_SCREEN.to_string(),
            current_theme: PreviewTheme::Light,
            onboarding: OnboardingState::default(),
            armed_timer: None,
            next_token: 0,
        };
        let timer = navigator.arm_splash_timer();
        (navigator, timer)
    }

    pub fn current_screen(&self) -> &str {
        &self.current_screen
    }

    pub fn current_theme(&self) -> PreviewTheme {
        self.current_theme
    }

    pub fn onboarding(&self) -> &OnboardingState {
        &self.onboarding
    }

    pub fn armed_timer(&self) -> Option<u64> {
        self.armed_timer
    }

    /// Position of the current screen as `(index, total)`, if it is still
    /// part of the configuration
    pub fn position(&self, config: &AppConfiguration) -> (Option<usize>, usize) {
        let screens = ScreenSet::compute(config);
        (screens.index_of(&self.current_screen), screens.len())
    }

    fn arm_splash_timer(&mut self) -> TimerRequest {
        self.next_token += 1;
        self.armed_timer = Some(self.next_token);
        trace!("Armed splash timer #{}", self.next_token);
        TimerRequest {
            token: self.next_token,
            delay: SPLASH_DELAY,
        }
    }

    /// Move to `target` when it is part of the current configuration
    pub fn navigate(&mut self, target: &str, config: &AppConfiguration) -> NavOutcome {
        if !ScreenSet::compute(config).contains(target) {
            debug!("Ignoring navigation to unknown screen '{}'", target);
            return NavOutcome::Rejected;
        }
        if target == self.current_screen {
            return NavOutcome::Unchanged;
        }

        debug!("Preview: {} -> {}", self.current_screen, target);
        self.current_screen = target.to_string();

        if target == ONBOARDING {
            self.onboarding.reset();
        }

        let timer = if target == SPLASH_SCREEN {
            Some(self.arm_splash_timer())
        } else {
            self.armed_timer = None;
            None
        };
        NavOutcome::Moved { timer }
    }

    pub fn toggle_theme(&mut self) -> PreviewTheme {
        self.current_theme = self.current_theme.toggled();
        self.current_theme
    }

    /// Carousel step; a screen no longer configured counts as index 0
    pub fn step(&mut self, direction: Direction, config: &AppConfiguration) -> NavOutcome {
        let screens = ScreenSet::compute(config);
        let index = screens.index_of(&self.current_screen).unwrap_or(0);
        let target = screens.neighbor(index, direction).to_string();
        self.navigate(&target, config)
    }

    pub fn previous(&mut self, config: &AppConfiguration) -> NavOutcome {
        self.step(Direction::Previous, config)
    }

    pub fn next(&mut self, config: &AppConfiguration) -> NavOutcome {
        self.step(Direction::Next, config)
    }

    /// Splash timer elapsed; stale tokens are ignored
    pub fn splash_timer_fired(&mut self, token: u64, config: &AppConfiguration) -> NavOutcome {
        if self.armed_timer != Some(token) {
            trace!("Ignoring stale splash timer #{}", token);
            return NavOutcome::Unchanged;
        }
        self.armed_timer = None;
        self.navigate(ONBOARDING, config)
    }

    // ─────────────────────────────────────────────────────────
    // Onboarding
    // ─────────────────────────────────────────────────────────

    fn on_onboarding(&self) -> bool {
        self.current_screen == ONBOARDING
    }

    fn exit_onboarding(&mut self, config: &AppConfiguration) -> NavOutcome {
        let target = onboarding_exit_target(config).to_string();
        self.navigate(&target, config)
    }

    pub fn onboarding_forward(&mut self, config: &AppConfiguration) -> NavOutcome {
        if !self.on_onboarding() {
            return NavOutcome::Unchanged;
        }
        match self.onboarding.forward() {
            OnboardingStep::Stay => NavOutcome::Moved { timer: None },
            OnboardingStep::Exit => self.exit_onboarding(config),
        }
    }

    pub fn onboarding_back(&mut self) -> NavOutcome {
        if !self.on_onboarding() || self.onboarding.is_first() {
            return NavOutcome::Unchanged;
        }
        self.onboarding.back();
        NavOutcome::Moved { timer: None }
    }

    pub fn onboarding_skip(&mut self, config: &AppConfiguration) -> NavOutcome {
        if !self.on_onboarding() {
            return NavOutcome::Unchanged;
        }
        self.exit_onboarding(config)
    }

    pub fn onboarding_drag(&mut self, offset: f32) -> NavOutcome {
        if !self.on_onboarding() {
            return NavOutcome::Unchanged;
        }
        let before = self.onboarding.slide();
        self.onboarding.drag(offset);
        if self.onboarding.slide() == before {
            NavOutcome::Unchanged
        } else {
            NavOutcome::Moved { timer: None }
        }
    }
}
