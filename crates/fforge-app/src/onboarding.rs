//! Onboarding carousel state and slide content

use fforge_core::{AppConfiguration, ColorSlot};

/// Number of onboarding slides
pub const SLIDE_COUNT: usize = 4;

/// Horizontal drag distance a swipe must exceed to change slides
pub const DRAG_THRESHOLD: f32 = 100.0;

/// Exit used when the configuration has neither Home nor a second page
pub const FALLBACK_EXIT: &str = "Login";

/// Result of an onboarding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Still on the carousel; the slide may or may not have changed
    Stay,
    /// Carousel finished; navigate to the exit screen
    Exit,
}

/// Carousel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnboardingState {
    slide: usize,
}

impl OnboardingState {
    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn is_first(&self) -> bool {
        self.slide == 0
    }

    pub fn is_last(&self) -> bool {
        self.slide == SLIDE_COUNT - 1
    }

    pub fn reset(&mut self) {
        self.slide = 0;
    }

    /// Next slide, or exit from the last one
    pub fn forward(&mut self) -> OnboardingStep {
        if self.is_last() {
            OnboardingStep::Exit
        } else {
            self.slide += 1;
            OnboardingStep::Stay
        }
    }

    /// Previous slide; no-op on the first
    pub fn back(&mut self) {
        self.slide = self.slide.saturating_sub(1);
    }

    /// Apply a finished horizontal drag
    ///
    /// A positive offset past the threshold goes back, a negative one goes
    /// forward. Dragging never completes the carousel.
    pub fn drag(&mut self, offset: f32) {
        if offset > DRAG_THRESHOLD && !self.is_first() {
            self.slide -= 1;
        } else if offset < -DRAG_THRESHOLD && !self.is_last() {
            self.slide += 1;
        }
    }
}

/// Screen shown after the carousel
///
/// "Home" when configured, else the second configured page, else "Login".
/// The second page is used even when it is the splash screen.
pub fn onboarding_exit_target(config: &AppConfiguration) -> &str {
    if config.has_page("Home") {
        "Home"
    } else if let Some(page) = config.pages.get(1) {
        page
    } else {
        FALLBACK_EXIT
    }
}

/// Content of one carousel slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub glyph: &'static str,
    pub title: String,
    pub description: String,
    pub color: ColorSlot,
}

pub fn slides(app_name: &str) -> [Slide; SLIDE_COUNT] {
    [
        Slide {
            glyph: "★",
            title: format!("Welcome to {}", app_name),
            description: "Discover amazing features and get started with your new app experience."
                .to_string(),
            color: ColorSlot::Primary,
        },
        Slide {
            glyph: "⚡",
            title: "Powerful Features".to_string(),
            description:
                "Everything you need is right at your fingertips. Explore and create with ease."
                    .to_string(),
            color: ColorSlot::Secondary,
        },
        Slide {
            glyph: "⛨",
            title: "Safe & Secure".to_string(),
            description: "Your data is protected with industry-leading security measures."
                .to_string(),
            color: ColorSlot::Accent,
        },
        Slide {
            glyph: "♥",
            title: "You'll Love It".to_string(),
            description: format!("Join thousands of users who love using {} daily.", app_name),
            color: ColorSlot::Primary,
        },
    ]
}
