//! Screen renderer: turns `(screen, config, theme)` into a view model
//!
//! The view is plain data. Interactive elements carry a [`ScreenIntent`]
//! that the host converts into a [`Message`](crate::message::Message); the
//! renderer never touches navigator state.

use fforge_core::{
    classify, AppConfiguration, Archetype, ColorSlot, PreviewTheme, ONBOARDING, SPLASH_SCREEN,
};

use crate::navigator::PreviewNavigator;
use crate::onboarding::{slides, SLIDE_COUNT};

/// Screens with a dedicated layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltInScreen {
    Splash,
    Onboarding,
    Login,
    Register,
    Home,
    Profile,
}

impl BuiltInScreen {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            SPLASH_SCREEN => Some(Self::Splash),
            ONBOARDING => Some(Self::Onboarding),
            "Login" => Some(Self::Login),
            "Register" => Some(Self::Register),
            "Home" => Some(Self::Home),
            "Profile" => Some(Self::Profile),
            _ => None,
        }
    }
}

/// How a screen is rendered, resolved once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    BuiltIn(BuiltInScreen),
    Custom(Archetype),
}

/// Resolve the layout for a screen name
///
/// A custom page with this name wins over the built-in layouts and is
/// classified with its own description (first match when names repeat).
/// Any other unknown name is classified with an empty description.
pub fn resolve_screen_kind(screen: &str, config: &AppConfiguration) -> ScreenKind {
    if let Some(page) = config.find_custom_page(screen) {
        return ScreenKind::Custom(classify(&page.name, &page.description));
    }
    match BuiltInScreen::from_name(screen) {
        Some(built_in) => ScreenKind::BuiltIn(built_in),
        None => ScreenKind::Custom(classify(screen, "")),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View model
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    Next,
    Back,
    Skip,
}

/// What activating a control asks the host to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenIntent {
    Navigate(String),
    ToggleTheme,
    Onboarding(OnboardingAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Filled,
    Outline,
    Ghost,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub intent: Option<ScreenIntent>,
    pub style: ButtonStyle,
    pub enabled: bool,
}

impl Control {
    fn new(label: impl Into<String>, intent: ScreenIntent, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            intent: Some(intent),
            style,
            enabled: true,
        }
    }

    fn navigate(label: impl Into<String>, target: &str, style: ButtonStyle) -> Self {
        Self::new(label, ScreenIntent::Navigate(target.to_string()), style)
    }

    fn inert(label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            intent: None,
            style,
            enabled: true,
        }
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    /// Whether activating this control does anything
    pub fn is_actionable(&self) -> bool {
        self.enabled && self.intent.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backdrop {
    Plain,
    /// Two-color gradient, colors as configured
    Gradient(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBar {
    pub title: String,
    pub back: Option<Control>,
    pub action: Option<Control>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBlock {
    /// Round icon badge
    Badge { glyph: String, color: String },
    Title(String),
    Heading(String),
    Text(String),
    /// Muted small print
    Hint(String),
    /// Generation status of a custom page
    Status { label: String, generated: bool },
    /// Carousel position indicator
    Dots { count: usize, active: usize, color: String },
    Input { placeholder: String },
    Button(Control),
    /// Tappable card with an accent color
    Card {
        title: String,
        subtitle: String,
        color: String,
        control: Control,
    },
    /// Row in a settings-style list
    ListItem { label: String, control: Option<Control> },
}

/// Everything needed to paint one preview screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub screen: String,
    pub kind: ScreenKind,
    pub theme: PreviewTheme,
    pub backdrop: Backdrop,
    pub app_bar: Option<AppBar>,
    pub blocks: Vec<ViewBlock>,
}

impl ScreenView {
    /// Actionable controls in reading order, app bar first
    pub fn controls(&self) -> Vec<&Control> {
        let bar = self
            .app_bar
            .iter()
            .flat_map(|bar| bar.back.iter().chain(bar.action.iter()));
        let body = self.blocks.iter().filter_map(|block| match block {
            ViewBlock::Button(control) => Some(control),
            ViewBlock::Card { control, .. } => Some(control),
            ViewBlock::ListItem {
                control: Some(control),
                ..
            } => Some(control),
            _ => None,
        });
        bar.chain(body).filter(|c| c.is_actionable()).collect()
    }

    /// Text of every title, heading and text block, for assertions and search
    pub fn texts(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                ViewBlock::Title(s) | ViewBlock::Heading(s) | ViewBlock::Text(s) | ViewBlock::Hint(s) => {
                    Some(s.as_str())
                }
                ViewBlock::ListItem { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render the navigator's current screen
pub fn render_current(navigator: &PreviewNavigator, config: &AppConfiguration) -> ScreenView {
    render_screen(
        navigator.current_screen(),
        config,
        navigator.current_theme(),
        navigator.onboarding().slide(),
    )
}

/// Render one screen; `slide` only matters for onboarding
pub fn render_screen(
    screen: &str,
    config: &AppConfiguration,
    theme: PreviewTheme,
    slide: usize,
) -> ScreenView {
    let kind = resolve_screen_kind(screen, config);
    let mut view = ScreenView {
        screen: screen.to_string(),
        kind,
        theme,
        backdrop: Backdrop::Plain,
        app_bar: None,
        blocks: Vec::new(),
    };

    match kind {
        ScreenKind::BuiltIn(BuiltInScreen::Splash) => splash(&mut view, config),
        ScreenKind::BuiltIn(BuiltInScreen::Onboarding) => onboarding(&mut view, config, slide),
        ScreenKind::BuiltIn(BuiltInScreen::Login) => login(&mut view),
        ScreenKind::BuiltIn(BuiltInScreen::Register) => register(&mut view),
        ScreenKind::BuiltIn(BuiltInScreen::Home) => home(&mut view, config),
        ScreenKind::BuiltIn(BuiltInScreen::Profile) => profile(&mut view, config),
        ScreenKind::Custom(archetype) => custom(&mut view, config, archetype),
    }
    view
}

fn back_bar(title: &str, target: &str) -> AppBar {
    AppBar {
        title: title.to_string(),
        back: Some(Control::navigate("←", target, ButtonStyle::Ghost)),
        action: None,
    }
}

fn splash(view: &mut ScreenView, config: &AppConfiguration) {
    view.backdrop = Backdrop::Gradient(config.colors.primary.clone(), config.colors.secondary.clone());
    view.blocks = vec![
        ViewBlock::Badge {
            glyph: "▣".to_string(),
            color: config.colors.accent.clone(),
        },
        ViewBlock::Title(config.display_name().to_string()),
        ViewBlock::Text("Welcome to your app!".to_string()),
        ViewBlock::Button(Control::navigate("Get Started", ONBOARDING, ButtonStyle::Outline)),
        ViewBlock::Hint("Tap anywhere to continue".to_string()),
    ];
}

fn onboarding(view: &mut ScreenView, config: &AppConfiguration, slide: usize) {
    let slide = slide.min(SLIDE_COUNT - 1);
    let slides = slides(config.display_name());
    let current = &slides[slide];
    let color = config.colors.get(current.color).to_string();
    let last = slide == SLIDE_COUNT - 1;

    view.blocks = vec![
        ViewBlock::Dots {
            count: SLIDE_COUNT,
            active: slide,
            color: color.clone(),
        },
        ViewBlock::Button(Control::new(
            "Skip",
            ScreenIntent::Onboarding(OnboardingAction::Skip),
            ButtonStyle::Ghost,
        )),
        ViewBlock::Badge {
            glyph: current.glyph.to_string(),
            color,
        },
        ViewBlock::Title(current.title.clone()),
        ViewBlock::Text(current.description.clone()),
        ViewBlock::Button(
            Control::new(
                "Back",
                ScreenIntent::Onboarding(OnboardingAction::Back),
                ButtonStyle::Outline,
            )
            .disabled(slide == 0),
        ),
        ViewBlock::Button(Control::new(
            if last { "Get Started" } else { "Next" },
            ScreenIntent::Onboarding(OnboardingAction::Next),
            ButtonStyle::Filled,
        )),
        ViewBlock::Hint("Swipe left or right to navigate".to_string()),
    ];
}

fn login(view: &mut ScreenView) {
    view.app_bar = Some(back_bar("Sign In", "Home"));
    view.blocks = vec![
        ViewBlock::Title("Welcome Back".to_string()),
        ViewBlock::Text("Sign in to your account".to_string()),
        ViewBlock::Input {
            placeholder: "Email".to_string(),
        },
        ViewBlock::Input {
            placeholder: "Password".to_string(),
        },
        ViewBlock::Button(Control::navigate("Sign In", "Home", ButtonStyle::Filled)),
        ViewBlock::Button(Control::navigate(
            "Don't have an account? Sign Up",
            "Register",
            ButtonStyle::Link,
        )),
    ];
}

fn register(view: &mut ScreenView) {
    view.app_bar = Some(back_bar("Sign Up", "Login"));
    view.blocks = vec![
        ViewBlock::Title("Create Account".to_string()),
        ViewBlock::Text("Join us today".to_string()),
        ViewBlock::Input {
            placeholder: "Full Name".to_string(),
        },
        ViewBlock::Input {
            placeholder: "Email".to_string(),
        },
        ViewBlock::Input {
            placeholder: "Password".to_string(),
        },
        ViewBlock::Button(Control::navigate("Create Account", "Home", ButtonStyle::Filled)),
        ViewBlock::Button(Control::navigate(
            "Already have an account? Sign In",
            "Login",
            ButtonStyle::Link,
        )),
    ];
}

fn home(view: &mut ScreenView, config: &AppConfiguration) {
    let toggle_label = if view.theme.is_dark() { "☀" } else { "☾" };
    view.backdrop = Backdrop::Gradient(config.colors.primary.clone(), config.colors.secondary.clone());
    view.app_bar = Some(AppBar {
        title: config.display_name().to_string(),
        back: None,
        action: Some(Control::new(toggle_label, ScreenIntent::ToggleTheme, ButtonStyle::Ghost)),
    });

    let mut blocks = vec![ViewBlock::Text(config.description.clone())];

    if config.has_page("Dashboard") {
        blocks.push(ViewBlock::Card {
            title: "Dashboard".to_string(),
            subtitle: "View stats".to_string(),
            color: config.colors.primary.clone(),
            control: Control::navigate("Dashboard", "Dashboard", ButtonStyle::Outline),
        });
    }
    if config.has_page("Profile") {
        blocks.push(ViewBlock::Card {
            title: "Profile".to_string(),
            subtitle: "Your account".to_string(),
            color: config.colors.secondary.clone(),
            control: Control::navigate("Profile", "Profile", ButtonStyle::Outline),
        });
    }

    blocks.push(ViewBlock::Heading("Quick Actions".to_string()));
    for (page, label) in [("Search", "Search"), ("Chat", "Messages"), ("Settings", "Settings")] {
        if config.has_page(page) {
            blocks.push(ViewBlock::Button(Control::navigate(label, page, ButtonStyle::Outline)));
        }
    }
    for page in &config.custom_pages {
        blocks.push(ViewBlock::Button(Control::navigate(
            page.name.clone(),
            &page.name,
            ButtonStyle::Outline,
        )));
    }

    view.blocks = blocks;
}

fn profile(view: &mut ScreenView, config: &AppConfiguration) {
    view.app_bar = Some(back_bar("Profile", "Home"));
    let mut blocks = vec![
        ViewBlock::Badge {
            glyph: "☺".to_string(),
            color: config.colors.primary.clone(),
        },
        ViewBlock::Title("John Doe".to_string()),
        ViewBlock::Text("john.doe@example.com".to_string()),
        ViewBlock::ListItem {
            label: "Account Settings".to_string(),
            control: Some(Control::inert("⚙", ButtonStyle::Ghost)),
        },
        ViewBlock::ListItem {
            label: "Notifications".to_string(),
            control: Some(Control::inert("🔔", ButtonStyle::Ghost)),
        },
    ];
    if config.has_page("About") {
        blocks.push(ViewBlock::ListItem {
            label: "About".to_string(),
            control: Some(Control::navigate("ℹ", "About", ButtonStyle::Ghost)),
        });
    }
    view.blocks = blocks;
}

fn custom(view: &mut ScreenView, config: &AppConfiguration, archetype: Archetype) {
    let screen = view.screen.clone();
    let page = config.find_custom_page(&screen);
    let description = page.map(|p| p.description.as_str()).filter(|d| !d.is_empty());

    view.app_bar = Some(back_bar(&screen, "Home"));

    let mut blocks = vec![
        ViewBlock::Badge {
            glyph: archetype.glyph().to_string(),
            color: config.colors.get(ColorSlot::Accent).to_string(),
        },
        ViewBlock::Title(format!("{} Page", screen)),
        ViewBlock::Text(match description {
            Some(d) => d.to_string(),
            None => format!("This is the {} screen of your app.", screen.to_lowercase()),
        }),
    ];

    match page {
        Some(p) if p.is_generated() => blocks.push(ViewBlock::Status {
            label: "AI-generated".to_string(),
            generated: true,
        }),
        Some(_) => blocks.push(ViewBlock::Status {
            label: "Awaiting generation".to_string(),
            generated: false,
        }),
        None => {}
    }
    if description.is_none() {
        blocks.push(ViewBlock::Hint(
            "Content will be customized based on your requirements.".to_string(),
        ));
    }

    blocks.push(ViewBlock::Heading(archetype.section_title().to_string()));
    for feature in archetype.features() {
        let control = match (archetype, *feature) {
            (Archetype::Settings, "Dark Mode") => Some(Control::new(
                if view.theme.is_dark() { "On" } else { "Off" },
                ScreenIntent::ToggleTheme,
                ButtonStyle::Ghost,
            )),
            _ => None,
        };
        blocks.push(ViewBlock::ListItem {
            label: feature.to_string(),
            control,
        });
    }

    match archetype {
        Archetype::Contact => {
            for placeholder in ["Name", "Email", "Message"] {
                blocks.push(ViewBlock::Input {
                    placeholder: placeholder.to_string(),
                });
            }
            blocks.push(ViewBlock::Button(Control::inert("Send", ButtonStyle::Filled)));
        }
        Archetype::SearchLike => blocks.insert(
            3,
            ViewBlock::Input {
                placeholder: "Search...".to_string(),
            },
        ),
        _ => {}
    }

    view.blocks = blocks;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fforge_core::{CustomPage, PageContent};

    fn config() -> AppConfiguration {
        AppConfiguration {
            app_name: "Bloom".into(),
            description: "Plant care reminders".into(),
            pages: vec!["Splash Screen".into(), "Home".into(), "Profile".into()],
            ..Default::default()
        }
    }

    fn intents(view: &ScreenView) -> Vec<ScreenIntent> {
        view.controls()
            .into_iter()
            .filter_map(|c| c.intent.clone())
            .collect()
    }

    #[test]
    fn test_resolve_built_in_screens() {
        let config = config();
        assert_eq!(
            resolve_screen_kind("Splash Screen", &config),
            ScreenKind::BuiltIn(BuiltInScreen::Splash)
        );
        assert_eq!(
            resolve_screen_kind("Register", &config),
            ScreenKind::BuiltIn(BuiltInScreen::Register)
        );
    }

    #[test]
    fn test_resolve_unknown_standard_page_uses_empty_description() {
        let config = config();
        assert_eq!(
            resolve_screen_kind("Settings", &config),
            ScreenKind::Custom(Archetype::Settings)
        );
        assert_eq!(
            resolve_screen_kind("Dashboard", &config),
            ScreenKind::Custom(Archetype::Generic)
        );
    }

    #[test]
    fn test_custom_page_wins_and_uses_first_match() {
        let mut config = config();
        config.add_custom_page(CustomPage::new("Home", "contact form").unwrap());
        config.add_custom_page(CustomPage::new("Helpdesk", "store front").unwrap());
        config.add_custom_page(CustomPage::new("Helpdesk", "chat with us").unwrap());

        assert_eq!(
            resolve_screen_kind("Home", &config),
            ScreenKind::Custom(Archetype::Contact)
        );
        // "help" is in the name, so the first page's description is irrelevant
        assert_eq!(
            resolve_screen_kind("Helpdesk", &config),
            ScreenKind::Custom(Archetype::Help)
        );
    }

    #[test]
    fn test_splash_content() {
        let view = render_screen("Splash Screen", &config(), PreviewTheme::Light, 0);
        assert_eq!(
            view.backdrop,
            Backdrop::Gradient("#667EEA".into(), "#4F46E5".into())
        );
        assert!(view.texts().contains(&"Bloom"));
        assert_eq!(
            intents(&view),
            vec![ScreenIntent::Navigate("Onboarding".into())]
        );
    }

    #[test]
    fn test_onboarding_first_and_last_slide() {
        let config = config();
        let first = render_screen("Onboarding", &config, PreviewTheme::Light, 0);
        assert!(first.texts().contains(&"Welcome to Bloom"));
        // back is disabled on the first slide
        assert_eq!(
            intents(&first),
            vec![
                ScreenIntent::Onboarding(OnboardingAction::Skip),
                ScreenIntent::Onboarding(OnboardingAction::Next),
            ]
        );

        let last = render_screen("Onboarding", &config, PreviewTheme::Light, 3);
        let labels: Vec<_> = last.controls().iter().map(|c| c.label.clone()).collect();
        assert_eq!(labels, vec!["Skip", "Back", "Get Started"]);
        assert!(last.blocks.contains(&ViewBlock::Dots {
            count: 4,
            active: 3,
            color: "#667EEA".into()
        }));
    }

    #[test]
    fn test_login_and_register_links() {
        let login = render_screen("Login", &config(), PreviewTheme::Light, 0);
        assert_eq!(
            intents(&login),
            vec![
                ScreenIntent::Navigate("Home".into()),
                ScreenIntent::Navigate("Home".into()),
                ScreenIntent::Navigate("Register".into()),
            ]
        );
        let register = render_screen("Register", &config(), PreviewTheme::Light, 0);
        assert_eq!(register.app_bar.as_ref().unwrap().title, "Sign Up");
        assert_eq!(
            intents(&register).last(),
            Some(&ScreenIntent::Navigate("Login".into()))
        );
    }

    #[test]
    fn test_home_quick_actions_follow_configuration() {
        let mut config = config();
        config.pages.push("Chat".into());
        config.add_custom_page(CustomPage::new("Loyalty Card", "stamps").unwrap());

        let view = render_screen("Home", &config, PreviewTheme::Light, 0);
        assert_eq!(
            intents(&view),
            vec![
                ScreenIntent::ToggleTheme,
                ScreenIntent::Navigate("Profile".into()),
                ScreenIntent::Navigate("Chat".into()),
                ScreenIntent::Navigate("Loyalty Card".into()),
            ]
        );
        let labels: Vec<_> = view.controls().iter().map(|c| c.label.clone()).collect();
        assert!(labels.contains(&"Messages".to_string()));
    }

    #[test]
    fn test_profile_about_entry_only_when_configured() {
        let mut config = config();
        let view = render_screen("Profile", &config, PreviewTheme::Light, 0);
        assert!(view.texts().contains(&"John Doe"));
        assert!(!view.texts().contains(&"About"));

        config.pages.push("About".into());
        let view = render_screen("Profile", &config, PreviewTheme::Light, 0);
        assert!(view.texts().contains(&"About"));
        assert_eq!(
            intents(&view).last(),
            Some(&ScreenIntent::Navigate("About".into()))
        );
    }

    #[test]
    fn test_custom_page_generic_features() {
        let mut config = config();
        config.add_custom_page(CustomPage::new("Loyalty Card", "Collect stamps").unwrap());

        let view = render_screen("Loyalty Card", &config, PreviewTheme::Light, 0);
        assert_eq!(view.kind, ScreenKind::Custom(Archetype::Generic));
        let texts = view.texts();
        assert!(texts.contains(&"Loyalty Card Page"));
        assert!(texts.contains(&"Collect stamps"));
        for feature in ["Feature 1", "Feature 2", "Feature 3", "More Options"] {
            assert!(texts.contains(&feature));
        }
        assert!(view.blocks.contains(&ViewBlock::Status {
            label: "Awaiting generation".into(),
            generated: false
        }));
        assert!(!texts.contains(&"Content will be customized based on your requirements."));
    }

    #[test]
    fn test_generated_custom_page_is_marked() {
        let mut config = config();
        let page = CustomPage::new("Loyalty Card", "Collect stamps")
            .unwrap()
            .with_generated(PageContent {
                code: "class LoyaltyCardScreen {}".into(),
                ..Default::default()
            });
        config.add_custom_page(page);

        let view = render_screen("Loyalty Card", &config, PreviewTheme::Dark, 0);
        assert!(view.blocks.contains(&ViewBlock::Status {
            label: "AI-generated".into(),
            generated: true
        }));
    }

    #[test]
    fn test_fallback_custom_page_counts_as_generated() {
        let mut config = config();
        let page = CustomPage::new("Rewards", "Points for every watering")
            .unwrap()
            .with_fallback();
        config.add_custom_page(page);

        let view = render_screen("Rewards", &config, PreviewTheme::Light, 0);
        assert!(view.blocks.contains(&ViewBlock::Status {
            label: "AI-generated".into(),
            generated: true
        }));
        assert!(!view.blocks.contains(&ViewBlock::Status {
            label: "Awaiting generation".into(),
            generated: false
        }));
    }

    #[test]
    fn test_standard_page_without_description_gets_hint() {
        let view = render_screen("Notifications", &config(), PreviewTheme::Light, 0);
        let texts = view.texts();
        assert!(texts.contains(&"This is the notifications screen of your app."));
        assert!(texts.contains(&"Content will be customized based on your requirements."));
        assert!(!view
            .blocks
            .iter()
            .any(|b| matches!(b, ViewBlock::Status { .. })));
    }

    #[test]
    fn test_settings_dark_mode_toggles_theme() {
        let view = render_screen("Settings", &config(), PreviewTheme::Light, 0);
        assert_eq!(
            intents(&view),
            vec![
                ScreenIntent::Navigate("Home".into()),
                ScreenIntent::ToggleTheme
            ]
        );
    }

    #[test]
    fn test_contact_and_search_extras() {
        let mut config = config();
        config.add_custom_page(CustomPage::new("Contact Us", "a form to reach support").unwrap());
        let view = render_screen("Contact Us", &config, PreviewTheme::Light, 0);
        assert_eq!(view.kind, ScreenKind::Custom(Archetype::Contact));
        let inputs = view
            .blocks
            .iter()
            .filter(|b| matches!(b, ViewBlock::Input { .. }))
            .count();
        assert_eq!(inputs, 3);

        let view = render_screen("Search", &config, PreviewTheme::Light, 0);
        assert!(view.blocks.contains(&ViewBlock::Input {
            placeholder: "Search...".into()
        }));
    }
}
