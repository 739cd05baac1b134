//! Keyword-based page classification
//!
//! Pages that have no dedicated preview screen are rendered from an
//! [`Archetype`] picked by scanning the page name and description for
//! keywords. Rules are tested in order and the first hit wins, so the
//! table order is part of the behavior.

/// Semantic category used to render a placeholder screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Contact,
    About,
    Settings,
    Profile,
    Help,
    ShopLike,
    SearchLike,
    ChatLike,
    Generic,
}

/// Ordered keyword rules; first match wins
const RULES: &[(Archetype, &[&str])] = &[
    (Archetype::Contact, &["contact", "form"]),
    (Archetype::About, &["about", "info"]),
    (Archetype::Settings, &["setting", "preference"]),
    (Archetype::Profile, &["profile", "user"]),
    (Archetype::Help, &["help", "faq"]),
    (Archetype::ShopLike, &["shop", "store"]),
    (Archetype::SearchLike, &["search"]),
    (Archetype::ChatLike, &["chat", "message"]),
];

/// Classify a page by name and description
///
/// Matching is case-insensitive substring search over
/// `"<name> <description>"`. Never fails; unmatched input is `Generic`.
pub fn classify(name: &str, description: &str) -> Archetype {
    let haystack = format!("{} {}", name, description).to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(archetype, _)| *archetype)
        .unwrap_or(Archetype::Generic)
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Contact => "Contact",
            Archetype::About => "About",
            Archetype::Settings => "Settings",
            Archetype::Profile => "Profile",
            Archetype::Help => "Help",
            Archetype::ShopLike => "Shop",
            Archetype::SearchLike => "Search",
            Archetype::ChatLike => "Chat",
            Archetype::Generic => "Generic",
        }
    }

    /// Single-cell glyph shown in the screen's icon badge
    pub fn glyph(&self) -> &'static str {
        match self {
            Archetype::Contact => "✉",
            Archetype::About => "ℹ",
            Archetype::Settings => "⚙",
            Archetype::Profile => "☺",
            Archetype::Help => "?",
            Archetype::ShopLike => "$",
            Archetype::SearchLike => "⌕",
            Archetype::ChatLike => "✎",
            Archetype::Generic => "✦",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            Archetype::Contact => "Get in Touch",
            Archetype::About => "About This App",
            Archetype::Settings => "Preferences",
            Archetype::Profile => "Your Account",
            Archetype::Help => "Frequently Asked",
            Archetype::ShopLike => "Featured Products",
            Archetype::SearchLike => "Recent Searches",
            Archetype::ChatLike => "Conversations",
            Archetype::Generic => "Features",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Archetype::Contact => &["Email Support", "Call Us", "Visit Our Office"],
            Archetype::About => &["Version 1.0.0", "Terms of Service", "Privacy Policy"],
            Archetype::Settings => &["Dark Mode", "Notifications", "Language", "Privacy"],
            Archetype::Profile => &["Edit Profile", "Account Settings", "Sign Out"],
            Archetype::Help => &["Getting Started", "Account & Billing", "Contact Support"],
            Archetype::ShopLike => &["New Arrivals", "Best Sellers", "On Sale", "Cart"],
            Archetype::SearchLike => &["Popular", "Nearby", "Recently Viewed"],
            Archetype::ChatLike => &["Support Team", "Community", "New Message"],
            Archetype::Generic => &["Feature 1", "Feature 2", "Feature 3", "More Options"],
        }
    }
}
