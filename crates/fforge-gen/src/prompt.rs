//! Prompt builders for page and full-app generation

use std::fmt::Write;

use fforge_core::{AppConfiguration, ThemeColors};

use crate::page::PageGenerationRequest;
use crate::templates::default_page_colors;

/// Prompt for a single screen
///
/// Asks for a JSON object with `code`, `pubspecYaml` and `widgetStructure`.
pub fn page_prompt(request: &PageGenerationRequest) -> String {
    let colors = request
        .theme_colors
        .clone()
        .unwrap_or_else(default_page_colors);

    let mut prompt = String::new();
    prompt.push_str(
        "Write a single polished Flutter screen in Dart using Material 3.\n\n",
    );
    let _ = writeln!(prompt, "Screen name: {}", request.name);
    let _ = writeln!(prompt, "What the screen does: {}", request.description);
    if let Some(context) = request.project_context.as_deref().filter(|c| !c.trim().is_empty()) {
        let _ = writeln!(prompt, "App context: {}", context);
    }
    prompt.push('\n');
    push_colors(&mut prompt, &colors);
    prompt.push_str(
        "\nGuidelines:\n\
         - Build the color scheme from the colors above with ColorScheme.fromSeed and \
           read colors through Theme.of(context).colorScheme.\n\
         - Rounded cards, consistent 16/24/32 spacing, readable type (16sp or more).\n\
         - Subtle entrance animations; dispose every AnimationController.\n\
         - Realistic sample data that fits the description.\n\
         - Validate any form fields with a GlobalKey<FormState>.\n\
         - Add semantics labels for interactive widgets.\n\
         - Include a main() with a MaterialApp so the file runs on its own.\n\n\
         Reply with only a JSON object with exactly these string fields:\n\
         {\n  \"code\": \"complete lib/main.dart\",\n  \
           \"pubspecYaml\": \"complete pubspec.yaml\",\n  \
           \"widgetStructure\": \"indented widget tree\"\n}\n",
    );
    prompt
}

/// Prompt for the complete project
///
/// Custom pages that already carry generated code are embedded verbatim with
/// their file path, class and route so the model reuses them.
pub fn app_prompt(config: &AppConfiguration) -> String {
    let mut prompt = String::new();
    prompt.push_str("Generate a complete Flutter project for the app below.\n\n");
    let _ = writeln!(prompt, "App name: {}", config.app_name);
    let _ = writeln!(prompt, "Description: {}", config.description);
    let _ = writeln!(prompt, "Theme: {}", config.theme.label());
    push_colors(&mut prompt, &config.colors);

    prompt.push_str("\nApp icon:\n");
    match &config.icon {
        Some(icon) => {
            let _ = writeln!(
                prompt,
                "- Use the provided icon ({}) from assets/icons/ and register it in pubspec.yaml",
                icon
            );
        }
        None => prompt.push_str("- Generate and configure a default app icon\n"),
    }

    let features = feature_lines(config);
    if !features.is_empty() {
        prompt.push_str("\nIntegrations:\n");
        for line in features {
            let _ = writeln!(prompt, "- {}", line);
        }
    }

    prompt.push_str("\nStandard pages:\n");
    for page in &config.pages {
        let _ = writeln!(
            prompt,
            "- {}: fully working screen wired into navigation",
            page
        );
    }

    if !config.custom_pages.is_empty() {
        prompt.push_str("\nCustom pages:\n");
        for page in &config.custom_pages {
            match &page.code {
                Some(code) => {
                    let _ = writeln!(prompt, "- {} (pre-generated, use exactly as given)", page.name);
                    let _ = writeln!(prompt, "  File: {}", page.resolved_file_path());
                    let _ = writeln!(prompt, "  Class: {}", page.resolved_class_name());
                    let _ = writeln!(prompt, "  Route: {}", page.resolved_route_name());
                    let _ = writeln!(prompt, "  Code:\n{}", code);
                    if let Some(pubspec) = &page.pubspec_yaml {
                        let _ = writeln!(prompt, "  Extra pubspec.yaml dependencies:\n{}", pubspec);
                    }
                }
                None => {
                    let _ = writeln!(prompt, "- {}: {}", page.name, page.description);
                }
            }
        }
    }

    prompt.push_str(
        "\nProject requirements:\n\
         - lib/main.dart plus one Dart file per screen under lib/screens/\n\
         - Named routes for every screen and a light/dark theme switch\n\
         - Provider or Riverpod for state\n\
         - A complete pubspec.yaml\n\
         - Pre-generated custom pages go at their given paths unchanged\n\n\
         Reply with only a JSON object of the form \
         {\"files\": [{\"path\": \"relative/path\", \"content\": \"file contents\"}]}.\n",
    );
    prompt
}

fn push_colors(prompt: &mut String, colors: &ThemeColors) {
    let _ = writeln!(prompt, "Primary color: {}", colors.primary);
    let _ = writeln!(prompt, "Secondary color: {}", colors.secondary);
    let _ = writeln!(prompt, "Accent color: {}", colors.accent);
}

fn feature_lines(config: &AppConfiguration) -> Vec<&'static str> {
    let mut lines = Vec::new();
    if config.features.firebase {
        lines.push("Firebase (authentication, Firestore, storage, analytics) fully configured");
    }
    if config.features.supabase_db {
        lines.push("Supabase database with connection setup");
    }
    if config.features.offline_mode {
        lines.push("Offline mode backed by local storage");
    }
    lines
}
