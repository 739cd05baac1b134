//! Fallback content used when the model reply is unusable

use fforge_core::{screen_class_name, snake_case_name, ThemeColors};

/// Colors used by page generation when the caller sends none
pub fn default_page_colors() -> ThemeColors {
    ThemeColors {
        primary: "#5D3FD3".to_string(),
        secondary: "#6C63FF".to_string(),
        accent: "#FF6B6B".to_string(),
    }
}

/// Escape a value for a single-quoted Dart string literal
fn dart_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "\\$")
        .replace('\n', "\\n")
}

/// `0xFFRRGGBB` literal, or the default primary when the value is not hex
fn dart_color(hex: &str) -> String {
    let digits = if fforge_core::is_hex_color(hex) {
        &hex[1..]
    } else {
        "5D3FD3"
    };
    format!("0xFF{}", digits.to_uppercase())
}

/// Standalone runnable page showing the name and description
pub fn fallback_code(name: &str, description: &str, colors: &ThemeColors) -> String {
    let class_name = screen_class_name(name);
    let title = dart_string(name);
    let body = dart_string(description);
    let seed = dart_color(&colors.primary);

    format!(
        r#"import 'package:flutter/material.dart';

void main() {{
  runApp(const PreviewApp());
}}

class PreviewApp extends StatelessWidget {{
  const PreviewApp({{super.key}});

  @override
  Widget build(BuildContext context) {{
    return MaterialApp(
      title: '{title}',
      debugShowCheckedModeBanner: false,
      theme: ThemeData(
        useMaterial3: true,
        colorScheme: ColorScheme.fromSeed(seedColor: const Color({seed})),
      ),
      home: const {class_name}(),
    );
  }}
}}

class {class_name} extends StatelessWidget {{
  const {class_name}({{super.key}});

  @override
  Widget build(BuildContext context) {{
    final scheme = Theme.of(context).colorScheme;
    return Scaffold(
      appBar: AppBar(
        title: const Text('{title}'),
        backgroundColor: scheme.primary,
        foregroundColor: scheme.onPrimary,
      ),
      body: SafeArea(
        child: Center(
          child: Padding(
            padding: const EdgeInsets.all(24.0),
            child: Column(
              mainAxisAlignment: MainAxisAlignment.center,
              children: [
                Icon(Icons.auto_awesome, size: 48, color: scheme.secondary),
                const SizedBox(height: 16),
                Text(
                  '{title}',
                  style: Theme.of(context).textTheme.headlineMedium,
                  textAlign: TextAlign.center,
                ),
                const SizedBox(height: 12),
                Text(
                  '{body}',
                  style: Theme.of(context).textTheme.bodyLarge,
                  textAlign: TextAlign.center,
                ),
              ],
            ),
          ),
        ),
      ),
    );
  }}
}}
"#
    )
}

pub fn fallback_pubspec(name: &str) -> String {
    format!(
        r#"name: {package}
description: A Flutter application for {name}
publish_to: 'none'
version: 1.0.0+1

environment:
  sdk: '>=3.0.0 <4.0.0'

dependencies:
  flutter:
    sdk: flutter
  cupertino_icons: ^1.0.6

dev_dependencies:
  flutter_test:
    sdk: flutter
  flutter_lints: ^3.0.1

flutter:
  uses-material-design: true
"#,
        package = pubspec_package_name(name),
        name = name,
    )
}

/// Dart package names allow `[a-z0-9_]` and must not start with a digit
fn pubspec_package_name(name: &str) -> String {
    let snake: String = snake_case_name(name)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    match snake.chars().next() {
        None => "flutter_app".to_string(),
        Some(c) if c.is_ascii_digit() => format!("app_{}", snake),
        Some(_) => snake,
    }
}

pub fn fallback_widget_structure(name: &str) -> String {
    let screen = format!("└── {}", screen_class_name(name));
    [
        "MaterialApp",
        screen.as_str(),
        "    └── Scaffold",
        "        ├── AppBar",
        "        │   └── Text",
        "        └── SafeArea",
        "            └── Center",
        "                └── Column",
        "                    ├── Icon",
        "                    ├── Text",
        "                    └── Text",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_code_uses_class_and_seed() {
        let code = fallback_code("Loyalty Card", "Collect stamps", &default_page_colors());
        assert!(code.contains("class LoyaltyCardScreen extends StatelessWidget"));
        assert!(code.contains("Color(0xFF5D3FD3)"));
        assert!(code.contains("'Collect stamps'"));
    }

    #[test]
    fn test_fallback_code_escapes_quotes() {
        let code = fallback_code("Tom's Page", "costs $5", &default_page_colors());
        assert!(code.contains(r"'Tom\'s Page'"));
        assert!(code.contains(r"'costs \$5'"));
    }

    #[test]
    fn test_fallback_code_bad_color_uses_default_seed() {
        let mut colors = default_page_colors();
        colors.primary = "purple".into();
        assert!(fallback_code("A", "b", &colors).contains("Color(0xFF5D3FD3)"));
    }

    #[test]
    fn test_fallback_pubspec_package_name() {
        assert!(fallback_pubspec("Loyalty Card").starts_with("name: loyalty_card\n"));
        assert!(fallback_pubspec("3D View").starts_with("name: app_3d_view\n"));
        assert!(fallback_pubspec("!!!").starts_with("name: flutter_app\n"));
    }

    #[test]
    fn test_widget_structure_names_screen() {
        let tree = fallback_widget_structure("Map");
        assert!(tree.starts_with("MaterialApp\n"));
        assert!(tree.contains("MapScreen"));
    }
}
