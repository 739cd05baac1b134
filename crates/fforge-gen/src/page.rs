//! Single-page generation with fallback content

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fforge_core::prelude::*;
use fforge_core::{PageContent, ThemeColors};

use crate::client::TextGenerator;
use crate::prompt::page_prompt;
use crate::templates::{
    default_page_colors, fallback_code, fallback_pubspec, fallback_widget_structure,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGenerationRequest {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_colors: Option<ThemeColors>,
}

impl PageGenerationRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err(Error::validation(
                "Please provide both page name and description",
            ));
        }
        Ok(())
    }

    fn colors(&self) -> ThemeColors {
        self.theme_colors.clone().unwrap_or_else(default_page_colors)
    }
}

/// Outcome of a page generation; content is always populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGenerationResponse {
    pub success: bool,
    pub code: String,
    pub pubspec_yaml: String,
    pub widget_structure: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageGenerationResponse {
    fn fallback(request: &PageGenerationRequest, error: &Error) -> Self {
        Self {
            success: false,
            code: fallback_code(&request.name, &request.description, &request.colors()),
            pubspec_yaml: fallback_pubspec(&request.name),
            widget_structure: fallback_widget_structure(&request.name),
            error: Some(match error {
                Error::Generation { message } => message.clone(),
                other => other.to_string(),
            }),
        }
    }

    pub fn into_content(self) -> PageContent {
        PageContent {
            code: self.code,
            pubspec_yaml: Some(self.pubspec_yaml),
            widget_structure: Some(self.widget_structure),
        }
    }
}

/// Generate one page; never fails, errors are folded into the response
pub async fn generate_page<G: TextGenerator>(
    generator: &G,
    request: &PageGenerationRequest,
) -> PageGenerationResponse {
    info!("Generating page '{}'", request.name);

    let reply = match generator.generate(&page_prompt(request)).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Page generation for '{}' failed: {}", request.name, e);
            return PageGenerationResponse::fallback(request, &e);
        }
    };

    let parsed = parse_page_reply(&reply);
    PageGenerationResponse {
        success: true,
        code: parsed
            .code
            .unwrap_or_else(|| fallback_code(&request.name, &request.description, &request.colors())),
        pubspec_yaml: parsed
            .pubspec_yaml
            .unwrap_or_else(|| fallback_pubspec(&request.name)),
        widget_structure: parsed
            .widget_structure
            .unwrap_or_else(|| fallback_widget_structure(&request.name)),
        error: None,
    }
}

/// Parts recovered from a model reply; `None` means use the fallback
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedPage {
    pub code: Option<String>,
    pub pubspec_yaml: Option<String>,
    pub widget_structure: Option<String>,
}

/// Read a reply as JSON, or fall back to fenced ```dart / ```yaml blocks
pub fn parse_page_reply(reply: &str) -> ParsedPage {
    if let Some(value) = parse_json_reply(reply) {
        if value.is_object() {
            return ParsedPage {
                code: non_empty_str(&value, "code"),
                pubspec_yaml: non_empty_str(&value, "pubspecYaml"),
                widget_structure: non_empty_str(&value, "widgetStructure"),
            };
        }
    }

    debug!("Page reply is not JSON, extracting fenced blocks");
    ParsedPage {
        code: fenced_block(reply, &DART_BLOCK),
        pubspec_yaml: fenced_block(reply, &YAML_BLOCK),
        widget_structure: None,
    }
}

fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

/// A whole reply wrapped in one markdown fence
static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```(?:json)?[^\n]*\n(.*?)\n?```\s*$").expect("Invalid fence regex")
});

static DART_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```dart[^\n]*\n(.*?)```").expect("Invalid dart block regex"));

static YAML_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```yaml[^\n]*\n(.*?)```").expect("Invalid yaml block regex"));

/// Parse a whole reply as JSON, tolerating a surrounding markdown fence
pub(crate) fn parse_json_reply(reply: &str) -> Option<Value> {
    let trimmed = reply.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }
    let inner = JSON_FENCE.captures(trimmed)?.get(1)?.as_str();
    serde_json::from_str(inner).ok()
}

/// First block matched by `re`, trimmed
fn fenced_block(reply: &str, re: &Regex) -> Option<String> {
    re.captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedGenerator;

    fn request() -> PageGenerationRequest {
        PageGenerationRequest {
            name: "Loyalty Card".into(),
            description: "Stamp card".into(),
            project_context: Some("Brew: coffee".into()),
            theme_colors: None,
        }
    }

    #[test]
    fn test_parse_plain_json() {
        let parsed = parse_page_reply(
            r#"{"code":"void main() {}","pubspecYaml":"name: x","widgetStructure":"Scaffold"}"#,
        );
        assert_eq!(parsed.code.as_deref(), Some("void main() {}"));
        assert_eq!(parsed.pubspec_yaml.as_deref(), Some("name: x"));
        assert_eq!(parsed.widget_structure.as_deref(), Some("Scaffold"));
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply = "```json\n{\"code\":\"class A {}\",\"pubspecYaml\":\"\"}\n```";
        let parsed = parse_page_reply(reply);
        assert_eq!(parsed.code.as_deref(), Some("class A {}"));
        assert_eq!(parsed.pubspec_yaml, None);
    }

    #[test]
    fn test_parse_fenced_blocks() {
        let reply = "Here you go:\n```dart\nclass A {}\n```\nand\n```yaml\nname: a\n```\n";
        let parsed = parse_page_reply(reply);
        assert_eq!(parsed.code.as_deref(), Some("class A {}"));
        assert_eq!(parsed.pubspec_yaml.as_deref(), Some("name: a"));
        assert_eq!(parsed.widget_structure, None);
    }

    #[test]
    fn test_parse_prose_gives_nothing() {
        assert_eq!(parse_page_reply("sorry, I cannot"), ParsedPage::default());
    }

    #[test]
    fn test_validate_request() {
        let mut req = request();
        assert!(req.validate().is_ok());
        req.description = "  ".into();
        assert!(matches!(req.validate(), Err(Error::Validation { .. })));
    }

    #[tokio::test]
    async fn test_generate_page_fills_missing_parts() {
        let generator = ScriptedGenerator::new(["```dart\nclass LoyaltyCardScreen {}\n```"]);
        let response = generate_page(&generator, &request()).await;

        assert!(response.success);
        assert_eq!(response.code, "class LoyaltyCardScreen {}");
        assert!(response.pubspec_yaml.starts_with("name: loyalty_card"));
        assert!(response.widget_structure.contains("LoyaltyCardScreen"));
        assert!(response.error.is_none());

        let prompts = generator.prompts();
        assert!(prompts[0].contains("App context: Brew: coffee"));
    }

    #[tokio::test]
    async fn test_generate_page_failure_uses_fallback() {
        let generator = ScriptedGenerator::failing("quota exceeded");
        let response = generate_page(&generator, &request()).await;

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("quota exceeded"));
        assert!(response.code.contains("class LoyaltyCardScreen"));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = PageGenerationResponse {
            success: true,
            code: "c".into(),
            pubspec_yaml: "p".into(),
            widget_structure: "w".into(),
            error: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["pubspecYaml"], "p");
        assert!(json.get("error").is_none());
    }
}
