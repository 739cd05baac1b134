//! LLM text generation
//!
//! [`TextGenerator`] is the seam between the builder and the language model.
//! [`GeminiClient`] talks to the Gemini `generateContent` REST endpoint.

use std::time::Duration;

use serde_json::{json, Value};
use url::Url;

use fforge_core::prelude::*;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Prompt-in, text-out language model
#[trait_variant::make(TextGenerator: Send)]
pub trait LocalTextGenerator {
    /// Send one prompt and return the model's full text reply
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` when the key environment variable is unset
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Gemini REST client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// `{base}/v1beta/models/{model}:generateContent?key={key}`
    fn endpoint(&self, key: &str) -> Result<Url> {
        endpoint_url(&self.config.base_url, &self.config.model, key)
    }
}

fn endpoint_url(base_url: &str, model: &str, key: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| Error::config(format!("invalid generator base URL '{}': {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| Error::config(format!("generator base URL '{}' cannot have a path", base_url)))?
        .pop_if_empty()
        .extend(["v1beta", "models", &format!("{}:generateContent", model)]);
    url.query_pairs_mut().append_pair("key", key);

    Ok(url)
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let key = self.config.api_key.as_deref().ok_or_else(|| {
            Error::generator_unavailable("GEMINI_API_KEY environment variable is not set")
        })?;
        let url = self.endpoint(key)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(
            "Requesting generation from {} ({} prompt chars)",
            self.config.model,
            prompt.len()
        );

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::http(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = payload
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("no error details");
            return Err(Error::http(format!("API error {}: {}", status, message)));
        }

        let text = extract_text(&payload)?;
        info!("Received {} chars from {}", text.len(), self.config.model);
        Ok(text)
    }
}

/// Concatenate the text parts of the first candidate
pub fn extract_text(payload: &Value) -> Result<String> {
    if let Some(reason) = payload
        .get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .and_then(|r| r.as_str())
    {
        return Err(Error::generation(format!("prompt blocked: {}", reason)));
    }

    let parts = payload
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| Error::generation("Invalid response format from Gemini API"))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        return Err(Error::generation("Empty response from Gemini API"));
    }
    Ok(text)
}
