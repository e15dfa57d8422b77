//! Google Client Implementation (API key-based)
//!
//! Uses Google's Generative Language API with an API key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::llm::client::LlmClient;
use crate::core::llm::error::{LlmError, Result};

const GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Google provider client for Gemini models.
pub struct GoogleClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GoogleClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, GOOGLE_BASE_URL.to_string())
    }

    /// Custom endpoint, used by tests and proxied deployments.
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        // Trim the API key at construction to keep it consistent with
        // validation.
        Self {
            api_key: api_key.trim().to_string(),
            model,
            base_url,
            client,
        }
    }

    /// Check if an API key has valid Google API key format.
    ///
    /// Google API keys start with "AIza". This is a pure format check and
    /// does not verify the key against Google's API.
    pub fn is_valid_api_key_format(key: &str) -> bool {
        let trimmed = key.trim();
        !trimmed.is_empty() && trimmed.starts_with("AIza")
    }
}

#[async_trait]
impl LlmClient for GoogleClient {
    fn id(&self) -> &str {
        "google"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": temperature
            }
        });

        let resp = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let json: serde_json::Value = resp.json().await?;

        let content = json["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|p| p["text"].as_str())
            .ok_or_else(|| LlmError::InvalidResponse("Missing content".to_string()))?
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_identity() {
        let client = GoogleClient::new("AIzaTestApiKey".to_string(), "gemini-1.5-flash".to_string());
        assert_eq!(client.id(), "google");
        assert_eq!(client.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_api_key_format() {
        assert!(GoogleClient::is_valid_api_key_format("AIzaSyD_abcdefghijklmnop"));
        assert!(GoogleClient::is_valid_api_key_format("  AIzaValidKey  "));
        assert!(!GoogleClient::is_valid_api_key_format(""));
        assert!(!GoogleClient::is_valid_api_key_format("sk-openai-key"));
        assert!(!GoogleClient::is_valid_api_key_format("aiza-lowercase"));
    }

    #[test]
    fn test_api_key_trimmed_at_construction() {
        let client = GoogleClient::new("  AIzaKey  ".to_string(), "gemini-1.5-flash".to_string());
        assert_eq!(client.api_key, "AIzaKey");
    }
}
