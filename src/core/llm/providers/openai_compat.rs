//! Shared OpenAI-compatible chat client.
//!
//! Groq and OpenRouter both speak the OpenAI chat completions wire format;
//! this client holds everything that differs only by endpoint and id.

use std::time::Duration;

use reqwest::Client;

use crate::core::llm::error::{LlmError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat client for OpenAI-compatible endpoints.
pub struct OpenAiCompatibleClient {
    id: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
    client: Client,
}

impl OpenAiCompatibleClient {
    pub fn new(
        id: String,
        api_key: String,
        model: String,
        max_tokens: u32,
        base_url: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            id,
            api_key: api_key.trim().to_string(),
            model,
            max_tokens,
            base_url,
            client,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": temperature,
            "max_tokens": self.max_tokens,
        });

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
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

        let content = json["choices"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| LlmError::InvalidResponse("Missing content".to_string()))?
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let client = OpenAiCompatibleClient::new(
            "groq".to_string(),
            "gsk_test".to_string(),
            "llama-3.3-70b-versatile".to_string(),
            4096,
            "https://api.groq.com/openai/v1".to_string(),
        );
        assert_eq!(client.id(), "groq");
        assert_eq!(client.model(), "llama-3.3-70b-versatile");
    }
}
