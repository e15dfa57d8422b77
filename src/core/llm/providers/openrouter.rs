//! OpenRouter Client Implementation
//!
//! OpenRouter provides access to many models through a unified
//! OpenAI-compatible API.

use async_trait::async_trait;

use super::openai_compat::OpenAiCompatibleClient;
use crate::core::llm::client::LlmClient;
use crate::core::llm::error::Result;

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// OpenRouter provider client.
pub struct OpenRouterClient {
    inner: OpenAiCompatibleClient,
}

impl OpenRouterClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, OPENROUTER_BASE_URL.to_string())
    }

    /// Custom endpoint, used by tests.
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            inner: OpenAiCompatibleClient::new(
                "openrouter".to_string(),
                api_key,
                model,
                2048,
                base_url,
            ),
        }
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    fn id(&self) -> &str {
        "openrouter"
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        self.inner.complete(prompt, temperature).await
    }
}
