//! Groq Client Implementation
//!
//! Llama models on Groq's LPU inference API (OpenAI-compatible wire format).

use async_trait::async_trait;

use super::openai_compat::OpenAiCompatibleClient;
use crate::core::llm::client::LlmClient;
use crate::core::llm::error::Result;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq provider client.
pub struct GroqClient {
    inner: OpenAiCompatibleClient,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, GROQ_BASE_URL.to_string())
    }

    /// Custom endpoint, used by tests.
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            inner: OpenAiCompatibleClient::new(
                "groq".to_string(),
                api_key,
                model,
                4096,
                base_url,
            ),
        }
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    fn id(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        self.inner.complete(prompt, temperature).await
    }
}
