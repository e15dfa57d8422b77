//! Generation client trait.

use async_trait::async_trait;

use crate::core::llm::error::Result;

/// A ready-to-use text-generation backend.
///
/// Implementations are stateless per call and safe to share across
/// concurrent requests. Rate limits imposed by the backend surface as API
/// errors on the call, never as a blocking wait; every call is bounded by
/// the client's HTTP timeout.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Stable provider id ("google", "groq", "openrouter").
    fn id(&self) -> &str;

    /// Model identifier bound at construction.
    fn model(&self) -> &str;

    /// Complete a prompt at the given sampling temperature.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String>;
}
