//! Shared fixtures for integration tests.

use async_trait::async_trait;
use socialproof_ai::core::knowledge::embeddings::{EmbeddingClient, Result as EmbedResult};
use socialproof_ai::core::llm::error::{LlmError, Result as LlmResult};
use socialproof_ai::core::llm::LlmClient;
use socialproof_ai::{AiConfig, CorpusConfig};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic offline embedder: a crude bag-of-bytes projection, good
/// enough to make related texts land near each other.
pub struct TestEmbedder;

#[async_trait]
impl EmbeddingClient for TestEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> EmbedResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| {
                let mut v = vec![0.0f32; 16];
                for (i, b) in t.to_lowercase().bytes().enumerate() {
                    v[(b as usize + i) % 16] += 1.0;
                }
                v
            })
            .collect())
    }

    fn model(&self) -> &str {
        "test-embedder"
    }
}

/// Client that always answers with a fixed body and counts calls.
pub struct CannedClient {
    pub response: String,
    pub calls: AtomicUsize,
}

impl CannedClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmClient for CannedClient {
    fn id(&self) -> &str {
        "canned"
    }

    fn model(&self) -> &str {
        "canned-model"
    }

    async fn complete(&self, _prompt: &str, _temperature: f32) -> LlmResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Client whose backend is gone, as when a credential was revoked after
/// startup.
pub struct RevokedClient;

#[async_trait]
impl LlmClient for RevokedClient {
    fn id(&self) -> &str {
        "revoked"
    }

    fn model(&self) -> &str {
        "revoked-model"
    }

    async fn complete(&self, _prompt: &str, _temperature: f32) -> LlmResult<String> {
        Err(LlmError::Api {
            status: 401,
            message: "invalid api key".to_string(),
        })
    }
}

/// Config pointing at a corpus directory, with credentials filled in so
/// validation passes.
pub fn test_config(corpus_dir: &Path) -> AiConfig {
    let mut config = AiConfig::default();
    config.provider.credential = "AIzaTestKey".to_string();
    config.embedding.credential = "AIzaTestKey".to_string();
    config.corpus = CorpusConfig {
        dir: corpus_dir.to_path_buf(),
        chunk_size: 256,
        chunk_overlap: 32,
    };
    config
}
