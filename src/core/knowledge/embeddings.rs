//! Embedding Provider Module
//!
//! Defines the `EmbeddingClient` trait and the Google adapter used to
//! vectorize corpus chunks and guardian questions.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, EmbeddingError>;

// ============================================================================
// Embedding Client Trait
// ============================================================================

/// Trait for embedding backends.
///
/// A failed call is always an error. Results are never defaulted to zero
/// vectors: a corrupted index is worse than a failed one.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Generate one vector per input text, preserving order and length.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text]).await?;
        if vectors.len() != 1 {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected 1 embedding, got {}",
                vectors.len()
            )));
        }
        Ok(vectors.remove(0))
    }

    /// Embedding model identifier.
    fn model(&self) -> &str;
}

// ============================================================================
// Google Embeddings Adapter
// ============================================================================

const GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Google embedding adapter over `batchEmbedContents`.
///
/// The platform embeds with Google's model regardless of which provider
/// handles text generation.
pub struct GoogleEmbeddings {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GoogleEmbeddings {
    /// Create a new Google embeddings adapter.
    ///
    /// # Arguments
    /// * `api_key` - Google API key
    /// * `model` - Model name (e.g., "embedding-001")
    /// * `base_url` - Custom API endpoint (None for the Google default)
    pub fn new(api_key: &str, model: String, base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.trim().to_string(),
            model,
            base_url: base_url.unwrap_or_else(|| GOOGLE_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl EmbeddingClient for GoogleEmbeddings {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/models/{}:batchEmbedContents",
            self.base_url, self.model
        );

        let requests: Vec<serde_json::Value> = texts
            .iter()
            .map(|text| {
                serde_json::json!({
                    "model": format!("models/{}", self.model),
                    "content": { "parts": [{ "text": text }] }
                })
            })
            .collect();

        let resp = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&serde_json::json!({ "requests": requests }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(EmbeddingError::ApiError(format!(
                "Google embeddings API error {}: {}",
                status, text
            )));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;

        let embeddings = json["embeddings"]
            .as_array()
            .ok_or_else(|| EmbeddingError::InvalidResponse("Missing embeddings".to_string()))?;

        let vectors: Vec<Vec<f32>> = embeddings
            .iter()
            .map(|e| {
                e["values"]
                    .as_array()
                    .map(|vals| {
                        vals.iter()
                            .filter_map(|v| v.as_f64())
                            .map(|v| v as f32)
                            .collect::<Vec<f32>>()
                    })
                    .ok_or_else(|| {
                        EmbeddingError::InvalidResponse("Missing embedding values".to_string())
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        if vectors.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "embedding count mismatch: expected {}, got {}",
                texts.len(),
                vectors.len()
            )));
        }

        Ok(vectors)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
