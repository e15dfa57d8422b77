//! Corpus Index
//!
//! Immutable chunk store with brute-force cosine retrieval. For a corpus of
//! a handful of short documents, a linear scan beats any accelerated
//! structure; revisit only if the corpus grows past low thousands of chunks.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chunker::split_text;
use super::corpus::KnowledgeDocument;
use super::embeddings::{EmbeddingClient, EmbeddingError};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Knowledge corpus is empty: add .txt documents to the knowledge base directory")]
    EmptyCorpus,

    #[error("Embedding backend error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Invalid top_k request: k must be positive")]
    InvalidK,
}

pub type Result<T> = std::result::Result<T, IndexError>;

// ============================================================================
// Chunk & Index
// ============================================================================

/// A bounded span of one document plus its embedding vector. Created only
/// during index construction; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: u32,
    pub document_id: u32,
    pub source_label: String,
    pub text: String,
    pub embedding: Vec<f32>,
    /// Character offset of the chunk within its document.
    pub offset: usize,
}

/// Ordered collection of embedded chunks with nearest-neighbour lookup.
#[derive(Debug)]
pub struct CorpusIndex {
    chunks: Vec<Chunk>,
}

impl CorpusIndex {
    /// Build an index: split every document into overlapping chunks and
    /// embed them in one batched call.
    ///
    /// Fails with `EmptyCorpus` when there are no documents or all documents
    /// are blank after trimming; the condition is recoverable, not fatal to
    /// the host.
    pub async fn build(
        documents: &[KnowledgeDocument],
        chunk_size: usize,
        chunk_overlap: usize,
        embedder: &dyn EmbeddingClient,
    ) -> Result<Self> {
        let mut pending = Vec::new();
        for doc in documents {
            for span in split_text(&doc.raw_text, chunk_size, chunk_overlap) {
                pending.push((doc.id, doc.source_label.clone(), span.offset, span.text));
            }
        }

        if pending.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        let texts: Vec<&str> = pending.iter().map(|(_, _, _, text)| text.as_str()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;
        let chunk_count = texts.len();
        drop(texts);

        let chunks = pending
            .into_iter()
            .zip(embeddings)
            .enumerate()
            .map(
                |(i, ((document_id, source_label, offset, text), embedding))| Chunk {
                    id: i as u32,
                    document_id,
                    source_label,
                    text,
                    embedding,
                    offset,
                },
            )
            .collect();

        tracing::info!(
            "Corpus index built: {} chunks from {} documents",
            chunk_count,
            documents.len()
        );

        Ok(Self { chunks })
    }

    /// Construct an index directly from pre-embedded chunks.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Number of chunks in the index.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Top-k chunks by cosine similarity, descending; ties broken by
    /// ascending chunk id. Never returns more than `min(k, len)` chunks; an
    /// empty index yields an empty result, `k == 0` is an error.
    pub fn top_k(&self, query: &[f32], k: usize) -> Result<Vec<&Chunk>> {
        if k == 0 {
            return Err(IndexError::InvalidK);
        }

        let mut scored: Vec<(f32, &Chunk)> = self
            .chunks
            .iter()
            .map(|c| (cosine_similarity(query, &c.embedding), c))
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        Ok(scored.into_iter().take(k).map(|(_, c)| c).collect())
    }
}

/// Cosine similarity of two vectors; 0.0 when either has zero magnitude or
/// the dimensions differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
