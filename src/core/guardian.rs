//! Digital Guardian Answerer
//!
//! Retrieval-augmented question answering over the security knowledge base,
//! with source attribution. Unlike scenario generation, a backend failure
//! here is surfaced to the caller: a confident fabricated answer to a
//! security question is worse than an explicit error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::knowledge::{CorpusIndex, EmbeddingClient, EmbeddingError};
use crate::core::llm::LlmClient;
use crate::core::templates::{GUARDIAN_NO_CONTEXT_ANSWER, GUARDIAN_SYSTEM_PROMPT};

/// Number of chunks retrieved for grounding by default.
pub const DEFAULT_TOP_K: usize = 3;

/// Guardian answers favour factual, low-variance output.
pub const GUARDIAN_TEMPERATURE: f32 = 0.2;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum GuardianError {
    #[error("Generation backend unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Embedding backend error: {0}")]
    Embedding(#[from] EmbeddingError),
}

pub type Result<T> = std::result::Result<T, GuardianError>;

// ============================================================================
// Query/Answer Types
// ============================================================================

/// A free-text question for the Digital Guardian.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardianQuery {
    pub question_text: String,
}

/// Grounded answer with the labels of the sources used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardianAnswer {
    pub answer_text: String,
    /// Distinct source labels, retrieval-rank order preserved.
    pub source_labels: Vec<String>,
    pub provider_name: String,
}

// ============================================================================
// Answering
// ============================================================================

/// Build the grounded prompt: retrieved chunk texts verbatim, then the
/// question.
pub fn build_prompt(context_chunks: &[&str], question: &str) -> String {
    format!(
        "{system}\n\nContext from Knowledge Base:\n{context}\n\nUser Question: {question}\n\nHelpful Answer:",
        system = GUARDIAN_SYSTEM_PROMPT,
        context = context_chunks.join("\n\n"),
        question = question,
    )
}

/// Answer used when the index holds no grounding context.
pub fn no_context_answer(provider: &str) -> GuardianAnswer {
    GuardianAnswer {
        answer_text: GUARDIAN_NO_CONTEXT_ANSWER.to_string(),
        source_labels: Vec::new(),
        provider_name: provider.to_string(),
    }
}

/// Answer a question grounded in the top-k corpus chunks.
///
/// An empty index or zero retrieval hits produces an explicit
/// no-grounding-context answer rather than a fabricated one. Backend
/// failures surface as `GenerationUnavailable`.
pub async fn answer(
    query: &GuardianQuery,
    client: &dyn LlmClient,
    embedder: &dyn EmbeddingClient,
    index: &CorpusIndex,
    k: usize,
) -> Result<GuardianAnswer> {
    if index.is_empty() {
        return Ok(no_context_answer(client.id()));
    }

    let question_vector = embedder.embed(&query.question_text).await?;

    let hits = index
        .top_k(&question_vector, k.max(1))
        .map_err(|e| GuardianError::GenerationUnavailable(e.to_string()))?;

    if hits.is_empty() {
        return Ok(no_context_answer(client.id()));
    }

    let texts: Vec<&str> = hits.iter().map(|c| c.text.as_str()).collect();
    let prompt = build_prompt(&texts, &query.question_text);

    let answer_text = client
        .complete(&prompt, GUARDIAN_TEMPERATURE)
        .await
        .map_err(|e| GuardianError::GenerationUnavailable(e.to_string()))?;

    let mut source_labels: Vec<String> = Vec::new();
    for chunk in &hits {
        if !source_labels.iter().any(|l| l == &chunk.source_label) {
            source_labels.push(chunk.source_label.clone());
        }
    }

    Ok(GuardianAnswer {
        answer_text,
        source_labels,
        provider_name: client.id().to_string(),
    })
}
