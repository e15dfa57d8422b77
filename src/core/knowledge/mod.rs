//! Knowledge Corpus & Retrieval
//!
//! Owns the static security knowledge base: document loading, chunking,
//! embedding, and brute-force cosine retrieval. The index is built once at
//! startup and shared read-only across requests; a reload builds a fresh
//! index rather than mutating the live one.

pub mod chunker;
pub mod corpus;
pub mod embeddings;
pub mod index;

pub use corpus::{load_corpus, KnowledgeDocument};
pub use embeddings::{EmbeddingClient, EmbeddingError, GoogleEmbeddings};
pub use index::{cosine_similarity, Chunk, CorpusIndex, IndexError};
