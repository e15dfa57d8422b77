//! SocialProof AI - Orchestration & Retrieval Core
//!
//! Core library providing multi-provider LLM access, retrieval-augmented
//! answering over the security knowledge base, and difficulty-adaptive
//! scenario generation for the SocialProof training platform.

pub mod config;
pub mod core;

pub use crate::config::{AiConfig, CorpusConfig, EmbeddingSettings, ProviderSettings};
pub use crate::core::service::{AiError, AiService, ProviderStatus, ScenarioStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
