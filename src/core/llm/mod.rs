//! LLM Client Module
//!
//! Unified interface over the supported text-generation backends:
//! - Provider registry with tagged-variant dispatch
//! - One client implementation per backend (Google, Groq, OpenRouter)
//! - Bounded per-call timeouts; no retry inside the registry
//!
//! # Module Structure
//!
//! - `client`: the `LlmClient` trait
//! - `error`: the LLM error taxonomy
//! - `providers`: provider metadata table and concrete implementations

pub mod client;
pub mod error;
pub mod providers;

// Re-export commonly used types
pub use client::LlmClient;
pub use error::{LlmError, Result};
pub use providers::{
    find_provider_meta, resolve_client, GoogleClient, GroqClient, OpenRouterClient,
    ProviderConfig, ProviderMeta, PROVIDERS,
};
