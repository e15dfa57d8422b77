//! LLM error taxonomy.
//!
//! Resolution errors (`UnsupportedProvider`, `MissingCredential`) are kept
//! distinct from call-time backend errors so callers can report which
//! precisely. Messages name the provider and the credential key, never the
//! credential itself.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Unsupported LLM provider: '{0}'. Supported providers are: 'google', 'groq', 'openrouter'")]
    UnsupportedProvider(String),

    #[error("Missing credential for provider '{provider}': set {env_key} in the environment")]
    MissingCredential {
        provider: String,
        env_key: &'static str,
    },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, LlmError>;
