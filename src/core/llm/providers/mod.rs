//! LLM Provider Implementations
//!
//! Concrete clients for the supported backends plus the canonical provider
//! metadata table.
//!
//! Adding a new provider requires:
//! 1. A new enum variant in `ProviderConfig`
//! 2. A new entry in `PROVIDERS`
//! 3. The client implementation file

mod google;
mod groq;
mod openai_compat;
mod openrouter;

pub use google::GoogleClient;
pub use groq::GroqClient;
pub use openai_compat::OpenAiCompatibleClient;
pub use openrouter::OpenRouterClient;

use std::sync::Arc;

use crate::config::ProviderSettings;
use crate::core::llm::client::LlmClient;
use crate::core::llm::error::{LlmError, Result};

// ── Provider metadata ───────────────────────────────────────────────────────

/// Static metadata for a known provider. Single source of truth.
#[derive(Clone, Debug)]
pub struct ProviderMeta {
    pub id: &'static str,
    pub display_name: &'static str,
    pub default_model: &'static str,
    /// Environment variable holding the provider's API key.
    pub credential_env: &'static str,
}

/// Canonical table of all known providers.
pub const PROVIDERS: &[ProviderMeta] = &[
    ProviderMeta {
        id: "google",
        display_name: "Google AI",
        default_model: "gemini-1.5-flash",
        credential_env: "GOOGLE_API_KEY",
    },
    ProviderMeta {
        id: "groq",
        display_name: "Groq",
        default_model: "llama-3.3-70b-versatile",
        credential_env: "GROQ_API_KEY",
    },
    ProviderMeta {
        id: "openrouter",
        display_name: "OpenRouter",
        default_model: "meta-llama/llama-3.1-8b-instruct:free",
        credential_env: "OPENROUTER_API_KEY",
    },
];

/// Look up a provider's metadata by ID.
pub fn find_provider_meta(id: &str) -> Option<&'static ProviderMeta> {
    PROVIDERS.iter().find(|p| p.id == id)
}

// ── ProviderConfig ──────────────────────────────────────────────────────────

/// Configuration for creating clients. One variant per supported backend,
/// each holding its own bound parameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum ProviderConfig {
    Google { api_key: String, model: String },
    Groq { api_key: String, model: String },
    OpenRouter { api_key: String, model: String },
}

impl ProviderConfig {
    /// Validate flat settings and bind provider-specific parameters.
    ///
    /// Fails with `UnsupportedProvider` for an unknown name and with
    /// `MissingCredential` for a known name without a key; the two are
    /// distinguishable so the caller can report which precisely.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self> {
        let name = settings.name.trim().to_lowercase();
        let meta = find_provider_meta(&name)
            .ok_or_else(|| LlmError::UnsupportedProvider(settings.name.clone()))?;

        let api_key = settings.credential.trim();
        if api_key.is_empty() {
            return Err(LlmError::MissingCredential {
                provider: meta.id.to_string(),
                env_key: meta.credential_env,
            });
        }

        let model = settings.model.trim();
        let model = if model.is_empty() {
            meta.default_model.to_string()
        } else {
            model.to_string()
        };

        Ok(match meta.id {
            "google" => ProviderConfig::Google {
                api_key: api_key.to_string(),
                model,
            },
            "groq" => ProviderConfig::Groq {
                api_key: api_key.to_string(),
                model,
            },
            _ => ProviderConfig::OpenRouter {
                api_key: api_key.to_string(),
                model,
            },
        })
    }

    /// Create a client from this configuration. No network calls happen at
    /// resolution time.
    pub fn create_client(&self) -> Arc<dyn LlmClient> {
        match self {
            ProviderConfig::Google { api_key, model } => {
                Arc::new(GoogleClient::new(api_key.clone(), model.clone()))
            }
            ProviderConfig::Groq { api_key, model } => {
                Arc::new(GroqClient::new(api_key.clone(), model.clone()))
            }
            ProviderConfig::OpenRouter { api_key, model } => {
                Arc::new(OpenRouterClient::new(api_key.clone(), model.clone()))
            }
        }
    }

    /// Get the provider ID for this configuration.
    pub fn provider_id(&self) -> &'static str {
        match self {
            ProviderConfig::Google { .. } => "google",
            ProviderConfig::Groq { .. } => "groq",
            ProviderConfig::OpenRouter { .. } => "openrouter",
        }
    }

    /// Get the model name for this configuration.
    pub fn model_name(&self) -> String {
        match self {
            ProviderConfig::Google { model, .. }
            | ProviderConfig::Groq { model, .. }
            | ProviderConfig::OpenRouter { model, .. } => model.clone(),
        }
    }
}

/// Resolve flat settings straight to a ready client.
pub fn resolve_client(settings: &ProviderSettings) -> Result<Arc<dyn LlmClient>> {
    Ok(ProviderConfig::from_settings(settings)?.create_client())
}
