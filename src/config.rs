//! Subsystem configuration.
//!
//! Provider selection, corpus location and chunking parameters come from an
//! optional TOML file; credentials are always read from the process
//! environment at startup and never from the file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::llm::find_provider_meta;

/// Top-level configuration for the AI subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub provider: ProviderSettings,
    pub embedding: EmbeddingSettings,
    pub corpus: CorpusConfig,
}

/// Flat provider selection, resolved into a concrete client by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Provider id: "google", "groq" or "openrouter".
    pub name: String,
    /// Model identifier; empty selects the provider default.
    pub model: String,
    /// API key. Populated from the environment, never serialized.
    #[serde(skip)]
    pub credential: String,
    /// Sampling temperature used when no difficulty tier overrides it.
    pub default_temperature: f32,
}

/// Embedding backend settings.
///
/// Embeddings ride on Google's embedding model regardless of which provider
/// handles text generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Embedding model name.
    pub model: String,
    /// API key from `GOOGLE_API_KEY`. Never serialized.
    #[serde(skip)]
    pub credential: String,
}

/// Knowledge corpus location and chunking parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory of `.txt` knowledge documents, read once at startup.
    pub dir: PathBuf,
    /// Maximum chunk length in characters.
    pub chunk_size: usize,
    /// Characters shared between neighbouring chunks.
    pub chunk_overlap: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ProviderSettings::default(),
            embedding: EmbeddingSettings::default(),
            corpus: CorpusConfig::default(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: "google".to_string(),
            model: String::new(),
            credential: String::new(),
            default_temperature: 0.3,
        }
    }
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            model: "embedding-001".to_string(),
            credential: String::new(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("knowledge_base"),
            chunk_size: 512,
            chunk_overlap: 64,
        }
    }
}

impl AiConfig {
    /// Load configuration from `~/.config/socialproof/ai.toml`, then apply
    /// environment overrides. Returns defaults (plus environment) if the
    /// file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Build configuration from defaults plus the process environment only.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables: `LLM_PROVIDER`, `LLM_MODEL`,
    /// `KNOWLEDGE_BASE_DIR`, and the credential key of the active provider.
    fn apply_env(&mut self) {
        if let Ok(name) = std::env::var("LLM_PROVIDER") {
            self.provider.name = name.trim().to_lowercase();
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            self.provider.model = model.trim().to_string();
        }
        if let Ok(dir) = std::env::var("KNOWLEDGE_BASE_DIR") {
            self.corpus.dir = PathBuf::from(dir);
        }

        if let Some(meta) = find_provider_meta(&self.provider.name) {
            self.provider.credential = std::env::var(meta.credential_env).unwrap_or_default();
        }

        // Embeddings always need the Google key, even when another provider
        // handles generation.
        self.embedding.credential = std::env::var("GOOGLE_API_KEY").unwrap_or_default();
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("socialproof").join("ai.toml"))
            .unwrap_or_else(|| PathBuf::from("ai.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AiConfig::default();
        assert_eq!(config.provider.name, "google");
        assert!(config.provider.model.is_empty());
        assert_eq!(config.provider.default_temperature, 0.3);
        assert_eq!(config.corpus.dir, PathBuf::from("knowledge_base"));
        assert_eq!(config.corpus.chunk_size, 512);
        assert_eq!(config.corpus.chunk_overlap, 64);
        assert_eq!(config.embedding.model, "embedding-001");
    }

    #[test]
    fn test_credentials_never_serialized() {
        let mut config = AiConfig::default();
        config.provider.credential = "secret-key".to_string();
        config.embedding.credential = "secret-key".to_string();
        let serialized = toml::to_string(&config).unwrap();
        assert!(!serialized.contains("secret-key"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AiConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AiConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.provider.name, config.provider.name);
        assert_eq!(deserialized.corpus.chunk_size, config.corpus.chunk_size);
    }
}
