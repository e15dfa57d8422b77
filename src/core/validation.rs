//! Configuration Validation
//!
//! Recomputes a structured report of provider and corpus readiness. Errors
//! block AI features; warnings do not. Pure and idempotent: the same inputs
//! always yield the same report.

use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::core::llm::ProviderConfig;

/// Structured result of a configuration check. Recomputed on demand, no
/// persistent identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub active_provider: String,
    pub corpus_ready: bool,
}

/// Validate the active provider settings and corpus state.
///
/// Credential checks report the environment key, never the secret itself.
pub fn validate(config: &AiConfig, corpus_chunk_count: usize) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.provider.name.trim().is_empty() {
        errors.push("LLM_PROVIDER is not set".to_string());
    } else if let Err(e) = ProviderConfig::from_settings(&config.provider) {
        errors.push(e.to_string());
    }

    if !(0.0..=2.0).contains(&config.provider.default_temperature) {
        warnings.push(format!(
            "default_temperature {} is outside the usual [0, 2] range",
            config.provider.default_temperature
        ));
    }

    // Embeddings always ride on the Google backend, even when another
    // provider handles generation.
    if config.embedding.credential.trim().is_empty() {
        warnings.push(
            "Embeddings unavailable: GOOGLE_API_KEY is not set; guardian retrieval is disabled"
                .to_string(),
        );
    }

    let corpus_ready = corpus_chunk_count > 0;
    if !corpus_ready {
        warnings.push(format!(
            "Knowledge corpus is empty (looked in {}); guardian answers will lack grounding",
            config.corpus.dir.display()
        ));
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        active_provider: config.provider.name.clone(),
        corpus_ready,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(name: &str, credential: &str, embed_credential: &str) -> AiConfig {
        let mut config = AiConfig::default();
        config.provider.name = name.to_string();
        config.provider.credential = credential.to_string();
        config.embedding.credential = embed_credential.to_string();
        config
    }

    #[test]
    fn test_valid_configuration() {
        let config = config_with("google", "AIzaTest", "AIzaTest");
        let report = validate(&config, 12);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.corpus_ready);
        assert_eq!(report.active_provider, "google");
    }

    #[test]
    fn test_unknown_provider_is_an_error() {
        let config = config_with("mystery", "key", "AIzaTest");
        let report = validate(&config, 12);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("mystery"));
    }

    #[test]
    fn test_missing_credential_names_env_key_not_secret() {
        let config = config_with("groq", "", "AIzaTest");
        let report = validate(&config, 12);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_empty_corpus_is_a_warning_not_an_error() {
        let config = config_with("google", "AIzaTest", "AIzaTest");
        let report = validate(&config, 0);
        assert!(report.is_valid);
        assert!(!report.corpus_ready);
        assert!(report.warnings.iter().any(|w| w.contains("corpus")));
    }

    #[test]
    fn test_missing_embedding_key_is_a_warning() {
        let config = config_with("groq", "gsk_test", "");
        let report = validate(&config, 5);
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|w| w.contains("GOOGLE_API_KEY")));
    }

    #[test]
    fn test_out_of_range_temperature_is_a_warning() {
        let mut config = config_with("google", "AIzaTest", "AIzaTest");
        config.provider.default_temperature = 4.5;
        let report = validate(&config, 3);
        assert!(report.is_valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("default_temperature")));
    }

    #[test]
    fn test_repeat_validation_is_identical() {
        let config = config_with("google", "", "");
        let first = validate(&config, 0);
        let second = validate(&config, 0);
        assert_eq!(first, second);
    }
}
