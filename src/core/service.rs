//! AI Service Facade
//!
//! Owns the startup-built corpus index and the resolved provider client, and
//! exposes the subsystem's public operations. Startup failures downgrade the
//! affected capability rather than aborting the host; the capability state
//! is checked at the boundary of each operation.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::AiConfig;
use crate::core::difficulty;
use crate::core::guardian::{self, GuardianAnswer, GuardianError, GuardianQuery};
use crate::core::knowledge::{load_corpus, CorpusIndex, EmbeddingClient, GoogleEmbeddings};
use crate::core::llm::{resolve_client, LlmClient};
use crate::core::scenario::{self, ScenarioRequest, ScenarioResult, ScenarioType};
use crate::core::validation::{validate, ValidationReport};

// ============================================================================
// Error & Status Types
// ============================================================================

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Generation backend unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Unknown scenario type: '{0}'")]
    UnknownScenarioType(String),

    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, AiError>;

/// Snapshot of provider and corpus readiness.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProviderStatus {
    pub provider_name: String,
    pub is_active: bool,
    pub corpus_ready: bool,
}

/// Persistence collaborator: stores a generated scenario for a player and
/// returns the stored-record identifier. Implemented by the host.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    async fn save(
        &self,
        player_id: u64,
        result: &ScenarioResult,
    ) -> std::result::Result<u64, String>;
}

// ============================================================================
// Service
// ============================================================================

/// Shared, read-only-after-startup AI subsystem handle.
///
/// The corpus index is built once and replaced wholesale on reload, so
/// concurrent readers never observe a half-built index.
pub struct AiService {
    config: AiConfig,
    client: Option<Arc<dyn LlmClient>>,
    embedder: Arc<dyn EmbeddingClient>,
    index: RwLock<Option<Arc<CorpusIndex>>>,
}

impl AiService {
    /// Environment-driven startup: resolve the provider client, build the
    /// corpus index, log the validation outcome. Failures leave the
    /// corresponding capability disabled; they never abort the host.
    pub async fn init(config: AiConfig) -> Self {
        let embedder: Arc<dyn EmbeddingClient> = Arc::new(GoogleEmbeddings::new(
            &config.embedding.credential,
            config.embedding.model.clone(),
            None,
        ));

        let client = match resolve_client(&config.provider) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("LLM provider unavailable: {}", e);
                None
            }
        };

        let service = Self::from_parts(config, client, embedder).await;

        let report = service.validate_configuration().await;
        if report.is_valid {
            tracing::info!(
                "AI subsystem initialized with provider '{}'",
                report.active_provider
            );
        } else {
            tracing::warn!("AI subsystem degraded: {:?}", report.errors);
        }

        service
    }

    /// Assemble a service from pre-built parts and build the index. Hosts
    /// that manage their own clients (and tests) use this; `init` is the
    /// environment-driven path.
    pub async fn from_parts(
        config: AiConfig,
        client: Option<Arc<dyn LlmClient>>,
        embedder: Arc<dyn EmbeddingClient>,
    ) -> Self {
        let service = Self {
            config,
            client,
            embedder,
            index: RwLock::new(None),
        };
        service.reload_corpus().await;
        service
    }

    /// Rebuild the corpus index from the configured directory, replacing the
    /// shared handle wholesale. On failure the previous index (if any) stays
    /// in place. Returns whether a fresh index is now live.
    pub async fn reload_corpus(&self) -> bool {
        let documents = load_corpus(&self.config.corpus.dir);
        match CorpusIndex::build(
            &documents,
            self.config.corpus.chunk_size,
            self.config.corpus.chunk_overlap,
            self.embedder.as_ref(),
        )
        .await
        {
            Ok(built) => {
                let mut guard = self.index.write().await;
                *guard = Some(Arc::new(built));
                true
            }
            Err(e) => {
                tracing::warn!("Corpus index unavailable: {}", e);
                false
            }
        }
    }

    async fn index_snapshot(&self) -> Option<Arc<CorpusIndex>> {
        self.index.read().await.clone()
    }

    async fn chunk_count(&self) -> usize {
        self.index_snapshot().await.map(|i| i.len()).unwrap_or(0)
    }

    /// Generate a difficulty-adapted scenario. Never fails on backend
    /// errors: the static fallback keeps the training flow alive.
    pub async fn generate_scenario(
        &self,
        player_skill: f32,
        scenario_type: ScenarioType,
    ) -> ScenarioResult {
        let tier = difficulty::classify(player_skill);
        let request = ScenarioRequest {
            skill: player_skill,
            scenario_type,
        };

        match &self.client {
            Some(client) => scenario::generate(&request, client.as_ref(), tier).await,
            None => scenario::fallback_result(scenario_type, tier),
        }
    }

    /// Generate from a wire-format scenario type ("EMAIL_PHISH", ...), as
    /// received from transport callers.
    pub async fn generate_scenario_by_name(
        &self,
        player_skill: f32,
        scenario_type: &str,
    ) -> Result<ScenarioResult> {
        let parsed = ScenarioType::parse(scenario_type)
            .ok_or_else(|| AiError::UnknownScenarioType(scenario_type.to_string()))?;
        Ok(self.generate_scenario(player_skill, parsed).await)
    }

    /// Generate a scenario and hand it to the persistence collaborator.
    pub async fn generate_scenario_for_player(
        &self,
        store: &dyn ScenarioStore,
        player_id: u64,
        player_skill: f32,
        scenario_type: ScenarioType,
    ) -> Result<(u64, ScenarioResult)> {
        let result = self.generate_scenario(player_skill, scenario_type).await;
        let record_id = store
            .save(player_id, &result)
            .await
            .map_err(AiError::Storage)?;
        Ok((record_id, result))
    }

    /// Answer a question through the Digital Guardian RAG flow. Fails with
    /// `GenerationUnavailable` when the backend cannot serve the query; a
    /// missing corpus yields an explicit no-context answer instead.
    pub async fn ask_guardian(&self, question_text: &str) -> Result<GuardianAnswer> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| AiError::GenerationUnavailable("no active LLM provider".to_string()))?;

        let index = match self.index_snapshot().await {
            Some(index) => index,
            None => return Ok(guardian::no_context_answer(client.id())),
        };

        let query = GuardianQuery {
            question_text: question_text.to_string(),
        };

        guardian::answer(
            &query,
            client.as_ref(),
            self.embedder.as_ref(),
            index.as_ref(),
            guardian::DEFAULT_TOP_K,
        )
        .await
        .map_err(|e| match e {
            GuardianError::GenerationUnavailable(msg) => AiError::GenerationUnavailable(msg),
            GuardianError::Embedding(err) => AiError::GenerationUnavailable(err.to_string()),
        })
    }

    /// Current provider and corpus readiness.
    pub async fn provider_status(&self) -> ProviderStatus {
        ProviderStatus {
            provider_name: self.config.provider.name.clone(),
            is_active: self.client.is_some(),
            corpus_ready: self.chunk_count().await > 0,
        }
    }

    /// Recompute the validation report. Idempotent and side-effect-free.
    pub async fn validate_configuration(&self) -> ValidationReport {
        validate(&self.config, self.chunk_count().await)
    }
}
