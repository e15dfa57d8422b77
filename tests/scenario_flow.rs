//! Scenario generation flow, including degradation and persistence hand-off.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{test_config, CannedClient, RevokedClient, TestEmbedder};
use socialproof_ai::core::scenario::{ScenarioResult, ScenarioType, FALLBACK_PROVIDER};
use socialproof_ai::{AiService, ScenarioStore};
use tokio::sync::Mutex;

struct RecordingStore {
    saved: Mutex<Vec<(u64, String)>>,
}

#[async_trait]
impl ScenarioStore for RecordingStore {
    async fn save(&self, player_id: u64, result: &ScenarioResult) -> Result<u64, String> {
        let mut saved = self.saved.lock().await;
        saved.push((player_id, result.content.clone()));
        Ok(saved.len() as u64)
    }
}

#[tokio::test]
async fn scenario_uses_active_provider_and_tier() {
    let dir = tempfile::tempdir().unwrap();
    let client = Arc::new(CannedClient::new(
        "Dear Customer, we noticed a sign-in from a new device. Verify your account within \
         24 hours to avoid interruption.",
    ));

    let service = AiService::from_parts(
        test_config(dir.path()),
        Some(client.clone()),
        Arc::new(TestEmbedder),
    )
    .await;

    let result = service
        .generate_scenario(0.0, ScenarioType::EmailPhish)
        .await;
    assert_eq!(result.provider_name, "canned");
    assert_eq!(result.tier_label, "Beginner");
    assert_eq!(result.difficulty_value, 1.0);

    let expert = service
        .generate_scenario(1000.0, ScenarioType::EmailPhish)
        .await;
    assert_eq!(expert.tier_label, "Expert");
    assert_eq!(expert.difficulty_value, 9.0);
}

#[tokio::test]
async fn revoked_credential_falls_back_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();

    let service = AiService::from_parts(
        test_config(dir.path()),
        Some(Arc::new(RevokedClient)),
        Arc::new(TestEmbedder),
    )
    .await;

    let result = service
        .generate_scenario(500.0, ScenarioType::SmsScam)
        .await;
    assert_eq!(result.provider_name, FALLBACK_PROVIDER);
    assert!(!result.content.is_empty());
}

#[tokio::test]
async fn no_provider_at_all_still_yields_fallback() {
    let dir = tempfile::tempdir().unwrap();

    let service =
        AiService::from_parts(test_config(dir.path()), None, Arc::new(TestEmbedder)).await;

    let result = service
        .generate_scenario(500.0, ScenarioType::EmailPhish)
        .await;
    assert_eq!(result.provider_name, FALLBACK_PROVIDER);

    let status = service.provider_status().await;
    assert!(!status.is_active);
}

#[tokio::test]
async fn wire_names_parse_and_unknown_ones_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let service = AiService::from_parts(
        test_config(dir.path()),
        Some(Arc::new(CannedClient::new(
            "A believable smishing message that is long enough to pass the length check.",
        ))),
        Arc::new(TestEmbedder),
    )
    .await;

    let result = service
        .generate_scenario_by_name(300.0, "sms_scam")
        .await
        .unwrap();
    assert_eq!(result.scenario_type, ScenarioType::SmsScam);
    assert_eq!(result.tier_label, "Easy");

    let err = service
        .generate_scenario_by_name(300.0, "QUISHING")
        .await
        .unwrap_err();
    assert!(matches!(err, socialproof_ai::AiError::UnknownScenarioType(_)));
}

#[tokio::test]
async fn generated_scenario_is_handed_to_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordingStore {
        saved: Mutex::new(Vec::new()),
    };

    let service = AiService::from_parts(
        test_config(dir.path()),
        Some(Arc::new(CannedClient::new(
            "A believable pretext message that is long enough to pass the length check.",
        ))),
        Arc::new(TestEmbedder),
    )
    .await;

    let (record_id, result) = service
        .generate_scenario_for_player(&store, 42, 700.0, ScenarioType::Pretexting)
        .await
        .unwrap();
    assert_eq!(record_id, 1);

    let saved = store.saved.lock().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, 42);
    assert_eq!(saved[0].1, result.content);
}

#[tokio::test]
async fn validation_is_idempotent_across_calls() {
    let dir = tempfile::tempdir().unwrap();

    let service = AiService::from_parts(
        test_config(dir.path()),
        Some(Arc::new(CannedClient::new("unused"))),
        Arc::new(TestEmbedder),
    )
    .await;

    let first = service.validate_configuration().await;
    let second = service.validate_configuration().await;
    assert_eq!(first, second);
    assert!(first.is_valid);
    assert!(!first.corpus_ready);
}
