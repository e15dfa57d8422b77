//! Scenario Generator
//!
//! Builds difficulty-adapted social engineering prompts, invokes the active
//! generation client, and shapes the raw output. Generation failure never
//! surfaces to the caller: a static fallback scenario keeps the training
//! flow alive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::difficulty::DifficultyTier;
use crate::core::llm::LlmClient;
use crate::core::templates::{SCENARIO_PROMPT_HEADER, SCENARIO_PROMPT_RULES};

/// Provider name reported when the static fallback was used.
pub const FALLBACK_PROVIDER: &str = "fallback";

/// Outputs shorter than this are retried once before being accepted as-is.
/// Tunable, not a contract.
const MIN_CONTENT_LEN: usize = 40;

/// Leading markers some backends prepend despite instructions.
const UNWANTED_PREFIXES: &[&str] = &[
    "Here is", "Here's", "Subject:", "Message:", "The message", "This is",
];

// ============================================================================
// Request/Result Types
// ============================================================================

/// Kind of social engineering simulation to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioType {
    EmailPhish,
    SmsScam,
    VoicePhish,
    SocialEngineering,
    Pretexting,
}

impl ScenarioType {
    /// Human-readable phrase used in generation prompts.
    pub fn readable(&self) -> &'static str {
        match self {
            Self::EmailPhish => "phishing email",
            Self::SmsScam => "smishing (SMS phishing) text message",
            Self::VoicePhish => "vishing (voice phishing) phone call script",
            Self::SocialEngineering => "social engineering attempt",
            Self::Pretexting => "pretexting scenario",
        }
    }

    /// Wire name as used by callers and persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailPhish => "EMAIL_PHISH",
            Self::SmsScam => "SMS_SCAM",
            Self::VoicePhish => "VOICE_PHISH",
            Self::SocialEngineering => "SOCIAL_ENGINEERING",
            Self::Pretexting => "PRETEXTING",
        }
    }

    /// Parse a wire name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "EMAIL_PHISH" => Some(Self::EmailPhish),
            "SMS_SCAM" => Some(Self::SmsScam),
            "VOICE_PHISH" => Some(Self::VoicePhish),
            "SOCIAL_ENGINEERING" => Some(Self::SocialEngineering),
            "PRETEXTING" => Some(Self::Pretexting),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to generate one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRequest {
    pub skill: f32,
    pub scenario_type: ScenarioType,
}

/// A generated (or fallback) scenario, ready to hand to the persistence
/// collaborator. This subsystem never stores it itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub id: Uuid,
    pub content: String,
    pub difficulty_value: f32,
    pub tier_label: String,
    pub scenario_type: ScenarioType,
    pub provider_name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Prompt Construction & Post-processing
// ============================================================================

/// Deterministic prompt construction: the same scenario type and tier always
/// produce the same prompt text. Only the backend's output varies.
pub fn build_prompt(scenario_type: ScenarioType, tier: &DifficultyTier) -> String {
    format!(
        "{header}\n\n\
         Task: Generate a {readable} for cybersecurity training purposes.\n\n\
         Difficulty Level: {label}\n\
         Requirements: The message should {hint}\n\n\
         {rules}\n\n\
         Generate the {readable} now:",
        header = SCENARIO_PROMPT_HEADER,
        readable = scenario_type.readable(),
        label = tier.label,
        hint = tier.instruction_hint,
        rules = SCENARIO_PROMPT_RULES,
    )
}

/// Strip known backend preambles and surrounding whitespace.
fn clean_content(raw: &str) -> String {
    let mut content = raw.trim();
    for prefix in UNWANTED_PREFIXES {
        if content.starts_with(prefix) {
            if let Some(newline) = content.find('\n') {
                content = content[newline..].trim_start();
            }
        }
    }
    content.trim().to_string()
}

// ============================================================================
// Generation
// ============================================================================

/// Generate a scenario via `client`, falling back to a static result when
/// the backend fails.
pub async fn generate(
    request: &ScenarioRequest,
    client: &dyn LlmClient,
    tier: &'static DifficultyTier,
) -> ScenarioResult {
    let prompt = build_prompt(request.scenario_type, tier);

    let mut content = match client.complete(&prompt, tier.temperature).await {
        Ok(raw) => clean_content(&raw),
        Err(e) => {
            tracing::warn!("Scenario generation failed, using fallback: {}", e);
            return fallback_result(request.scenario_type, tier);
        }
    };

    // One bounded retry for degenerate short outputs; a second short result
    // is accepted as-is rather than looping.
    if content.chars().count() < MIN_CONTENT_LEN {
        tracing::debug!(
            "Scenario output below {} chars, retrying once",
            MIN_CONTENT_LEN
        );
        match client.complete(&prompt, tier.temperature).await {
            Ok(raw) => {
                let retry = clean_content(&raw);
                if retry.chars().count() > content.chars().count() {
                    content = retry;
                }
            }
            Err(e) => {
                tracing::warn!("Scenario retry failed, keeping first output: {}", e);
            }
        }
    }

    ScenarioResult {
        id: Uuid::new_v4(),
        content,
        difficulty_value: tier.difficulty_value,
        tier_label: tier.label.to_string(),
        scenario_type: request.scenario_type,
        provider_name: client.id().to_string(),
        created_at: Utc::now(),
    }
}

/// Static scenario used when the backend is unavailable.
pub fn fallback_result(scenario_type: ScenarioType, tier: &DifficultyTier) -> ScenarioResult {
    ScenarioResult {
        id: Uuid::new_v4(),
        content: fallback_content(scenario_type).to_string(),
        difficulty_value: tier.difficulty_value,
        tier_label: tier.label.to_string(),
        scenario_type,
        provider_name: FALLBACK_PROVIDER.to_string(),
        created_at: Utc::now(),
    }
}

fn fallback_content(scenario_type: ScenarioType) -> &'static str {
    match scenario_type {
        ScenarioType::EmailPhish | ScenarioType::SocialEngineering | ScenarioType::Pretexting => {
            "From: support@paypa1.com\n\
             Subject: URGENT: Account Suspended!\n\n\
             Dear User,\n\n\
             Your account has been LOCKED due to suspicious activity!!!\n\n\
             Click here NOW to verify: http://paypal-verify.tk/login\n\n\
             You have 24 hours or the account will be DELETED FOREVER!\n\n\
             Security Team"
        }
        ScenarioType::SmsScam => {
            "FEDEX: Package delivery failed. Reschedule now: http://bit.ly/fedex123 \
             or package will be returned!"
        }
        ScenarioType::VoicePhish => {
            "Hello, this is the fraud department at your bank. We've detected unusual \
             activity on your card and need to verify your identity. Please confirm your \
             card number and the code we just sent you so we can secure the account."
        }
    }
}
