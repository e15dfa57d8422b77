//! Difficulty Policy
//!
//! Pure mapping from a player's skill rating to a difficulty tier with
//! bound generation parameters. The tier table partitions the full skill
//! domain; classification is total and monotonic.

use serde::Serialize;

/// Upper bound of the skill domain. Ratings outside [0, MAX_SKILL] clamp to
/// the nearest bound.
pub const MAX_SKILL: f32 = 1000.0;

/// A named band of the skill domain with its generation parameters.
///
/// Low tiers pair obvious prompt guidance with low temperature for
/// predictable output; high tiers get subtler guidance and more natural
/// variation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyTier {
    pub label: &'static str,
    /// Inclusive lower skill bound.
    pub lower: f32,
    /// Exclusive upper skill bound (inclusive for the top tier).
    pub upper: f32,
    /// Sampling temperature passed to the generation client.
    pub temperature: f32,
    /// Numeric difficulty reported with generated scenarios.
    pub difficulty_value: f32,
    /// Prompt guidance controlling how detectable the red flags are.
    pub instruction_hint: &'static str,
}

/// Ordered tier table spanning [0, MAX_SKILL] with no gaps or overlaps.
pub const TIERS: &[DifficultyTier] = &[
    DifficultyTier {
        label: "Beginner",
        lower: 0.0,
        upper: 300.0,
        temperature: 0.2,
        difficulty_value: 1.0,
        instruction_hint: "include several obvious red flags such as spelling mistakes, \
            grammatical errors, a generic greeting like 'Dear Customer', and an obviously \
            suspicious sender address. The urgency should be exaggerated and unrealistic.",
    },
    DifficultyTier {
        label: "Easy",
        lower: 300.0,
        upper: 550.0,
        temperature: 0.3,
        difficulty_value: 3.0,
        instruction_hint: "contain several noticeable red flags, a minor grammatical slip, \
            and strong urgency that a careful reader would question.",
    },
    DifficultyTier {
        label: "Medium",
        lower: 550.0,
        upper: 750.0,
        temperature: 0.4,
        difficulty_value: 5.0,
        instruction_hint: "be well-written with minor imperfections, use a plausible pretext \
            that creates genuine concern, include a link that appears legitimate at first \
            glance but has subtle discrepancies, and use moderate urgency that seems \
            realistic but pressuring.",
    },
    DifficultyTier {
        label: "Hard",
        lower: 750.0,
        upper: 900.0,
        temperature: 0.5,
        difficulty_value: 7.0,
        instruction_hint: "contain minimal red flags, a professional tone, and a pretext \
            that looks legitimate; only subtle link or sender discrepancies should give it \
            away.",
    },
    DifficultyTier {
        label: "Expert",
        lower: 900.0,
        upper: MAX_SKILL,
        temperature: 0.6,
        difficulty_value: 9.0,
        instruction_hint: "be highly convincing and professional, perfectly personalized \
            with no grammatical errors, create a strong sense of urgency with logical \
            reasoning, include sophisticated social engineering techniques, and use \
            brand-accurate formatting and language.",
    },
];

/// Classify a skill rating into its tier.
///
/// Total over all inputs: out-of-domain values (including NaN) clamp to the
/// nearest bound rather than being rejected. The top tier's upper bound is
/// inclusive of `MAX_SKILL`.
pub fn classify(skill: f32) -> &'static DifficultyTier {
    let skill = if skill.is_nan() {
        0.0
    } else {
        skill.clamp(0.0, MAX_SKILL)
    };

    TIERS
        .iter()
        .find(|t| skill >= t.lower && skill < t.upper)
        .unwrap_or_else(|| &TIERS[TIERS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tier_index(tier: &DifficultyTier) -> usize {
        TIERS.iter().position(|t| t.label == tier.label).unwrap()
    }

    #[test]
    fn test_tiers_partition_full_domain() {
        assert_eq!(TIERS[0].lower, 0.0);
        assert_eq!(TIERS[TIERS.len() - 1].upper, MAX_SKILL);
        for pair in TIERS.windows(2) {
            // no gap, no overlap
            assert_eq!(pair[0].upper, pair[1].lower);
        }
    }

    #[test]
    fn test_temperature_increases_with_tier() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].temperature < pair[1].temperature);
            assert!(pair[0].difficulty_value < pair[1].difficulty_value);
        }
    }

    #[test]
    fn test_skill_zero_is_lowest_tier() {
        let tier = classify(0.0);
        assert_eq!(tier.label, "Beginner");
        assert_eq!(tier.temperature, TIERS[0].temperature);
    }

    #[test]
    fn test_max_skill_is_highest_tier() {
        assert_eq!(classify(MAX_SKILL).label, "Expert");
    }

    #[test]
    fn test_boundaries_belong_to_upper_tier() {
        assert_eq!(classify(299.9).label, "Beginner");
        assert_eq!(classify(300.0).label, "Easy");
        assert_eq!(classify(550.0).label, "Medium");
        assert_eq!(classify(750.0).label, "Hard");
        assert_eq!(classify(900.0).label, "Expert");
    }

    #[test]
    fn test_out_of_domain_clamps() {
        assert_eq!(classify(-50.0).label, "Beginner");
        assert_eq!(classify(5000.0).label, "Expert");
        assert_eq!(classify(f32::NAN).label, "Beginner");
    }

    proptest! {
        #[test]
        fn prop_classify_is_total(skill in proptest::num::f32::ANY) {
            // never panics, always lands in the table
            let tier = classify(skill);
            prop_assert!(TIERS.iter().any(|t| t.label == tier.label));
        }

        #[test]
        fn prop_classify_is_monotonic(a in 0.0f32..=MAX_SKILL, b in 0.0f32..=MAX_SKILL) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(tier_index(classify(lo)) <= tier_index(classify(hi)));
        }
    }
}
