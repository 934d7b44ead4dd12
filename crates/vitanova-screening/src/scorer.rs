//! Risk scoring: sum the ordinal responses and bucket the total.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitanova_core::models::screening::RiskTier;

/// The scored outcome of a completed screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningOutcome {
    pub score: u32,
    pub risk: RiskTier,
}

/// Score a complete response sequence.
///
/// The score is the arithmetic sum of the responses; the tier is chosen by
/// first-matching threshold, highest first. Total and deterministic — the
/// caller validates completeness before invoking.
pub fn score_responses(responses: &[u8]) -> ScreeningOutcome {
    let score: u32 = responses.iter().map(|&r| u32::from(r)).sum();
    ScreeningOutcome {
        score,
        risk: tier_for_score(score),
    }
}

fn tier_for_score(score: u32) -> RiskTier {
    if score >= 20 {
        RiskTier::Severe
    } else if score >= 15 {
        RiskTier::ModeratelySevere
    } else if score >= 10 {
        RiskTier::Moderate
    } else if score >= 5 {
        RiskTier::Mild
    } else {
        RiskTier::Minimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_sum_of_responses() {
        assert_eq!(score_responses(&[0, 1, 2, 3, 0, 1, 2, 3, 1]).score, 13);
    }

    #[test]
    fn all_zeros_is_minimal() {
        let outcome = score_responses(&[0; 9]);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.risk, RiskTier::Minimal);
    }

    #[test]
    fn all_threes_is_severe() {
        let outcome = score_responses(&[3; 9]);
        assert_eq!(outcome.score, 27);
        assert_eq!(outcome.risk, RiskTier::Severe);
    }

    #[test]
    fn tier_boundaries_land_on_the_inclusive_side() {
        let cases = [
            (4, RiskTier::Minimal),
            (5, RiskTier::Mild),
            (9, RiskTier::Mild),
            (10, RiskTier::Moderate),
            (14, RiskTier::Moderate),
            (15, RiskTier::ModeratelySevere),
            (19, RiskTier::ModeratelySevere),
            (20, RiskTier::Severe),
        ];
        for (score, expected) in cases {
            assert_eq!(tier_for_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn every_nine_item_sum_lands_in_its_bracket() {
        // Exhaustive over achievable PHQ-9 totals (0..=27).
        for total in 0u32..=27 {
            let tier = tier_for_score(total);
            let expected = match total {
                0..=4 => RiskTier::Minimal,
                5..=9 => RiskTier::Mild,
                10..=14 => RiskTier::Moderate,
                15..=19 => RiskTier::ModeratelySevere,
                _ => RiskTier::Severe,
            };
            assert_eq!(tier, expected, "total {total}");
        }
    }
}
