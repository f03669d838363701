//! Scoring constants: aggregation weights and suggestion thresholds

use serde::{Deserialize, Serialize};

/// Number of feature scores folded into the overall score
pub const FEATURE_COUNT: usize = 6;

/// Combined maximum of the six feature scores
pub const FEATURE_SCORE_TOTAL: f64 = (FEATURE_COUNT * 100) as f64;

/// Similarity assumed when no job description was scored
pub const SIMILARITY_SENTINEL: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Share of the overall score taken by job description similarity
    pub similarity_weight: f64,
    /// Share of the overall score taken by the feature scores when similarity is used
    pub feature_weight: f64,
    pub thresholds: SuggestionThresholds,
}

/// A score strictly below its threshold triggers the matching suggestion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestionThresholds {
    pub similarity: f64,
    pub impact: u8,
    pub brevity: u8,
    pub style: u8,
    pub sections: u8,
    pub soft_skills: u8,
    pub hard_skills: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            similarity_weight: 0.4,
            feature_weight: 0.6,
            thresholds: SuggestionThresholds::default(),
        }
    }
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            similarity: 0.5,
            impact: 50,
            brevity: 50,
            style: 70,
            sections: 80,
            soft_skills: 70,
            hard_skills: 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_cover_full_scale() {
        let policy = ScoringPolicy::default();
        assert!((policy.similarity_weight + policy.feature_weight - 1.0).abs() < f64::EPSILON);
        assert_eq!(FEATURE_SCORE_TOTAL, 600.0);
    }
}
