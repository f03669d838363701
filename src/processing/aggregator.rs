//! Combines feature scores and optional similarity into the overall ATS score

use crate::processing::features::{clamp_score, FeatureScores};
use crate::processing::policy::{ScoringPolicy, FEATURE_SCORE_TOTAL};

pub struct ScoreAggregator {
    policy: ScoringPolicy,
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}

impl ScoreAggregator {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Overall score in `[0, 100]`.
    ///
    /// With a similarity, it contributes `similarity_weight` of the scale and
    /// the feature scores the rest; without one, the feature scores fill the
    /// whole scale.
    pub fn overall(&self, features: &FeatureScores, similarity: Option<f64>) -> u8 {
        let feature_ratio = f64::from(features.total()) / FEATURE_SCORE_TOTAL;

        let raw = match similarity {
            Some(similarity) => {
                let similarity = if similarity.is_finite() {
                    similarity.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                similarity * self.policy.similarity_weight * 100.0
                    + feature_ratio * self.policy.feature_weight * 100.0
            }
            None => feature_ratio * 100.0,
        };

        clamp_score(raw.floor())
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }
}
