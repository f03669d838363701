//! Resume scoring: normalization, feature scorers, similarity and aggregation

pub mod aggregator;
pub mod features;
pub mod lemmatizer;
pub mod normalizer;
pub mod policy;
pub mod scorer;
pub mod similarity;
pub mod suggestions;
pub mod summary;

pub use features::FeatureScores;
pub use scorer::{AtsScorer, KeywordCoverage, ScoreInput, ScoreResult};
