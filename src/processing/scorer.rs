//! Scoring entry point: runs every scorer over a resume and assembles the result

use crate::config::{Config, SkillVocabulary};
use crate::error::{AtsScorerError, Result};
use crate::processing::aggregator::ScoreAggregator;
use crate::processing::features::{FeatureScorer, FeatureScores, TermMatcher};
use crate::processing::normalizer::TextNormalizer;
use crate::processing::policy::{ScoringPolicy, SIMILARITY_SENTINEL};
use crate::processing::similarity::SimilarityScorer;
use crate::processing::suggestions::SuggestionEngine;
use crate::processing::summary::profile_summary;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Default cap on characters read from either input text
pub const DEFAULT_MAX_INPUT_CHARS: usize = 200_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub resume_text: String,
    pub job_description: Option<String>,
}

impl ScoreInput {
    pub fn new(resume_text: impl Into<String>, job_description: Option<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Overall ATS score (0 to 100)
    pub overall: u8,
    pub features: FeatureScores,
    /// Whether a job description similarity went into `overall`
    pub similarity_used: bool,
    /// Job description similarity in `[0, 1]`, when one was computed
    pub similarity: Option<f64>,
    pub suggestions: Vec<String>,
    pub profile_summary: String,
}

/// Vocabulary terms found and missing in a resume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl Coverage {
    fn from_matcher(matcher: &TermMatcher, text: &str) -> Self {
        Self {
            found: matcher.found(text).into_iter().map(str::to_string).collect(),
            missing: matcher.missing(text).into_iter().map(str::to_string).collect(),
        }
    }
}

/// Per-scorer evidence for detailed reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordCoverage {
    pub sections: Coverage,
    pub soft_skills: Coverage,
    pub hard_skills: Coverage,
    pub impact_matches: Vec<String>,
    pub style_elements: Vec<String>,
}

/// Resume scorer holding everything that is built once per process.
///
/// All state is read-only after construction, so one scorer can serve any
/// number of requests, including from several threads.
pub struct AtsScorer {
    normalizer: TextNormalizer,
    features: FeatureScorer,
    similarity: SimilarityScorer,
    aggregator: ScoreAggregator,
    suggestions: SuggestionEngine,
    vocabulary: SkillVocabulary,
    max_input_chars: usize,
}

impl AtsScorer {
    /// Create a scorer with the given skill vocabulary and the default policy
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self> {
        Self::with_policy(vocabulary, ScoringPolicy::default())
    }

    pub fn with_policy(vocabulary: SkillVocabulary, policy: ScoringPolicy) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(),
            features: FeatureScorer::new(&vocabulary)?,
            similarity: SimilarityScorer::new()?,
            aggregator: ScoreAggregator::new(policy),
            suggestions: SuggestionEngine::new(policy.thresholds),
            vocabulary,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.vocabulary.clone())?.with_max_input_chars(config.processing.max_input_chars)
    }

    /// Cap the characters read from each input; zero would discard every resume
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Result<Self> {
        if max_input_chars == 0 {
            return Err(AtsScorerError::Configuration(
                "processing.max_input_chars must be greater than 0".to_string(),
            ));
        }
        self.max_input_chars = max_input_chars;
        Ok(self)
    }

    /// Score a resume, optionally against a job description.
    ///
    /// Fails only when the resume text is empty; a job description that is
    /// empty or has no usable terms is treated as absent.
    pub fn score(&self, resume_text: &str, job_description: Option<&str>) -> Result<ScoreResult> {
        let resume_text = self.bounded(resume_text, "resume");
        if resume_text.trim().is_empty() {
            return Err(AtsScorerError::missing_resume());
        }

        let job_description = job_description
            .filter(|jd| !jd.trim().is_empty())
            .map(|jd| self.bounded(jd, "job description"));

        let features = self.features.score_all(resume_text);

        let similarity = job_description.and_then(|jd| {
            let similarity = self.similarity.similarity(&self.normalizer, resume_text, jd);
            if similarity.is_none() {
                warn!("Job description has no usable terms after normalization, ignoring it");
            }
            similarity
        });

        let overall = self.aggregator.overall(&features, similarity);
        let suggestions = self
            .suggestions
            .suggest(similarity.unwrap_or(SIMILARITY_SENTINEL), &features);

        debug!(
            "Scored resume ({} chars): overall={} features={:?} similarity={:?}",
            resume_text.chars().count(),
            overall,
            features,
            similarity
        );

        Ok(ScoreResult {
            overall,
            features,
            similarity_used: similarity.is_some(),
            similarity,
            suggestions,
            profile_summary: profile_summary(resume_text),
        })
    }

    /// Score a prepared [`ScoreInput`]
    pub fn score_input(&self, input: &ScoreInput) -> Result<ScoreResult> {
        self.score(&input.resume_text, input.job_description.as_deref())
    }

    /// Which vocabulary terms, quantities and style elements the resume shows
    pub fn keyword_coverage(&self, resume_text: &str) -> KeywordCoverage {
        let resume_text = self.bounded(resume_text, "resume");

        KeywordCoverage {
            sections: Coverage::from_matcher(self.features.sections(), resume_text),
            soft_skills: Coverage::from_matcher(self.features.soft_skills(), resume_text),
            hard_skills: Coverage::from_matcher(self.features.hard_skills(), resume_text),
            impact_matches: self
                .features
                .impact_matches(resume_text)
                .into_iter()
                .map(str::to_string)
                .collect(),
            style_elements: self
                .features
                .style_hits(resume_text)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.aggregator.policy()
    }

    /// Cut text at `max_input_chars` characters
    fn bounded<'t>(&self, text: &'t str, label: &str) -> &'t str {
        match text.char_indices().nth(self.max_input_chars) {
            Some((byte_index, _)) => {
                warn!(
                    "Truncating {} to {} characters",
                    label, self.max_input_chars
                );
                &text[..byte_index]
            }
            None => text,
        }
    }
}
