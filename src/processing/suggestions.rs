//! Threshold rules that turn scores into improvement suggestions

use crate::processing::features::FeatureScores;
use crate::processing::policy::SuggestionThresholds;

pub const TAILOR_TO_JOB: &str = "Tailor your resume to better match the job description.";
pub const QUANTIFY_ACHIEVEMENTS: &str =
    "Quantify your achievements and showcase your impact more effectively.";
pub const CONDENSE: &str = "Condense your resume and avoid unnecessary details.";
pub const IMPROVE_FORMATTING: &str =
    "Improve the formatting and structure of your resume for better readability.";
pub const ADD_MISSING_SECTIONS: &str =
    "Ensure your resume includes all the essential sections (Summary, Experience, Education, Skills).";
pub const HIGHLIGHT_SOFT_SKILLS: &str = "Highlight relevant soft skills for the target roles.";
pub const EMPHASIZE_HARD_SKILLS: &str =
    "Emphasize your hard skills and technical expertise relevant to the job.";

/// Which score a rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Similarity,
    Impact,
    Brevity,
    Style,
    Sections,
    SoftSkills,
    HardSkills,
}

struct SuggestionRule {
    kind: ScoreKind,
    message: &'static str,
}

/// Evaluated in this order; every rule runs
const RULES: &[SuggestionRule] = &[
    SuggestionRule { kind: ScoreKind::Similarity, message: TAILOR_TO_JOB },
    SuggestionRule { kind: ScoreKind::Impact, message: QUANTIFY_ACHIEVEMENTS },
    SuggestionRule { kind: ScoreKind::Brevity, message: CONDENSE },
    SuggestionRule { kind: ScoreKind::Style, message: IMPROVE_FORMATTING },
    SuggestionRule { kind: ScoreKind::Sections, message: ADD_MISSING_SECTIONS },
    SuggestionRule { kind: ScoreKind::SoftSkills, message: HIGHLIGHT_SOFT_SKILLS },
    SuggestionRule { kind: ScoreKind::HardSkills, message: EMPHASIZE_HARD_SKILLS },
];

pub struct SuggestionEngine {
    thresholds: SuggestionThresholds,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(SuggestionThresholds::default())
    }
}

impl SuggestionEngine {
    pub fn new(thresholds: SuggestionThresholds) -> Self {
        Self { thresholds }
    }

    /// Suggestions for every score below its threshold, in rule order.
    ///
    /// Pass the sentinel 1.0 as `similarity` when no job description was scored.
    pub fn suggest(&self, similarity: f64, features: &FeatureScores) -> Vec<String> {
        RULES
            .iter()
            .filter(|rule| self.triggers(rule.kind, similarity, features))
            .map(|rule| rule.message.to_string())
            .collect()
    }

    fn triggers(&self, kind: ScoreKind, similarity: f64, features: &FeatureScores) -> bool {
        let t = &self.thresholds;
        match kind {
            ScoreKind::Similarity => similarity < t.similarity,
            ScoreKind::Impact => features.impact < t.impact,
            ScoreKind::Brevity => features.brevity < t.brevity,
            ScoreKind::Style => features.style < t.style,
            ScoreKind::Sections => features.sections < t.sections,
            ScoreKind::SoftSkills => features.soft_skills < t.soft_skills,
            ScoreKind::HardSkills => features.hard_skills < t.hard_skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::policy::SIMILARITY_SENTINEL;

    fn perfect() -> FeatureScores {
        FeatureScores {
            impact: 100,
            brevity: 100,
            style: 100,
            sections: 100,
            soft_skills: 100,
            hard_skills: 100,
        }
    }

    #[test]
    fn test_no_suggestions_for_strong_resume() {
        let engine = SuggestionEngine::default();
        assert!(engine.suggest(SIMILARITY_SENTINEL, &perfect()).is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let engine = SuggestionEngine::default();
        let suggestions = engine.suggest(0.1, &FeatureScores::default());

        assert_eq!(
            suggestions,
            vec![
                TAILOR_TO_JOB,
                QUANTIFY_ACHIEVEMENTS,
                CONDENSE,
                IMPROVE_FORMATTING,
                ADD_MISSING_SECTIONS,
                HIGHLIGHT_SOFT_SKILLS,
                EMPHASIZE_HARD_SKILLS,
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let engine = SuggestionEngine::default();
        let at_threshold = FeatureScores {
            impact: 50,
            brevity: 50,
            style: 70,
            sections: 80,
            soft_skills: 70,
            hard_skills: 70,
        };
        assert!(engine.suggest(0.5, &at_threshold).is_empty());
    }

    #[test]
    fn test_missing_sections_only() {
        let engine = SuggestionEngine::default();
        let scores = FeatureScores { sections: 25, ..perfect() };
        assert_eq!(engine.suggest(SIMILARITY_SENTINEL, &scores), vec![ADD_MISSING_SECTIONS]);
    }

    #[test]
    fn test_sentinel_never_triggers_tailoring() {
        let engine = SuggestionEngine::default();
        let suggestions = engine.suggest(SIMILARITY_SENTINEL, &FeatureScores::default());
        assert!(!suggestions.iter().any(|s| s == TAILOR_TO_JOB));
        assert_eq!(suggestions.len(), 6);
    }
}
