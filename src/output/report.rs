//! Report structures wrapping a score result with presentation data

use crate::processing::features::FeatureScores;
use crate::processing::scorer::{KeywordCoverage, ScoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature scores at or above this are listed as strengths
const STRENGTH_THRESHOLD: u8 = 80;

/// Feature scores below this are listed as weak spots
const WEAKNESS_THRESHOLD: u8 = 50;

/// Everything a formatter needs to render one scoring run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub summary: ReportSummary,

    /// The raw scoring output
    pub result: ScoreResult,

    /// Matched and missing keywords, present for detailed reports
    pub coverage: Option<KeywordCoverage>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub overall_score: u8,
    pub rating: ScoreRating,
    pub verdict: String,
    /// Labels of the strongest feature scores
    pub strengths: Vec<String>,
    /// Labels of the weakest feature scores
    pub weak_spots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    pub resume_file: String,
    pub job_source: JobSource,
    pub processing_time_ms: u64,
}

/// Where the job description came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum JobSource {
    None,
    File(String),
    Inline,
}

impl JobSource {
    pub fn describe(&self) -> String {
        match self {
            JobSource::None => "none".to_string(),
            JobSource::File(path) => path.clone(),
            JobSource::Inline => "inline text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRating {
    Excellent,
    VeryGood,
    Good,
    Fair,
    BelowAverage,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreRating::Excellent,
            80..=89 => ScoreRating::VeryGood,
            70..=79 => ScoreRating::Good,
            60..=69 => ScoreRating::Fair,
            50..=59 => ScoreRating::BelowAverage,
            _ => ScoreRating::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::VeryGood => "Very Good",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::BelowAverage => "Below Average",
            ScoreRating::Poor => "Poor",
        }
    }

    fn verdict(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent - this resume should pass most ATS filters",
            ScoreRating::VeryGood => "Very good - minor improvements could help",
            ScoreRating::Good => "Good - some targeted improvements recommended",
            ScoreRating::Fair => "Fair - several improvements needed",
            ScoreRating::BelowAverage => "Below average - significant improvements required",
            ScoreRating::Poor => "Poor - major revisions needed",
        }
    }
}

impl ScoreReport {
    pub fn new(
        result: ScoreResult,
        coverage: Option<KeywordCoverage>,
        resume_file: impl Into<String>,
        job_source: JobSource,
        processing_time_ms: u64,
    ) -> Self {
        let summary = Self::create_summary(&result);
        let metadata = ReportMetadata {
            generated_at: Utc::now(),
            scorer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.into(),
            job_source,
            processing_time_ms,
        };

        Self {
            summary,
            result,
            coverage,
            metadata,
        }
    }

    fn create_summary(result: &ScoreResult) -> ReportSummary {
        let rating = ScoreRating::from_score(result.overall);

        ReportSummary {
            overall_score: result.overall,
            rating,
            verdict: rating.verdict().to_string(),
            strengths: labels_where(&result.features, |score| score >= STRENGTH_THRESHOLD),
            weak_spots: labels_where(&result.features, |score| score < WEAKNESS_THRESHOLD),
        }
    }

    /// Similarity as a whole percentage, when one was computed
    pub fn similarity_percentage(&self) -> Option<u8> {
        self.result
            .similarity
            .map(|similarity| (similarity.clamp(0.0, 1.0) * 100.0).round() as u8)
    }
}

fn labels_where(features: &FeatureScores, keep: impl Fn(u8) -> bool) -> Vec<String> {
    features
        .labeled()
        .iter()
        .filter(|(_, score)| keep(*score))
        .map(|(label, _)| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(overall: u8, similarity: Option<f64>) -> ScoreResult {
        ScoreResult {
            overall,
            features: FeatureScores {
                impact: 10,
                brevity: 100,
                style: 90,
                sections: 50,
                soft_skills: 20,
                hard_skills: 80,
            },
            similarity_used: similarity.is_some(),
            similarity,
            suggestions: vec!["Quantify".to_string()],
            profile_summary: "Engineer.".to_string(),
        }
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(ScoreRating::from_score(100), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(85), ScoreRating::VeryGood);
        assert_eq!(ScoreRating::from_score(70), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(69), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(50), ScoreRating::BelowAverage);
        assert_eq!(ScoreRating::from_score(0), ScoreRating::Poor);
    }

    #[test]
    fn test_summary_strengths_and_weak_spots() {
        let report = ScoreReport::new(result(58, None), None, "resume.txt", JobSource::None, 3);

        assert_eq!(report.summary.rating, ScoreRating::BelowAverage);
        assert_eq!(report.summary.strengths, vec!["Brevity", "Style", "Hard Skills"]);
        assert_eq!(report.summary.weak_spots, vec!["Impact", "Soft Skills"]);
        assert_eq!(report.metadata.resume_file, "resume.txt");
        assert_eq!(report.metadata.scorer_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_similarity_percentage() {
        let report = ScoreReport::new(result(70, Some(0.456)), None, "r.md", JobSource::Inline, 0);
        assert_eq!(report.similarity_percentage(), Some(46));

        let report = ScoreReport::new(result(70, None), None, "r.md", JobSource::None, 0);
        assert_eq!(report.similarity_percentage(), None);
    }

    #[test]
    fn test_job_source_serialization() {
        let json = serde_json::to_string(&JobSource::File("job.txt".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"file","path":"job.txt"}"#);
        assert_eq!(JobSource::Inline.describe(), "inline text");
    }
}
