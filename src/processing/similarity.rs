//! TF-IDF cosine similarity between a resume and a job description
//!
//! The vocabulary and document frequencies are learned fresh from the two
//! documents of each request; nothing is kept between calls.

use crate::error::Result;
use crate::processing::normalizer::{LemmaTokenSet, TextNormalizer};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Terms are runs of two or more word characters
const TERM_PATTERN: &str = r"\b\w\w+\b";

pub type TermVector = BTreeMap<String, f64>;

pub struct SimilarityScorer {
    term_regex: Regex,
}

impl SimilarityScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            term_regex: Regex::new(TERM_PATTERN)?,
        })
    }

    /// Normalize both texts and compare them.
    ///
    /// Returns `None` when the job description has no terms left after
    /// normalization, so the caller can fall back to the sentinel.
    pub fn similarity(
        &self,
        normalizer: &TextNormalizer,
        resume_text: &str,
        job_description: &str,
    ) -> Option<f64> {
        let job_tokens = normalizer.normalize(job_description);
        let resume_tokens = normalizer.normalize(resume_text);
        self.token_similarity(&job_tokens, &resume_tokens)
    }

    /// Cosine similarity of the TF-IDF vectors of two lemma token sets, in `[0, 1]`
    pub fn token_similarity(&self, job_tokens: &LemmaTokenSet, resume_tokens: &LemmaTokenSet) -> Option<f64> {
        let job_terms = self.terms(job_tokens);
        if job_terms.is_empty() {
            return None;
        }
        let resume_terms = self.terms(resume_tokens);

        let corpus = [job_terms, resume_terms];
        let idf = inverse_document_frequencies(&corpus);

        let job_vector = tfidf_vector(&corpus[0], &idf);
        let resume_vector = tfidf_vector(&corpus[1], &idf);

        let similarity = cosine_similarity(&job_vector, &resume_vector);
        Some(if similarity.is_finite() {
            similarity.clamp(0.0, 1.0)
        } else {
            0.0
        })
    }

    /// Re-tokenize the joined lemmas the way a document vectorizer sees them
    fn terms(&self, tokens: &LemmaTokenSet) -> Vec<String> {
        let joined = tokens.join(" ");
        self.term_regex
            .find_iter(&joined)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

/// Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`
fn inverse_document_frequencies(corpus: &[Vec<String>]) -> BTreeMap<&str, f64> {
    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();

    for document in corpus {
        let unique: BTreeSet<&str> = document.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    let n = corpus.len() as f64;
    document_frequency
        .into_iter()
        .map(|(term, df)| (term, ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0))
        .collect()
}

/// Raw term counts weighted by IDF
fn tfidf_vector(terms: &[String], idf: &BTreeMap<&str, f64>) -> TermVector {
    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    for term in terms {
        *counts.entry(term.clone()).or_insert(0.0) += 1.0;
    }

    counts
        .into_iter()
        .map(|(term, count)| {
            let weight = idf.get(term.as_str()).copied().unwrap_or(0.0);
            (term, count * weight)
        })
        .collect()
}

/// Cosine of two sparse vectors; 0 when either has zero norm
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum();
    let norm_a = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.values().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::new().unwrap()
    }

    #[test]
    fn test_identical_texts() {
        let normalizer = TextNormalizer::new();
        let text = "Data scientist with Python, machine learning and data visualization experience.";

        let similarity = scorer().similarity(&normalizer, text, text).unwrap();
        assert!((similarity - 1.0).abs() < 1e-9, "similarity was {}", similarity);
    }

    #[test]
    fn test_disjoint_texts() {
        let normalizer = TextNormalizer::new();
        let similarity = scorer()
            .similarity(&normalizer, "Gardening landscaping shrubs", "Rust compiler engineer")
            .unwrap();
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn test_partial_overlap_in_range() {
        let normalizer = TextNormalizer::new();
        let similarity = scorer()
            .similarity(
                &normalizer,
                "Python developer building data pipelines",
                "Looking for a Python engineer to own our data platform",
            )
            .unwrap();
        assert!(similarity > 0.0 && similarity < 1.0);
    }

    #[test]
    fn test_empty_job_description_has_no_similarity() {
        let normalizer = TextNormalizer::new();
        assert_eq!(scorer().similarity(&normalizer, "Python developer", ""), None);
        assert_eq!(scorer().similarity(&normalizer, "Python developer", "the and of"), None);
    }

    #[test]
    fn test_empty_resume_is_zero() {
        let normalizer = TextNormalizer::new();
        assert_eq!(scorer().similarity(&normalizer, "", "Python developer"), Some(0.0));
    }

    #[test]
    fn test_single_character_terms_ignored() {
        let job = vec!["c".to_string(), "r".to_string()];
        let resume = vec!["c".to_string()];
        assert_eq!(scorer().token_similarity(&job, &resume), None);
    }

    #[test]
    fn test_idf_weights() {
        let corpus = vec![
            vec!["rust".to_string(), "python".to_string()],
            vec!["rust".to_string()],
        ];
        let idf = inverse_document_frequencies(&corpus);
        assert!((idf["rust"] - 1.0).abs() < 1e-12);
        assert!((idf["python"] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_cosine() {
        let a: TermVector = [("x".to_string(), 1.0), ("y".to_string(), 2.0)].into_iter().collect();
        let b: TermVector = [("y".to_string(), 3.0), ("z".to_string(), 1.0)].into_iter().collect();
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-12);
        assert_eq!(cosine_similarity(&a, &TermVector::new()), 0.0);
    }
}
