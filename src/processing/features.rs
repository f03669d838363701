//! Heuristic feature scorers: impact, brevity, style, sections and skills
//!
//! Every scorer maps raw resume text to an integer in `[0, 100]`. The regex
//! heuristics are kept in pattern tables so new patterns do not touch the
//! scoring code.

use crate::config::SkillVocabulary;
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Quantified-achievement patterns, combined into one alternation in table order
const IMPACT_PATTERNS: &[(&str, &str)] = &[
    ("number or percentage", r"\b\d+%?\b"),
    ("dollar amount", r"\$\d+"),
    ("magnitude", r"\d+\s?(?:million|thousand|billion)"),
];

const STYLE_BASE_SCORE: u32 = 80;

struct StyleRule {
    name: &'static str,
    pattern: &'static str,
    bonus: u32,
}

const STYLE_RULES: &[StyleRule] = &[
    StyleRule {
        name: "underlined heading",
        pattern: r"(?m)^[A-Z][a-z]+\s*\n=+\s*$",
        bonus: 10,
    },
    StyleRule {
        name: "bullet points",
        pattern: r"(?m)^\s*[-*•]\s",
        bonus: 10,
    },
];

/// Resume sections every ATS-friendly resume is expected to name
pub const SECTION_NAMES: &[&str] = &["summary", "experience", "education", "skills"];

/// Sentences are split on this literal sequence, matching the profile summary
pub const SENTENCE_DELIMITER: &str = ". ";

/// Brevity is full marks at or below this many words per sentence
const TARGET_SENTENCE_LENGTH: f64 = 15.0;
const BREVITY_PENALTY_PER_WORD: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureScores {
    pub impact: u8,
    pub brevity: u8,
    pub style: u8,
    pub sections: u8,
    pub soft_skills: u8,
    pub hard_skills: u8,
}

impl FeatureScores {
    pub fn total(&self) -> u32 {
        self.labeled().iter().map(|(_, score)| u32::from(*score)).sum()
    }

    /// Scores paired with display labels, in a fixed order
    pub fn labeled(&self) -> [(&'static str, u8); 6] {
        [
            ("Impact", self.impact),
            ("Brevity", self.brevity),
            ("Style", self.style),
            ("Sections", self.sections),
            ("Soft Skills", self.soft_skills),
            ("Hard Skills", self.hard_skills),
        ]
    }
}

/// Case-insensitive whole-word matcher over a fixed list of terms
pub struct TermMatcher {
    terms: Vec<(String, Regex)>,
}

impl TermMatcher {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self> {
        let terms = terms
            .iter()
            .map(|term| {
                let term = term.as_ref();
                Ok((term.to_string(), Regex::new(&term_pattern(term))?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { terms })
    }

    /// Terms present in the text, in vocabulary order
    pub fn found<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.terms
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(term, _)| term.as_str())
            .collect()
    }

    /// Terms absent from the text, in vocabulary order
    pub fn missing<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.terms
            .iter()
            .filter(|(_, regex)| !regex.is_match(text))
            .map(|(term, _)| term.as_str())
            .collect()
    }

    /// Percentage of terms present, 0 for an empty vocabulary
    pub fn score(&self, text: &str) -> u8 {
        percentage(self.found(text).len(), self.terms.len())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Case-insensitive pattern matching `term` as a whole word.
///
/// `\b` only holds next to a word character, so a term that starts or ends
/// with a symbol ("C++", ".NET") is bounded by a non-word character or the
/// text edge on that side instead.
fn term_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    let leading = match term.chars().next() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let trailing = match term.chars().last() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:\W|$)",
    };

    format!("(?i){}{}{}", leading, regex::escape(term), trailing)
}

/// The six feature scorers with their patterns compiled once
pub struct FeatureScorer {
    impact_regex: Regex,
    style_rules: Vec<(&'static str, Regex, u32)>,
    sections: TermMatcher,
    soft_skills: TermMatcher,
    hard_skills: TermMatcher,
}

impl FeatureScorer {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        let alternation = IMPACT_PATTERNS
            .iter()
            .map(|(_, pattern)| *pattern)
            .collect::<Vec<_>>()
            .join("|");
        let impact_regex = Regex::new(&format!("(?i){}", alternation))?;

        let style_rules = STYLE_RULES
            .iter()
            .map(|rule| Ok((rule.name, Regex::new(rule.pattern)?, rule.bonus)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            impact_regex,
            style_rules,
            sections: TermMatcher::new(SECTION_NAMES)?,
            soft_skills: TermMatcher::new(&vocabulary.soft_skills)?,
            hard_skills: TermMatcher::new(&vocabulary.hard_skills)?,
        })
    }

    /// Run all six scorers over the same text
    pub fn score_all(&self, text: &str) -> FeatureScores {
        FeatureScores {
            impact: self.impact_score(text),
            brevity: brevity_score(text),
            style: self.style_score(text),
            sections: self.sections_score(text),
            soft_skills: self.soft_skills_score(text),
            hard_skills: self.hard_skills_score(text),
        }
    }

    /// Quantified achievements per whitespace-separated word
    pub fn impact_score(&self, text: &str) -> u8 {
        let word_count = text.split_whitespace().count();
        percentage(self.impact_matches(text).len(), word_count)
    }

    /// The quantified-achievement snippets found in the text
    pub fn impact_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.impact_regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    pub fn style_score(&self, text: &str) -> u8 {
        let score = STYLE_BASE_SCORE
            + self
                .style_rules
                .iter()
                .filter(|(_, regex, _)| regex.is_match(text))
                .map(|(_, _, bonus)| bonus)
                .sum::<u32>();

        score.min(100) as u8
    }

    /// Names of the style rules the text satisfies
    pub fn style_hits(&self, text: &str) -> Vec<&'static str> {
        self.style_rules
            .iter()
            .filter(|(_, regex, _)| regex.is_match(text))
            .map(|(name, _, _)| *name)
            .collect()
    }

    pub fn sections_score(&self, text: &str) -> u8 {
        self.sections.score(text)
    }

    pub fn soft_skills_score(&self, text: &str) -> u8 {
        self.soft_skills.score(text)
    }

    pub fn hard_skills_score(&self, text: &str) -> u8 {
        self.hard_skills.score(text)
    }

    pub fn sections(&self) -> &TermMatcher {
        &self.sections
    }

    pub fn soft_skills(&self) -> &TermMatcher {
        &self.soft_skills
    }

    pub fn hard_skills(&self) -> &TermMatcher {
        &self.hard_skills
    }
}

/// Penalize long sentences: 100 at 15 words or fewer, minus 5 per extra word
pub fn brevity_score(text: &str) -> u8 {
    let sentences: Vec<&str> = split_sentences(text);
    if sentences.is_empty() {
        return 0;
    }

    let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    let avg_len = total_words as f64 / sentences.len() as f64;

    clamp_score(100.0 - (avg_len - TARGET_SENTENCE_LENGTH) * BREVITY_PENALTY_PER_WORD)
}

/// Naive sentence split on ". "; always yields at least one piece
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITER).collect()
}

/// `found / total * 100`, truncated, 0 when `total` is 0
pub fn percentage(found: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    clamp_score(found as f64 / total as f64 * 100.0)
}

/// Truncate toward zero and clamp into `[0, 100]`; NaN maps to 0
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.trunc().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> FeatureScorer {
        FeatureScorer::new(&SkillVocabulary::default()).unwrap()
    }

    #[test]
    fn test_impact_counts_quantities() {
        let scorer = scorer();
        let text = "Increased sales by 20% and managed a team of 5, $10000 budget";

        assert_eq!(scorer.impact_matches(text), vec!["20", "5", "$10000"]);
        // 3 matches over 12 words
        assert_eq!(scorer.impact_score(text), 25);
    }

    #[test]
    fn test_impact_magnitude_words() {
        let scorer = scorer();
        let matches = scorer.impact_matches("Raised $3 million and saved 40thousand hours");
        assert_eq!(matches, vec!["$3", "40thousand"]);
    }

    #[test]
    fn test_impact_caps_at_100() {
        let scorer = scorer();
        assert_eq!(scorer.impact_score("1 2 3 4"), 100);
        assert_eq!(scorer.impact_score("$5 10%"), 100);
    }

    #[test]
    fn test_impact_no_words() {
        let scorer = scorer();
        assert_eq!(scorer.impact_score(""), 0);
        assert_eq!(scorer.impact_score("   \n "), 0);
        assert_eq!(scorer.impact_score("no numbers here"), 0);
    }

    #[test]
    fn test_brevity_short_sentences() {
        assert_eq!(brevity_score("Built APIs. Led teams. Shipped features"), 100);
    }

    #[test]
    fn test_brevity_long_sentence() {
        // 20 words -> 100 - 5 * 5
        let text = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty";
        assert_eq!(brevity_score(text), 75);
    }

    #[test]
    fn test_brevity_very_long_sentence_clamps_to_zero() {
        let text = vec!["word"; 60].join(" ");
        assert_eq!(brevity_score(&text), 0);
    }

    #[test]
    fn test_brevity_without_delimiter() {
        assert_eq!(brevity_score("hello world"), 100);
        assert_eq!(brevity_score(""), 100);
    }

    #[test]
    fn test_style_base_and_bonuses() {
        let scorer = scorer();
        assert_eq!(scorer.style_score("plain text"), 80);
        assert_eq!(scorer.style_score("Experience\n==========\nstuff"), 90);
        assert_eq!(scorer.style_score("Skills:\n  - Rust\n  * Go"), 90);
        assert_eq!(scorer.style_score("Experience\n====\n• Shipped things"), 100);
        assert_eq!(
            scorer.style_hits("Experience\n====\n- Shipped things"),
            vec!["underlined heading", "bullet points"]
        );
    }

    #[test]
    fn test_sections_whole_word_case_insensitive() {
        let scorer = scorer();
        assert_eq!(scorer.sections_score("SUMMARY\nExperience\nEducation\nSkills"), 100);
        assert_eq!(scorer.sections_score("Work experience only"), 25);
        assert_eq!(scorer.sections_score("experienced and skillset"), 0);
        assert_eq!(scorer.sections_score(""), 0);
    }

    #[test]
    fn test_skills_scores() {
        let scorer = scorer();
        let text = "Python and Machine Learning with strong leadership and teamwork";
        assert_eq!(scorer.hard_skills_score(text), 40);
        assert_eq!(scorer.soft_skills_score(text), 40);
        assert_eq!(scorer.soft_skills().found(text), vec!["teamwork", "leadership"]);
        assert_eq!(
            scorer.hard_skills().missing(text),
            vec!["data analysis", "predictive modeling", "data visualization"]
        );
    }

    #[test]
    fn test_hyphenated_skill() {
        let scorer = scorer();
        assert_eq!(scorer.soft_skills().found("Problem-Solving mindset"), vec!["problem-solving"]);
    }

    #[test]
    fn test_symbol_bearing_skills() {
        let vocab = SkillVocabulary::new(
            vec!["teamwork".to_string()],
            vec!["C++".to_string(), "C#".to_string(), ".NET".to_string()],
        );
        let scorer = FeatureScorer::new(&vocab).unwrap();

        assert_eq!(scorer.hard_skills_score("Expert in C++ and C# on .NET with teamwork"), 100);
        assert_eq!(scorer.hard_skills().found("c++, c#."), vec!["C++", "C#"]);
        assert_eq!(scorer.hard_skills().found(".net"), vec![".NET"]);
        // Still whole words only
        assert!(scorer.hard_skills().found("ASP.NET in C").is_empty());
        assert!(scorer.hard_skills().found("xC++").is_empty());
    }

    #[test]
    fn test_empty_vocabulary_scores_zero() {
        let vocab = SkillVocabulary::new(Vec::new(), Vec::new());
        let scorer = FeatureScorer::new(&vocab).unwrap();
        assert_eq!(scorer.soft_skills_score("communication"), 0);
        assert_eq!(scorer.hard_skills_score("python"), 0);
        assert!(scorer.soft_skills().is_empty());
    }

    #[test]
    fn test_hard_skills_monotonic() {
        let scorer = scorer();
        let mut text = String::from("Engineer.");
        let mut previous = scorer.hard_skills_score(&text);
        for skill in ["python", "machine learning", "data analysis", "predictive modeling", "data visualization"] {
            text.push(' ');
            text.push_str(skill);
            let current = scorer.hard_skills_score(&text);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_all_scores_in_range() {
        let scorer = scorer();
        let inputs = [
            "",
            " ",
            ". . . .",
            "1 2 3 $4 5 million",
            "Summary. Experience. Education. Skills",
            "a. b. c. d. e. f",
            "\n\n=====\n- \n* \n",
        ];
        for input in inputs {
            let scores = scorer.score_all(input);
            for (_, score) in scores.labeled() {
                assert!(score <= 100, "{:?} out of range for {:?}", scores, input);
            }
        }
    }

    #[test]
    fn test_percentage_and_clamp() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(3, 5), 60);
        assert_eq!(percentage(7, 2), 100);
        assert_eq!(clamp_score(f64::NAN), 0);
        assert_eq!(clamp_score(-12.5), 0);
        assert_eq!(clamp_score(f64::INFINITY), 100);
        assert_eq!(clamp_score(99.9), 99);
    }

    #[test]
    fn test_feature_total() {
        let scores = FeatureScores {
            impact: 100,
            brevity: 100,
            style: 100,
            sections: 100,
            soft_skills: 100,
            hard_skills: 100,
        };
        assert_eq!(scores.total(), 600);
    }
}
