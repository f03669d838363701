//! Text normalization: tokenization, stopword removal and lemmatization

use crate::processing::lemmatizer::Lemmatizer;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Ordered lemmas of a single text, stopwords and punctuation removed
pub type LemmaTokenSet = Vec<String>;

pub struct TextNormalizer {
    stop_words: HashSet<&'static str>,
    lemmatizer: Lemmatizer,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Reduce text to its lemma tokens. Empty input yields an empty set.
    pub fn normalize(&self, text: &str) -> LemmaTokenSet {
        let mut tokens = Vec::new();

        for word in text.unicode_words() {
            let lowered = word.to_lowercase();

            if self.is_stop_word(&lowered) || is_punctuation(&lowered) {
                continue;
            }

            let lemma = self.lemmatizer.lemmatize(&lowered);

            // Some inflected forms only become stopwords once reduced ("being" -> "be")
            if !self.is_stop_word(&lemma) {
                tokens.push(lemma);
            }
        }

        tokens
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

fn is_punctuation(token: &str) -> bool {
    token.chars().all(|c| !c.is_alphanumeric())
}

/// Common English stopwords
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around", "as", "at", "be",
    "became", "because", "become", "becomes", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "both", "but", "by", "can", "cannot",
    "could", "did", "do", "does", "doing", "done", "down", "during", "each", "either", "else",
    "elsewhere", "enough", "even", "ever", "every", "everyone", "everything", "everywhere",
    "few", "for", "former", "formerly", "from", "further", "had", "has", "have", "he", "hence",
    "her", "here", "hereby", "herein", "hers", "herself", "him", "himself", "his", "how",
    "however", "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "least",
    "less", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly",
    "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless", "next", "no",
    "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often",
    "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
    "ourselves", "out", "over", "own", "per", "perhaps", "please", "quite", "rather", "really",
    "same", "seem", "seemed", "seeming", "seems", "several", "she", "should", "since", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "these", "they", "this", "those",
    "though", "through", "throughout", "thru", "thus", "to", "together", "too", "toward",
    "towards", "under", "unless", "until", "up", "upon", "us", "used", "very", "via", "was",
    "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
    "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    "'s", "n't", "'re", "'ve", "'ll", "'d", "'m",
];
