//! Rule-based English lemmatizer
//!
//! Irregular forms are looked up in a fixed table; everything else goes
//! through a small set of suffix rules for plurals, past tenses and
//! gerunds. Input is expected to be lowercase already.

use std::collections::HashMap;

/// Stem endings that always lost a silent `e` when a suffix was attached
/// ("managed" -> "manag" -> "manage").
const SILENT_E_ENDINGS: &[&str] = &[
    "ag", "as", "at", "az", "bl", "dg", "iz", "lv", "ns", "rs", "rv", "yz",
];

/// Vowel-consonant endings that lost a silent `e` only after a single vowel
/// ("prepared" -> "prepare", but "cleared" -> "clear").
const SHORT_VOWEL_E_ENDINGS: &[&str] = &[
    "ar", "id", "ip", "ir", "iv", "od", "os", "ov", "uc", "ud", "ur", "ut",
];

/// Consonant pairs that stay doubled after stripping a suffix
const KEEP_DOUBLED: &[char] = &['l', 's', 'z', 'f'];

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("led", "lead"),
    ("built", "build"),
    ("made", "make"),
    ("making", "make"),
    ("taking", "take"),
    ("ran", "run"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("taught", "teach"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("thought", "think"),
    ("sold", "sell"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("began", "begin"),
    ("begun", "begin"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("knew", "know"),
    ("known", "know"),
    ("met", "meet"),
    ("kept", "keep"),
    ("spent", "spend"),
    ("sent", "send"),
    ("held", "hold"),
    ("found", "find"),
    ("saw", "see"),
    ("seen", "see"),
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("analyses", "analysis"),
    ("criteria", "criterion"),
    ("data", "data"),
    ("better", "good"),
    ("best", "good"),
];

/// Words the suffix rules would mangle
const INVARIANT_WORDS: &[&str] = &[
    "news", "series", "species", "always", "perhaps", "during", "thing", "nothing", "something",
    "anything", "everything", "morning", "evening", "spring", "string", "ceiling", "king", "ring",
    "bring", "sing", "wing", "need", "speed", "seed", "feed", "bleed", "breed", "embed", "shed",
    "red", "bed", "hundred", "kubernetes", "pandas", "aws", "sass", "css", "ios", "us", "gas",
    "bias", "canvas", "atlas", "alias", "analysis", "basis", "thesis", "axis", "status", "campus",
    "focus", "bonus", "virus", "census", "corpus", "process", "success", "business", "express",
    "access", "address", "progress",
];

pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashMap<&'static str, ()>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
            invariant: INVARIANT_WORDS.iter().map(|w| (*w, ())).collect(),
        }
    }

    /// Reduce a lowercase word to its base form
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular.get(word) {
            return (*lemma).to_string();
        }

        if self.invariant.contains_key(word)
            || word.chars().count() <= 3
            || !word.chars().all(|c| c.is_alphabetic())
        {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}y", stem);
        }

        if let Some(stem) = word.strip_suffix("ing") {
            if has_vowel(stem) && stem.len() >= 3 {
                return restore_stem(stem);
            }
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ied") {
            return format!("{}y", stem);
        }

        if let Some(stem) = word.strip_suffix("ed") {
            if word.ends_with("eed") {
                return word.to_string();
            }
            if has_vowel(stem) && stem.len() >= 3 {
                return restore_stem(stem);
            }
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("sses") {
            return format!("{}ss", stem);
        }

        for suffix in ["ches", "shes", "xes", "zes"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
            }
        }

        if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is") {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(is_vowel)
}

/// Undo consonant doubling or restore a dropped silent `e`
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 2 {
        let last = chars[n - 1];
        if last == chars[n - 2] && !is_vowel(last) && !KEEP_DOUBLED.contains(&last) {
            return chars[..n - 1].iter().collect();
        }
    }

    if SILENT_E_ENDINGS.iter().any(|ending| stem.ends_with(ending)) {
        return format!("{}e", stem);
    }

    if n >= 3
        && !is_vowel(chars[n - 3])
        && SHORT_VOWEL_E_ENDINGS.iter().any(|ending| stem.ends_with(ending))
    {
        return format!("{}e", stem);
    }

    stem.to_string()
}
