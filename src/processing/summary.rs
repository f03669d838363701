//! Short profile preview taken from the opening sentences of a resume

use crate::processing::features::{split_sentences, SENTENCE_DELIMITER};

const SUMMARY_SENTENCES: usize = 3;

/// Join the first three sentences and close with a period.
///
/// Empty input produces `"."`.
pub fn profile_summary(text: &str) -> String {
    let opening: Vec<&str> = split_sentences(text)
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .collect();

    format!("{}.", opening.join(SENTENCE_DELIMITER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_three_sentences() {
        let text = "Senior engineer. Ten years of Rust. Led a team of 8. Enjoys hiking. Based in Oslo";
        assert_eq!(
            profile_summary(text),
            "Senior engineer. Ten years of Rust. Led a team of 8."
        );
    }

    #[test]
    fn test_no_delimiter() {
        assert_eq!(profile_summary("hello world"), "hello world.");
    }

    #[test]
    fn test_fewer_than_three_sentences() {
        assert_eq!(profile_summary("Data analyst. Python expert"), "Data analyst. Python expert.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(profile_summary(""), ".");
    }
}
