//! Bag-of-words text signatures.

use std::collections::HashMap;

/// Signature used when no tokens survive normalization.
pub const NO_TEXT_SENTINEL: &str = "notext";

/// How many dominant tokens participate in the signature.
const TOP_TOKENS: usize = 10;

/// Derive the coarse text signature from name and description.
///
/// Lower-cases, replaces non-alphanumerics with spaces, tokenizes on
/// whitespace, and keeps the top 10 tokens ordered by descending frequency
/// with a lexicographic tie-break. Deliberately not a digest: edits that
/// preserve the dominant vocabulary fingerprint similarly.
pub fn text_signature(name: &str, description: &str) -> String {
    let lowered = format!("{} {}", name, description).to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    let mut freq: HashMap<&str, u64> = HashMap::new();
    for token in cleaned.split_whitespace() {
        *freq.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, u64)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let top: Vec<&str> = ranked.iter().take(TOP_TOKENS).map(|(t, _)| *t).collect();
    if top.is_empty() {
        NO_TEXT_SENTINEL.to_string()
    } else {
        top.join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_uses_sentinel() {
        assert_eq!(text_signature("", ""), NO_TEXT_SENTINEL);
        assert_eq!(text_signature("  --- ", "!!!"), NO_TEXT_SENTINEL);
    }

    #[test]
    fn frequency_dominates_order() {
        let sig = text_signature("vase vase", "blue");
        assert_eq!(sig, "vase|blue");
    }

    #[test]
    fn ties_break_lexicographically() {
        let sig = text_signature("zebra apple", "");
        assert_eq!(sig, "apple|zebra");
    }

    #[test]
    fn punctuation_and_case_are_stripped() {
        assert_eq!(
            text_signature("Ming, Vase!", "ming-era"),
            text_signature("ming vase", "ming era")
        );
    }

    #[test]
    fn only_top_ten_tokens_survive() {
        let description = "a b c d e f g h i j k l";
        let sig = text_signature("", description);
        assert_eq!(sig.split('|').count(), 10);
        assert_eq!(sig, "a|b|c|d|e|f|g|h|i|j");
    }

    proptest! {
        /// The signature is a pure function of its inputs.
        #[test]
        fn signature_deterministic(name in ".{0,60}", desc in ".{0,200}") {
            prop_assert_eq!(
                text_signature(&name, &desc),
                text_signature(&name, &desc)
            );
        }
    }
}
