//! Property tests for code canonicalization.

use proptest::prelude::*;

use semdom_core::normalize;

proptest! {
    /// Canonical codes are a fixed point of normalization.
    #[test]
    fn normalization_is_idempotent(number in 1u32..=93, letter in proptest::option::of(proptest::char::range('A', 'Z'))) {
        let canonical = match letter {
            Some(letter) => format!("{number}{letter}"),
            None => number.to_string(),
        };
        let once = normalize(&canonical);
        prop_assert_eq!(once.as_str(), canonical.as_str());
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// Every decimal subdivision of a number collapses to the same key.
    #[test]
    fn subdivisions_share_a_key(number in 1u32..=93, sub in 1u32..=99) {
        let code = format!("{number}.{sub}");
        let normalized = normalize(&code);
        let expected = number.to_string();
        prop_assert_eq!(normalized.as_str(), expected.as_str());
    }

    /// Lowercase letter forms join against their uppercase lexicon base.
    #[test]
    fn letter_case_is_unified(number in 1u32..=93, letter in proptest::char::range('a', 'z')) {
        let corpus_form = format!("{number}{letter}");
        let lexicon_form = format!("{number}{}", letter.to_ascii_uppercase());
        prop_assert_eq!(normalize(&corpus_form), normalize(&lexicon_form));
    }
}
