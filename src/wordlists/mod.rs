//! Word lists and the playable-word filter
//!
//! Provides the embedded demo dictionary, file loading, and the filter that
//! turns raw text into the playable word set.

mod embedded;
pub mod filter;
pub mod loader;

pub use embedded::{DEMO_WORDS, DEMO_WORDS_COUNT};
pub use filter::{FilterOptions, filter_words};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_count_matches_const() {
        assert_eq!(DEMO_WORDS.len(), DEMO_WORDS_COUNT);
    }

    #[test]
    fn demo_words_are_valid() {
        // All demo words should be lowercase ASCII, 4+ letters, no S
        for &word in DEMO_WORDS {
            assert!(word.len() >= 4, "Word '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(!word.contains('s'), "Word '{word}' contains the letter S");
        }
    }

    #[test]
    fn demo_words_are_sorted_and_unique() {
        for pair in DEMO_WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' out of order", pair[1]);
        }
    }

    #[test]
    fn demo_words_respect_distinct_letter_cap() {
        use std::collections::HashSet;

        for &word in DEMO_WORDS {
            let distinct: HashSet<char> = word.chars().collect();
            assert!(distinct.len() <= 7, "Word '{word}' has too many distinct letters");
        }
    }
}
