//! Playable-word filter
//!
//! Selects the playable words from raw dictionary text: long enough, few
//! enough distinct letters, no forbidden letter. Tokens that are not plain
//! ASCII words (hyphens, apostrophes, digits) are skipped rather than
//! treated as errors.

use crate::core::{HONEYCOMB_SIZE, MIN_WORD_LENGTH, Word};

/// Puzzle-rule configuration for the word filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Minimum word length in letters
    pub min_length: usize,
    /// Maximum number of distinct letters
    pub max_distinct: usize,
    /// Letter excluded from play, if any ('S' in the standard puzzle)
    pub forbidden: Option<char>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            max_distinct: HONEYCOMB_SIZE,
            forbidden: Some('S'),
        }
    }
}

impl FilterOptions {
    /// Check whether a structurally valid word passes the puzzle rules
    ///
    /// Length is checked against the raw text; the distinct-letter cap is
    /// checked against the letter set, so AMALGAM (7 letters, 4 distinct)
    /// passes with a cap of 7.
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        word.len() >= self.min_length
            && word.letters().len() <= self.max_distinct
            && self
                .forbidden
                .is_none_or(|letter| !word.letters().contains(letter))
    }
}

/// Filter raw dictionary text into the playable word set
///
/// Tokenizes on whitespace, uppercases, drops malformed tokens and words
/// failing the puzzle rules, and returns a sorted, deduplicated list.
/// Empty or entirely malformed input yields an empty list, never an error.
///
/// # Examples
/// ```
/// use honeycomb_solver::wordlists::{FilterOptions, filter_words};
///
/// let words = filter_words("game GAME stone ox amalgam", &FilterOptions::default());
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
///
/// // STONE has an S, OX is too short, GAME deduplicates
/// assert_eq!(texts, vec!["AMALGAM", "GAME"]);
/// ```
#[must_use]
pub fn filter_words(text: &str, options: &FilterOptions) -> Vec<Word> {
    collect_words(text.split_whitespace(), options)
}

/// Filter an iterator of tokens into the playable word set
///
/// Shared by the text filter and the slice loader.
pub fn collect_words<'a>(
    tokens: impl Iterator<Item = &'a str>,
    options: &FilterOptions,
) -> Vec<Word> {
    let mut words: Vec<Word> = tokens
        .filter_map(|token| Word::new(token).ok())
        .filter(|word| options.allows(word))
        .collect();

    words.sort_by(|a, b| a.text().cmp(b.text()));
    words.dedup();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn keeps_playable_words() {
        let words = filter_words("game erotica amalgam", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["AMALGAM", "EROTICA", "GAME"]);
    }

    #[test]
    fn drops_short_words() {
        let words = filter_words("ox cat game", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["GAME"]);
    }

    #[test]
    fn short_rule_uses_raw_length_not_distinct_count() {
        // MAMA is 4 letters with only 2 distinct; it stays
        let words = filter_words("mama am", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["MAMA"]);
    }

    #[test]
    fn drops_words_with_forbidden_letter() {
        let words = filter_words("stone notes game", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["GAME"]);
    }

    #[test]
    fn forbidden_letter_is_configurable() {
        let options = FilterOptions {
            forbidden: Some('Z'),
            ..FilterOptions::default()
        };
        let words = filter_words("stone zebra", &options);
        assert_eq!(texts(&words), vec!["STONE"]);

        let unrestricted = FilterOptions {
            forbidden: None,
            ..FilterOptions::default()
        };
        let words = filter_words("stone zebra", &unrestricted);
        assert_eq!(texts(&words), vec!["STONE", "ZEBRA"]);
    }

    #[test]
    fn drops_words_with_too_many_distinct_letters() {
        // PROBLEMATIC has 9 distinct letters
        let words = filter_words("problematic erotica", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["EROTICA"]);
    }

    #[test]
    fn repeated_letters_do_not_count_against_the_cap() {
        // CACCIATORE: 10 letters but exactly 7 distinct
        let words = filter_words("cacciatore", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["CACCIATORE"]);
    }

    #[test]
    fn skips_malformed_tokens() {
        let words = filter_words("game it's x-ray 1234 héros", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["GAME"]);
    }

    #[test]
    fn normalizes_case_and_deduplicates() {
        let words = filter_words("Game GAME game gAmE", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["GAME"]);
    }

    #[test]
    fn output_is_sorted() {
        let words = filter_words("tact pace mild heat", &FilterOptions::default());
        assert_eq!(texts(&words), vec!["HEAT", "MILD", "PACE", "TACT"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(filter_words("", &FilterOptions::default()).is_empty());
        assert!(filter_words("   \n\t  ", &FilterOptions::default()).is_empty());
    }

    #[test]
    fn allows_checks_all_three_rules() {
        let options = FilterOptions::default();

        assert!(options.allows(&Word::new("GAME").unwrap()));
        assert!(!options.allows(&Word::new("GAM").unwrap())); // too short
        assert!(!options.allows(&Word::new("GAMES").unwrap())); // forbidden S
        assert!(!options.allows(&Word::new("PROBLEMATIC").unwrap())); // 9 distinct
    }
}
