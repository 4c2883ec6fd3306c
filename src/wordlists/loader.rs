//! Word list loading utilities
//!
//! Provides functions to load word lists from files or the embedded demo
//! dictionary, running everything through the playable-word filter.

use super::filter::{FilterOptions, collect_words};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load and filter words from a file
///
/// The file is whitespace-separated tokens; malformed tokens and words
/// failing the puzzle rules are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use honeycomb_solver::wordlists::{FilterOptions, loader::load_from_file};
///
/// let words = load_from_file("data/dictionary.txt", &FilterOptions::default()).unwrap();
/// println!("Loaded {} playable words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, options: &FilterOptions) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(collect_words(content.split_whitespace(), options))
}

/// Filter an embedded string slice into a word list
///
/// # Examples
/// ```
/// use honeycomb_solver::wordlists::{DEMO_WORDS, FilterOptions, loader::words_from_slice};
///
/// let words = words_from_slice(DEMO_WORDS, &FilterOptions::default());
/// assert!(!words.is_empty());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], options: &FilterOptions) -> Vec<Word> {
    collect_words(slice.iter().copied(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEMO_WORDS;

    #[test]
    fn words_from_slice_applies_filter() {
        let input = &["game", "ox", "stone", "erotica"];
        let words = words_from_slice(input, &FilterOptions::default());

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["EROTICA", "GAME"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input, &FilterOptions::default());
        assert!(words.is_empty());
    }

    #[test]
    fn demo_list_survives_the_filter_intact() {
        // The demo dictionary is curated: every entry is playable
        let words = words_from_slice(DEMO_WORDS, &FilterOptions::default());
        assert_eq!(words.len(), DEMO_WORDS.len());
    }

    #[test]
    fn demo_list_contains_pangrams() {
        let words = words_from_slice(DEMO_WORDS, &FilterOptions::default());
        assert!(words.iter().any(Word::is_pangram));
    }
}
