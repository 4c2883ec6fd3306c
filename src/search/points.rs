//! Points table construction
//!
//! Folds the filtered word list into a mapping from letter set to total
//! achievable points. This is the one precomputation that makes the search
//! tractable: after it, a honeycomb's score is a 64-subset lookup instead of
//! a full word-list scan.

use crate::core::{HONEYCOMB_SIZE, LetterSet, Word};
use rustc_hash::FxHashMap;

/// Mapping from letter set to the total score of all words sharing it
///
/// Built once per word list and read-only afterwards. Missing keys mean no
/// word uses exactly that letter set and contribute zero.
#[derive(Debug, Clone, Default)]
pub struct PointsTable {
    totals: FxHashMap<LetterSet, u32>,
}

impl PointsTable {
    /// Build the table in a single pass over the word list
    ///
    /// The accumulation is commutative, so the result does not depend on the
    /// iteration order of the input.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::Word;
    /// use honeycomb_solver::search::PointsTable;
    ///
    /// let words = vec![
    ///     Word::new("GLAM").unwrap(),
    ///     Word::new("AMALGAM").unwrap(),
    /// ];
    /// let table = PointsTable::build(&words);
    ///
    /// // GLAM scores 1, AMALGAM scores 7; both share the key AGLM
    /// assert_eq!(table.get("AGLM".parse().unwrap()), 8);
    /// ```
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut totals: FxHashMap<LetterSet, u32> = FxHashMap::default();

        for word in words {
            *totals.entry(word.letters()).or_insert(0) += word.score();
        }

        Self { totals }
    }

    /// Total points achievable with exactly this letter set
    ///
    /// Absent keys are not errors; they score zero.
    #[inline]
    #[must_use]
    pub fn get(&self, letters: LetterSet) -> u32 {
        self.totals.get(&letters).copied().unwrap_or(0)
    }

    /// Sum of all table entries
    ///
    /// Equals the total score of every word that went into the build.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.totals.values().sum()
    }

    /// Number of distinct letter sets in the table
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// The letter sets of exactly 7 distinct letters
    ///
    /// Only these can be honeycombs: a valid honeycomb must admit at least
    /// one pangram, and a 7-letter honeycomb is its pangram's letter set.
    pub fn pangram_sets(&self) -> impl Iterator<Item = LetterSet> + '_ {
        self.totals
            .keys()
            .copied()
            .filter(|set| set.len() == HONEYCOMB_SIZE)
    }
}
