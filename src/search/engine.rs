//! Best-honeycomb search
//!
//! Enumerates every candidate honeycomb (pangram letter set x choice of
//! center) and scores each one by summing the points table over its 64
//! candidate subsets. The search cost is independent of the word-list size;
//! only the aggregator pass touches every word.

use super::points::PointsTable;
use crate::core::{Honeycomb, Word};
use rayon::prelude::*;
use std::fmt;

/// The winning honeycomb and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: u32,
    pub honeycomb: Honeycomb,
}

/// Error type for searches that cannot produce a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The word list contains no word with 7 distinct letters, so no valid
    /// honeycomb exists.
    NoPangrams,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPangrams => {
                write!(f, "No valid honeycomb exists: the word list has no pangram")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Find the maximum-scoring honeycomb for a points table
///
/// Candidates are scored in parallel; ties on score go to the smallest
/// letter set in canonical order, and among centers of that set to the
/// latest center in canonical order, so repeated runs on the same input
/// always return the same winner.
///
/// # Errors
/// Returns `SearchError::NoPangrams` if the table has no 7-letter key.
/// An empty filtered word list always ends up here rather than producing a
/// degenerate default honeycomb.
///
/// # Examples
/// ```
/// use honeycomb_solver::core::Word;
/// use honeycomb_solver::search::{PointsTable, find_best};
///
/// let words = vec![
///     Word::new("EROTICA").unwrap(),
///     Word::new("TRACE").unwrap(),
/// ];
/// let table = PointsTable::build(&words);
///
/// let best = find_best(&table).unwrap();
/// assert_eq!(best.honeycomb.letters().to_string(), "ACEIORT");
/// assert_eq!(best.honeycomb.center(), 'T');
/// ```
pub fn find_best(table: &PointsTable) -> Result<SearchResult, SearchError> {
    let pangram_sets: Vec<_> = table.pangram_sets().collect();

    if pangram_sets.is_empty() {
        return Err(SearchError::NoPangrams);
    }

    pangram_sets
        .par_iter()
        .flat_map_iter(|&letters| {
            letters.letters().map(move |center| {
                // Safe: the set has exactly 7 letters and the center is one of them
                Honeycomb::new(letters, center).expect("center drawn from pangram set")
            })
        })
        .map(|honeycomb| SearchResult {
            score: score_honeycomb(table, &honeycomb),
            honeycomb,
        })
        .reduce_with(better)
        .ok_or(SearchError::NoPangrams)
}

/// Pick the better of two scored candidates
///
/// Higher score wins. Equal scores go to the smaller letter set; equal
/// letter sets go to the larger center. This is a strict total order over
/// distinct candidates, so the parallel reduction is deterministic
/// regardless of work splitting.
fn better(a: SearchResult, b: SearchResult) -> SearchResult {
    use std::cmp::Ordering;

    match a.score.cmp(&b.score) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => match a.honeycomb.letters().cmp(&b.honeycomb.letters()) {
            Ordering::Less => a,
            Ordering::Greater => b,
            Ordering::Equal => {
                if a.honeycomb.center() >= b.honeycomb.center() {
                    a
                } else {
                    b
                }
            }
        },
    }
}

/// Score a honeycomb by summing the points table over its 64 subsets
#[must_use]
pub fn score_honeycomb(table: &PointsTable, honeycomb: &Honeycomb) -> u32 {
    honeycomb.subsets().map(|subset| table.get(subset)).sum()
}

/// Score a honeycomb by scanning the full word list
///
/// The reference implementation of the scoring semantics: sum the scores of
/// every word the honeycomb admits. Used by tests and the benchmark
/// cross-check to validate the table-based path.
#[must_use]
pub fn score_honeycomb_naive(words: &[Word], honeycomb: &Honeycomb) -> u32 {
    words
        .iter()
        .filter(|word| honeycomb.admits(word))
        .map(Word::score)
        .sum()
}
