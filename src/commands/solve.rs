//! Best-honeycomb command
//!
//! Builds the points table for a word list and searches for the
//! maximum-scoring honeycomb.

use crate::core::Word;
use crate::search::{PointsTable, SearchError, SearchResult, find_best};
use std::time::{Duration, Instant};

/// Result of a full solve run
pub struct SolveResult {
    pub best: SearchResult,
    pub word_count: usize,
    pub table_size: usize,
    pub pangram_sets: usize,
    pub build_time: Duration,
    pub search_time: Duration,
}

/// Find the best honeycomb for a filtered word list
///
/// Builds the points table, runs the search, and reports timings for both
/// phases separately (the build scales with the word list, the search only
/// with the number of pangram letter sets).
///
/// # Errors
///
/// Returns `SearchError::NoPangrams` if the word list admits no valid
/// honeycomb.
pub fn solve_wordlist(words: &[Word]) -> Result<SolveResult, SearchError> {
    let build_start = Instant::now();
    let table = PointsTable::build(words);
    let build_time = build_start.elapsed();

    let search_start = Instant::now();
    let best = find_best(&table)?;
    let search_time = search_start.elapsed();

    Ok(SolveResult {
        best,
        word_count: words.len(),
        table_size: table.len(),
        pangram_sets: table.pangram_sets().count(),
        build_time,
        search_time,
    })
}
