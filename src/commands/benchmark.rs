//! Benchmark command
//!
//! Times the points-table build and the honeycomb search, and cross-checks
//! the table-based scores against the naive word scan on a random sample of
//! candidates. The interesting property is that search time depends on the
//! number of pangram letter sets, not the word-list size.

use crate::core::{Honeycomb, Word};
use crate::search::{PointsTable, SearchError, find_best, score_honeycomb, score_honeycomb_naive};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_count: usize,
    pub table_size: usize,
    pub pangram_sets: usize,
    pub candidates: usize,
    pub build_time: Duration,
    pub search_time: Duration,
    pub candidates_per_second: f64,
    pub best_score: u32,
    pub verified: usize,
    pub mismatches: usize,
}

/// Benchmark the solver on a word list
///
/// Runs the full pipeline with timings, then verifies `sample` randomly
/// chosen candidate honeycombs by rescoring them with the naive word scan.
/// Any mismatch is reported in the result rather than panicking.
///
/// # Errors
///
/// Returns `SearchError::NoPangrams` if the word list admits no valid
/// honeycomb.
pub fn run_benchmark(words: &[Word], sample: usize) -> Result<BenchmarkResult, SearchError> {
    let build_start = Instant::now();
    let table = PointsTable::build(words);
    let build_time = build_start.elapsed();

    let search_start = Instant::now();
    let best = find_best(&table)?;
    let search_time = search_start.elapsed();

    // Every candidate the search evaluated
    let candidates: Vec<Honeycomb> = table
        .pangram_sets()
        .flat_map(|letters| {
            letters.letters().map(move |center| {
                // Safe: the set has exactly 7 letters and the center is one of them
                Honeycomb::new(letters, center).expect("center drawn from pangram set")
            })
        })
        .collect();

    let sample_size = sample.min(candidates.len());
    let chosen: Vec<&Honeycomb> = candidates
        .choose_multiple(&mut rand::rng(), sample_size)
        .collect();

    let pb = ProgressBar::new(sample_size as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("cross-checking");

    let mut mismatches = 0;
    for honeycomb in &chosen {
        if score_honeycomb(&table, honeycomb) != score_honeycomb_naive(words, honeycomb) {
            mismatches += 1;
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let candidates_per_second = if search_time.as_secs_f64() > 0.0 {
        candidates.len() as f64 / search_time.as_secs_f64()
    } else {
        f64::INFINITY
    };

    Ok(BenchmarkResult {
        word_count: words.len(),
        table_size: table.len(),
        pangram_sets: table.pangram_sets().count(),
        candidates: candidates.len(),
        build_time,
        search_time,
        candidates_per_second,
        best_score: best.score,
        verified: sample_size,
        mismatches,
    })
}
