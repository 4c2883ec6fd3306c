//! Honeycomb Solver
//!
//! Finds the 7-letter honeycomb (letters plus designated center) that
//! maximizes the total score of all playable dictionary words, by folding the
//! word list into a points table keyed by letter set and evaluating each
//! candidate honeycomb as a 64-subset sum.
//!
//! # Quick Start
//!
//! ```rust
//! use honeycomb_solver::core::Word;
//! use honeycomb_solver::search::{PointsTable, find_best};
//!
//! let words = vec![
//!     Word::new("erotica").unwrap(),
//!     Word::new("trace").unwrap(),
//! ];
//!
//! let table = PointsTable::build(&words);
//! let best = find_best(&table).unwrap();
//! println!("{} scores {}", best.honeycomb, best.score);
//! ```

// Core domain types
pub mod core;

// Points table and honeycomb search
pub mod search;

// Grouped word reports
pub mod report;

// Word lists and filtering
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
