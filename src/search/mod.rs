//! Honeycomb search engine
//!
//! The points-table aggregation and the subset-sum search over candidate
//! honeycombs.

mod engine;
mod points;

pub use engine::{SearchError, SearchResult, find_best, score_honeycomb, score_honeycomb_naive};
pub use points::PointsTable;
