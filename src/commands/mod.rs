//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_honeycomb};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveResult, solve_wordlist};
