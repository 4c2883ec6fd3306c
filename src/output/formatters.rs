//! Formatting utilities for terminal output

use crate::core::Honeycomb;

/// Render a honeycomb as a small hex-cell diagram
///
/// The center letter sits in the middle row, bracketed; the six outer
/// letters surround it in canonical order.
///
/// # Examples
/// ```
/// use honeycomb_solver::core::Honeycomb;
/// use honeycomb_solver::output::formatters::honeycomb_diagram;
///
/// let honeycomb = Honeycomb::new("ACEIORT".parse().unwrap(), 'T').unwrap();
/// let diagram = honeycomb_diagram(&honeycomb);
/// assert!(diagram.contains("[T]"));
/// ```
#[must_use]
pub fn honeycomb_diagram(honeycomb: &Honeycomb) -> String {
    let mut outer = honeycomb.letters();
    outer.remove(honeycomb.center());
    let o: Vec<char> = outer.letters().collect();

    format!(
        "   {} {}\n  {} [{}] {}\n   {} {}",
        o[0],
        o[1],
        o[2],
        honeycomb.center(),
        o[3],
        o[4],
        o[5]
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score as a bar relative to the best score
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best.max(1)), width)
}
