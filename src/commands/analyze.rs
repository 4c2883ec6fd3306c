//! Honeycomb analysis command
//!
//! Scores a user-supplied honeycomb against a word list and builds its
//! grouped word report.

use crate::core::{Honeycomb, LetterSet, Word};
use crate::report::Report;
use crate::search::{PointsTable, score_honeycomb};

/// Result of analyzing a honeycomb
pub struct AnalysisResult {
    pub report: Report,
    pub table_score: u32,
}

/// Analyze a honeycomb given as a letter string and center letter
///
/// Scores the honeycomb both ways (points table and word grouping); the two
/// always agree, and the report carries the per-subset breakdown.
///
/// # Errors
///
/// Returns an error if:
/// - The letters fail to parse or are not exactly 7 distinct letters
/// - The center letter is not one of the honeycomb letters
pub fn analyze_honeycomb(
    letters: &str,
    center: char,
    words: &[Word],
) -> Result<AnalysisResult, String> {
    let letters: LetterSet = letters
        .parse()
        .map_err(|e| format!("Invalid honeycomb letters: {e}"))?;
    let honeycomb =
        Honeycomb::new(letters, center).map_err(|e| format!("Invalid honeycomb: {e}"))?;

    let table = PointsTable::build(words);
    let table_score = score_honeycomb(&table, &honeycomb);
    let report = Report::build(words, &honeycomb);

    Ok(AnalysisResult {
        report,
        table_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FilterOptions;
    use crate::wordlists::loader::words_from_slice;

    fn demo_words() -> Vec<Word> {
        words_from_slice(
            &["amalgam", "cacciatore", "erotica", "game", "glam", "megaplex"],
            &FilterOptions::default(),
        )
    }

    #[test]
    fn analyze_valid_honeycomb() {
        let words = demo_words();
        let result = analyze_honeycomb("AEGLMPX", 'G', &words).unwrap();

        assert_eq!(result.table_score, 24);
        assert_eq!(result.report.total_score, 24);
        assert_eq!(result.report.word_count, 4);
    }

    #[test]
    fn analyze_accepts_lowercase() {
        let words = demo_words();
        let result = analyze_honeycomb("aceiort", 't', &words).unwrap();
        assert_eq!(result.table_score, 31);
    }

    #[test]
    fn table_and_report_scores_agree() {
        let words = demo_words();
        let result = analyze_honeycomb("ACEIORT", 'A', &words).unwrap();
        assert_eq!(result.table_score, result.report.total_score);
    }

    #[test]
    fn analyze_rejects_wrong_size() {
        let words = demo_words();
        assert!(analyze_honeycomb("ACE", 'A', &words).is_err());
        assert!(analyze_honeycomb("ABCDEFGH", 'A', &words).is_err());
    }

    #[test]
    fn analyze_rejects_center_outside_set() {
        let words = demo_words();
        assert!(analyze_honeycomb("ACEIORT", 'Z', &words).is_err());
    }

    #[test]
    fn analyze_rejects_malformed_letters() {
        let words = demo_words();
        assert!(analyze_honeycomb("ACEIOR7", 'A', &words).is_err());
        assert!(analyze_honeycomb("", 'A', &words).is_err());
    }

    #[test]
    fn analyze_scores_zero_for_unmatched_honeycomb() {
        let words = demo_words();
        // Valid honeycomb, but no demo word is playable on it
        let result = analyze_honeycomb("BDFHJKQ", 'B', &words).unwrap();
        assert_eq!(result.table_score, 0);
        assert_eq!(result.report.word_count, 0);
    }
}
