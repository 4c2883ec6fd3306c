//! Grouped word report for a chosen honeycomb
//!
//! Groups the playable words of a honeycomb by letter set for display.
//! The grouping mirrors the scoring semantics exactly: every word counted in
//! the totals appears in exactly one group.

use crate::core::{Honeycomb, LetterSet, Word};
use rustc_hash::FxHashMap;

/// A word with its point value, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub text: String,
    pub score: u32,
}

/// The playable words sharing one candidate subset
#[derive(Debug, Clone)]
pub struct ReportGroup {
    pub letters: LetterSet,
    pub words: Vec<ScoredWord>,
}

impl ReportGroup {
    /// Total points contributed by this group
    #[must_use]
    pub fn score(&self) -> u32 {
        self.words.iter().map(|w| w.score).sum()
    }
}

/// Grouped word lists and summary totals for one honeycomb
#[derive(Debug, Clone)]
pub struct Report {
    pub honeycomb: Honeycomb,
    pub word_count: usize,
    pub total_score: u32,
    pub groups: Vec<ReportGroup>,
}

impl Report {
    /// Group a word list's playable words by letter set
    ///
    /// Groups are sorted with the largest letter sets first (pangram-forming
    /// subsets lead), then by canonical letter order; words within a group
    /// are in lexical order.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::{Honeycomb, Word};
    /// use honeycomb_solver::report::Report;
    ///
    /// let words = vec![
    ///     Word::new("EROTICA").unwrap(),
    ///     Word::new("TRACE").unwrap(),
    /// ];
    /// let honeycomb = Honeycomb::new("ACEIORT".parse().unwrap(), 'T').unwrap();
    ///
    /// let report = Report::build(&words, &honeycomb);
    /// assert_eq!(report.word_count, 2);
    /// assert_eq!(report.total_score, 19);
    /// ```
    #[must_use]
    pub fn build(words: &[Word], honeycomb: &Honeycomb) -> Self {
        let mut by_letters: FxHashMap<LetterSet, Vec<&Word>> = FxHashMap::default();

        for word in words.iter().filter(|w| honeycomb.admits(w)) {
            by_letters.entry(word.letters()).or_default().push(word);
        }

        let mut groups: Vec<ReportGroup> = by_letters
            .into_iter()
            .map(|(letters, mut members)| {
                members.sort_by(|a, b| a.text().cmp(b.text()));
                ReportGroup {
                    letters,
                    words: members
                        .into_iter()
                        .map(|w| ScoredWord {
                            text: w.text().to_string(),
                            score: w.score(),
                        })
                        .collect(),
                }
            })
            .collect();

        groups.sort_by(|a, b| {
            b.letters
                .len()
                .cmp(&a.letters.len())
                .then_with(|| a.letters.cmp(&b.letters))
        });

        let word_count = groups.iter().map(|g| g.words.len()).sum();
        let total_score = groups.iter().map(ReportGroup::score).sum();

        Self {
            honeycomb: *honeycomb,
            word_count,
            total_score,
            groups,
        }
    }
}
