//! Core domain types for the honeycomb puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod honeycomb;
mod letter_set;
mod word;

pub use honeycomb::{HONEYCOMB_SIZE, Honeycomb, HoneycombError, SUBSET_COUNT, Subsets};
pub use letter_set::{LetterSet, LetterSetError, Letters};
pub use word::{MIN_WORD_LENGTH, PANGRAM_BONUS, Word, WordError};
