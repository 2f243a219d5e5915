//! Word lists for puzzle generation and guess validation
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.
//! `TARGETS` is the master list boards are drawn from; its order is part of the
//! puzzle format and must never be re-sorted. `ALLOWED` holds every valid guess.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of words accepted as guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Dictionary of the embedded allowed list plus the embedded targets
    #[must_use]
    pub fn embedded() -> Self {
        let mut dictionary = Self::default();
        dictionary.extend(loader::words_from_slice(ALLOWED));
        dictionary.extend(loader::words_from_slice(TARGETS));
        dictionary
    }

    /// Add words to the dictionary
    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words);
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::NUM_BOARDS;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn targets_are_valid_words() {
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn targets_are_unique() {
        let unique: FxHashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }

    #[test]
    fn targets_cover_every_board() {
        // Board selection only terminates when there are enough distinct targets
        assert!(TARGETS.len() >= NUM_BOARDS);
    }

    #[test]
    fn targets_subset_of_allowed() {
        let allowed: FxHashSet<_> = ALLOWED.iter().collect();

        for &target in TARGETS {
            assert!(allowed.contains(&target), "Target '{target}' not in allowed list");
        }
    }

    #[test]
    fn dictionary_accepts_targets_and_rejects_gibberish() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), ALLOWED.len());
        assert!(dictionary.contains(&Word::new(TARGETS[0]).unwrap()));
        assert!(!dictionary.contains(&Word::new("XQZVJ").unwrap()));
    }
}
