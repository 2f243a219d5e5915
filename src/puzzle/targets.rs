//! Target word selection
//!
//! Every puzzle id maps to the same 32 boards on every machine. The first
//! `LEGACY_BOARDS` targets are always the head of the master list, as in the
//! earliest puzzles; the rest come from a Mersenne Twister seeded with the id.

use super::{LEGACY_BOARDS, NUM_BOARDS};
use crate::core::{MersenneTwister, Word};
use crate::wordlists::{TARGETS, loader::words_from_slice};
use rustc_hash::FxHashSet;
use std::fmt;

/// Error for a master list that cannot produce a full puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Fewer distinct words than boards; selection would never finish
    WordListTooSmall { distinct: usize, required: usize },
    /// A word is repeated among the fixed legacy boards
    DuplicateLegacyWord(Word),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordListTooSmall { distinct, required } => write!(
                f,
                "Target list has {distinct} distinct words, at least {required} are required"
            ),
            Self::DuplicateLegacyWord(word) => {
                write!(f, "Target list repeats '{word}' within the first {LEGACY_BOARDS} words")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Master list of target words, validated to be large enough for a puzzle
#[derive(Debug, Clone)]
pub struct TargetList {
    words: Vec<Word>,
}

impl TargetList {
    /// Validate a master list
    ///
    /// # Errors
    /// Returns `PuzzleError` if the list has fewer than `NUM_BOARDS` distinct
    /// words or repeats a word among its first `LEGACY_BOARDS` entries.
    pub fn new(words: Vec<Word>) -> Result<Self, PuzzleError> {
        let mut seen = FxHashSet::default();
        for word in words.iter().take(LEGACY_BOARDS) {
            if !seen.insert(word) {
                return Err(PuzzleError::DuplicateLegacyWord(word.clone()));
            }
        }
        seen.extend(words.iter().skip(LEGACY_BOARDS));

        if seen.len() < NUM_BOARDS {
            return Err(PuzzleError::WordListTooSmall {
                distinct: seen.len(),
                required: NUM_BOARDS,
            });
        }

        Ok(Self { words })
    }

    /// The master list compiled into the binary
    ///
    /// # Errors
    /// Returns `PuzzleError` if the embedded list fails validation.
    pub fn embedded() -> Result<Self, PuzzleError> {
        Self::new(words_from_slice(TARGETS))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The ordered targets for a puzzle id
    ///
    /// # Examples
    /// ```
    /// use duotrigordle::puzzle::{NUM_BOARDS, TargetList};
    ///
    /// let list = TargetList::embedded().unwrap();
    /// let targets = list.targets_for(42);
    /// assert_eq!(targets.len(), NUM_BOARDS);
    /// assert_eq!(targets, list.targets_for(42));
    /// ```
    #[must_use]
    pub fn targets_for(&self, id: i64) -> Vec<Word> {
        let mut targets: Vec<Word> = self.words[..LEGACY_BOARDS].to_vec();
        let mut chosen: FxHashSet<&Word> = self.words[..LEGACY_BOARDS].iter().collect();
        log::debug!("Seeding generator with puzzle id {id}");
        let mut rng = MersenneTwister::from_puzzle_id(id);

        while targets.len() < NUM_BOARDS {
            let idx = rng.next_u32() as usize % self.words.len();
            let word = &self.words[idx];
            if chosen.insert(word) {
                targets.push(word.clone());
            }
        }

        targets
    }
}
