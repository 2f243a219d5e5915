//! Core domain types
//!
//! Words, guess scoring and the seeded generator behind puzzle selection.
//! Everything here is pure or owns its mutable state outright.

mod colors;
mod twister;
mod word;

pub use colors::{Color, ColorCode, score};
pub use twister::{MersenneTwister, SAVED_STATE_LENGTH, SavedState, StateError};
pub use word::{WORD_LENGTH, Word, WordError};
