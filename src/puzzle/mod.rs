//! Puzzle generation and game rules
//!
//! Derives each day's boards from its puzzle id and tracks a game against them.

mod calendar;
mod completion;
mod game;
mod targets;

pub use calendar::{
    format_time_elapsed, now_millis, practice_id, puzzle_id_at, start_date, todays_id,
};
pub use completion::all_targets_guessed;
pub use game::{GameState, GuessError, GuessOutcome};
pub use targets::{PuzzleError, TargetList};

/// Boards solved simultaneously in one puzzle
pub const NUM_BOARDS: usize = 32;

/// Boards fixed to the head of the master list
pub const LEGACY_BOARDS: usize = 16;

/// Guesses allowed per puzzle
pub const NUM_GUESSES: usize = 37;
