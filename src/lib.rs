//! Duotrigordle
//!
//! Deterministic puzzle generation and guess scoring for a daily word game where
//! 32 five-letter boards are solved at once with one shared list of guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use duotrigordle::core::{ColorCode, Word};
//! use duotrigordle::puzzle::TargetList;
//!
//! // Every puzzle id maps to the same 32 targets everywhere
//! let list = TargetList::embedded().unwrap();
//! let targets = list.targets_for(100);
//!
//! // Score a guess against the first board
//! let guess = Word::new("crane").unwrap();
//! let colors = ColorCode::calculate(&guess, &targets[0]);
//! println!("{guess} vs board 1: {colors}");
//! ```

// Core domain types
pub mod core;

// Puzzle generation and game rules
pub mod puzzle;

// Word lists
pub mod wordlists;

// Saved games and settings
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;
