//! Terminal output formatting
//!
//! Display utilities for games, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_archive_statistics, print_board, print_game_summary, print_overview,
    print_score_result, print_settings, print_targets_result,
};
