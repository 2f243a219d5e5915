//! Targets command
//!
//! Lists the boards of a puzzle.

use crate::puzzle::{LEGACY_BOARDS, TargetList};

/// Targets of one puzzle
#[derive(Debug)]
pub struct TargetsResult {
    pub id: i64,
    pub targets: Vec<String>,
    /// How many leading targets are fixed legacy boards
    pub legacy: usize,
}

/// Compute the targets of a puzzle id
#[must_use]
pub fn list_targets(list: &TargetList, id: i64) -> TargetsResult {
    let targets = list
        .targets_for(id)
        .iter()
        .map(|w| w.text().to_string())
        .collect();

    TargetsResult {
        id,
        targets,
        legacy: LEGACY_BOARDS,
    }
}
