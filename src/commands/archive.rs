//! Archive command
//!
//! Generates every puzzle in a range of ids and reports how often each word was
//! drawn onto a randomized board.

use crate::puzzle::{LEGACY_BOARDS, TargetList};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Largest range a single archive run will generate
pub const MAX_PUZZLES: u64 = 10_000_000;

/// Statistics over a range of puzzles
#[derive(Debug)]
pub struct ArchiveStatistics {
    pub first_id: i64,
    pub last_id: i64,
    pub puzzles: usize,
    /// Distinct words that appeared on a randomized board
    pub distinct_words: usize,
    /// Master-list words never drawn in the range
    pub never_drawn: usize,
    pub most_common: Vec<(String, usize)>,
    pub total_time: Duration,
}

/// Generate puzzles `first_id..=last_id` in parallel and tally word usage
///
/// # Errors
///
/// Returns an error if the range is empty or too large to enumerate.
///
/// # Panics
///
/// Panics if the progress bar template is invalid, which would be a bug.
pub fn run_archive(
    list: &TargetList,
    first_id: i64,
    last_id: i64,
    top: usize,
) -> Result<ArchiveStatistics, String> {
    if last_id < first_id {
        return Err(format!("Empty range: {first_id}..={last_id}"));
    }
    let span = last_id.abs_diff(first_id);
    if span >= MAX_PUZZLES {
        return Err(format!(
            "Range {first_id}..={last_id} is too large, at most {MAX_PUZZLES} puzzles are allowed"
        ));
    }

    let puzzles = span + 1;
    let pb = ProgressBar::new(puzzles);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("puzzles {first_id}..={last_id}"));

    let start = Instant::now();

    let counts: FxHashMap<String, usize> = (first_id..=last_id)
        .into_par_iter()
        .map(|id| {
            let mut local: FxHashMap<String, usize> = FxHashMap::default();
            for word in &list.targets_for(id)[LEGACY_BOARDS..] {
                *local.entry(word.text().to_string()).or_insert(0) += 1;
            }
            pb.inc(1);
            local
        })
        .reduce(FxHashMap::default, |mut acc, local| {
            for (word, count) in local {
                *acc.entry(word).or_insert(0) += count;
            }
            acc
        });

    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    let never_drawn = list
        .words()
        .iter()
        .filter(|w| !counts.contains_key(w.text()))
        .count();

    let mut most_common: Vec<(String, usize)> = counts
        .iter()
        .map(|(word, &count)| (word.clone(), count))
        .collect();
    most_common.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    most_common.truncate(top);

    Ok(ArchiveStatistics {
        first_id,
        last_id,
        puzzles: puzzles as usize,
        distinct_words: counts.len(),
        never_drawn,
        most_common,
        total_time,
    })
}
