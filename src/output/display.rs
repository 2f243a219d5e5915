//! Display functions for games and command results

use super::formatters::{code_to_emoji, colored_row, create_progress_bar};
use crate::commands::{ArchiveStatistics, ScoreResult, TargetsResult};
use crate::puzzle::{GameState, NUM_BOARDS, NUM_GUESSES, format_time_elapsed, now_millis};
use crate::storage::Settings;
use colored::Colorize;

/// Print one cell per board: the solved word, or the latest feedback
pub fn print_overview(game: &GameState, settings: &Settings) {
    let columns = if settings.wide_mode { 8 } else { 4 };
    let mut cells = Vec::with_capacity(game.targets.len());

    for board in 0..game.targets.len() {
        let label = format!("{:>2}", board + 1).bright_black();
        let cell = match game.board_solved_at(board) {
            Some(_) if settings.hide_completed_boards => continue,
            Some(at) => format!(
                "{label} {} {}",
                game.targets[board].text().green().bold(),
                format!("#{}", at + 1).bright_black()
            ),
            None => match game.board_rows(board).last() {
                Some((_, code)) => {
                    format!("{label} {}    ", code_to_emoji(*code, settings.color_blind_mode))
                }
                None if game.game_over => format!("{label} {}    ", game.targets[board].text().red()),
                None => format!("{label} ·····    "),
            },
        };
        cells.push(cell);
    }

    println!();
    for row in cells.chunks(columns) {
        println!("  {}", row.join("  "));
    }
    println!(
        "\n  {}/{} boards solved, {} guesses left",
        game.boards_solved(),
        NUM_BOARDS,
        game.guesses_remaining()
    );
    if settings.show_timer {
        println!("  ⏱  {}", format_time_elapsed(game.elapsed(now_millis())));
    }
    println!();
}

/// Print every guess on one board, up to the guess that solved it
pub fn print_board(game: &GameState, board: usize, settings: &Settings) {
    println!("\n{}", format!("Board {}", board + 1).bright_cyan().bold());
    let rows = game.board_rows(board);
    if rows.is_empty() {
        println!("  (no guesses yet)");
    }
    for (word, code) in rows {
        println!("  {}", colored_row(word, code, settings.color_blind_mode));
    }
    if game.game_over && game.board_solved_at(board).is_none() {
        println!("  Answer: {}", game.targets[board].text().red().bold());
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_summary(game: &GameState, now: i64) {
    let solved = game.boards_solved();
    println!("\n{}", "═".repeat(60).bright_cyan());
    if game.is_won() {
        println!(
            "{}",
            format!(
                "    🎉  Solved all {NUM_BOARDS} boards in {} guesses!",
                game.guesses.len()
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("    Out of guesses: {solved}/{NUM_BOARDS} boards solved")
                .yellow()
                .bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n   Boards:   [{}] {solved}/{NUM_BOARDS}",
        create_progress_bar(solved as f64, NUM_BOARDS as f64, 32).green()
    );
    println!("   Guesses:  {}/{NUM_GUESSES}", game.guesses.len());
    println!("   Time:     {}", format_time_elapsed(game.elapsed(now)));

    // Guess number that solved each board, in board order
    let solved_at: Vec<String> = (0..game.targets.len())
        .map(|board| {
            game.board_solved_at(board)
                .map_or_else(|| "--".to_string(), |at| format!("{:02}", at + 1))
        })
        .collect();
    println!("\n   Duotrigordle #{}", game.id);
    for row in solved_at.chunks(8) {
        println!("   {}", row.join(" "));
    }
    println!();
}

/// Print the targets of a puzzle
pub fn print_targets_result(result: &TargetsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Targets for puzzle {}",
        format!("#{}", result.id).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (chunk_idx, row) in result.targets.chunks(8).enumerate() {
        let words: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if chunk_idx * 8 + i < result.legacy {
                    word.bright_black().to_string()
                } else {
                    word.bright_white().bold().to_string()
                }
            })
            .collect();
        println!("  {}", words.join("  "));
    }
    println!(
        "\n  {}",
        format!("First {} boards are fixed for every puzzle", result.legacy).bright_black()
    );
}

/// Print the colors of a guess against each target
pub fn print_score_result(result: &ScoreResult) {
    for (target, code) in &result.rows {
        println!(
            "{} vs {}  {}  {}",
            result.guess.bright_white().bold(),
            target,
            code,
            code_to_emoji(*code, false)
        );
    }
}

/// Print statistics for a range of puzzles
pub fn print_archive_statistics(stats: &ArchiveStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ARCHIVE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Puzzles:          #{} to #{} ({})",
        stats.first_id, stats.last_id, stats.puzzles
    );
    println!("   Distinct words:   {}", stats.distinct_words);
    println!("   Never drawn:      {}", stats.never_drawn);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if !stats.most_common.is_empty() {
        println!("\n📈 {}", "Most common boards:".bright_cyan().bold());
        for (word, count) in &stats.most_common {
            println!("   {word}  {count:5}");
        }
    }
}

/// Print every setting and its value
pub fn print_settings(settings: &Settings) {
    for (key, value) in settings.entries() {
        let value = if value {
            "on".green().to_string()
        } else {
            "off".bright_black().to_string()
        };
        println!("  {key:<22} {value}");
    }
}
