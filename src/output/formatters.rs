//! Formatting utilities for terminal output

use crate::core::{Color, ColorCode, Word};
use colored::{ColoredString, Colorize};

/// Emoji for a color, with the orange/blue palette in color-blind mode
#[must_use]
pub const fn color_emoji(color: Color, color_blind: bool) -> char {
    match (color, color_blind) {
        (Color::Yellow, true) => '🟦',
        (Color::Green, true) => '🟧',
        _ => color.emoji(),
    }
}

/// Format a color code as emoji string
#[must_use]
pub fn code_to_emoji(code: ColorCode, color_blind: bool) -> String {
    if !color_blind {
        return code.to_emoji();
    }
    code.colors()
        .iter()
        .map(|&c| color_emoji(c, color_blind))
        .collect()
}

/// One letter on a colored background
#[must_use]
pub fn colored_letter(letter: char, color: Color, color_blind: bool) -> ColoredString {
    let cell = format!(" {letter} ");
    match (color, color_blind) {
        (Color::Black, _) => cell.white().on_bright_black(),
        (Color::Yellow, false) => cell.black().on_yellow(),
        (Color::Green, false) => cell.black().on_green(),
        (Color::Yellow, true) => cell.white().on_blue(),
        (Color::Green, true) => cell.black().on_truecolor(245, 121, 58),
    }
}

/// A guess with each letter colored by its feedback
#[must_use]
pub fn colored_row(word: &Word, code: ColorCode, color_blind: bool) -> String {
    word.chars()
        .iter()
        .zip(code.colors())
        .map(|(&letter, &color)| colored_letter(char::from(letter), color, color_blind).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
