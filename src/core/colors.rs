//! Guess scoring and color code representation
//!
//! A color code holds the feedback for one guess against one target:
//! - `B` = Black (letter absent, or every occurrence already accounted for)
//! - `Y` = Yellow (letter present elsewhere in the target)
//! - `G` = Green (letter in the correct position)

use super::word::{WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Black,
    Yellow,
    Green,
}

impl Color {
    /// Single-letter symbol used in persisted and printed codes
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Black => '⬛',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    /// Parse a symbol, accepting either letter case or the emoji form
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'B' | 'b' | '⬛' | '⬜' => Some(Self::Black),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'G' | 'g' | '🟩' => Some(Self::Green),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one color per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorCode([Color; WORD_LENGTH]);

impl ColorCode {
    /// All greens (the guess is the target)
    pub const SOLVED: Self = Self([Color::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(colors: [Color; WORD_LENGTH]) -> Self {
        Self(colors)
    }

    /// Calculate the colors when `guess` is checked against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green, counting every unmatched target letter
    /// 2. Second pass: left to right, a non-green letter turns yellow while its
    ///    unmatched count is positive, consuming one count
    ///
    /// Earlier positions claim yellow credit for duplicate letters first.
    ///
    /// # Examples
    /// ```
    /// use duotrigordle::core::{ColorCode, Word};
    ///
    /// let guess = Word::new("XYCEZ").unwrap();
    /// let target = Word::new("ABCDE").unwrap();
    /// assert_eq!(ColorCode::calculate(&guess, &target).to_string(), "BBGYB");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Color::Black; WORD_LENGTH];
        let mut unmatched: FxHashMap<u8, u8> = FxHashMap::default();

        // Allow: Index needed to compare guess[i] with target[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = Color::Green;
            } else {
                *unmatched.entry(target.char_at(i)).or_insert(0) += 1;
            }
        }

        for (i, color) in result.iter_mut().enumerate() {
            if *color == Color::Green {
                continue;
            }
            if let Some(count) = unmatched.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *color = Color::Yellow;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is green
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    #[must_use]
    pub fn count_greens(self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Green).count()
    }

    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Yellow).count()
    }

    /// Parse a code from a string like "BBGYB" or "⬛⬛🟩🟨⬛"
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let colors: Vec<Color> = s.chars().map(Color::from_symbol).collect::<Option<_>>()?;
        let colors: [Color; WORD_LENGTH] = colors.try_into().ok()?;
        Some(Self(colors))
    }

    /// Convert the code to an emoji string such as "⬛⬛🟩🟨⬛"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl std::str::FromStr for ColorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid color code: {s}"))
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

/// Score a guess string against a target string
///
/// Both inputs must be five ASCII letters; case is ignored.
///
/// # Errors
/// Returns `WordError` if either input is not a valid five-letter word.
///
/// # Examples
/// ```
/// use duotrigordle::core::score;
///
/// assert_eq!(score("speed", "erase").unwrap().to_string(), "YBYYB");
/// assert!(score("spee", "erase").is_err());
/// ```
pub fn score(guess: &str, target: &str) -> Result<ColorCode, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(ColorCode::calculate(&guess, &target))
}
