//! Live game state
//!
//! The whole game is one plain value. Every transition takes the current time as a
//! parameter, which keeps transitions deterministic and easy to test.

use super::completion::all_targets_guessed;
use super::targets::TargetList;
use super::{NUM_BOARDS, NUM_GUESSES};
use crate::core::{ColorCode, WORD_LENGTH, Word, WordError};
use crate::wordlists::Dictionary;
use std::fmt;

/// State of one puzzle in progress or finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Puzzle id the targets were derived from
    pub id: i64,
    /// Letters typed for the next guess
    pub input: String,
    pub targets: Vec<Word>,
    pub guesses: Vec<Word>,
    pub game_over: bool,
    /// Practice games are never saved
    pub practice: bool,
    /// Milliseconds since the Unix epoch
    pub start_time: i64,
    /// Milliseconds since the Unix epoch, set when the game ends
    pub end_time: i64,
}

/// Reason a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    GameOver,
    Invalid(WordError),
    NotInWordList(Word),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::Invalid(e) => write!(f, "{e}"),
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Invalid(e)
    }
}

/// What an accepted guess changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Boards solved by this guess
    pub solved_boards: Vec<usize>,
    pub game_over: bool,
}

impl GameState {
    /// Start a fresh game for a puzzle id
    #[must_use]
    pub fn start(id: i64, practice: bool, targets: &TargetList, now: i64) -> Self {
        Self {
            id,
            input: String::new(),
            targets: targets.targets_for(id),
            guesses: Vec::new(),
            game_over: false,
            practice,
            start_time: now,
            end_time: now,
        }
    }

    /// Append a letter to the pending input
    ///
    /// Returns false if the letter was ignored (game over, input full, not a letter).
    pub fn input_letter(&mut self, letter: char) -> bool {
        if self.game_over || self.input.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.input.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the pending input
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the pending input as a guess
    ///
    /// The input is cleared only when the guess is accepted.
    ///
    /// # Errors
    /// Returns `GuessError` if the game is over, the input is not a five-letter
    /// word, or the word is not in the dictionary.
    pub fn submit(&mut self, dictionary: &Dictionary, now: i64) -> Result<GuessOutcome, GuessError> {
        if self.game_over {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(self.input.as_str())?;
        if !dictionary.contains(&guess) {
            return Err(GuessError::NotInWordList(guess));
        }

        let solved_boards: Vec<usize> = (0..self.targets.len())
            .filter(|&board| self.targets[board] == guess && self.board_solved_at(board).is_none())
            .collect();

        self.guesses.push(guess);
        self.input.clear();

        if self.guesses.len() >= NUM_GUESSES || all_targets_guessed(&self.guesses, &self.targets) {
            self.game_over = true;
            self.end_time = now;
        }

        Ok(GuessOutcome {
            solved_boards,
            game_over: self.game_over,
        })
    }

    /// Replace the pending input with `text` and submit it
    ///
    /// # Errors
    /// See [`GameState::submit`].
    pub fn submit_word(
        &mut self,
        text: &str,
        dictionary: &Dictionary,
        now: i64,
    ) -> Result<GuessOutcome, GuessError> {
        let previous = std::mem::replace(&mut self.input, text.trim().to_uppercase());
        let result = self.submit(dictionary, now);
        if result.is_err() {
            self.input = previous;
        }
        result
    }

    /// Index of the guess that solved a board, if any
    #[must_use]
    pub fn board_solved_at(&self, board: usize) -> Option<usize> {
        let target = self.targets.get(board)?;
        self.guesses.iter().position(|guess| guess == target)
    }

    /// Guesses and their colors for one board, up to the guess that solved it
    #[must_use]
    pub fn board_rows(&self, board: usize) -> Vec<(&Word, ColorCode)> {
        let Some(target) = self.targets.get(board) else {
            return Vec::new();
        };
        let last = self
            .board_solved_at(board)
            .map_or(self.guesses.len(), |idx| idx + 1);
        self.guesses[..last]
            .iter()
            .map(|guess| (guess, ColorCode::calculate(guess, target)))
            .collect()
    }

    #[must_use]
    pub fn boards_solved(&self) -> usize {
        (0..self.targets.len())
            .filter(|&board| self.board_solved_at(board).is_some())
            .count()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        NUM_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Check if every board has been solved
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.targets.len() == NUM_BOARDS && all_targets_guessed(&self.guesses, &self.targets)
    }

    /// Milliseconds played so far, frozen once the game ends
    #[must_use]
    pub fn elapsed(&self, now: i64) -> i64 {
        let end = if self.game_over { self.end_time } else { now };
        end - self.start_time
    }
}
