//! Persisted game record
//!
//! Only the puzzle id, the guesses and the timestamps are stored. Targets are
//! always recomputed from the id when a record is loaded.

use crate::core::{Word, WordError};
use crate::puzzle::{GameState, NUM_GUESSES, TargetList, all_targets_guessed};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Stored form of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSerialized {
    pub id: i64,
    pub guesses: Vec<String>,
    pub start_time: i64,
    pub end_time: i64,
}

/// Reason a stored value is not a usable game record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    NotAnObject,
    MissingField(&'static str),
    NotAnInteger(&'static str),
    NotAnArray(&'static str),
    NotAString { index: usize },
    TooManyGuesses(usize),
    InvalidGuess { index: usize, error: WordError },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "Game record is not a JSON object"),
            Self::MissingField(field) => write!(f, "Game record has no '{field}' field"),
            Self::NotAnInteger(field) => write!(f, "Game record field '{field}' is not an integer"),
            Self::NotAnArray(field) => write!(f, "Game record field '{field}' is not an array"),
            Self::NotAString { index } => write!(f, "Guess {index} is not a string"),
            Self::TooManyGuesses(count) => {
                write!(f, "Game record has {count} guesses, at most {NUM_GUESSES} are allowed")
            }
            Self::InvalidGuess { index, error } => write!(f, "Guess {index} is invalid: {error}"),
        }
    }
}

impl std::error::Error for RecordError {}

fn field<'a>(
    object: &'a serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, RecordError> {
    object.get(name).ok_or(RecordError::MissingField(name))
}

/// Read an integral JSON number, accepting floats with no fractional part
fn integer(value: &Value, name: &'static str) -> Result<i64, RecordError> {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|n| n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0)
                .map(|n| n as i64)
        })
        .ok_or(RecordError::NotAnInteger(name))
}

/// Validate an untrusted JSON value as a game record
///
/// Stored data may come from an older, incompatible version, so every field is
/// checked instead of trusting the shape.
///
/// # Errors
/// Returns `RecordError` describing the first problem found.
pub fn parse_game(value: &Value) -> Result<GameSerialized, RecordError> {
    let object = value.as_object().ok_or(RecordError::NotAnObject)?;

    let id = integer(field(object, "id")?, "id")?;

    let guesses = field(object, "guesses")?
        .as_array()
        .ok_or(RecordError::NotAnArray("guesses"))?;
    if guesses.len() > NUM_GUESSES {
        return Err(RecordError::TooManyGuesses(guesses.len()));
    }
    let guesses = guesses
        .iter()
        .enumerate()
        .map(|(index, guess)| {
            let text = guess.as_str().ok_or(RecordError::NotAString { index })?;
            Word::new(text)
                .map(|word| word.text().to_string())
                .map_err(|error| RecordError::InvalidGuess { index, error })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let start_time = integer(field(object, "startTime")?, "startTime")?;
    let end_time = integer(field(object, "endTime")?, "endTime")?;

    Ok(GameSerialized {
        id,
        guesses,
        start_time,
        end_time,
    })
}

/// Parse and validate a stored game record from text
///
/// # Errors
/// Returns `RecordError::NotAnObject` for text that is not JSON, otherwise see
/// [`parse_game`].
pub fn parse_game_str(text: &str) -> Result<GameSerialized, RecordError> {
    let value: Value = serde_json::from_str(text).map_err(|_| RecordError::NotAnObject)?;
    parse_game(&value)
}

/// Convert a live game to its stored form
#[must_use]
pub fn serialize_game(state: &GameState) -> GameSerialized {
    GameSerialized {
        id: state.id,
        guesses: state.guesses.iter().map(|g| g.text().to_string()).collect(),
        start_time: state.start_time,
        end_time: state.end_time,
    }
}

/// Rebuild a live game from a stored record
///
/// # Errors
/// Returns `RecordError::InvalidGuess` if a stored guess is not a five-letter word.
pub fn deserialize_game(
    serialized: &GameSerialized,
    targets: &TargetList,
) -> Result<GameState, RecordError> {
    let target_words = targets.targets_for(serialized.id);
    log::debug!(
        "Target words for puzzle {}: {}",
        serialized.id,
        target_words
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(" ")
    );

    let guesses = serialized
        .guesses
        .iter()
        .enumerate()
        .map(|(index, text)| {
            Word::new(text.as_str()).map_err(|error| RecordError::InvalidGuess { index, error })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let game_over =
        guesses.len() >= NUM_GUESSES || all_targets_guessed(&guesses, &target_words);

    Ok(GameState {
        id: serialized.id,
        input: String::new(),
        targets: target_words,
        guesses,
        game_over,
        practice: false,
        start_time: serialized.start_time,
        end_time: serialized.end_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use serde_json::json;

    fn list() -> TargetList {
        TargetList::embedded().unwrap()
    }

    #[test]
    fn parse_accepts_valid_record() {
        let record = parse_game(&json!({
            "id": 120,
            "guesses": ["crane", "SLATE"],
            "startTime": 1_650_000_000_000_i64,
            "endTime": 1_650_000_100_000_i64,
        }))
        .unwrap();

        assert_eq!(record.id, 120);
        assert_eq!(record.guesses, ["CRANE", "SLATE"]);
        assert_eq!(record.start_time, 1_650_000_000_000);
        assert_eq!(record.end_time, 1_650_000_100_000);
    }

    #[test]
    fn parse_accepts_whole_floats() {
        let record = parse_game(&json!({
            "id": 3.0, "guesses": [], "startTime": 10.0, "endTime": 10,
        }))
        .unwrap();
        assert_eq!(record.id, 3);
    }

    #[test]
    fn parse_rejects_wrong_shapes() {
        assert_eq!(parse_game(&json!(null)), Err(RecordError::NotAnObject));
        assert_eq!(parse_game(&json!([1, 2])), Err(RecordError::NotAnObject));
        assert_eq!(
            parse_game(&json!({"guesses": [], "startTime": 0, "endTime": 0})),
            Err(RecordError::MissingField("id"))
        );
        assert_eq!(
            parse_game(&json!({"id": "7", "guesses": [], "startTime": 0, "endTime": 0})),
            Err(RecordError::NotAnInteger("id"))
        );
        assert_eq!(
            parse_game(&json!({"id": 7.5, "guesses": [], "startTime": 0, "endTime": 0})),
            Err(RecordError::NotAnInteger("id"))
        );
        assert_eq!(
            parse_game(&json!({"id": 7, "guesses": "CRANE", "startTime": 0, "endTime": 0})),
            Err(RecordError::NotAnArray("guesses"))
        );
        assert_eq!(
            parse_game(&json!({"id": 7, "guesses": ["CRANE", 5], "startTime": 0, "endTime": 0})),
            Err(RecordError::NotAString { index: 1 })
        );
        assert_eq!(
            parse_game(&json!({"id": 7, "guesses": [], "startTime": 0})),
            Err(RecordError::MissingField("endTime"))
        );
        assert_eq!(
            parse_game(&json!({"id": 7, "guesses": [], "startTime": null, "endTime": 0})),
            Err(RecordError::NotAnInteger("startTime"))
        );
    }

    #[test]
    fn parse_rejects_too_many_guesses() {
        let guesses = vec!["CRANE"; NUM_GUESSES + 1];
        assert_eq!(
            parse_game(&json!({"id": 7, "guesses": guesses, "startTime": 0, "endTime": 0})),
            Err(RecordError::TooManyGuesses(NUM_GUESSES + 1))
        );

        let guesses = vec!["CRANE"; NUM_GUESSES];
        assert!(
            parse_game(&json!({"id": 7, "guesses": guesses, "startTime": 0, "endTime": 0}))
                .is_ok()
        );
    }

    #[test]
    fn parse_rejects_malformed_guess() {
        assert!(matches!(
            parse_game(&json!({"id": 7, "guesses": ["CRANES"], "startTime": 0, "endTime": 0})),
            Err(RecordError::InvalidGuess { index: 0, .. })
        ));
    }

    #[test]
    fn parse_game_str_rejects_garbage() {
        assert_eq!(parse_game_str("not json"), Err(RecordError::NotAnObject));
        assert!(parse_game_str(r#"{"id":1,"guesses":[],"startTime":0,"endTime":0}"#).is_ok());
    }

    #[test]
    fn serialized_json_uses_camel_case() {
        let list = list();
        let game = GameState::start(5, false, &list, 42);
        let json = serde_json::to_value(serialize_game(&game)).unwrap();
        assert_eq!(
            json,
            json!({"id": 5, "guesses": [], "startTime": 42, "endTime": 42})
        );
    }

    #[test]
    fn roundtrip_in_progress_game() {
        let list = list();
        let dictionary = Dictionary::embedded();
        let mut game = GameState::start(300, false, &list, 1_000);
        let first = game.targets[20].clone();
        game.submit_word(first.text(), &dictionary, 2_000).unwrap();
        game.submit_word("CRANE", &dictionary, 3_000).unwrap();

        let text = serde_json::to_string(&serialize_game(&game)).unwrap();
        let restored = deserialize_game(&parse_game_str(&text).unwrap(), &list).unwrap();

        assert_eq!(restored, game);
        assert!(!restored.game_over);
        assert_eq!(restored.board_solved_at(20), Some(0));
    }

    #[test]
    fn roundtrip_won_game_is_over() {
        let list = list();
        let dictionary = Dictionary::embedded();
        let mut game = GameState::start(301, false, &list, 1_000);
        for target in game.targets.clone() {
            game.submit_word(target.text(), &dictionary, 5_000).unwrap();
        }
        assert!(game.game_over);

        let restored = deserialize_game(&serialize_game(&game), &list).unwrap();
        assert_eq!(restored, game);
        assert!(restored.is_won());
        assert_eq!(restored.end_time, 5_000);
    }

    #[test]
    fn roundtrip_game_out_of_guesses_is_over() {
        let list = list();
        let record = GameSerialized {
            id: 302,
            guesses: vec!["XXXXX".to_string(); NUM_GUESSES],
            start_time: 0,
            end_time: 10,
        };
        let restored = deserialize_game(&record, &list).unwrap();
        assert!(restored.game_over);
        assert!(!restored.is_won());
        assert_eq!(serialize_game(&restored), record);
    }
}
