//! Persistence of games and settings
//!
//! A small file-backed key-value store: each key is a JSON file in the data
//! directory. Loading never fails outright; unreadable or invalid data falls back
//! to a fresh game or to default settings.

mod record;
mod settings;

pub use record::{
    GameSerialized, RecordError, deserialize_game, parse_game, parse_game_str, serialize_game,
};
pub use settings::Settings;

use crate::puzzle::{GameState, TargetList};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key of the saved daily game
pub const GAME_KEY: &str = "duotrigordle-state";

/// Key of the saved settings
pub const SETTINGS_KEY: &str = "duotrigordle-settings";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DUOTRIGORDLE_DATA_DIR";

/// Error reading or writing stored data
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Storage I/O error: {e}"),
            Self::Json(e) => write!(f, "Storage encoding error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// File-backed key-value store
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory
    ///
    /// Uses `DUOTRIGORDLE_DATA_DIR` when set, otherwise `duotrigordle` under the
    /// platform data directory.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        dirs::data_dir().map(|d| d.join("duotrigordle"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the raw text stored under a key
    ///
    /// # Errors
    /// Returns `StorageError::Io` for any I/O failure other than a missing key.
    pub fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Store text under a key, creating the data directory if needed
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the directory or file cannot be written.
    pub fn write(&self, key: &str, text: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), text)?;
        Ok(())
    }

    /// Load the saved game for today, or start a fresh one
    ///
    /// A saved game for another day, or one that fails validation, is discarded.
    #[must_use]
    pub fn load_game(&self, todays_id: i64, targets: &TargetList, now: i64) -> GameState {
        match self.read_game(targets) {
            Ok(Some(game)) if game.id == todays_id => {
                log::info!("Resuming puzzle {todays_id} with {} guesses", game.guesses.len());
                return game;
            }
            Ok(Some(game)) => {
                log::info!("Saved game is for puzzle {}, starting {todays_id}", game.id);
            }
            Ok(None) => log::debug!("No saved game found"),
            Err(e) => log::warn!("Discarding saved game: {e}"),
        }
        GameState::start(todays_id, false, targets, now)
    }

    fn read_game(&self, targets: &TargetList) -> Result<Option<GameState>, Box<dyn std::error::Error>> {
        let Some(text) = self.read(GAME_KEY)? else {
            return Ok(None);
        };
        let record = parse_game_str(&text)?;
        Ok(Some(deserialize_game(&record, targets)?))
    }

    /// Save a daily game; practice games are not stored
    ///
    /// # Errors
    /// Returns `StorageError` if the record cannot be encoded or written.
    pub fn save_game(&self, game: &GameState) -> Result<(), StorageError> {
        if game.practice {
            log::debug!("Not saving practice game {}", game.id);
            return Ok(());
        }
        let text = serde_json::to_string(&serialize_game(game))?;
        self.write(GAME_KEY, &text)?;
        log::info!("Saved puzzle {} to {}", game.id, self.path_for(GAME_KEY).display());
        Ok(())
    }

    /// Load settings, merging whatever is stored into the defaults
    #[must_use]
    pub fn load_settings(&self) -> Settings {
        let mut settings = Settings::default();
        match self.read(SETTINGS_KEY) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(value) => {
                    settings.merge(&value);
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring unreadable settings: {e}"),
        }
        settings
    }

    /// Save settings
    ///
    /// # Errors
    /// Returns `StorageError` if the settings cannot be encoded or written.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        let text = serde_json::to_string(settings)?;
        self.write(SETTINGS_KEY, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use tempfile::TempDir;

    /// Storage in a fresh directory, removed when the guard drops
    fn temp_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        (dir, storage)
    }

    #[test]
    fn missing_game_starts_fresh() {
        let (_dir, storage) = temp_storage();
        let list = TargetList::embedded().unwrap();
        let game = storage.load_game(40, &list, 7);
        assert_eq!(game, GameState::start(40, false, &list, 7));
    }

    #[test]
    fn saved_game_resumes_same_day() {
        let (_dir, storage) = temp_storage();
        let list = TargetList::embedded().unwrap();
        let dictionary = Dictionary::embedded();

        let mut game = GameState::start(41, false, &list, 100);
        game.submit_word("CRANE", &dictionary, 200).unwrap();
        storage.save_game(&game).unwrap();

        assert_eq!(storage.load_game(41, &list, 999), game);
    }

    #[test]
    fn saved_game_for_other_day_is_replaced() {
        let (_dir, storage) = temp_storage();
        let list = TargetList::embedded().unwrap();
        storage
            .save_game(&GameState::start(41, false, &list, 100))
            .unwrap();

        let game = storage.load_game(42, &list, 500);
        assert_eq!(game.id, 42);
        assert_eq!(game.start_time, 500);
    }

    #[test]
    fn corrupt_game_starts_fresh() {
        let (_dir, storage) = temp_storage();
        let list = TargetList::embedded().unwrap();
        storage.write(GAME_KEY, r#"{"id": 43, "guesses": 5}"#).unwrap();

        let game = storage.load_game(43, &list, 1);
        assert!(game.guesses.is_empty());
        assert_eq!(game.start_time, 1);
    }

    #[test]
    fn practice_games_are_not_saved() {
        let (_dir, storage) = temp_storage();
        let list = TargetList::embedded().unwrap();
        storage
            .save_game(&GameState::start(44, true, &list, 1))
            .unwrap();
        assert_eq!(storage.read(GAME_KEY).unwrap(), None);
    }

    #[test]
    fn settings_roundtrip_and_fallback() {
        let (_dir, storage) = temp_storage();
        assert_eq!(storage.load_settings(), Settings::default());

        let settings = Settings {
            wide_mode: true,
            ..Settings::default()
        };
        storage.save_settings(&settings).unwrap();
        assert_eq!(storage.load_settings(), settings);

        storage.write(SETTINGS_KEY, "{{{").unwrap();
        assert_eq!(storage.load_settings(), Settings::default());
    }

    #[test]
    fn missing_directory_is_created_on_write() {
        let (dir, _) = temp_storage();
        let storage = Storage::new(dir.path().join("nested").join("data"));
        assert_eq!(storage.read(GAME_KEY).unwrap(), None);
        storage.write(GAME_KEY, "{}").unwrap();
        assert_eq!(storage.read(GAME_KEY).unwrap().as_deref(), Some("{}"));
    }
}
