//! Settings command
//!
//! Shows the stored settings, optionally changing one first.

use crate::storage::{Settings, Storage};

/// Load settings and apply an optional change, saving it
///
/// # Errors
///
/// Returns an error if the key is unknown or the settings cannot be saved.
pub fn update_settings(storage: &Storage, change: Option<(&str, bool)>) -> Result<Settings, String> {
    let mut settings = storage.load_settings();

    if let Some((key, value)) = change {
        if !settings.set(key, value) {
            return Err(format!(
                "Unknown setting '{key}'. Known settings: {}",
                Settings::KEYS.join(", ")
            ));
        }
        storage
            .save_settings(&settings)
            .map_err(|e| e.to_string())?;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        (dir, storage)
    }

    #[test]
    fn change_is_persisted() {
        let (_dir, storage) = temp_storage();
        let settings = update_settings(&storage, Some(("showTimer", true))).unwrap();
        assert!(settings.show_timer);
        assert!(storage.load_settings().show_timer);
    }

    #[test]
    fn show_only_leaves_defaults() {
        let (_dir, storage) = temp_storage();
        assert_eq!(update_settings(&storage, None).unwrap(), Settings::default());
        assert_eq!(storage.read(crate::storage::SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let (_dir, storage) = temp_storage();
        let err = update_settings(&storage, Some(("volume", true))).unwrap_err();
        assert!(err.contains("volume"));
    }
}
