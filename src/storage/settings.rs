//! Player settings
//!
//! Stored settings are merged field by field into the defaults, so a record
//! written by an older or newer version still loads everything it can.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub color_blind_mode: bool,
    pub show_timer: bool,
    pub wide_mode: bool,
    pub hide_completed_boards: bool,
    pub animate_hiding: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_blind_mode: false,
            show_timer: false,
            wide_mode: false,
            hide_completed_boards: false,
            animate_hiding: true,
        }
    }
}

impl Settings {
    /// Stored names of every setting
    pub const KEYS: [&'static str; 5] = [
        "colorBlindMode",
        "showTimer",
        "wideMode",
        "hideCompletedBoards",
        "animateHiding",
    ];

    fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Merge a stored settings value into these settings
    ///
    /// Fields that are unknown or hold the wrong type are skipped. Returns the
    /// number of fields applied.
    pub fn merge(&mut self, stored: &Value) -> usize {
        let Value::Object(stored) = stored else {
            log::warn!("Ignoring stored settings: not a JSON object");
            return 0;
        };

        let mut merged = self.to_map();
        let mut applied = 0;
        for (key, value) in stored {
            if !merged.contains_key(key) {
                log::debug!("Ignoring unknown setting '{key}'");
                continue;
            }
            let mut candidate = merged.clone();
            candidate.insert(key.clone(), value.clone());
            match serde_json::from_value::<Self>(Value::Object(candidate.clone())) {
                Ok(_) => {
                    merged = candidate;
                    applied += 1;
                }
                Err(e) => log::warn!("Ignoring stored setting '{key}': {e}"),
            }
        }

        if let Ok(settings) = serde_json::from_value(Value::Object(merged)) {
            *self = settings;
        }
        applied
    }

    /// Change one setting by its stored name
    ///
    /// Returns false if no setting has that name.
    pub fn set(&mut self, key: &str, value: bool) -> bool {
        if !Self::KEYS.contains(&key) {
            return false;
        }
        let mut update = Map::new();
        update.insert(key.to_string(), Value::Bool(value));
        self.merge(&Value::Object(update)) == 1
    }

    /// Every setting with its stored name, in a stable order
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        let map = self.to_map();
        Self::KEYS
            .iter()
            .map(|&key| (key, map.get(key).and_then(Value::as_bool).unwrap_or(false)))
            .collect()
    }
}
