//! Game session configuration
//!
//! Runtime settings for the game session manager. The configuration can be
//! deserialized from any serde format and is validated with `garde` before a
//! manager accepts it.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::game::{INITIAL_LIVES, MAX_LIVES};

/// Settings applied to every game created by a manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Lives a new game starts with; also the upper bound on lives
    #[garde(range(min = 1, max = MAX_LIVES))]
    pub initial_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl GameConfig {
    /// Parses a configuration from a JSON document and validates it
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the document is malformed or a value
    /// is out of bounds.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| crate::Error::InvalidConfig(e.to_string()))?;
        config.checked()
    }

    /// Validates the configuration, returning it unchanged on success
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` describing the first violated bound.
    pub fn checked(self) -> Result<Self, crate::Error> {
        self.validate()
            .map_err(|report| crate::Error::InvalidConfig(report.to_string()))?;
        Ok(self)
    }
}
