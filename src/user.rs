//! Player identifiers
//!
//! Every game belongs to exactly one user. The identifier is opaque to the
//! game core; it is only used as the key into the session store and the
//! per-user lock table.

use std::{fmt::Display, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use uuid::Uuid;

/// A unique identifier for a user owning a game
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub struct UserId(Uuid);

impl UserId {
    /// Generates an identifier for a user not yet known to any store
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    /// Reads a user id in the hyphenated form it is logged and stored in
    ///
    /// # Errors
    ///
    /// Fails with `uuid::Error` when the text is not a UUID, e.g. a token
    /// subject from another identity provider.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}
