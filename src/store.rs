//! Session store
//!
//! Durable keyed storage holding at most one game per user. The game core
//! serializes all writes for a user itself, so a store only has to make
//! single `get` and `put` calls atomic. `MemoryStore` keeps everything in
//! concurrent maps.

use dashmap::{DashMap, DashSet};
use serde::Serialize;
use thiserror::Error;

use crate::{game::Game, user::UserId};

/// Errors reported by a session store
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The store could not be reached or failed internally
    #[error("{0}")]
    Backend(String),
}

/// Storage for one game per user
pub trait SessionStore {
    /// Checks whether `user_id` belongs to a known user
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn user_exists(&self, user_id: UserId) -> Result<bool, Error>;

    /// Loads the game of `user_id`, active or not
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn get(&self, user_id: UserId) -> Result<Option<Game>, Error>;

    /// Stores `game` as the game of `user_id`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable; the previous game must
    /// then be left untouched.
    fn put(&self, user_id: UserId, game: Game) -> Result<(), Error>;
}

/// An in-memory session store
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashSet<UserId>,
    games: DashMap<UserId, Game>,
}

impl MemoryStore {
    /// Creates an empty store with no registered users
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user so that games can be created for them
    ///
    /// Returns `false` if the user was already registered.
    pub fn register_user(&self, user_id: UserId) -> bool {
        self.users.insert(user_id)
    }

    /// Returns the number of stored games
    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}

impl SessionStore for MemoryStore {
    fn user_exists(&self, user_id: UserId) -> Result<bool, Error> {
        Ok(self.users.contains(&user_id))
    }

    fn get(&self, user_id: UserId) -> Result<Option<Game>, Error> {
        Ok(self.games.get(&user_id).map(|entry| entry.value().clone()))
    }

    fn put(&self, user_id: UserId, game: Game) -> Result<(), Error> {
        self.games.insert(user_id, game);
        Ok(())
    }
}
