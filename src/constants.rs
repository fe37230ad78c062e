//! Configuration constants for the movie quiz
//!
//! This module contains the limits and defaults used throughout the game
//! session core so that every component agrees on the same boundaries.

/// Game session constants
pub mod game {
    /// Number of lives a new game starts with
    pub const INITIAL_LIVES: u32 = 2;
    /// Largest configurable number of starting lives
    pub const MAX_LIVES: u32 = 10;
}

/// Movie metadata constants
pub mod movie {
    /// Maximum length of a movie title in characters
    pub const MAX_TITLE_LENGTH: usize = 200;
    /// Maximum length of a poster path
    pub const MAX_POSTER_PATH_LENGTH: usize = 200;
    /// Maximum number of alternative titles accepted for one movie
    pub const MAX_ALIAS_COUNT: usize = 16;
}

/// Answer text configuration constants
pub mod answer_text {
    /// Maximum length of answer text in characters
    pub const MAX_LENGTH: usize = 200;
}
