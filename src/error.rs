//! Errors returned by the game session manager
//!
//! Every failure aborts the operation before anything is persisted. The
//! variants split into client mistakes and collaborator faults so that a
//! transport layer can pick a status without inspecting messages.

use serde::Serialize;
use thiserror::Error;

use crate::{source, store};

/// Errors that can occur while creating a game or answering a question
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced user does not exist
    #[error("The user was not found in database.")]
    EntityNotFound,
    /// A new game was requested while one is still active
    #[error("Cannot create a new game if there is one active.")]
    GameAlreadyActive,
    /// An answer was submitted without an active game
    #[error("There is no active game.")]
    NoActiveGame,
    /// A required request field was empty or absent
    #[error("Required field: {field}.")]
    MissingAnswer {
        /// Name of the missing field
        field: &'static str,
    },
    /// The answer exceeds the maximum answer length
    #[error("Answer is longer than {max} characters.")]
    AnswerTooLong {
        /// Maximum accepted length
        max: usize,
    },
    /// The session store failed
    #[error("Unsuccessful database operation: {0}")]
    StoreUnavailable(#[from] store::Error),
    /// The question source failed
    #[error("Unable to load questions: {0}")]
    SourceUnavailable(#[from] source::Error),
    /// The question source has no movies at all
    #[error("There are no questions available.")]
    NoQuestions,
    /// A configuration value is out of bounds
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns `true` if the caller caused the failure
    ///
    /// Everything else is a fault of the store, the question source, or the
    /// deployment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EntityNotFound
                | Self::GameAlreadyActive
                | Self::NoActiveGame
                | Self::MissingAnswer { .. }
                | Self::AnswerTooLong { .. }
        )
    }
}
