//! # Cinequiz Game Library
//!
//! This library provides the game-session core of a movie trivia game. Each
//! user plays at most one game at a time, answering "which movie is this?"
//! questions until they run out of lives. The crate handles game creation,
//! answer evaluation, scoring, and question selection, while storage and the
//! movie catalogue are supplied by the caller through the `SessionStore` and
//! `QuestionSource` traits.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod manager;
pub mod movie;
pub mod scoring;
pub mod source;
pub mod store;
pub mod user;

pub use config::GameConfig;
pub use error::Error;
pub use game::{AnswerReview, Game, GameView};
pub use manager::GameSessionManager;
pub use movie::{Movie, MovieId, MovieMetadata};
pub use source::{MoviePool, QuestionSource};
pub use store::{MemoryStore, SessionStore};
pub use user::UserId;
