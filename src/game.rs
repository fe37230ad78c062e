//! Per-user game record and its public projections
//!
//! A `Game` is the mutable state of one user's round of play: remaining
//! lives, the current streak, the best streak so far, and which movie the
//! user has to identify next. Callers never see the current question; they
//! get a `GameView` or an `AnswerReview` instead.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    movie::{MovieId, MovieMetadata},
    user::UserId,
};

/// The stored state of a user's game
///
/// Invariants upheld by every constructor and by `scoring::apply`:
/// `combo <= record`, and `current_question` is `Some` exactly when the game
/// is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub(crate) user_id: UserId,
    pub(crate) lives: u32,
    pub(crate) combo: u32,
    pub(crate) record: u32,
    pub(crate) is_active: bool,
    pub(crate) current_question: Option<MovieId>,
    pub(crate) seen_questions: HashSet<MovieId>,
}

impl Game {
    /// Starts a fresh game for `user_id` on `first_question`
    pub fn new(user_id: UserId, lives: u32, first_question: MovieId) -> Self {
        Self {
            user_id,
            lives,
            combo: 0,
            record: 0,
            is_active: true,
            current_question: Some(first_question),
            seen_questions: HashSet::new(),
        }
    }

    /// Returns the owner of this game
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the remaining lives
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Returns the current streak of correct answers
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Returns the best streak reached in this game
    pub fn record(&self) -> u32 {
        self.record
    }

    /// Returns whether the game still accepts answers
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the movie the user currently has to identify
    pub fn current_question(&self) -> Option<MovieId> {
        self.current_question
    }

    /// Returns the movies already answered in the current selection cycle
    pub fn seen_questions(&self) -> &HashSet<MovieId> {
        &self.seen_questions
    }

    /// Returns the caller-facing projection of this game
    pub fn view(&self) -> GameView {
        GameView {
            lives: self.lives,
            record: self.record,
            combo: self.combo,
            is_active: self.is_active,
        }
    }
}

/// Public projection of a game; never exposes the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Remaining lives
    pub lives: u32,
    /// Best streak reached in this game
    pub record: u32,
    /// Current streak of correct answers
    pub combo: u32,
    /// Whether the game still accepts answers
    pub is_active: bool,
}

/// Outcome of a submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReview {
    /// Whether the answer identified the movie
    pub is_correct: bool,
    /// The game after the answer was applied
    pub game: GameView,
    /// The retired movie, present only after an incorrect answer
    #[serde(rename = "movie", default, skip_serializing_if = "Option::is_none")]
    pub revealed_question: Option<MovieMetadata>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let user = UserId::new();
        let game = Game::new(user, 2, MovieId::new(7));

        assert_eq!(game.user_id(), user);
        assert_eq!(
            game.view(),
            GameView {
                lives: 2,
                record: 0,
                combo: 0,
                is_active: true,
            }
        );
        assert_eq!(game.current_question(), Some(MovieId::new(7)));
        assert!(game.seen_questions().is_empty());
    }

    #[test]
    fn test_view_serialization() {
        let game = Game::new(UserId::new(), 2, MovieId::new(7));
        let json = serde_json::to_value(game.view()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"lives": 2, "record": 0, "combo": 0, "isActive": true})
        );
    }

    #[test]
    fn test_review_omits_missing_movie() {
        let review = AnswerReview {
            is_correct: true,
            game: GameView {
                lives: 2,
                record: 34,
                combo: 18,
                is_active: true,
            },
            revealed_question: None,
        };
        let json = serde_json::to_value(&review).unwrap();

        assert_eq!(json["isCorrect"], true);
        assert_eq!(json["game"]["combo"], 18);
        assert!(json.get("movie").is_none());
    }

    #[test]
    fn test_review_includes_movie() {
        let review = AnswerReview {
            is_correct: false,
            game: GameView {
                lives: 1,
                record: 34,
                combo: 0,
                is_active: true,
            },
            revealed_question: Some(MovieMetadata {
                title: "Alien".to_string(),
                poster_path: "/alien.jpg".to_string(),
                release_date: "1979-05-25".to_string(),
                id: MovieId::new(348),
            }),
        };
        let json = serde_json::to_value(&review).unwrap();

        assert_eq!(json["movie"]["title"], "Alien");
        assert_eq!(json["movie"]["id"], 348);
    }
}
