//! Movies used as quiz questions
//!
//! A question asks the player to identify a movie. The movie's metadata is
//! what gets revealed after a wrong answer, while the accepted titles decide
//! which answers count as correct.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Identifier of a movie in the question pool
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    /// Wraps a raw numeric identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric identifier
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Public description of a movie, shown once the question is retired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieMetadata {
    /// The canonical title
    #[garde(length(min = 1, max = constants::movie::MAX_TITLE_LENGTH))]
    pub title: String,
    /// Relative path of the poster image
    #[garde(length(max = constants::movie::MAX_POSTER_PATH_LENGTH))]
    pub poster_path: String,
    /// Release date as published, e.g. `2003-07-09`
    #[garde(skip)]
    pub release_date: String,
    /// Identifier of the movie
    #[garde(skip)]
    pub id: MovieId,
}

/// A movie together with every title accepted as a correct answer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[garde(dive)]
    metadata: MovieMetadata,
    /// Alternative titles, e.g. translations or common short forms
    #[serde(default)]
    #[garde(
        length(max = constants::movie::MAX_ALIAS_COUNT),
        inner(length(min = 1, max = constants::movie::MAX_TITLE_LENGTH))
    )]
    aliases: Vec<String>,
}

impl Movie {
    /// Creates a movie accepting only its canonical title
    pub fn new(metadata: MovieMetadata) -> Self {
        Self {
            metadata,
            aliases: Vec::new(),
        }
    }

    /// Adds alternative titles that also count as correct
    #[must_use]
    pub fn with_aliases<I: IntoIterator<Item = String>>(mut self, aliases: I) -> Self {
        self.aliases.extend(aliases);
        self
    }

    /// Returns the identifier of this movie
    pub fn id(&self) -> MovieId {
        self.metadata.id
    }

    /// Returns the public metadata of this movie
    pub fn metadata(&self) -> &MovieMetadata {
        &self.metadata
    }

    /// Checks whether `answer` names this movie
    ///
    /// Titles and the answer are trimmed and compared case-insensitively.
    pub fn is_correct_answer(&self, answer: &str) -> bool {
        let answer = clean_answer(answer);
        std::iter::once(&self.metadata.title)
            .chain(&self.aliases)
            .any(|title| clean_answer(title) == answer)
    }
}

/// Normalizes an answer string for comparison
fn clean_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn pirates() -> Movie {
        Movie::new(MovieMetadata {
            title: "Pirates of the Caribbean: The Curse of the Black Pearl".to_string(),
            poster_path: "/z8onk7LV9Mmw6zKz4hT6pzzvmvl.jpg".to_string(),
            release_date: "2003-07-09".to_string(),
            id: MovieId::new(22),
        })
    }

    #[test]
    fn test_exact_title_is_correct() {
        let movie = pirates();
        assert!(movie.is_correct_answer("Pirates of the Caribbean: The Curse of the Black Pearl"));
    }

    #[test]
    fn test_case_and_whitespace_ignored() {
        let movie = pirates();
        assert!(movie.is_correct_answer("  pirates of the caribbean: the curse of the black pearl "));
    }

    #[test]
    fn test_partial_title_is_incorrect() {
        let movie = pirates();
        assert!(!movie.is_correct_answer("Pirates of the Caribbean"));
        assert!(!movie.is_correct_answer("Titanic"));
    }

    #[test]
    fn test_alias_is_correct() {
        let movie = pirates().with_aliases(["Pirates of the Caribbean".to_string()]);
        assert!(movie.is_correct_answer("pirates of the caribbean"));
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let json = serde_json::to_value(pirates().metadata()).unwrap();
        assert_eq!(json["posterPath"], "/z8onk7LV9Mmw6zKz4hT6pzzvmvl.jpg");
        assert_eq!(json["releaseDate"], "2003-07-09");
        assert_eq!(json["id"], 22);
    }

    #[test]
    fn test_validation() {
        assert!(pirates().validate().is_ok());

        let mut untitled = pirates();
        untitled.metadata.title = String::new();
        assert!(untitled.validate().is_err());

        let too_many = pirates().with_aliases(
            (0..=constants::movie::MAX_ALIAS_COUNT).map(|i| format!("alias {i}")),
        );
        assert!(too_many.validate().is_err());
    }
}
