//! Question source
//!
//! The game core only needs three things from wherever movies live: pick a
//! movie the user has not seen yet, check an answer against a movie, and
//! describe a movie once it is retired. `MoviePool` is an in-memory
//! implementation backed by a fixed list of movies.

use std::collections::{HashMap, HashSet};

use garde::Validate;
use itertools::Itertools;
use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;

use crate::movie::{Movie, MovieId, MovieMetadata};

/// Errors reported by a question source
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested movie is not part of the source
    #[error("movie {0} is not available")]
    UnknownMovie(MovieId),
    /// The source could not be reached or failed internally
    #[error("{0}")]
    Backend(String),
}

/// Supplier of quiz questions
///
/// `check` and `describe` must agree on a movie for as long as a game may
/// reference it.
pub trait QuestionSource {
    /// Picks a movie uniformly at random among those not in `excluding`
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable. Returns `Ok(None)` when
    /// every movie is excluded.
    fn pick_unseen(&self, excluding: &HashSet<MovieId>) -> Result<Option<MovieId>, Error>;

    /// Checks whether `answer` identifies the movie `question`
    ///
    /// # Errors
    ///
    /// Returns an error if the movie is unknown or the source is unavailable.
    fn check(&self, question: MovieId, answer: &str) -> Result<bool, Error>;

    /// Returns the public metadata of the movie `question`
    ///
    /// # Errors
    ///
    /// Returns an error if the movie is unknown or the source is unavailable.
    fn describe(&self, question: MovieId) -> Result<MovieMetadata, Error>;
}

/// An in-memory pool of movies
#[derive(Debug)]
pub struct MoviePool {
    movies: HashMap<MovieId, Movie>,
    /// Sorted so that a seeded generator yields reproducible picks
    ids: Vec<MovieId>,
    rng: Mutex<fastrand::Rng>,
}

impl MoviePool {
    /// Creates a pool from `movies` with a randomly seeded generator
    ///
    /// Movies sharing an id replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `garde::Report` if any movie fails validation.
    pub fn new<I: IntoIterator<Item = Movie>>(movies: I) -> Result<Self, garde::Report> {
        Self::with_rng(movies, fastrand::Rng::new())
    }

    /// Creates a pool that draws from the given generator
    ///
    /// # Errors
    ///
    /// Returns `garde::Report` if any movie fails validation.
    pub fn with_rng<I: IntoIterator<Item = Movie>>(
        movies: I,
        rng: fastrand::Rng,
    ) -> Result<Self, garde::Report> {
        let mut by_id = HashMap::new();
        for movie in movies {
            movie.validate()?;
            by_id.insert(movie.id(), movie);
        }
        let ids = by_id.keys().copied().sorted().collect_vec();

        Ok(Self {
            movies: by_id,
            ids,
            rng: Mutex::new(rng),
        })
    }

    /// Returns the number of movies in the pool
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks if the pool contains no movies
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn movie(&self, id: MovieId) -> Result<&Movie, Error> {
        self.movies.get(&id).ok_or(Error::UnknownMovie(id))
    }
}

impl QuestionSource for MoviePool {
    fn pick_unseen(&self, excluding: &HashSet<MovieId>) -> Result<Option<MovieId>, Error> {
        let candidates = self
            .ids
            .iter()
            .filter(|id| !excluding.contains(*id))
            .collect_vec();

        if candidates.is_empty() {
            return Ok(None);
        }

        let index = self.rng.lock().usize(..candidates.len());
        Ok(Some(*candidates[index]))
    }

    fn check(&self, question: MovieId, answer: &str) -> Result<bool, Error> {
        Ok(self.movie(question)?.is_correct_answer(answer))
    }

    fn describe(&self, question: MovieId) -> Result<MovieMetadata, Error> {
        Ok(self.movie(question)?.metadata().clone())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie::new(MovieMetadata {
            title: title.to_string(),
            poster_path: format!("/{id}.jpg"),
            release_date: "2000-01-01".to_string(),
            id: MovieId::new(id),
        })
    }

    fn pool() -> MoviePool {
        MoviePool::with_rng(
            [movie(1, "Alien"), movie(2, "Heat"), movie(3, "Up")],
            fastrand::Rng::with_seed(7),
        )
        .unwrap()
    }

    #[test]
    fn test_pick_unseen_respects_exclusion() {
        let pool = pool();
        let excluding: HashSet<_> = [MovieId::new(1), MovieId::new(3)].into();

        for _ in 0..50 {
            assert_eq!(pool.pick_unseen(&excluding), Ok(Some(MovieId::new(2))));
        }
    }

    #[test]
    fn test_pick_unseen_exhausted() {
        let pool = pool();
        let excluding: HashSet<_> = (1..=3).map(MovieId::new).collect();

        assert_eq!(pool.pick_unseen(&excluding), Ok(None));
    }

    #[test]
    fn test_pick_unseen_covers_pool() {
        let pool = pool();
        let picked: HashSet<_> = (0..200)
            .filter_map(|_| pool.pick_unseen(&HashSet::new()).unwrap())
            .collect();

        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_empty_pool() {
        let pool = MoviePool::new([]).unwrap();

        assert!(pool.is_empty());
        assert_eq!(pool.pick_unseen(&HashSet::new()), Ok(None));
    }

    #[test]
    fn test_check_and_describe() {
        let pool = pool();

        assert_eq!(pool.check(MovieId::new(2), " heat "), Ok(true));
        assert_eq!(pool.check(MovieId::new(2), "Alien"), Ok(false));
        assert_eq!(pool.describe(MovieId::new(1)).unwrap().title, "Alien");
    }

    #[test]
    fn test_unknown_movie() {
        let pool = pool();

        assert_eq!(
            pool.check(MovieId::new(99), "Alien"),
            Err(Error::UnknownMovie(MovieId::new(99)))
        );
        assert!(pool.describe(MovieId::new(99)).is_err());
    }

    #[test]
    fn test_duplicate_ids_replaced() {
        let pool = MoviePool::new([movie(1, "Alien"), movie(1, "Aliens")]).unwrap();

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.describe(MovieId::new(1)).unwrap().title, "Aliens");
    }

    #[test]
    fn test_invalid_movie_rejected() {
        assert!(MoviePool::new([movie(1, "")]).is_err());
    }
}
