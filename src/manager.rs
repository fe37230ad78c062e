//! Game session manager
//!
//! Orchestrates game creation and answer submission. Each user owns at most
//! one game; every operation on a user's game runs as a single
//! read-modify-write under that user's lock, so racing requests for the same
//! user are applied one after the other and never overwrite each other.
//! Requests for different users take different locks and never wait on each
//! other.

use std::{collections::HashSet, sync::Arc};

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::{
    Error,
    config::GameConfig,
    constants,
    game::{AnswerReview, Game, GameView},
    movie::MovieId,
    scoring,
    source::QuestionSource,
    store::SessionStore,
    user::UserId,
};

/// Per-user update locks
type UserLocks = DashMap<UserId, Arc<Mutex<()>>>;

/// Creates games and applies answers on behalf of users
#[derive(Debug)]
pub struct GameSessionManager<Q, S> {
    config: GameConfig,
    source: Q,
    store: S,
    locks: UserLocks,
}

impl<Q: QuestionSource, S: SessionStore> GameSessionManager<Q, S> {
    /// Creates a manager using the default configuration
    pub fn new(source: Q, store: S) -> Self {
        Self {
            config: GameConfig::default(),
            source,
            store,
            locks: DashMap::new(),
        }
    }

    /// Creates a manager with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: GameConfig, source: Q, store: S) -> Result<Self, Error> {
        Ok(Self {
            config: config.checked()?,
            ..Self::new(source, store)
        })
    }

    /// Returns the active configuration
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the question source
    pub fn source(&self) -> &Q {
        &self.source
    }

    /// Returns the session store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Starts a new game for `user_id`
    ///
    /// An inactive game left from an earlier round is replaced.
    ///
    /// # Errors
    ///
    /// * `Error::EntityNotFound` - the user does not exist
    /// * `Error::GameAlreadyActive` - the user is still playing
    /// * `Error::NoQuestions` - the question source is empty
    /// * `Error::StoreUnavailable` / `Error::SourceUnavailable` - a
    ///   collaborator failed; nothing was persisted
    #[instrument(skip_all, fields(user = %user_id))]
    pub fn create_game(&self, user_id: UserId) -> Result<GameView, Error> {
        log_failure(self.with_user_lock(user_id, || self.create_game_locked(user_id)))
    }

    /// Applies `answer` to the current question of `user_id`'s game
    ///
    /// The answer is validated before any state is read, so a rejected
    /// answer has no side effects.
    ///
    /// # Errors
    ///
    /// * `Error::MissingAnswer` - the answer is empty
    /// * `Error::AnswerTooLong` - the answer exceeds the maximum length
    /// * `Error::EntityNotFound` - the user does not exist
    /// * `Error::NoActiveGame` - the user has no game in progress
    /// * `Error::NoQuestions` - the question source is empty
    /// * `Error::StoreUnavailable` / `Error::SourceUnavailable` - a
    ///   collaborator failed; the stored game is unchanged
    #[instrument(skip_all, fields(user = %user_id))]
    pub fn submit_answer(&self, user_id: UserId, answer: &str) -> Result<AnswerReview, Error> {
        if answer.is_empty() {
            return Err(Error::MissingAnswer { field: "answer" });
        }
        if answer.chars().count() > constants::answer_text::MAX_LENGTH {
            return Err(Error::AnswerTooLong {
                max: constants::answer_text::MAX_LENGTH,
            });
        }

        log_failure(self.with_user_lock(user_id, || {
            self.submit_answer_locked(user_id, answer)
        }))
    }

    /// Returns the stored game of `user_id`, if any, active or not
    ///
    /// # Errors
    ///
    /// * `Error::EntityNotFound` - the user does not exist
    /// * `Error::StoreUnavailable` - the store failed
    pub fn current_game(&self, user_id: UserId) -> Result<Option<GameView>, Error> {
        self.ensure_user(user_id)?;
        Ok(self.store.get(user_id)?.map(|game| game.view()))
    }

    fn create_game_locked(&self, user_id: UserId) -> Result<GameView, Error> {
        self.ensure_user(user_id)?;

        if self.store.get(user_id)?.is_some_and(|game| game.is_active()) {
            return Err(Error::GameAlreadyActive);
        }

        let first_question = self.next_question(&mut HashSet::new())?;
        let game = Game::new(user_id, self.config.initial_lives, first_question);
        let view = game.view();

        self.store.put(user_id, game)?;
        info!(lives = view.lives, "game created");

        Ok(view)
    }

    fn submit_answer_locked(&self, user_id: UserId, answer: &str) -> Result<AnswerReview, Error> {
        self.ensure_user(user_id)?;

        let mut game = self
            .store
            .get(user_id)?
            .filter(Game::is_active)
            .ok_or(Error::NoActiveGame)?;
        let question = game.current_question.ok_or(Error::NoActiveGame)?;

        let is_correct = self.source.check(question, answer)?;
        let revealed_question = if is_correct {
            None
        } else {
            Some(self.source.describe(question)?)
        };

        game.seen_questions.insert(question);
        let mut game = scoring::apply(game, is_correct);

        if game.is_active {
            let next = self.next_question(&mut game.seen_questions)?;
            game.current_question = Some(next);
        }

        let view = game.view();
        self.store.put(user_id, game)?;

        debug!(is_correct, combo = view.combo, lives = view.lives, "answer applied");
        if !view.is_active {
            info!(record = view.record, "game over");
        }

        Ok(AnswerReview {
            is_correct,
            game: view,
            revealed_question,
        })
    }

    /// Picks the next question, starting a new cycle once every movie was seen
    ///
    /// Clearing `seen` on exhaustion keeps the current question out of the
    /// seen set while letting a long session repeat movies.
    fn next_question(&self, seen: &mut HashSet<MovieId>) -> Result<MovieId, Error> {
        if let Some(question) = self.source.pick_unseen(seen)? {
            return Ok(question);
        }
        if seen.is_empty() {
            return Err(Error::NoQuestions);
        }

        debug!(seen = seen.len(), "question pool exhausted, starting a new cycle");
        seen.clear();
        self.source.pick_unseen(seen)?.ok_or(Error::NoQuestions)
    }

    fn ensure_user(&self, user_id: UserId) -> Result<(), Error> {
        if self.store.user_exists(user_id)? {
            Ok(())
        } else {
            Err(Error::EntityNotFound)
        }
    }

    /// Runs `operation` while holding the update lock of `user_id`
    ///
    /// The lock entry is dropped again once no other caller holds a clone of
    /// it, so the table only holds users with an operation in flight.
    fn with_user_lock<T>(&self, user_id: UserId, operation: impl FnOnce() -> T) -> T {
        let lock = self
            .locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let result = {
            let _guard = lock.lock();
            operation()
        };

        drop(lock);
        self.locks
            .remove_if(&user_id, |_, lock| Arc::strong_count(lock) == 1);

        result
    }
}

/// Logs collaborator faults; client mistakes are expected and stay quiet
fn log_failure<T>(result: Result<T, Error>) -> Result<T, Error> {
    if let Err(error) = &result {
        if !error.is_client_error() {
            warn!(%error, "game operation failed");
        }
    }
    result
}
