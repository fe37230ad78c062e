//! Scoring rules
//!
//! Pure transform from a game and an answer outcome to the next game state.
//! Nothing here touches storage or the question pool, so the rules can be
//! tested in isolation and applied under whatever lock the caller holds.

use crate::game::Game;

/// Applies one answer outcome to `game`
///
/// A correct answer extends the streak and raises the record when the
/// streak passes it. An incorrect answer resets the streak and costs a life;
/// losing the last life ends the game and clears the current question.
/// Inactive games are returned unchanged.
pub fn apply(mut game: Game, is_correct: bool) -> Game {
    if !game.is_active {
        return game;
    }

    if is_correct {
        game.combo = game.combo.saturating_add(1);
        game.record = game.record.max(game.combo);
    } else {
        game.combo = 0;
        game.lives = game.lives.saturating_sub(1);
        if game.lives == 0 {
            game.is_active = false;
            game.current_question = None;
        }
    }

    game
}
