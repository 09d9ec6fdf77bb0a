use thiserror::Error;

use crate::wordle::WORD_LENGTH;

/// Reasons a guess is turned away. None of them change the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be {} letters long (got {0})", WORD_LENGTH)]
    InvalidLength(usize),

    #[error("`{0}` is not a valid word")]
    UnknownWord(String),

    #[error("game is already over")]
    GameAlreadyOver,
}
