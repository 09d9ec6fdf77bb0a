use thiserror::Error as ThisError;
use tracing::{error, warn};

use crate::{game::GuessError, words_list::WordsListError};

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Request(#[from] serde_json::Error),

    #[error("problem loading config: {0}")]
    Config(#[from] crate::config::Error),

    #[error("problem loading words: {0}")]
    Words(#[from] WordsListError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Player mistakes are warnings; anything else is an error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Guess(_) | Self::Request(_))
    }

    pub fn trace(&self) {
        if self.is_recoverable() {
            warn!(error = %self);
        } else {
            error!(error = %self);
        }
    }
}
