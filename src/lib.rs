#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod game;
pub mod logging;
pub mod wordle;
pub mod words_list;

pub use config::Config;
pub use errors::Error;
pub use game::{GameSession, GameView, GuessError, GuessOutcome, PlayerId, Sessions, Status};
pub use wordle::{Guess, Mark, Word};
pub use words_list::{WordsList, WordsListError};
