use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::{
    wordle::{AsEmoji, Guess, Mark, Word, WORD_LENGTH},
    words_list::WordsList,
};

mod error;
pub use error::GuessError;

mod sessions;
pub use sessions::{PlayerId, Sessions};

pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// One player's game.
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    guesses: Vec<Guess>,
    status: Status,
}

impl GameSession {
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: Status::InProgress,
        }
    }

    pub fn random<R: Rng + ?Sized>(words: &WordsList, rng: &mut R) -> Self {
        Self::new(words.random_answer(rng))
    }

    /// Throws away whatever game was being played, finished or not.
    pub fn new_game(&mut self, answer: Word) {
        *self = Self::new(answer);
    }

    pub fn submit(&mut self, raw: &str, words: &WordsList) -> Result<GuessOutcome, GuessError> {
        let upper = raw.to_uppercase();

        let length = upper.chars().count();
        if length != WORD_LENGTH {
            return Err(GuessError::InvalidLength(length));
        }

        let word = words
            .get_word(&upper)
            .ok_or(GuessError::UnknownWord(upper))?;

        if self.is_over() {
            return Err(GuessError::GameAlreadyOver);
        }

        let guess = Guess::new(word, &self.answer);
        self.guesses.push(guess);

        if word == self.answer {
            self.status = Status::Won;
        } else if self.guesses.len() == MAX_GUESSES {
            self.status = Status::Lost;
        }

        debug!(%guess, %word, status = ?self.status, num_guesses = self.guesses.len());

        Ok(GuessOutcome {
            marks: *guess.marks(),
            is_over: self.is_over(),
            is_won: self.is_won(),
            answer: self.revealed_answer(),
        })
    }

    pub fn view(&self) -> GameView {
        GameView {
            guesses: self.guesses.clone(),
            is_over: self.is_over(),
            is_won: self.is_won(),
            answer: self.revealed_answer(),
        }
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub const fn is_won(&self) -> bool {
        self.status.is_won()
    }

    fn revealed_answer(&self) -> Option<Word> {
        self.is_over().then_some(self.answer)
    }
}

/// Reply to an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    #[serde(rename = "result")]
    pub marks: [Mark; WORD_LENGTH],
    #[serde(rename = "game_over")]
    pub is_over: bool,
    #[serde(rename = "won")]
    pub is_won: bool,
    /// Only present once the game is over.
    #[serde(rename = "target_word")]
    pub answer: Option<Word>,
}

/// Read-only snapshot of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub guesses: Vec<Guess>,
    #[serde(rename = "game_over")]
    pub is_over: bool,
    #[serde(rename = "won")]
    pub is_won: bool,
    #[serde(rename = "target_word")]
    pub answer: Option<Word>,
}

impl GameView {
    /// The best mark each guessed letter has earned so far, for colouring a
    /// keyboard.
    pub fn letter_hints(&self) -> BTreeMap<char, Mark> {
        let mut hints = BTreeMap::new();

        for (letter, mark) in self.guesses.iter().flat_map(Guess::iter) {
            hints
                .entry(letter)
                .and_modify(|best: &mut Mark| *best = (*best).max(mark))
                .or_insert(mark);
        }

        hints
    }

    /// Emoji grid of the finished game.
    pub fn share_grid(&self) -> Option<String> {
        self.is_over
            .then(|| self.guesses.as_slice().as_emoji().into_owned())
    }
}
