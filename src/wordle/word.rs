use std::{collections::HashMap, ops::Index, slice::Iter, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use super::{Mark, WORD_LENGTH};

/// An uppercase five-letter word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: [char; WORD_LENGTH],
}

impl Word {
    /// Uppercases `s` and checks that it is five ASCII letters.
    pub fn parse(s: &str) -> Result<Self, ParseWordError> {
        let upper = s.to_uppercase();
        let length = upper.chars().count();

        if length != WORD_LENGTH {
            return Err(ParseWordError::Length {
                word: s.to_owned(),
                length,
            });
        }

        let mut letters = ['A'; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(upper.chars()) {
            if !letter.is_ascii_alphabetic() {
                return Err(ParseWordError::NonAlphabetic {
                    word: s.to_owned(),
                    letter,
                });
            }

            *slot = letter;
        }

        Ok(Self { letters })
    }

    pub fn iter(&self) -> Iter<'_, char> {
        self.letters.iter()
    }

    /// Scores `guess` against `self` as the answer.
    ///
    /// Exact matches are marked first and taken out of the pool of answer
    /// letters; the remaining guess letters are then matched left to right
    /// against whatever is still in the pool. A letter can therefore never
    /// be marked more often than it occurs in the answer.
    pub fn score(&self, guess: &Word) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut unmatched: HashMap<char, usize> = HashMap::new();

        for (index, letter) in self.iter().enumerate() {
            if guess[index] == *letter {
                marks[index] = Mark::Correct;
            } else {
                *unmatched.entry(*letter).or_default() += 1;
            }
        }

        trace!(answer = %self, %guess, ?unmatched, "exact matches marked");

        for (index, letter) in guess.iter().enumerate() {
            if marks[index] == Mark::Correct {
                continue;
            }

            if let Some(count) = unmatched.get_mut(letter).filter(|count| **count > 0) {
                trace!("{}: wrong place", letter);

                *count -= 1;
                marks[index] = Mark::Present;
            }
        }

        marks
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("word `{word}` must have {} letters but has {length}", WORD_LENGTH)]
    Length { word: String, length: usize },

    #[error("word `{word}` contains non-letter `{letter}`")]
    NonAlphabetic { word: String, letter: char },
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = ParseWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}
