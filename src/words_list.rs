use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::WordsConfig,
    wordle::{ParseWordError, Word},
};

const EMBEDDED_ANSWERS: &str = include_str!("../wordle/answers.txt");
const EMBEDDED_GUESSES: &str = include_str!("../wordle/guesses.txt");

/// The answer pool and the dictionary guesses are checked against.
///
/// Every answer is also a valid guess.
#[derive(Debug, Clone)]
pub struct WordsList {
    answers: Vec<Word>,
    guesses: HashSet<Word>,
}

impl WordsList {
    pub fn new(
        answers: impl IntoIterator<Item = Word>,
        guesses: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordsListError> {
        let mut guesses: HashSet<Word> = guesses.into_iter().collect();

        let mut seen = HashSet::new();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|answer| seen.insert(*answer))
            .collect();

        guesses.extend(answers.iter().copied());

        if answers.is_empty() {
            return Err(WordsListError::NoAnswers);
        }

        Ok(Self { answers, guesses })
    }

    /// The lists bundled with the binary.
    pub fn embedded() -> Result<Self, WordsListError> {
        Self::parse(EMBEDDED_ANSWERS, EMBEDDED_GUESSES)
    }

    pub fn parse(answers: &str, guesses: &str) -> Result<Self, WordsListError> {
        Self::new(
            parse_list("answers", answers)?,
            parse_list("guesses", guesses)?,
        )
    }

    /// Reads the configured files, falling back to the embedded lists for
    /// any file that isn't configured.
    #[tracing::instrument(skip_all)]
    pub fn load(config: &WordsConfig) -> Result<Self, WordsListError> {
        let answers = match config.answers_file {
            Some(ref path) => read_list(path)?,
            None => parse_list("answers", EMBEDDED_ANSWERS)?,
        };

        let guesses = match config.guesses_file {
            Some(ref path) => read_list(path)?,
            None => parse_list("guesses", EMBEDDED_GUESSES)?,
        };

        let list = Self::new(answers, guesses)?;
        info!(
            answers = list.answers.len(),
            guesses = list.guesses.len(),
            "loaded words"
        );

        Ok(list)
    }

    /// Draws an answer uniformly from the pool.
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.answers[rng.gen_range(0..self.answers.len())]
    }

    pub fn valid_guess(&self, guess: &str) -> bool {
        self.get_word(guess).is_some()
    }

    pub fn get_word(&self, s: &str) -> Option<Word> {
        Word::parse(s)
            .ok()
            .filter(|word| self.guesses.contains(word))
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

fn parse_list(list: &str, text: &str) -> Result<Vec<Word>, WordsListError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, word)| {
            Word::parse(word).map_err(|error| WordsListError::InvalidWord {
                list: list.to_owned(),
                line,
                error,
            })
        })
        .collect()
}

fn read_list(path: &Path) -> Result<Vec<Word>, WordsListError> {
    debug!(path = %path.display(), "reading words file");

    let text = fs::read_to_string(path).map_err(|source| WordsListError::Read {
        path: path.to_owned(),
        source,
    })?;

    parse_list(&path.display().to_string(), &text)
}

#[derive(Debug, Error)]
pub enum WordsListError {
    #[error("failed to read words from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{list} line {line}: {error}")]
    InvalidWord {
        list: String,
        line: usize,
        #[source]
        error: ParseWordError,
    },

    #[error("no answers to choose from")]
    NoAnswers,
}
