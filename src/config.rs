use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub const DEFAULT_CONFIG_FILE: &str = "wordle.toml";
pub const ENV_PREFIX: &str = "WORDLE";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub words: WordsConfig,
    pub game: GameConfig,
    pub logs: LogsConfig,
}

impl Config {
    /// Layers `WORDLE_*` environment variables over the config file.
    ///
    /// An explicit `path` must exist; the default `wordle.toml` is optional.
    #[tracing::instrument(name = "config")]
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let file = match path {
            Some(path) => ::config::File::with_name(&path.to_string_lossy()).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = ::config::Config::builder()
            .add_source(file.format(::config::FileFormat::Toml))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        debug!(?config, "loaded config");
        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WordsConfig {
    pub answers_file: Option<PathBuf>,
    pub guesses_file: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Fixes the sequence of answers, for reproducible runs.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                trace!(seed, "using seeded rng");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogsConfig {
    pub filter: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            filter: "wordle_server=info".to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rand::Rng;

    use super::{Config, Error, GameConfig};

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.words.answers_file, None);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.logs.filter, "wordle_server=info");
    }

    #[test]
    fn load_file() {
        let path = std::env::temp_dir().join(format!("wordle-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[words]\nanswers_file = \"answers.txt\"\n\n[game]\nseed = 42\n\n[logs]\nfilter = \"debug\""
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.words.answers_file, Some("answers.txt".into()));
        assert_eq!(config.words.guesses_file, None);
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.logs.filter, "debug");
    }

    #[test]
    fn missing_explicit_file() {
        let result = Config::load(Some("/definitely/not/here.toml".as_ref()));
        assert!(matches!(result, Err(Error::Read(_))));
    }

    #[test]
    fn seeded_rng_repeats() {
        let game = GameConfig { seed: Some(9) };

        let first: Vec<u32> = (0..5).map(|_| game.rng().gen()).collect();
        let mut rng = game.rng();
        let second: Vec<u32> = (0..5).map(|_| rng.gen()).collect();

        assert_eq!(first[0], second[0]);
        assert!(first.iter().all(|n| *n == first[0]));
    }
}
