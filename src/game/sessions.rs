use std::{collections::HashMap, sync::Arc};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use super::{GameSession, GameView, GuessError, GuessOutcome};
use crate::{wordle::Word, words_list::WordsList};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

type Session = Arc<RwLock<GameSession>>;

/// Every player's game, keyed by player.
///
/// Each game has its own lock: guesses and resets for one player are applied
/// one at a time, reads can overlap, and players never wait on each other
/// beyond the brief map lookup.
#[derive(Clone, Debug)]
pub struct Sessions {
    games: Arc<RwLock<HashMap<PlayerId, Session>>>,
    words: Arc<WordsList>,
    rng: Arc<Mutex<StdRng>>,
}

impl Sessions {
    pub fn new(words: Arc<WordsList>, rng: StdRng) -> Self {
        Self {
            games: Arc::default(),
            words,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn words(&self) -> &WordsList {
        &self.words
    }

    async fn random_answer(&self) -> Word {
        let mut rng = self.rng.lock().await;
        self.words.random_answer(&mut *rng)
    }

    async fn get(&self, player: &PlayerId) -> Option<Session> {
        let guard = self.games.read().await;
        guard.get(player).cloned()
    }

    /// The player's game, starting one if they don't have one yet.
    pub async fn get_or_start(&self, player: &PlayerId) -> Arc<RwLock<GameSession>> {
        if let Some(session) = self.get(player).await {
            return session;
        }

        let answer = self.random_answer().await;
        let mut guard = self.games.write().await;
        guard
            .entry(player.clone())
            .or_insert_with(|| {
                debug!(%player, "starting first game");
                Arc::new(RwLock::new(GameSession::new(answer)))
            })
            .clone()
    }

    #[tracing::instrument(skip(self), fields(%player))]
    pub async fn new_game(&self, player: &PlayerId) {
        let answer = self.random_answer().await;

        let mut guard = self.games.write().await;
        if let Some(session) = guard.get(player).cloned() {
            drop(guard);
            session.write().await.new_game(answer);
        } else {
            guard.insert(
                player.clone(),
                Arc::new(RwLock::new(GameSession::new(answer))),
            );
        }

        info!("new game started");
    }

    #[tracing::instrument(skip(self), fields(%player))]
    pub async fn submit_guess(
        &self,
        player: &PlayerId,
        guess: &str,
    ) -> Result<GuessOutcome, GuessError> {
        let session = self.get_or_start(player).await;
        let mut game = session.write().await;

        let outcome = game.submit(guess, &self.words)?;

        if outcome.is_over {
            info!(
                won = outcome.is_won,
                num_guesses = game.guesses().len(),
                "game finished"
            );
        }

        Ok(outcome)
    }

    /// A player without a game sees an empty one that isn't over.
    pub async fn state(&self, player: &PlayerId) -> GameView {
        match self.get(player).await {
            Some(session) => session.read().await.view(),
            None => GameView::default(),
        }
    }

    pub async fn remove(&self, player: &PlayerId) {
        let mut guard = self.games.write().await;
        guard.remove(player);
    }

    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
