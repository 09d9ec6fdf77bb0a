//! JSON-lines front end for [`Sessions`].
//!
//! Each input line is one request and gets exactly one response line:
//!
//! ```text
//! {"op":"new_game","player":"alice"}      -> {"success":true}
//! {"op":"guess","player":"alice","guess":"crane"}
//!                                         -> {"result":[...],"game_over":false,"won":false,"target_word":null}
//! {"op":"state","player":"alice"}         -> {"guesses":[...],"game_over":false,...,"letters":{...}}
//! ```
//!
//! Rejected requests answer `{"error": "..."}` and the loop carries on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::{
    errors::Error,
    game::{GameView, GuessOutcome, PlayerId, Sessions},
    wordle::Mark,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    NewGame { player: PlayerId },
    Guess { player: PlayerId, guess: String },
    State { player: PlayerId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    NewGame { success: bool },
    Guess(GuessOutcome),
    State(StateResponse),
    Error { error: String },
}

impl Response {
    fn error(err: &Error) -> Self {
        err.trace();
        Self::Error {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateResponse {
    #[serde(flatten)]
    pub view: GameView,
    pub letters: BTreeMap<char, Mark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
}

impl From<GameView> for StateResponse {
    fn from(view: GameView) -> Self {
        Self {
            letters: view.letter_hints(),
            share: view.share_grid(),
            view,
        }
    }
}

pub async fn handle(sessions: &Sessions, request: Request) -> Response {
    match request {
        Request::NewGame { player } => {
            sessions.new_game(&player).await;
            Response::NewGame { success: true }
        }
        Request::Guess { player, guess } => match sessions.submit_guess(&player, &guess).await {
            Ok(outcome) => Response::Guess(outcome),
            Err(err) => Response::error(&err.into()),
        },
        Request::State { player } => Response::State(sessions.state(&player).await.into()),
    }
}

#[tracing::instrument(skip_all)]
pub async fn run<R, W>(sessions: &Sessions, reader: R, mut writer: W) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0_usize;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(?request);
                handle(sessions, request).await
            }
            Err(err) => Response::error(&err.into()),
        };

        let mut json = serde_json::to_string(&response)?;
        json.push('\n');
        writer.write_all(json.as_bytes()).await?;
        writer.flush().await?;

        handled += 1;
    }

    info!(handled, "input closed");
    Ok(())
}
