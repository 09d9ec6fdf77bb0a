#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use wordle_server::{
    cli::{Cli, Command},
    driver, logging, Config, Error, Sessions, WordsList,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if cli.command() == Command::Config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init_tracing(&config.logs.filter);
    info!("wordle-server {}", env!("CARGO_PKG_VERSION"));

    let words = WordsList::load(&config.words).map_err(|err| {
        let err = Error::from(err);
        err.trace();
        err
    })?;

    let sessions = Sessions::new(Arc::new(words), config.game.rng());

    driver::run(
        &sessions,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}
