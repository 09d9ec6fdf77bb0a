use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Serve wordle games over JSON lines on stdin/stdout")]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./wordle.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved configuration and exit
    Config,

    /// Read requests from stdin until it closes
    #[default]
    Play,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}
