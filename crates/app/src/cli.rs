use clap::{Parser, Subcommand};
use services::DEFAULT_RECENT_LIMIT;

pub const DEFAULT_DB_URL: &str = "sqlite://brain_trainer.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "brain-trainer")]
#[command(about = "Multiplication drills with timed questions and saved statistics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// SQLite URL or file path; relative paths resolve against the working directory
    #[arg(long, global = true, value_name = "URL", env = "TRAINER_DB_URL", default_value = DEFAULT_DB_URL)]
    pub db: String,

    /// Log filter directive, used when `RUST_LOG` is unset
    #[arg(long, global = true, value_name = "FILTER", env = "TRAINER_LOG", default_value = "info")]
    pub log: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Launch the desktop trainer (default)
    Ui,
    /// Print overall statistics and recent sessions
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Number of recent sessions to list
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        recent: u32,
    },
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ui)
    }
}
