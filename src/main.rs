//! Hotseat Wordle - CLI
//!
//! Word-guessing game with TUI and line-based modes: one player sets the
//! secret word, the other guesses it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wordle_hotseat::{
    commands::{ReplayConfig, replay_guesses, run_simple},
    game::GameConfig,
    output::{write_replay_result, write_statistics},
};

#[derive(Parser)]
#[command(
    name = "wordle_hotseat",
    about = "Hotseat Wordle: one player sets the secret word, the other guesses it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses before the game is lost
    #[arg(short = 'g', long, global = true, default_value_t = 5,
          value_parser = clap::value_parser!(u16).range(1..=12))]
    max_guesses: u16,

    /// Longest secret word allowed
    #[arg(short = 'l', long, global = true, default_value_t = 5,
          value_parser = clap::value_parser!(u16).range(1..=12))]
    max_length: u16,

    /// Disable deleting letters from a guess
    #[arg(long, global = true)]
    no_backspace: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Check a list of guesses against a secret word
    Replay {
        /// The secret word
        target: String,

        /// Guesses to play, in order
        guesses: Vec<String>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig::new()
            .with_max_guesses(usize::from(self.max_guesses))
            .with_max_word_length(usize::from(self.max_length))
            .with_backspace(!self.no_backspace)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs when a file is given
    let log_to_stderr = !matches!(command, Commands::Play);
    let _guard = init_logging(cli.log_file.as_deref(), log_to_stderr)?;
    tracing::debug!(?config, "starting");

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(config).map(|_| ()),
        Commands::Replay { target, guesses } => run_replay_command(config, target, guesses),
    }
}

/// Setup logging to a file or stderr
///
/// Returns the file writer guard, which must stay alive until exit.
fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("invalid log file path: {}", path.display()))?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let file_appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(non_blocking_file)
            .with_ansi(false)
            .init();

        tracing::info!("Log file: {}", path.display());
        return Ok(Some(guard));
    }

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .init();
    }

    Ok(None)
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_hotseat::interactive::{App, run_tui};

    let app = App::new(config);
    let stats = run_tui(app)?;

    if stats.games_played > 0 {
        write_statistics(&mut io::stdout().lock(), &stats)?;
    }
    Ok(())
}

fn run_replay_command(config: GameConfig, target: String, guesses: Vec<String>) -> Result<()> {
    let replay = ReplayConfig::new(target, guesses).with_game(config);
    let result = replay_guesses(replay)?;

    write_replay_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}
