//! Simple interactive CLI mode
//!
//! Text-based hotseat game without the TUI: one player types the secret word,
//! the other guesses it line by line.

use crate::game::{GameConfig, GameEngine, Phase, Statistics};
use crate::output::display::write_statistics;
use crate::output::formatters::colored_row;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(config: GameConfig) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(config, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple mode against arbitrary input and output streams
///
/// Returns the statistics collected before the player quit or input ended.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<R: BufRead, W: Write>(
    config: GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Statistics> {
    let mut engine = GameEngine::new(config);
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Hotseat Wordle - Simple Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Player one enters a secret word (up to {} letters, A-Z and Ñ).",
        config.max_word_length
    )?;
    writeln!(
        out,
        "Player two then has {} tries to guess it.",
        config.max_guesses
    )?;
    writeln!(out, "Commands: ':quit' to exit, ':new' to start over\n")?;

    'session: loop {
        // Setting phase
        while engine.phase() == Phase::Setting {
            let Some(line) = read_line(input, out, "Secret word")? else {
                break 'session;
            };
            match parse_command(&line) {
                Some(Command::Quit) => break 'session,
                Some(Command::New) => continue,
                Some(Command::Unknown) => {
                    writeln!(out, "❌ Unknown command: {line}\n")?;
                    continue;
                }
                None => {}
            }

            let stored = engine.set_target_word(&line)?.to_string();
            if engine.start_game().is_err() {
                writeln!(out, "❌ The secret word needs at least one letter.\n")?;
                continue;
            }

            // Push the secret off the visible part of the screen
            writeln!(out, "{}", "\n".repeat(40))?;
            writeln!(
                out,
                "Secret word locked in: {} letters. Start guessing!\n",
                stored.chars().count()
            )?;
        }

        // Playing phase
        while engine.phase() == Phase::Playing {
            let turn = engine.guesses().len() + 1;
            let prompt = format!("Guess {turn}/{}", config.max_guesses);
            let Some(line) = read_line(input, out, &prompt)? else {
                break 'session;
            };

            match parse_command(&line) {
                Some(Command::Quit) => break 'session,
                Some(Command::New) => {
                    engine.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'session;
                }
                Some(Command::Unknown) => {
                    writeln!(out, "❌ Unknown command: {line}\n")?;
                    continue;
                }
                None => {}
            }

            engine.update_current_guess(&line)?;
            if let Err(reason) = engine.submit_guess() {
                writeln!(out, "❌ {reason}\n")?;
                continue;
            }

            for (guess, feedback) in engine.history() {
                writeln!(out, "  {}", colored_row(guess, &feedback))?;
            }
            writeln!(out)?;
        }

        // Game over
        stats.record(engine.phase(), engine.guesses().len());
        if engine.phase() == Phase::Won {
            let guesses = engine.guesses().len();
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Congratulations! You guessed the word in {guesses} {}.",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
        } else {
            writeln!(
                out,
                "{}",
                format!("Game over. The word was: {}", engine.target_word())
                    .red()
                    .bold()
            )?;
        }
        writeln!(out)?;
        write_statistics(out, &stats)?;

        let again = read_line(input, out, "Play again? (yes/no)")?;
        match again.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => {
                engine.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => break,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Session commands typed instead of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Unknown,
}

/// Commands start with ':', a character sanitizing always drops
fn parse_command(line: &str) -> Option<Command> {
    let name = line.strip_prefix(':')?.trim().to_lowercase();
    Some(match name.as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::New,
        _ => Command::Unknown,
    })
}

/// Get user input with a prompt; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    Ok((read > 0).then(|| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, config: GameConfig) -> (Statistics, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let stats = run_simple_with(config, &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_then_quit() {
        let (stats, out) = run("raton\nratas\nraton\nno\n", GameConfig::default());

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
        assert!(out.contains("Secret word locked in: 5 letters"));
        assert!(out.contains("You guessed the word in 2 guesses"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn loss_reveals_word() {
        let script = "sol\nmar\nmar\nmar\nmar\nmar\nno\n";
        let (stats, out) = run(script, GameConfig::default());

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert!(out.contains("Game over. The word was: SOL"));
    }

    #[test]
    fn empty_secret_is_asked_again() {
        let (stats, out) = run("123\nsol\nsol\nno\n", GameConfig::default());

        assert!(out.contains("needs at least one letter"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn short_guess_is_rejected() {
        let (stats, out) = run("raton\nrat\nraton\nno\n", GameConfig::default());

        assert!(out.contains("guess has 3 of 5 letters"));
        assert_eq!(stats.guess_distribution, vec![1]);
    }

    #[test]
    fn play_again_keeps_statistics() {
        let script = "sol\nsol\nyes\nmar\nsol\nsol\nsol\nsol\nsol\nno\n";
        let (stats, _) = run(script, GameConfig::default());

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 1);
    }

    #[test]
    fn new_command_resets_mid_game() {
        let (stats, out) = run("sol\n:new\nmar\nmar\nno\n", GameConfig::default());

        assert!(out.contains("New game started"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (stats, out) = run("raton\nrat", GameConfig::default());

        assert_eq!(stats.games_played, 0);
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn six_guess_variant_prompts() {
        let (_, out) = run("sol\n:q\n", GameConfig::six_guesses());
        assert!(out.contains("Guess 1/6"));
    }

    #[test]
    fn one_letter_secret_q_is_playable() {
        let (stats, out) = run("q\nq\nno\n", GameConfig::default());

        assert!(out.contains("Secret word locked in: 1 letters"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn command_words_are_playable_guesses() {
        let (stats, _) = run("new\nnew\nno\n", GameConfig::default());
        assert_eq!(stats.games_won, 1);

        let (stats, _) = run("quit\nexit\nquit\nno\n", GameConfig::default());
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
    }

    #[test]
    fn quit_command_while_setting() {
        let (stats, out) = run(":quit\n", GameConfig::default());

        assert_eq!(stats.games_played, 0);
        assert!(!out.contains("Secret word locked in"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn unknown_command_is_not_a_guess() {
        let (stats, out) = run("sol\n:mar\n:exit\n", GameConfig::default());

        assert!(out.contains("Unknown command: :mar"));
        assert!(!out.contains("Guess 2/5"));
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command(":quit"), Some(Command::Quit));
        assert_eq!(parse_command(":Q"), Some(Command::Quit));
        assert_eq!(parse_command(":new"), Some(Command::New));
        assert_eq!(parse_command(":what"), Some(Command::Unknown));
        assert_eq!(parse_command("quit"), None);
        assert_eq!(parse_command("new"), None);
    }
}
