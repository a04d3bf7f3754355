//! Replay command
//!
//! Plays a list of guesses against a secret word with the normal game rules
//! and reports every feedback row.

use crate::core::{Feedback, Word};
use crate::game::{GameConfig, GameEngine, Phase, Rejection};
use anyhow::{Context, Result};

/// Configuration for a replay
pub struct ReplayConfig {
    pub target: String,
    pub guesses: Vec<String>,
    pub game: GameConfig,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(target: impl Into<String>, guesses: Vec<String>) -> Self {
        Self {
            target: target.into(),
            guesses,
            game: GameConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

/// Result of a replay
pub struct ReplayResult {
    pub target: String,
    pub steps: Vec<ReplayStep>,
    pub skipped: Vec<SkippedGuess>,
    pub outcome: Phase,
    pub max_guesses: usize,
}

/// A guess that was accepted by the engine
pub struct ReplayStep {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A guess the engine ignored, with the reason
pub struct SkippedGuess {
    pub input: String,
    pub reason: Rejection,
}

/// Replay `config.guesses` against `config.target`
///
/// Guesses go through the same sanitization as typed input, so an over-long
/// guess is cut to the word length. Guesses that end up too short, or that
/// arrive after the game ended, are reported as skipped.
///
/// # Errors
///
/// Returns an error if the target contains no playable letters.
pub fn replay_guesses(config: ReplayConfig) -> Result<ReplayResult> {
    let mut engine = GameEngine::new(config.game);

    engine.set_target_word(&config.target)?;
    engine
        .start_game()
        .with_context(|| format!("Invalid target word: '{}'", config.target))?;

    let mut steps = Vec::new();
    let mut skipped = Vec::new();

    for input in config.guesses {
        let attempt = match engine.update_current_guess(&input).err() {
            Some(reason) => Err(reason),
            None => engine.submit_guess(),
        };

        match attempt {
            Ok(_) => {
                if let Some((guess, feedback)) = engine.history().last() {
                    steps.push(ReplayStep {
                        guess: guess.clone(),
                        feedback,
                    });
                }
            }
            Err(reason) => skipped.push(SkippedGuess { input, reason }),
        }
    }

    Ok(ReplayResult {
        target: engine.target_word().to_string(),
        steps,
        skipped,
        outcome: engine.phase(),
        max_guesses: engine.config().max_guesses,
    })
}
