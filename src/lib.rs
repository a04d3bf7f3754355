//! Hotseat Wordle
//!
//! A word-guessing game where one player sets the secret word and another
//! player tries to guess it, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hotseat::game::{GameConfig, GameEngine, Phase};
//!
//! let mut engine = GameEngine::new(GameConfig::default());
//! engine.set_target_word("raton").unwrap();
//! engine.start_game().unwrap();
//!
//! engine.update_current_guess("ratas").unwrap();
//! assert_eq!(engine.submit_guess(), Ok(Phase::Playing));
//!
//! engine.update_current_guess("raton").unwrap();
//! assert_eq!(engine.submit_guess(), Ok(Phase::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
