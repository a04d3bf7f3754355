//! Game state machine
//!
//! A session moves `Setting → Playing → Won | Lost`; `reset` is the only way
//! back to `Setting`. Every operation returns `Err(Rejection)` instead of
//! changing anything when it is called at the wrong time.

use super::{GameConfig, Rejection};
use crate::core::{Feedback, LetterClass, Word, classify_letter, normalize_letter, sanitize};
use std::fmt;
use tracing::{debug, info};

/// Authoritative game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Setting,
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Check if the game has ended
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Setting => "setting",
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Owns a single game session and enforces its rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    config: GameConfig,
    /// Secret word being typed during `Setting`
    draft: String,
    /// Locked-in secret; `Some` exactly when the phase is not `Setting`
    target: Option<Word>,
    guesses: Vec<Word>,
    current: String,
    phase: Phase,
}

impl GameEngine {
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self {
            config,
            draft: String::new(),
            target: None,
            guesses: Vec::new(),
            current: String::new(),
            phase: Phase::Setting,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret word: the draft while setting, the locked word afterwards
    #[must_use]
    pub fn target_word(&self) -> &str {
        self.target.as_ref().map_or(self.draft.as_str(), Word::text)
    }

    /// Length of the secret word in letters
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target
            .as_ref()
            .map_or_else(|| self.draft.chars().count(), Word::len)
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The guess being typed
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Replace the secret word with the sanitized `word`
    ///
    /// Returns the stored word.
    ///
    /// # Errors
    /// `WrongPhase` unless the game is being set up.
    pub fn set_target_word(&mut self, word: &str) -> Result<&str, Rejection> {
        self.expect_phase(Phase::Setting)?;
        self.draft = sanitize(word, self.config.max_word_length);
        Ok(&self.draft)
    }

    /// Lock in the secret word and start guessing
    ///
    /// Returns the word length.
    ///
    /// # Errors
    /// `WrongPhase` unless setting up, `EmptyTarget` if no word was entered.
    pub fn start_game(&mut self) -> Result<usize, Rejection> {
        self.expect_phase(Phase::Setting)?;
        if self.draft.is_empty() {
            return self.reject(Rejection::EmptyTarget);
        }

        let target = Word::from_sanitized(std::mem::take(&mut self.draft));
        let len = target.len();
        self.target = Some(target);
        self.transition(Phase::Playing);
        Ok(len)
    }

    /// Replace the guess buffer with the sanitized `input`, capped to the
    /// secret word's length
    ///
    /// # Errors
    /// `WrongPhase` unless playing.
    pub fn update_current_guess(&mut self, input: &str) -> Result<&str, Rejection> {
        self.expect_phase(Phase::Playing)?;
        self.current = sanitize(input, self.word_length());
        Ok(&self.current)
    }

    /// Append one letter to the guess buffer
    ///
    /// # Errors
    /// `WrongPhase` unless playing, `InvalidLetter` for characters outside the
    /// alphabet, `GuessFull` once the buffer matches the word length.
    pub fn push_letter(&mut self, letter: char) -> Result<char, Rejection> {
        self.expect_phase(Phase::Playing)?;
        let Some(letter) = normalize_letter(letter) else {
            return self.reject(Rejection::InvalidLetter(letter));
        };

        let need = self.word_length();
        if self.current.chars().count() >= need {
            return self.reject(Rejection::GuessFull(need));
        }

        self.current.push(letter);
        Ok(letter)
    }

    /// Remove the last letter of the guess buffer
    ///
    /// # Errors
    /// `WrongPhase` unless playing, `BackspaceDisabled` in variants without
    /// it, `NothingToDelete` on an empty buffer.
    pub fn backspace(&mut self) -> Result<char, Rejection> {
        self.expect_phase(Phase::Playing)?;
        if !self.config.backspace {
            return self.reject(Rejection::BackspaceDisabled);
        }
        match self.current.pop() {
            Some(letter) => Ok(letter),
            None => self.reject(Rejection::NothingToDelete),
        }
    }

    /// Submit the guess buffer
    ///
    /// Returns the phase after evaluation: `Won` on an exact match, `Lost`
    /// once the last guess is used, otherwise `Playing`.
    ///
    /// # Errors
    /// `WrongPhase` unless playing, `IncompleteGuess` when the buffer length
    /// differs from the word length, `NoGuessesLeft` at the guess limit.
    pub fn submit_guess(&mut self) -> Result<Phase, Rejection> {
        self.expect_phase(Phase::Playing)?;

        let have = self.current.chars().count();
        let need = self.word_length();
        if have != need {
            return self.reject(Rejection::IncompleteGuess { have, need });
        }
        if self.guesses.len() >= self.config.max_guesses {
            return self.reject(Rejection::NoGuessesLeft);
        }

        let guess = Word::from_sanitized(std::mem::take(&mut self.current));
        let solved = self.target.as_ref().is_some_and(|t| t.text() == guess.text());
        debug!(guess = %guess, attempt = self.guesses.len() + 1, solved, "guess submitted");
        self.guesses.push(guess);

        if solved {
            self.transition(Phase::Won);
            info!(guesses = self.guesses.len(), "word guessed");
        } else if self.guesses.len() >= self.config.max_guesses {
            self.transition(Phase::Lost);
            info!(secret = %self.target_word(), "out of guesses");
        }

        Ok(self.phase)
    }

    /// Clear every field and return to `Setting`
    pub fn reset(&mut self) {
        self.draft.clear();
        self.target = None;
        self.guesses.clear();
        self.current.clear();
        self.transition(Phase::Setting);
    }

    /// Classify `letter` guessed at `position` against the secret word
    ///
    /// Before a word is locked in, every letter is `Absent`.
    #[must_use]
    pub fn classify_letter(&self, letter: char, position: usize) -> LetterClass {
        self.target
            .as_ref()
            .map_or(LetterClass::Absent, |t| classify_letter(letter, position, t))
    }

    /// Feedback row for `guess`, or `None` before a word is locked in
    #[must_use]
    pub fn classify_guess(&self, guess: &Word) -> Option<Feedback> {
        self.target.as_ref().map(|t| Feedback::calculate(guess, t))
    }

    /// Submitted guesses paired with their feedback
    pub fn history(&self) -> impl Iterator<Item = (&Word, Feedback)> + '_ {
        self.guesses
            .iter()
            .filter_map(|guess| self.classify_guess(guess).map(|fb| (guess, fb)))
    }

    /// Best classification `letter` has received in any submitted guess
    #[must_use]
    pub fn letter_hint(&self, letter: char) -> Option<LetterClass> {
        self.guesses
            .iter()
            .flat_map(|guess| {
                guess
                    .positions_of(letter)
                    .iter()
                    .map(move |&i| self.classify_letter(letter, i))
            })
            .max()
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), Rejection> {
        if self.phase == expected {
            Ok(())
        } else {
            self.reject(Rejection::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn reject<T>(&self, rejection: Rejection) -> Result<T, Rejection> {
        debug!(phase = %self.phase, %rejection, "call ignored");
        Err(rejection)
    }

    fn transition(&mut self, next: Phase) {
        if self.phase != next {
            debug!(from = %self.phase, to = %next, "phase change");
            self.phase = next;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
