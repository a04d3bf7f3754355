//! Reasons an engine call was ignored

use super::Phase;
use thiserror::Error;

/// Why the engine left the session untouched
///
/// These are not failures. The game treats every invalid call as a no-op;
/// the reason is only reported so callers can show a hint or test the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not allowed while {actual} (needs {expected})")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("the secret word is empty")]
    EmptyTarget,
    #[error("guess has {have} of {need} letters")]
    IncompleteGuess { have: usize, need: usize },
    #[error("guess already has all {0} letters")]
    GuessFull(usize),
    #[error("'{0}' is not a playable letter")]
    InvalidLetter(char),
    #[error("no guesses left")]
    NoGuessesLeft,
    #[error("backspace is disabled")]
    BackspaceDisabled,
    #[error("nothing to delete")]
    NothingToDelete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let wrong = Rejection::WrongPhase {
            expected: Phase::Playing,
            actual: Phase::Won,
        };
        assert_eq!(wrong.to_string(), "not allowed while won (needs playing)");
        assert_eq!(
            Rejection::IncompleteGuess { have: 3, need: 5 }.to_string(),
            "guess has 3 of 5 letters"
        );
    }
}
