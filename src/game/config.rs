//! Game configuration

/// Limits and toggles for one game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Longest secret word accepted while setting up
    pub max_word_length: usize,
    /// Number of guesses before the game is lost
    pub max_guesses: usize,
    /// Whether the guess buffer supports deleting its last letter
    pub backspace: bool,
}

impl GameConfig {
    pub const DEFAULT_WORD_LENGTH: usize = 5;
    pub const DEFAULT_MAX_GUESSES: usize = 5;

    /// The six-guess variant
    #[must_use]
    pub const fn six_guesses() -> Self {
        Self::new().with_max_guesses(6)
    }

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_word_length: Self::DEFAULT_WORD_LENGTH,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
            backspace: true,
        }
    }

    /// Set the maximum secret word length (at least 1)
    #[must_use]
    pub const fn with_max_word_length(mut self, len: usize) -> Self {
        self.max_word_length = if len == 0 { 1 } else { len };
        self
    }

    /// Set the maximum number of guesses (at least 1)
    #[must_use]
    pub const fn with_max_guesses(mut self, guesses: usize) -> Self {
        self.max_guesses = if guesses == 0 { 1 } else { guesses };
        self
    }

    #[must_use]
    pub const fn with_backspace(mut self, enabled: bool) -> Self {
        self.backspace = enabled;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
