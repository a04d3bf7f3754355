//! Word representation
//!
//! A Word stores an uppercase word along with letter position indices used
//! when classifying guesses.

use super::alphabet::is_letter;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A non-empty word over the playable alphabet with letter position tracking
///
/// Letters are counted as characters, so `Ñ` occupies a single position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("'{0}' is not a playable letter")]
    InvalidLetter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is uppercased; every resulting character must be a playable
    /// letter. Use [`super::sanitize`] first to strip unwanted characters.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains a character outside the playable alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_hotseat::core::Word;
    ///
    /// let word = Word::new("raton").unwrap();
    /// assert_eq!(word.text(), "RATON");
    ///
    /// assert!(Word::new("ra ton").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !is_letter(c)) {
            return Err(WordError::InvalidLetter(bad));
        }

        Ok(Self::from_sanitized(text))
    }

    /// Build a Word from text that already went through sanitization
    pub(crate) fn from_sanitized(text: String) -> Self {
        debug_assert!(!text.is_empty() && text.chars().all(is_letter));

        let letters: Vec<char> = text.chars().collect();

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Self {
            text,
            letters,
            letter_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a slice of letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position, if any
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
