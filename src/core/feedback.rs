//! Per-letter feedback for a guess
//!
//! Each guessed letter gets one of three classes:
//! - Exact: the target has this letter at this position
//! - Present: the target has this letter somewhere else
//! - Absent: the target does not contain this letter
//!
//! Duplicate letters are not counted: a guessed letter is `Present` whenever
//! the target contains it anywhere, even if every occurrence in the target
//! is already matched exactly elsewhere in the guess.

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered by strength, so the best hint for a letter is the `max` of its
/// classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterClass {
    Absent,
    Present,
    Exact,
}

impl LetterClass {
    /// Emoji tile for this class
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Classify `letter` guessed at `position` against `target`
///
/// # Examples
/// ```
/// use wordle_hotseat::core::{LetterClass, Word, classify_letter};
///
/// let target = Word::new("raton").unwrap();
/// assert_eq!(classify_letter('R', 0, &target), LetterClass::Exact);
/// assert_eq!(classify_letter('A', 3, &target), LetterClass::Present);
/// assert_eq!(classify_letter('S', 4, &target), LetterClass::Absent);
/// ```
#[must_use]
pub fn classify_letter(letter: char, position: usize, target: &Word) -> LetterClass {
    if target.letter_at(position) == Some(letter) {
        LetterClass::Exact
    } else if target.has_letter(letter) {
        LetterClass::Present
    } else {
        LetterClass::Absent
    }
}

/// Feedback row for a whole guess, one class per guessed letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterClass>);

impl Feedback {
    /// Calculate the feedback when `guess` is guessed and `target` is the secret
    ///
    /// # Examples
    /// ```
    /// use wordle_hotseat::core::{Feedback, LetterClass, Word};
    ///
    /// let guess = Word::new("ratas").unwrap();
    /// let target = Word::new("raton").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self(
            guess
                .letters()
                .iter()
                .enumerate()
                .map(|(i, &letter)| classify_letter(letter, i, target))
                .collect(),
        )
    }

    /// Classes in guess order
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[LetterClass] {
        &self.0
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == LetterClass::Exact)
    }

    /// Count the number of exact matches
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterClass::Exact)
    }

    /// Count the number of present-elsewhere letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterClass::Present)
    }

    fn count(&self, class: LetterClass) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterClass::{Absent, Exact, Present};

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_raton_ratas() {
        let fb = feedback("ratas", "raton");
        assert_eq!(fb.classes(), &[Exact, Exact, Exact, Present, Absent]);
        assert_eq!(fb.count_exact(), 3);
        assert_eq!(fb.count_present(), 1);
        assert!(!fb.is_perfect());
    }

    #[test]
    fn feedback_all_absent() {
        let fb = feedback("bbbbb", "raton");
        assert!(fb.classes().iter().all(|&c| c == Absent));
        assert_eq!(fb.count_exact(), 0);
        assert_eq!(fb.count_present(), 0);
    }

    #[test]
    fn feedback_all_exact() {
        for word in ["raton", "a", "niño", "zzzzz"] {
            assert!(feedback(word, word).is_perfect());
        }
    }

    #[test]
    fn feedback_duplicates_not_consumed() {
        // Target has one A, matched exactly at position 1; the second guessed
        // A is still reported as present.
        let fb = feedback("aarea", "raton");
        assert_eq!(fb.classes(), &[Present, Exact, Present, Absent, Present]);
    }

    #[test]
    fn feedback_enye_positions() {
        let fb = feedback("nañoo", "niño");
        // Guess is longer than the target: positions past the end can only
        // be present or absent.
        assert_eq!(fb.classes(), &[Exact, Absent, Exact, Exact, Present]);
    }

    #[test]
    fn classify_letter_beyond_target() {
        let target = Word::new("sol").unwrap();
        assert_eq!(classify_letter('S', 7, &target), Present);
        assert_eq!(classify_letter('X', 7, &target), Absent);
    }

    #[test]
    fn letter_class_ordering() {
        assert!(Exact > Present);
        assert!(Present > Absent);
        assert_eq!([Absent, Exact, Present].into_iter().max(), Some(Exact));
    }

    #[test]
    fn feedback_emoji_and_display() {
        let fb = feedback("ratas", "raton");
        assert_eq!(fb.to_emoji(), "🟩🟩🟩🟨⬜");
        assert_eq!(fb.to_string(), fb.to_emoji());
    }

    #[test]
    fn empty_feedback_is_not_perfect() {
        assert!(!Feedback(Vec::new()).is_perfect());
    }
}
