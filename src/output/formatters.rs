//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterClass, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its classification
#[must_use]
pub fn letter_tile(letter: char, class: LetterClass) -> ColoredString {
    let tile = format!(" {letter} ").bold();
    match class {
        LetterClass::Exact => tile.black().on_green(),
        LetterClass::Present => tile.black().on_yellow(),
        LetterClass::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.classes())
        .map(|(&letter, &class)| letter_tile(letter, class).to_string())
        .collect()
}

/// Hide a secret word behind one bullet per letter
#[must_use]
pub fn masked(len: usize) -> String {
    "•".repeat(len)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
