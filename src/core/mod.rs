//! Core domain types for the word game
//!
//! This module contains the fundamental domain values: the playable alphabet,
//! words, and per-letter feedback. Nothing here knows about game phases.

mod alphabet;
mod feedback;
mod word;

pub use alphabet::{ALPHABET, is_letter, normalize_letter, sanitize};
pub use feedback::{Feedback, LetterClass, classify_letter};
pub use word::{Word, WordError};
