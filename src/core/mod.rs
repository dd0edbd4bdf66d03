//! Core domain types for Wordle
//!
//! Words, feedback patterns and letter bitsets. Everything here is pure and
//! has no knowledge of candidate pools or strategies.

mod letters;
mod pattern;
mod word;

pub use letters::{ALPHABET_LEN, LetterSet, PositionMask, used_letters};
pub use pattern::{Feedback, Pattern};
pub use word::{WORD_LENGTH, Word};
