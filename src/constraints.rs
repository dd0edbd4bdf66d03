//! Accumulated letter facts across turns
//!
//! `ConstraintState` records what every turn's feedback proved: letters fixed
//! at a slot (green), letters present but excluded from a slot (yellow),
//! letters absent (gray) and letters already tried (used). Facts are only
//! ever added within a session.

use crate::core::{Feedback, LetterSet, Pattern, PositionMask, WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;

/// Green, yellow, gray and used-letter facts plus the narrowed position mask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    green: [Option<u8>; WORD_LENGTH],
    yellow: [LetterSet; WORD_LENGTH],
    gray: LetterSet,
    used: LetterSet,
    mask: PositionMask,
}

impl ConstraintState {
    /// Empty state with every letter admissible everywhere
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty state whose position mask starts from `mask`
    ///
    /// Pass the mask derived from the answer corpus so the per-slot
    /// admissibility is computed once per session rather than per lookup.
    #[must_use]
    pub fn with_mask(mask: PositionMask) -> Self {
        Self {
            mask,
            ..Self::default()
        }
    }

    /// Record that `letter` is present, either exactly at `position`
    /// (green) or somewhere other than `position` (yellow).
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn register_hit(&mut self, letter: u8, position: usize, is_green: bool) {
        self.used.insert(letter);
        if is_green {
            self.green[position] = Some(letter);
            self.mask.set_green(position, letter);
        } else {
            self.yellow[position].insert(letter);
            self.mask.set_yellow(position, letter);
        }
    }

    /// Record that `letter` is absent from the answer
    pub fn register_miss(&mut self, letter: u8) {
        self.used.insert(letter);
        self.gray.insert(letter);
        self.mask.set_gray(letter);
    }

    /// Fold one turn of feedback into the state.
    ///
    /// A gray mark on a letter that is green or yellow elsewhere in the same
    /// guess only proves the letter is not at that slot, so it is recorded
    /// as a positional exclusion rather than as a miss.
    pub fn apply_pattern(&mut self, guess: &Word, pattern: Pattern) {
        let present = present_letters(guess, pattern);

        for (i, (&letter, &mark)) in guess.chars().iter().zip(pattern.marks()).enumerate() {
            match mark {
                Feedback::Green => self.register_hit(letter, i, true),
                Feedback::Yellow => self.register_hit(letter, i, false),
                Feedback::Gray if present.contains(letter) => self.register_hit(letter, i, false),
                Feedback::Gray => self.register_miss(letter),
            }
        }
    }

    /// Check one turn of feedback against itself and the facts already held.
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentFeedback` describing the first
    /// contradiction found.
    pub fn validate(&self, guess: &Word, pattern: Pattern) -> Result<(), SolverError> {
        let present = present_letters(guess, pattern);
        let inconsistent = |msg: String| Err(SolverError::InconsistentFeedback(msg));

        for (i, (&letter, &mark)) in guess.chars().iter().zip(pattern.marks()).enumerate() {
            let ch = letter as char;
            match mark {
                Feedback::Green => {
                    if let Some(known) = self.green[i]
                        && known != letter
                    {
                        return inconsistent(format!(
                            "position {} is already known to be {}, not {ch}",
                            i + 1,
                            known as char
                        ));
                    }
                    if self.yellow[i].contains(letter) {
                        return inconsistent(format!(
                            "{ch} was already ruled out at position {}",
                            i + 1
                        ));
                    }
                }
                Feedback::Yellow => {
                    if self.green[i] == Some(letter) {
                        return inconsistent(format!(
                            "{ch} is already green at position {}",
                            i + 1
                        ));
                    }
                }
                Feedback::Gray => {
                    if !present.contains(letter) && self.is_known_present(letter) {
                        return inconsistent(format!(
                            "{ch} reported absent but is already known to be in the word"
                        ));
                    }
                }
            }
            if !mark.is_gray() && self.gray.contains(letter) {
                return inconsistent(format!(
                    "{ch} reported present but is already known to be absent"
                ));
            }
        }

        Ok(())
    }

    /// Whether `word` satisfies every recorded fact.
    ///
    /// A word is kept only if:
    /// - for every yellow fact (p, L) it contains L and `word[p] != L`
    /// - it contains no gray letter anywhere
    /// - for every green fact (p, L) `word[p] == L`
    ///
    /// A letter that has been registered as a miss excludes every word
    /// containing it, even if the same letter also has a green or yellow
    /// fact. `apply_pattern` never produces that combination from genuine
    /// feedback.
    #[must_use]
    pub fn consistent(&self, word: &Word) -> bool {
        let chars = word.chars();

        // Cheapest check first: any gray letter at all
        if word.letters().intersects(self.gray) {
            return false;
        }

        for (i, slot) in self.green.iter().enumerate() {
            if let Some(letter) = slot
                && chars[i] != *letter
            {
                return false;
            }
        }

        for (i, letters) in self.yellow.iter().enumerate() {
            for letter in letters.iter() {
                if !word.has_letter(letter) || chars[i] == letter {
                    return false;
                }
            }
        }

        true
    }

    /// Letters fixed at each slot
    #[must_use]
    pub const fn green(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.green
    }

    /// Letters excluded from each slot but present in the word
    #[must_use]
    pub const fn yellow(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.yellow
    }

    /// Letters known to be absent
    #[must_use]
    pub const fn gray(&self) -> LetterSet {
        self.gray
    }

    /// Letters that have appeared in any registered feedback
    #[must_use]
    pub const fn used(&self) -> LetterSet {
        self.used
    }

    /// Per-slot admissible letters
    #[must_use]
    pub const fn mask(&self) -> &PositionMask {
        &self.mask
    }

    /// True when no feedback has been registered yet
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    fn is_known_present(&self, letter: u8) -> bool {
        self.green.contains(&Some(letter)) || self.yellow.iter().any(|set| set.contains(letter))
    }
}

/// Letters with at least one green or yellow mark in this guess
fn present_letters(guess: &Word, pattern: Pattern) -> LetterSet {
    guess
        .chars()
        .iter()
        .zip(pattern.marks())
        .filter(|(_, mark)| !mark.is_gray())
        .map(|(&letter, _)| letter)
        .collect()
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let greens: String = self
            .green
            .iter()
            .map(|&slot| slot.map_or('*', char::from))
            .collect();
        write!(f, "Green: {greens}, Yellow: {{")?;

        let mut first = true;
        for (i, letters) in self.yellow.iter().enumerate() {
            if letters.is_empty() {
                continue;
            }
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}: {letters}", i + 1)?;
        }

        write!(
            f,
            "}}, Gray: {}, Unused: {}",
            self.gray,
            LetterSet::ALL.difference(self.used)
        )
    }
}
