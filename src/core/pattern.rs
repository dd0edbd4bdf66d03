//! Wordle feedback pattern calculation and representation
//!
//! A pattern is five `Feedback` marks, one per guess position. It is `Copy`
//! and hashable so it can key the partitions built by the search heuristics.

use super::{LetterSet, WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the answer, or beyond its occurrence count
    Gray,
    /// Letter in the answer at another position
    Yellow,
    /// Letter at exactly this position
    Green,
}

impl Feedback {
    #[must_use]
    pub const fn is_gray(self) -> bool {
        matches!(self, Self::Gray)
    }
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Green; WORD_LENGTH]);

    /// All grays
    pub const MISS: Self = Self([Feedback::Gray; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Feedback; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// The five per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements Wordle's duplicate-letter rules: a letter occurring k times
    /// in the guess and m times in the answer gets exactly `min(k, m)`
    /// non-gray marks, with greens claimed before yellows.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_belief::core::{Feedback::*, Pattern, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.marks(), &[Gray, Gray, Green, Gray, Green]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Gray; WORD_LENGTH];
        let mut available = [0u8; 26];

        // First pass: greens, and count answer letters that stay unclaimed
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Feedback::Green;
            } else {
                available[usize::from(a - b'A')] += 1;
            }
        }

        // Second pass: yellows from the unclaimed pool
        for (mark, &g) in result.iter_mut().zip(guess.chars()) {
            if *mark == Feedback::Green {
                continue;
            }
            let count = &mut available[usize::from(g - b'A')];
            if *count > 0 {
                *mark = Feedback::Yellow;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Build a pattern from interactive feedback: a green pattern with `_`
    /// for unknown slots plus the set of letters reported yellow.
    ///
    /// Each yellow letter marks the first non-green occurrence of that letter
    /// in the guess; every other position is gray.
    ///
    /// # Errors
    /// - `InvalidWordLength` if the green pattern is not five characters
    /// - `InvalidCharacters` if it contains something other than letters or `_`
    /// - `InconsistentFeedback` if a green letter disagrees with the guess, or a
    ///   yellow letter has no non-green occurrence in the guess
    ///
    /// # Examples
    /// ```
    /// use wordle_belief::core::{Pattern, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let pattern = Pattern::from_external(&guess, "__A_E", None).unwrap();
    /// assert_eq!(pattern, Pattern::calculate(&guess, &Word::new("crane").unwrap()));
    /// ```
    pub fn from_external(
        guess: &Word,
        green_pattern: &str,
        yellow_letters: Option<&str>,
    ) -> Result<Self, SolverError> {
        let green: Vec<char> = green_pattern.trim().chars().collect();
        if green.len() != WORD_LENGTH {
            return Err(SolverError::InvalidWordLength(green.len()));
        }

        let mut result = [Feedback::Gray; WORD_LENGTH];
        for (i, ch) in green.into_iter().enumerate() {
            if ch == '_' {
                continue;
            }
            if !ch.is_ascii_alphabetic() {
                return Err(SolverError::InvalidCharacters(green_pattern.to_string()));
            }
            let letter = ch.to_ascii_uppercase() as u8;
            if letter != guess.char_at(i) {
                return Err(SolverError::InconsistentFeedback(format!(
                    "position {} marked green as {} but {guess} has {} there",
                    i + 1,
                    letter as char,
                    guess.char_at(i) as char
                )));
            }
            result[i] = Feedback::Green;
        }

        let mut yellows = LetterSet::EMPTY;
        for ch in yellow_letters.unwrap_or_default().chars() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            if !ch.is_ascii_alphabetic() {
                return Err(SolverError::InvalidCharacters(
                    yellow_letters.unwrap_or_default().to_string(),
                ));
            }
            yellows.insert(ch.to_ascii_uppercase() as u8);
        }

        for letter in yellows.iter() {
            if !guess.has_letter(letter) {
                return Err(SolverError::InconsistentFeedback(format!(
                    "{} reported yellow but {guess} does not contain it",
                    letter as char
                )));
            }
            let slot = guess
                .positions_of(letter)
                .find(|&i| result[i] != Feedback::Green)
                .ok_or_else(|| {
                    SolverError::InconsistentFeedback(format!(
                        "{} reported yellow but every occurrence in {guess} is green",
                        letter as char
                    ))
                })?;
            result[slot] = Feedback::Yellow;
        }

        Ok(Self(result))
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.0.iter().filter(|&&m| m == Feedback::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.0.iter().filter(|&&m| m == Feedback::Yellow).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_belief::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Feedback::Gray; WORD_LENGTH];
        for (mark, ch) in result.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Feedback::Green,
                'Y' | 'y' | '🟨' => Feedback::Yellow,
                '-' | '_' | '.' | '⬜' => Feedback::Gray,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Feedback::Green => '🟩',
                Feedback::Yellow => '🟨',
                Feedback::Gray => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                Feedback::Green => 'G',
                Feedback::Yellow => 'Y',
                Feedback::Gray => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
