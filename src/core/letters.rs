//! Letter bitsets
//!
//! A `LetterSet` packs the 26 uppercase ASCII letters into a `u32`. A
//! `PositionMask` keeps one such set per slot and records which letters are
//! still admissible at each position.

use super::Word;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

#[inline]
const fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_uppercase());
    1 << (letter - b'A')
}

/// Set of uppercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self((1 << ALPHABET_LEN) - 1);

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !bit(letter);
    }

    /// Keep only the letters also present in `other`
    #[inline]
    pub const fn retain(&mut self, other: Self) {
        self.0 &= other.0;
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Fold a guess history into the set of letters it has used.
///
/// # Examples
/// ```
/// use wordle_belief::core::{Word, used_letters};
///
/// let history = [Word::new("slate").unwrap(), Word::new("crony").unwrap()];
/// let used = used_letters(&history);
/// assert_eq!(used.len(), 10);
/// assert!(used.contains(b'Y'));
/// ```
#[must_use]
pub fn used_letters<'a, I>(history: I) -> LetterSet
where
    I: IntoIterator<Item = &'a Word>,
{
    history
        .into_iter()
        .fold(LetterSet::EMPTY, |acc, word| acc.union(word.letters()))
}

/// Per-position admissible letters.
///
/// Seeded once from the answer corpus; afterwards bits are only ever cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionMask([LetterSet; 5]);

impl PositionMask {
    /// Every letter admissible everywhere
    #[must_use]
    pub const fn full() -> Self {
        Self([LetterSet::ALL; 5])
    }

    /// Letters that occur at each position across `words`
    #[must_use]
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut slots = [LetterSet::EMPTY; 5];
        for word in words {
            for (slot, &letter) in slots.iter_mut().zip(word.chars()) {
                slot.insert(letter);
            }
        }
        Self(slots)
    }

    #[inline]
    #[must_use]
    pub const fn allows(&self, position: usize, letter: u8) -> bool {
        self.0[position].contains(letter)
    }

    /// Admissible letters at `position`
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterSet {
        self.0[position]
    }

    /// True when every letter of `word` is admissible at its slot
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.chars()
            .iter()
            .enumerate()
            .all(|(i, &letter)| self.allows(i, letter))
    }

    /// Only `letter` may remain at `position`
    pub fn set_green(&mut self, position: usize, letter: u8) {
        let mut only = LetterSet::EMPTY;
        only.insert(letter);
        self.0[position].retain(only);
    }

    /// `letter` may no longer appear at `position`
    pub const fn set_yellow(&mut self, position: usize, letter: u8) {
        self.0[position].remove(letter);
    }

    /// `letter` may no longer appear anywhere
    pub fn set_gray(&mut self, letter: u8) {
        for slot in &mut self.0 {
            slot.remove(letter);
        }
    }
}

impl Default for PositionMask {
    fn default() -> Self {
        Self::full()
    }
}
