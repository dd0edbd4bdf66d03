//! Letter frequency table
//!
//! Counts, over the answer corpus, how often each letter appears at each
//! position and overall. Word scores are derived from these counts.

use crate::core::{ALPHABET_LEN, WORD_LENGTH, Word};

#[inline]
fn index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

/// Positional and total letter counts over a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    by_position: [[u32; WORD_LENGTH]; ALPHABET_LEN],
    total: [u32; ALPHABET_LEN],
}

impl LetterFrequency {
    /// Count every letter occurrence in `words`
    #[must_use]
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut table = Self::default();
        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                table.by_position[index(letter)][position] += 1;
                table.total[index(letter)] += 1;
            }
        }
        table
    }

    /// Occurrences of `letter` at `position`
    #[inline]
    #[must_use]
    pub fn at(&self, letter: u8, position: usize) -> u32 {
        self.by_position[index(letter)][position]
    }

    /// Occurrences of `letter` anywhere
    #[inline]
    #[must_use]
    pub fn total(&self, letter: u8) -> u32 {
        self.total[index(letter)]
    }

    /// Score a word by letter frequency.
    ///
    /// Each distinct letter contributes once. With `positional`, a letter
    /// contributes its frequency at the slot it occupies (the best slot when
    /// it is repeated); otherwise it contributes its total frequency.
    ///
    /// # Examples
    /// ```
    /// use wordle_belief::candidates::LetterFrequency;
    /// use wordle_belief::core::Word;
    ///
    /// let corpus = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let table = LetterFrequency::from_words(&corpus);
    ///
    /// // A and E are at the same slots in both words
    /// let crane = Word::new("crane").unwrap();
    /// assert_eq!(table.score(&crane, true), 1 + 1 + 2 + 1 + 2);
    /// assert_eq!(table.score(&crane, false), 1 + 1 + 2 + 1 + 2);
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word, positional: bool) -> u32 {
        if !positional {
            return word.letters().iter().map(|letter| self.total(letter)).sum();
        }

        let mut best = [None::<u32>; ALPHABET_LEN];
        for (position, &letter) in word.chars().iter().enumerate() {
            let value = self.at(letter, position);
            let slot = &mut best[index(letter)];
            *slot = Some(slot.map_or(value, |seen| seen.max(value)));
        }
        best.iter().flatten().sum()
    }
}
