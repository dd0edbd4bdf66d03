//! Word lists for Wordle solving
//!
//! The engine does not ship a corpus; answer and guess lists are read from
//! newline-delimited files.

pub mod loader;

#[cfg(test)]
pub(crate) use fixtures::{SAMPLE_ANSWERS, SAMPLE_GUESSES, sample_store};

#[cfg(test)]
mod fixtures {
    use super::loader::words_from_slice;
    use crate::candidates::CandidateStore;

    /// Small answer corpus with a few letter families that share endings
    pub const SAMPLE_ANSWERS: &[&str] = &[
        "crane", "crate", "grate", "irate", "slate", "plate", "brine", "prone", "grape", "frame",
        "blame", "flame", "crone", "drone", "stone", "shone", "caste", "paste", "baste", "haste",
        "trace", "grace", "brace", "place", "space", "fuzzy", "hound", "pound", "round", "sound",
        "mound", "wound", "bound", "found", "doing", "going", "owing", "level", "lever", "eerie",
    ];

    /// Probe words that are never answers
    pub const SAMPLE_GUESSES: &[&str] = &["aeros", "humid", "cloth", "pudgy", "salet", "soare"];

    pub fn sample_store() -> CandidateStore {
        CandidateStore::new(
            &words_from_slice(SAMPLE_ANSWERS),
            &words_from_slice(SAMPLE_GUESSES),
            true,
        )
    }

    #[test]
    fn sample_lists_are_clean() {
        assert_eq!(words_from_slice(SAMPLE_ANSWERS).len(), SAMPLE_ANSWERS.len());
        assert_eq!(words_from_slice(SAMPLE_GUESSES).len(), SAMPLE_GUESSES.len());
        assert_eq!(sample_store().answer_count(), SAMPLE_ANSWERS.len());
    }
}
