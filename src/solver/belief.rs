//! Per-decision view of what the solver knows

use crate::candidates::CandidateWord;
use crate::constraints::ConstraintState;
use crate::core::Word;

/// Candidates, constraints and guess history at one decision point.
///
/// Built by the session right before each strategy call and borrowed for the
/// duration of that call only. Strategies read the belief; they never refresh
/// it.
#[derive(Debug, Clone, Copy)]
pub struct BeliefState<'a> {
    candidates: &'a [CandidateWord],
    constraints: &'a ConstraintState,
    history: &'a [Word],
}

impl<'a> BeliefState<'a> {
    #[must_use]
    pub const fn new(
        candidates: &'a [CandidateWord],
        constraints: &'a ConstraintState,
        history: &'a [Word],
    ) -> Self {
        Self {
            candidates,
            constraints,
            history,
        }
    }

    /// Words still consistent with every observation, best score first
    #[must_use]
    pub const fn candidates(&self) -> &'a [CandidateWord] {
        self.candidates
    }

    /// Candidate words without their scores
    #[must_use]
    pub fn candidate_words(&self) -> Vec<&'a Word> {
        self.candidates.iter().map(|candidate| &candidate.word).collect()
    }

    #[must_use]
    pub const fn constraints(&self) -> &'a ConstraintState {
        self.constraints
    }

    /// Guesses played so far, oldest first
    #[must_use]
    pub const fn history(&self) -> &'a [Word] {
        self.history
    }

    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.history.len()
    }

    /// True when `word` has not been played and could still be the answer
    #[must_use]
    pub fn is_unplayed_candidate(&self, word: &Word) -> bool {
        !self.history.contains(word) && self.candidates.iter().any(|c| c.word == *word)
    }
}
