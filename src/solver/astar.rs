//! Search-cost policy
//!
//! Treats solving as a shortest-path search: the cost so far is the number
//! of guesses played, one more is spent on the next guess, and the remaining
//! cost is estimated by the expected log₂ size of the partition the answer
//! falls into. The guess with the lowest total wins.

use super::{BeliefState, FrequencyHeuristic, Strategy};
use crate::candidates::CandidateStore;
use crate::core::Word;

/// Lowest f = g + 1 + h over the candidate set
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarEvaluation;

impl Strategy for AStarEvaluation {
    fn select_guess(&mut self, belief: &BeliefState<'_>, store: &CandidateStore) -> Option<Word> {
        match belief.candidates() {
            [] => FrequencyHeuristic.select_guess(belief, store),
            [only] => Some(only.word.clone()),
            _ => {
                let candidates = belief.candidate_words();
                super::entropy::select_lowest_cost(
                    &candidates,
                    &candidates,
                    belief.guesses_made(),
                    |word| belief.is_unplayed_candidate(word),
                )
                .map(|(best, _)| best.clone())
            }
        }
    }
}
