//! Letter-frequency baseline

use super::{BeliefState, Strategy};
use crate::candidates::CandidateStore;
use crate::core::Word;

/// Delegates to the store's own ranking.
///
/// Ignores the candidate list in the belief and reads the store's pools, so
/// the intersecting probe can reach words outside the candidate set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyHeuristic;

impl Strategy for FrequencyHeuristic {
    fn select_guess(&mut self, belief: &BeliefState<'_>, store: &CandidateStore) -> Option<Word> {
        store.next_guess(belief.history())
    }
}
