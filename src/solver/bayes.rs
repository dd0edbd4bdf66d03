//! Bayesian belief over candidates
//!
//! Keeps an explicit probability table across turns. Feedback enters as a
//! 0/1 likelihood (a word either agrees with every recorded fact or it does
//! not), so the posterior is uniform over survivors. The table is still kept
//! so a non-uniform prior can be slotted in without touching the session.

use super::{BeliefState, FrequencyHeuristic, Strategy};
use crate::candidates::{CandidateStore, CandidateWord};
use crate::constraints::ConstraintState;
use crate::core::Word;

/// Maximum a posteriori selection over a persistent distribution
#[derive(Debug, Clone, Default)]
pub struct BayesianBelief {
    table: Vec<(Word, f64)>,
}

impl BayesianBelief {
    /// Current distribution, in candidate order
    #[must_use]
    pub fn probabilities(&self) -> &[(Word, f64)] {
        &self.table
    }

    #[must_use]
    pub fn probability_of(&self, word: &Word) -> Option<f64> {
        self.table
            .iter()
            .find(|(entry, _)| entry == word)
            .map(|&(_, p)| p)
    }

    /// Bring the table in line with the current candidates and evidence.
    ///
    /// The table is rebuilt uniform whenever it does not hold exactly the
    /// candidate words. Each entry is then weighted by whether its word is
    /// consistent with `constraints` and the result renormalised.
    pub fn update(&mut self, candidates: &[CandidateWord], constraints: &ConstraintState) {
        let same_support = self.table.len() == candidates.len()
            && self
                .table
                .iter()
                .zip(candidates)
                .all(|((word, _), candidate)| *word == candidate.word);

        if !same_support {
            self.reset(candidates);
        }

        for (word, p) in &mut self.table {
            if !constraints.consistent(word) {
                *p = 0.0;
            }
        }

        self.normalize();
    }

    /// Highest-probability word, earliest entry on ties
    #[must_use]
    pub fn map_estimate(&self) -> Option<&Word> {
        let mut best: Option<&(Word, f64)> = None;
        for entry in &self.table {
            if best.is_none_or(|(_, p)| entry.1 > *p) {
                best = Some(entry);
            }
        }
        best.map(|(word, _)| word)
    }

    fn reset(&mut self, candidates: &[CandidateWord]) {
        let mass = 1.0 / candidates.len().max(1) as f64;
        self.table = candidates
            .iter()
            .map(|candidate| (candidate.word.clone(), mass))
            .collect();
    }

    fn normalize(&mut self) {
        if self.table.is_empty() {
            return;
        }

        let total: f64 = self.table.iter().map(|(_, p)| p).sum();
        if total > 0.0 {
            for (_, p) in &mut self.table {
                *p /= total;
            }
        } else {
            let mass = 1.0 / self.table.len() as f64;
            for (_, p) in &mut self.table {
                *p = mass;
            }
        }
    }
}

impl Strategy for BayesianBelief {
    fn select_guess(&mut self, belief: &BeliefState<'_>, store: &CandidateStore) -> Option<Word> {
        self.update(belief.candidates(), belief.constraints());
        match self.map_estimate() {
            Some(word) => Some(word.clone()),
            None => FrequencyHeuristic.select_guess(belief, store),
        }
    }
}
