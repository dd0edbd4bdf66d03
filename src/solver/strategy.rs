//! Guess selection strategies
//!
//! Defines the Strategy trait, the configuration-level `StrategyKind` and the
//! `StrategyType` wrapper that dispatches to a concrete policy.

use super::{AStarEvaluation, BayesianBelief, BeliefState, FrequencyHeuristic};
use crate::candidates::CandidateStore;
use crate::core::Word;
use std::fmt;
use std::str::FromStr;

/// A policy that picks the next guess from the current belief
pub trait Strategy {
    /// Pick the next word to play.
    ///
    /// `store` exposes the scored pools for policies that look beyond the
    /// candidate set. Returns `None` only when nothing is left to play.
    fn select_guess(&mut self, belief: &BeliefState<'_>, store: &CandidateStore) -> Option<Word>;
}

/// Policy names accepted by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Letter-frequency scores with the intersecting probe
    #[default]
    Frequency,
    /// Maximum Shannon entropy over the candidates
    Entropy,
    /// Maximum a posteriori candidate
    Bayesian,
    /// Lowest estimated total search cost
    AStar,
}

impl StrategyKind {
    pub const ALL: [Self; 4] = [Self::Frequency, Self::Entropy, Self::Bayesian, Self::AStar];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Entropy => "entropy",
            Self::Bayesian => "bayesian",
            Self::AStar => "astar",
        }
    }

    /// Fresh policy instance for one session
    #[must_use]
    pub fn build(self) -> StrategyType {
        match self {
            Self::Frequency => StrategyType::Frequency(FrequencyHeuristic),
            Self::Entropy => StrategyType::Entropy(EntropyHeuristic),
            Self::Bayesian => StrategyType::Bayesian(BayesianBelief::default()),
            Self::AStar => StrategyType::AStar(AStarEvaluation),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" | "baseline" => Ok(Self::Frequency),
            "entropy" => Ok(Self::Entropy),
            "bayesian" | "bayes" => Ok(Self::Bayesian),
            "astar" | "a-star" | "a*" => Ok(Self::AStar),
            other => Err(format!(
                "unknown strategy '{other}' (expected frequency, entropy, bayesian or astar)"
            )),
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Frequency(FrequencyHeuristic),
    Entropy(EntropyHeuristic),
    Bayesian(BayesianBelief),
    AStar(AStarEvaluation),
}

impl StrategyType {
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Frequency(_) => StrategyKind::Frequency,
            Self::Entropy(_) => StrategyKind::Entropy,
            Self::Bayesian(_) => StrategyKind::Bayesian,
            Self::AStar(_) => StrategyKind::AStar,
        }
    }
}

impl Strategy for StrategyType {
    fn select_guess(&mut self, belief: &BeliefState<'_>, store: &CandidateStore) -> Option<Word> {
        match self {
            Self::Frequency(s) => s.select_guess(belief, store),
            Self::Entropy(s) => s.select_guess(belief, store),
            Self::Bayesian(s) => s.select_guess(belief, store),
            Self::AStar(s) => s.select_guess(belief, store),
        }
    }
}

/// Pure entropy maximization over the candidate set
///
/// With no candidates it falls back to the frequency heuristic; with one it
/// returns that word.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyHeuristic;

impl Strategy for EntropyHeuristic {
    fn select_guess(&mut self, belief: &BeliefState<'_>, store: &CandidateStore) -> Option<Word> {
        match belief.candidates() {
            [] => FrequencyHeuristic.select_guess(belief, store),
            [only] => Some(only.word.clone()),
            _ => {
                let candidates = belief.candidate_words();
                super::entropy::select_best_guess(&candidates, &candidates, |word| {
                    belief.is_unplayed_candidate(word)
                })
                .map(|(best, _)| best.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintState;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn kind_parses_names_and_aliases() {
        assert_eq!("frequency".parse::<StrategyKind>(), Ok(StrategyKind::Frequency));
        assert_eq!("Baseline".parse::<StrategyKind>(), Ok(StrategyKind::Frequency));
        assert_eq!("entropy".parse::<StrategyKind>(), Ok(StrategyKind::Entropy));
        assert_eq!("bayes".parse::<StrategyKind>(), Ok(StrategyKind::Bayesian));
        assert_eq!(" BAYESIAN ".parse::<StrategyKind>(), Ok(StrategyKind::Bayesian));
        assert_eq!("astar".parse::<StrategyKind>(), Ok(StrategyKind::AStar));
        assert!("minimax".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn kind_round_trips_through_display() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
            assert_eq!(kind.build().kind(), kind);
        }
    }

    #[test]
    fn entropy_returns_sole_candidate() {
        let answers = words(&["crane"]);
        let store = CandidateStore::new(&answers, &words(&["aeros"]), false);
        let constraints = ConstraintState::new();
        let belief = BeliefState::new(store.answers(), &constraints, &[]);

        let pick = EntropyHeuristic.select_guess(&belief, &store);
        assert_eq!(pick, Some(Word::new("crane").unwrap()));
    }

    #[test]
    fn entropy_picks_a_candidate() {
        let answers = words(&["slate", "crate", "grate", "irate", "crane"]);
        let store = CandidateStore::new(&answers, &[], false);
        let constraints = ConstraintState::new();
        let belief = BeliefState::new(store.answers(), &constraints, &[]);

        let pick = EntropyHeuristic.select_guess(&belief, &store).unwrap();
        assert!(answers.contains(&pick));
    }

    #[test]
    fn entropy_falls_back_to_frequency_when_empty() {
        let answers = words(&["crane"]);
        let store = CandidateStore::new(&answers, &[], false);
        let constraints = ConstraintState::new();
        let belief = BeliefState::new(&[], &constraints, &[]);

        let pick = EntropyHeuristic.select_guess(&belief, &store);
        assert_eq!(pick, FrequencyHeuristic.select_guess(&belief, &store));
    }
}
