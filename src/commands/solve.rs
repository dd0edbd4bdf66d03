//! Word solving command
//!
//! Plays one simulated game against a known target and records each turn.

use crate::candidates::CandidateStore;
use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Session, SessionConfig, StrategyKind};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub strategy: StrategyKind,
    pub success: bool,
    pub turns: Vec<TurnRecord>,
    /// Constraint summary after the last turn
    pub final_constraints: String,
}

impl SolveResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }
}

/// A single turn of the solution
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was played against
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
    /// Whether the guess could itself have been the answer
    pub was_candidate: bool,
}

/// Solve `config.target` with a fresh session over `store`
///
/// # Errors
///
/// Returns an error if:
/// - No target is configured, or it is not a 5-letter word
/// - The target is not one of the store's answers
/// - The starting word is malformed
pub fn solve_target(
    store: &CandidateStore,
    config: SessionConfig,
) -> Result<SolveResult, SolverError> {
    let strategy = config.strategy;
    let mut session = Session::new(store, config)?;
    let target = session.target().cloned().ok_or(SolverError::MissingTarget)?;
    let mut turns = Vec::new();

    session.start();
    while let Some(guess) = session.current_recommendation().cloned() {
        let candidates_before = session.remaining_candidate_count();
        let was_candidate = session.store().contains_answer(&guess);

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let candidates: Vec<&Word> = session.candidates().iter().map(|c| &c.word).collect();
            let metrics = calculate_metrics(&guess, &candidates);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        session.step()?;

        let pattern = session
            .patterns()
            .last()
            .copied()
            .unwrap_or(Pattern::MISS);

        turns.push(TurnRecord {
            word: guess,
            pattern,
            candidates_before,
            candidates_after: session.remaining_candidate_count(),
            entropy,
            expected_remaining,
            was_candidate,
        });
    }

    Ok(SolveResult {
        target,
        strategy,
        success: session.is_solved(),
        turns,
        final_constraints: session.constraints().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::sample_store;

    #[test]
    fn solve_crane_from_slate() {
        let store = sample_store();
        let config = SessionConfig::default()
            .with_target("crane")
            .with_starting_word("slate")
            .with_strategy(StrategyKind::Entropy);

        let result = solve_target(&store, config).unwrap();

        assert!(result.success);
        assert_eq!(result.turns[0].word.text(), "SLATE");
        assert_eq!(result.turns[0].pattern.to_string(), "--G-G");
        assert!(result.turns.last().unwrap().pattern.is_perfect());
        assert_eq!(result.strategy, StrategyKind::Entropy);
    }

    #[test]
    fn solve_records_candidate_reduction() {
        let store = sample_store();
        for kind in StrategyKind::ALL {
            let config = SessionConfig::default()
                .with_target("hound")
                .with_strategy(kind);
            let result = solve_target(&store, config).unwrap();

            assert!(!result.turns.is_empty());
            for turn in &result.turns {
                assert!(turn.candidates_after <= turn.candidates_before);
            }
            for pair in result.turns.windows(2) {
                assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
            }
        }
    }

    #[test]
    fn solve_respects_max_guesses() {
        let store = sample_store();
        let config = SessionConfig::default()
            .with_target("hound")
            .with_starting_word("fuzzy")
            .with_max_guesses(1);

        let result = solve_target(&store, config).unwrap();

        assert!(!result.success);
        assert_eq!(result.guess_count(), 1);
    }

    #[test]
    fn solve_unknown_target_is_an_error() {
        let store = sample_store();
        let config = SessionConfig::default().with_target("zzzzz");

        assert!(matches!(
            solve_target(&store, config),
            Err(SolverError::UnsupportedTarget(_))
        ));
    }

    #[test]
    fn solve_without_target_is_an_error() {
        let store = sample_store();
        assert_eq!(
            solve_target(&store, SessionConfig::default()).unwrap_err(),
            SolverError::MissingTarget
        );
    }

    #[test]
    fn lucky_first_guess_solves_in_one() {
        let store = sample_store();
        let config = SessionConfig::default()
            .with_target("crane")
            .with_starting_word("crane");

        let result = solve_target(&store, config).unwrap();

        assert_eq!(result.guess_count(), 1);
        assert!(result.turns[0].entropy.is_some());
        assert!(result.turns[0].was_candidate);
    }
}
