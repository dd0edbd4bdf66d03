//! Batch simulation over many targets
//!
//! Every target gets its own session built from a shared, pre-scored store.
//! Sessions share no mutable state, so they run in parallel.

use super::progress_bar;
use crate::candidates::{CandidateStore, CandidateWord};
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Session, SessionConfig, StrategyKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the hardest targets to keep in the summary
const HARDEST_LIMIT: usize = 10;

/// Which answers to simulate against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelection {
    All,
    /// The first `n` answers in score order
    First(usize),
    /// `count` answers drawn without replacement, reproducible from `seed`
    Sample { count: usize, seed: u64 },
}

impl TargetSelection {
    #[must_use]
    pub fn select(self, answers: &[CandidateWord]) -> Vec<Word> {
        let words = answers.iter().map(|candidate| candidate.word.clone());
        match self {
            Self::All => words.collect(),
            Self::First(n) => words.take(n).collect(),
            Self::Sample { count, seed } => {
                let mut words: Vec<Word> = words.collect();
                let mut rng = StdRng::seed_from_u64(seed);
                words.shuffle(&mut rng);
                words.truncate(count);
                words
            }
        }
    }
}

/// Result from one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub target: Word,
    pub guesses: Vec<Word>,
    pub solved: bool,
}

impl GameResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// Aggregate statistics over a batch
#[derive(Debug, Clone)]
pub struct SimulationStats {
    pub strategy: StrategyKind,
    pub starting_word: Option<String>,
    pub max_guesses: usize,
    pub results: Vec<GameResult>,
    /// Solved games keyed by guess count
    pub distribution: BTreeMap<usize, usize>,
    pub solved: usize,
    pub failed: usize,
    /// Mean guesses over solved games only
    pub average_guesses: Option<f64>,
    /// Failures first, then the solved games that took longest
    pub hardest: Vec<(Word, usize, bool)>,
    pub duration: Duration,
}

impl SimulationStats {
    fn from_results(config: &SessionConfig, results: Vec<GameResult>, duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut solved = 0;
        let mut total_guesses = 0;

        for result in results.iter().filter(|r| r.solved) {
            solved += 1;
            total_guesses += result.guess_count();
            *distribution.entry(result.guess_count()).or_insert(0) += 1;
        }

        let average_guesses = (solved > 0).then(|| total_guesses as f64 / solved as f64);

        let mut ranked: Vec<&GameResult> = results.iter().collect();
        ranked.sort_by_key(|r| Reverse((!r.solved, r.guess_count())));
        let hardest = ranked
            .into_iter()
            .take(HARDEST_LIMIT)
            .map(|r| (r.target.clone(), r.guess_count(), r.solved))
            .collect();

        Self {
            strategy: config.strategy,
            starting_word: config.starting_word.clone(),
            max_guesses: config.max_guesses,
            failed: results.len() - solved,
            results,
            distribution,
            solved,
            average_guesses,
            hardest,
            duration,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Fraction of games solved, 0.0 for an empty batch
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.solved as f64 / self.results.len() as f64
        }
    }
}

/// Play one game per target
///
/// `config.target` is ignored; every other setting applies to each game.
///
/// # Errors
///
/// Returns the first construction error, e.g. a malformed starting word or a
/// target that is not one of the store's answers.
pub fn run_simulations(
    store: &CandidateStore,
    targets: &[Word],
    config: &SessionConfig,
    show_progress: bool,
) -> Result<SimulationStats, SolverError> {
    let start = Instant::now();
    let bar = progress_bar(targets.len(), show_progress);

    let results = targets
        .par_iter()
        .map(|target| {
            let game = config.clone().with_target(target.text());
            let outcome = Session::new(store, game)?.run()?;
            bar.inc(1);
            Ok(GameResult {
                target: target.clone(),
                guesses: outcome.guesses,
                solved: outcome.solved,
            })
        })
        .collect::<Result<Vec<_>, SolverError>>()?;

    bar.finish_with_message("done");

    Ok(SimulationStats::from_results(config, results, start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{SAMPLE_ANSWERS, sample_store};

    #[test]
    fn selection_all_and_first() {
        let store = sample_store();

        assert_eq!(TargetSelection::All.select(store.answers()).len(), SAMPLE_ANSWERS.len());

        let first = TargetSelection::First(3).select(store.answers());
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], store.answers()[0].word);

        let too_many = TargetSelection::First(1000).select(store.answers());
        assert_eq!(too_many.len(), SAMPLE_ANSWERS.len());
    }

    #[test]
    fn sample_is_reproducible() {
        let store = sample_store();
        let a = TargetSelection::Sample { count: 8, seed: 7 }.select(store.answers());
        let b = TargetSelection::Sample { count: 8, seed: 7 }.select(store.answers());

        assert_eq!(a.len(), 8);
        assert_eq!(a, b);
        assert!(a.iter().all(|w| store.contains_answer(w)));
    }

    #[test]
    fn batch_statistics_add_up() {
        let store = sample_store();
        let targets = TargetSelection::All.select(store.answers());
        let config = SessionConfig::default()
            .with_strategy(StrategyKind::Entropy)
            .with_starting_word("slate");

        let stats = run_simulations(&store, &targets, &config, false).unwrap();

        assert_eq!(stats.total(), targets.len());
        assert_eq!(stats.solved + stats.failed, stats.total());
        assert_eq!(stats.distribution.values().sum::<usize>(), stats.solved);
        assert!(stats.distribution.keys().all(|&k| (1..=6).contains(&k)));
        assert!(stats.hardest.len() <= HARDEST_LIMIT);
        assert!(stats.success_rate() > 0.5);

        // Results come back in target order
        let order: Vec<&Word> = stats.results.iter().map(|r| &r.target).collect();
        assert_eq!(order, targets.iter().collect::<Vec<_>>());

        if let Some(avg) = stats.average_guesses {
            assert!((1.0..=6.0).contains(&avg));
        }
    }

    #[test]
    fn hardest_lists_failures_first() {
        let store = sample_store();
        let targets = TargetSelection::First(10).select(store.answers());
        let config = SessionConfig::default()
            .with_starting_word("fuzzy")
            .with_max_guesses(2);

        let stats = run_simulations(&store, &targets, &config, false).unwrap();

        if stats.failed > 0 {
            assert!(!stats.hardest[0].2);
        }
        for pair in stats.hardest.windows(2) {
            assert!((!pair[0].2, pair[0].1) >= (!pair[1].2, pair[1].1));
        }
    }

    #[test]
    fn unknown_target_aborts_batch() {
        let store = sample_store();
        let targets = vec![Word::new("zzzzz").unwrap()];

        let err = run_simulations(&store, &targets, &SessionConfig::default(), false).unwrap_err();
        assert!(matches!(err, SolverError::UnsupportedTarget(_)));
    }

    #[test]
    fn empty_batch() {
        let store = sample_store();
        let stats = run_simulations(&store, &[], &SessionConfig::default(), false).unwrap();

        assert_eq!(stats.total(), 0);
        assert!(stats.average_guesses.is_none());
        assert!(stats.success_rate().abs() < f64::EPSILON);
    }
}
