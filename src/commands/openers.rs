//! Opening-word ranking
//!
//! Scores each opener by how much of the answer pool the engine keeps after
//! playing it first, averaged over every other possible answer.

use crate::candidates::CandidateStore;
use crate::constraints::ConstraintState;
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// How one opener fares against the answer pool
#[derive(Debug, Clone, PartialEq)]
pub struct OpenerStats {
    pub word: Word,
    /// Mean fraction of answers left after the first turn
    pub average_remaining: f64,
    /// Target leaving the fewest answers, with that count
    pub best: Option<(Word, usize)>,
    /// Target leaving the most answers, with that count
    pub worst: Option<(Word, usize)>,
}

/// Rank `openers` by average remaining fraction, lowest first
///
/// A target equal to the opener is skipped. Ties keep the order the openers
/// were given in.
#[must_use]
pub fn rank_openers(store: &CandidateStore, openers: &[Word]) -> Vec<OpenerStats> {
    let mut ranked: Vec<OpenerStats> = openers
        .par_iter()
        .map(|opener| evaluate(store, opener))
        .collect();

    ranked.sort_by(|a, b| a.average_remaining.total_cmp(&b.average_remaining));
    ranked
}

/// Answers a session keeps after `opener` draws `pattern`
fn answers_left(store: &CandidateStore, opener: &Word, pattern: Pattern) -> usize {
    let mut constraints = ConstraintState::with_mask(store.position_mask());
    constraints.apply_pattern(opener, pattern);
    let mask = constraints.mask();

    store
        .answers()
        .iter()
        .filter(|c| c.word != *opener && mask.admits(&c.word) && constraints.consistent(&c.word))
        .count()
}

fn evaluate(store: &CandidateStore, opener: &Word) -> OpenerStats {
    let total = store.answer_count();

    // The filter depends only on the pattern, so each one is counted once
    let mut left_by_pattern: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut sum = 0usize;
    let mut played = 0usize;
    let mut best: Option<(Word, usize)> = None;
    let mut worst: Option<(Word, usize)> = None;

    for candidate in store.answers() {
        let target = &candidate.word;
        if target == opener {
            continue;
        }

        let pattern = Pattern::calculate(opener, target);
        let left = *left_by_pattern
            .entry(pattern)
            .or_insert_with(|| answers_left(store, opener, pattern));
        sum += left;
        played += 1;

        if best.as_ref().is_none_or(|(_, n)| left < *n) {
            best = Some((target.clone(), left));
        }
        if worst.as_ref().is_none_or(|(_, n)| left > *n) {
            worst = Some((target.clone(), left));
        }
    }

    let average_remaining = if played == 0 {
        0.0
    } else {
        sum as f64 / (played * total) as f64
    };

    OpenerStats {
        word: opener.clone(),
        average_remaining,
        best,
        worst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Session, SessionConfig};
    use crate::wordlists::sample_store;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn ranked_lowest_first() {
        let store = sample_store();
        let ranked = rank_openers(&store, &words(&["fuzzy", "slate", "crane", "eerie"]));

        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].average_remaining <= pair[1].average_remaining);
        }
        for stats in &ranked {
            assert!(stats.average_remaining > 0.0 && stats.average_remaining <= 1.0);
        }
        // FUZZY leaves most of the pool untouched
        assert_eq!(ranked.last().unwrap().word.text(), "FUZZY");
    }

    #[test]
    fn best_and_worst_targets() {
        let store = sample_store();
        let stats = &rank_openers(&store, &words(&["crane"]))[0];

        let (best_word, best_left) = stats.best.clone().unwrap();
        let (_, worst_left) = stats.worst.clone().unwrap();

        assert!(best_left >= 1);
        assert!(best_left <= worst_left);
        assert!(store.contains_answer(&best_word));
    }

    #[test]
    fn skips_the_opener_as_target() {
        let answers = words(&["crane", "crate", "grate", "fuzzy"]);
        let store = CandidateStore::new(&answers, &[], false);
        let stats = &rank_openers(&store, &words(&["fuzzy"]))[0];

        // Three targets, each leaving the other three non-FUZZY answers
        assert!((stats.average_remaining - 9.0 / 12.0).abs() < 1e-12);
        assert_eq!(stats.best.as_ref().map(|(_, n)| *n), Some(3));
        assert_ne!(stats.best.as_ref().map(|(w, _)| w.text()), Some("FUZZY"));
    }

    #[test]
    fn excess_gray_copy_only_excludes_its_slot() {
        // SPEED against CRANE marks one E yellow and the other gray, which
        // rules E out at slot 4 only, so EERIE survives too
        let answers = words(&["crane", "eerie"]);
        let store = CandidateStore::new(&answers, &[], false);
        let stats = &rank_openers(&store, &words(&["speed"]))[0];

        assert!((stats.average_remaining - 1.0).abs() < 1e-12);
        assert_eq!(stats.worst.as_ref().map(|(_, n)| *n), Some(2));
    }

    #[test]
    fn agrees_with_one_turn_sessions() {
        let store = sample_store();
        for opener in ["slate", "speed", "crane", "humid"] {
            let opener = Word::new(opener).unwrap();
            let stats = &rank_openers(&store, std::slice::from_ref(&opener))[0];

            let mut sum = 0;
            let mut played = 0;
            for candidate in store.answers() {
                if candidate.word == opener {
                    continue;
                }
                let config = SessionConfig::default()
                    .with_target(candidate.word.text())
                    .with_starting_word(opener.text());
                let mut session = Session::new(&store, config).unwrap();
                session.step().unwrap();
                sum += session.remaining_candidate_count();
                played += 1;
            }

            let expected = sum as f64 / (played * store.answer_count()) as f64;
            assert!(
                (stats.average_remaining - expected).abs() < 1e-12,
                "{opener}: {} vs {expected}",
                stats.average_remaining
            );
        }
    }

    #[test]
    fn empty_pool() {
        let store = CandidateStore::new(&[], &[], false);
        let stats = &rank_openers(&store, &words(&["crane"]))[0];

        assert!(stats.average_remaining.abs() < f64::EPSILON);
        assert!(stats.best.is_none());
        assert!(stats.worst.is_none());
    }
}
