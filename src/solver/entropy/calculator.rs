//! Partition statistics for a guess over a candidate set
//!
//! Every guess splits the candidates into groups that would produce the same
//! feedback pattern. Entropy and the search-cost heuristic are both functions
//! of those group sizes.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Summary of how a guess splits the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of candidates left after this guess
    pub expected_remaining: f64,
    /// Largest partition (worst-case candidates left)
    pub max_partition: usize,
    /// Number of distinct feedback patterns
    pub partitions: usize,
}

/// Count candidates by the pattern they produce against `guess`
#[must_use]
pub fn partition_counts(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_belief::core::Pattern;
/// use wordle_belief::solver::entropy::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// for text in ["-----", "G----", "-G---", "--G--"] {
///     uniform.insert(text.parse::<Pattern>().unwrap(), 25);
/// }
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001);
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &HashMap<Pattern, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected log₂ of the partition a candidate lands in
///
/// h = Σ (|P| / N) * log₂(|P|)
///
/// Same terms as entropy without the leading minus and with log₂ of the
/// group size instead of the group probability. Zero when every group is a
/// singleton; log₂(N) when nothing is split.
#[must_use]
pub fn expected_log_partition<S>(pattern_counts: &HashMap<Pattern, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let size = count as f64;
            (size / total) * size.log2()
        })
        .sum()
}

/// Entropy in bits of `guess` over `candidates`
///
/// # Examples
/// ```
/// use wordle_belief::core::Word;
/// use wordle_belief::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&partition_counts(guess, candidates))
}

/// Entropy, expected remaining, worst case and partition count in one pass
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    let counts = partition_counts(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining = if total == 0.0 {
        0.0
    } else {
        counts
            .values()
            .map(|&count| {
                let size = count as f64;
                size * size / total
            })
            .sum()
    };

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().max().copied().unwrap_or(0),
        partitions: counts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(text: &str) -> Pattern {
        text.parse().unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(pattern("-----"), 10);

        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for (text, (u, s)) in ["-----", "G----", "-G---", "--G--"]
            .iter()
            .zip([(25, 97), (25, 1), (25, 1), (25, 1)])
        {
            uniform.insert(pattern(text), u);
            skewed.insert(pattern(text), s);
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
        assert!(expected_log_partition(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_bounded_by_log_candidates() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "crane", "fuzzy"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let entropy = calculate_entropy(&guess, &refs);
        assert!(entropy >= 0.0);
        assert!(entropy <= (refs.len() as f64).log2() + 1e-12);
    }

    #[test]
    fn entropy_zero_iff_single_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!(calculate_entropy(&guess, &refs).abs() < 0.001);
        assert_eq!(partition_counts(&guess, &refs).len(), 1);

        let guess = Word::new("abcde").unwrap();
        assert!(calculate_entropy(&guess, &refs) > 0.0);
    }

    #[test]
    fn entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!((calculate_entropy(&guess, &refs) - 1.0).abs() < 0.001);
    }

    #[test]
    fn expected_log_partition_extremes() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        // Nothing split: every candidate in one group of 4
        let blind = partition_counts(&Word::new("zzzzz").unwrap(), &refs);
        assert!((expected_log_partition(&blind) - 2.0).abs() < 1e-12);

        // Fully split: four singletons
        let sharp = partition_counts(&Word::new("abcdz").unwrap(), &refs);
        assert_eq!(sharp.len(), 4);
        assert!(expected_log_partition(&sharp).abs() < 1e-12);
    }

    #[test]
    fn metrics_agree_with_partitions() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "crate", "grate", "crane"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let metrics = calculate_metrics(&guess, &refs);
        let counts = partition_counts(&guess, &refs);

        assert_eq!(metrics.partitions, counts.len());
        assert!((metrics.entropy - shannon_entropy(&counts)).abs() < 1e-12);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= refs.len() as f64);
    }

    #[test]
    fn metrics_on_empty_candidates() {
        let metrics = calculate_metrics(&Word::new("crane").unwrap(), &[]);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.partitions, 0);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
    }
}
