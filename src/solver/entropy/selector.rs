//! Guess selection over partition statistics
//!
//! Scores are computed in parallel, then reduced sequentially in pool order
//! so ties resolve the same way on every run.

use super::calculator::{calculate_entropy, expected_log_partition, partition_counts};
use crate::core::Word;
use rayon::prelude::*;

/// Relative tolerance under which two scores count as tied
const TIE_TOLERANCE: f64 = 1e-9;

fn is_tie(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Reduce scored words to one, in order.
///
/// A strictly better score replaces the current pick. On a tie the current
/// pick is replaced only when the challenger is `preferred` and the current
/// pick is not; otherwise the earlier word stays.
fn pick_best<'a, B, P>(
    scored: Vec<(&'a Word, f64)>,
    better: B,
    preferred: P,
) -> Option<(&'a Word, f64)>
where
    B: Fn(f64, f64) -> bool,
    P: Fn(&Word) -> bool,
{
    let mut best: Option<(&'a Word, f64)> = None;

    for (word, score) in scored {
        best = match best {
            None => Some((word, score)),
            Some((current, current_score)) if is_tie(score, current_score) => {
                if preferred(word) && !preferred(current) {
                    Some((word, score))
                } else {
                    best
                }
            }
            Some((_, current_score)) if better(score, current_score) => Some((word, score)),
            Some(_) => best,
        };
    }

    best
}

/// Select the guess with the highest entropy over `candidates`
///
/// Returns the word and its entropy, or `None` if `actions` is empty.
///
/// # Examples
/// ```
/// use wordle_belief::core::Word;
/// use wordle_belief::solver::entropy::select_best_guess;
///
/// let pool = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
///     Word::new("arose").unwrap(),
/// ];
///
/// let actions: Vec<&Word> = pool.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&actions, &candidate_refs, |_| true).unwrap();
/// assert_eq!(best.text(), "AEROS");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a, P>(
    actions: &[&'a Word],
    candidates: &[&Word],
    preferred: P,
) -> Option<(&'a Word, f64)>
where
    P: Fn(&Word) -> bool,
{
    let scored: Vec<(&'a Word, f64)> = actions
        .par_iter()
        .map(|&guess| (guess, calculate_entropy(guess, candidates)))
        .collect();

    pick_best(scored, |new, current| new > current, preferred)
}

/// Select the guess with the lowest estimated total search cost
///
/// f(g) = `guesses_made` + 1 + Σ (|P| / N) * log₂(|P|)
///
/// Returns the word and its cost, or `None` if `actions` is empty.
#[must_use]
pub fn select_lowest_cost<'a, P>(
    actions: &[&'a Word],
    candidates: &[&Word],
    guesses_made: usize,
    preferred: P,
) -> Option<(&'a Word, f64)>
where
    P: Fn(&Word) -> bool,
{
    let base = (guesses_made + 1) as f64;
    let scored: Vec<(&'a Word, f64)> = actions
        .par_iter()
        .map(|&guess| {
            let counts = partition_counts(guess, candidates);
            (guess, base + expected_log_partition(&counts))
        })
        .collect();

    pick_best(scored, |new, current| new < current, preferred)
}
