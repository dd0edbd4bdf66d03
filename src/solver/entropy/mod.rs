//! Information-theoretic scoring
//!
//! Partition a candidate set by feedback pattern and score guesses by the
//! resulting distribution: Shannon entropy for the entropy policy, expected
//! log partition size for the search-cost policy.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, expected_log_partition, partition_counts,
    shannon_entropy,
};
pub use selector::{select_best_guess, select_lowest_cost};
