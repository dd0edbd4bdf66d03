//! Error type shared by the solving engine

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Numeric degenerate cases (no candidates left, zero probability mass) are
/// recovered inside the strategies and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidWordLength(usize),

    #[error("word contains non-alphabetic characters: {0}")]
    InvalidCharacters(String),

    #[error("{0} is not a supported answer")]
    UnsupportedTarget(String),

    #[error("inconsistent feedback: {0}")]
    InconsistentFeedback(String),

    #[error("no target word configured for simulation")]
    MissingTarget,
}
