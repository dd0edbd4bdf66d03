//! Word inspection command
//!
//! Reports how a single word scores and how well it splits the full answer
//! pool as an opening guess.

use crate::candidates::CandidateStore;
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};

/// Result of inspecting a word
#[derive(Debug, Clone)]
pub struct InspectResult {
    pub word: Word,
    /// Positional frequency score
    pub score: u32,
    /// Letter-presence score, ignoring position
    pub presence_score: u32,
    /// 1-based rank by presence score among legal guesses, with the pool size
    pub guess_rank: Option<(usize, usize)>,
    pub is_answer: bool,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
}

impl InspectResult {
    /// Expected shrink factor of the answer pool, 2^entropy
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Inspect `word` against the store's answers
///
/// # Errors
///
/// Returns an error if the word is not five ASCII letters.
pub fn inspect_word(store: &CandidateStore, word: &str) -> Result<InspectResult, SolverError> {
    let word = Word::new(word)?;

    let answers: Vec<&Word> = store.answers().iter().map(|c| &c.word).collect();
    let metrics = calculate_metrics(&word, &answers);

    Ok(InspectResult {
        score: store.score(&word, true),
        presence_score: store.score(&word, false),
        guess_rank: store.rank_of(&word),
        is_answer: store.contains_answer(&word),
        metrics,
        total_candidates: answers.len(),
        word,
    })
}
