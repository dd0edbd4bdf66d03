//! Solving session state machine
//!
//! A session owns one constraint state, one candidate store and one strategy.
//! It moves `Init -> Guessing -> {Solved, Exhausted}` either by playing its
//! own recommendations against a known target (simulation) or by folding in
//! feedback reported from outside (interactive).

use super::{BeliefState, Strategy, StrategyKind, StrategyType};
use crate::candidates::{CandidateStore, CandidateWord};
use crate::constraints::ConstraintState;
use crate::core::{Pattern, Word};
use crate::error::SolverError;

/// Guesses allowed in a standard game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No guess recommended yet
    Init,
    /// A recommendation is pending
    Guessing,
    /// The answer was played
    Solved,
    /// Out of guesses or out of words
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Construction options for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Hidden answer for simulation; `None` for interactive play
    pub target: Option<String>,
    pub strategy: StrategyKind,
    /// Fixed first guess; when unset the strategy picks it
    pub starting_word: Option<String>,
    pub use_intersecting: bool,
    pub max_guesses: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target: None,
            strategy: StrategyKind::default(),
            starting_word: None,
            use_intersecting: true,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_starting_word(mut self, word: impl Into<String>) -> Self {
        self.starting_word = Some(word.into());
        self
    }

    #[must_use]
    pub const fn with_intersecting(mut self, enabled: bool) -> Self {
        self.use_intersecting = enabled;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

/// One turn of feedback reported by a human or another program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalFeedback {
    /// Word actually played
    pub guess: String,
    /// Five characters, the known letter at each green slot and `_` elsewhere
    pub green_pattern: String,
    /// Letters reported present but misplaced
    pub yellow_letters: Option<String>,
}

impl ExternalFeedback {
    #[must_use]
    pub fn new(
        guess: impl Into<String>,
        green_pattern: impl Into<String>,
        yellow_letters: Option<&str>,
    ) -> Self {
        Self {
            guess: guess.into(),
            green_pattern: green_pattern.into(),
            yellow_letters: yellow_letters.map(str::to_string),
        }
    }

    /// Feedback saying `guess` was the answer
    #[must_use]
    pub fn solved(guess: impl Into<String>) -> Self {
        let guess = guess.into();
        Self {
            green_pattern: guess.clone(),
            guess,
            yellow_letters: None,
        }
    }
}

/// Summary of a finished (or abandoned) session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub target: Option<Word>,
    pub guesses: Vec<Word>,
    pub patterns: Vec<Pattern>,
    /// Candidates before the first guess, then after each turn
    pub candidate_counts: Vec<usize>,
    pub solved: bool,
}

impl SessionOutcome {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// A single solving session
#[derive(Debug, Clone)]
pub struct Session {
    target: Option<Word>,
    starting_word: Option<Word>,
    max_guesses: usize,
    store: CandidateStore,
    constraints: ConstraintState,
    strategy: StrategyType,
    history: Vec<Word>,
    patterns: Vec<Pattern>,
    candidate_counts: Vec<usize>,
    recommendation: Option<Word>,
    state: SessionState,
}

impl Session {
    /// Build a session over a copy of `store`.
    ///
    /// # Errors
    /// Returns `InvalidWordLength` or `InvalidCharacters` for a malformed
    /// target or starting word, and `UnsupportedTarget` when the target is
    /// not one of the store's answers.
    pub fn new(store: &CandidateStore, config: SessionConfig) -> Result<Self, SolverError> {
        let target = config.target.as_deref().map(Word::new).transpose()?;
        if let Some(target) = &target
            && !store.contains_answer(target)
        {
            return Err(SolverError::UnsupportedTarget(target.text().to_string()));
        }

        let starting_word = config.starting_word.as_deref().map(Word::new).transpose()?;

        let mut store = store.clone();
        store.set_use_intersecting(config.use_intersecting);
        let constraints = ConstraintState::with_mask(store.position_mask());
        let candidate_counts = vec![store.answer_count()];

        Ok(Self {
            target,
            starting_word,
            max_guesses: config.max_guesses,
            store,
            constraints,
            strategy: config.strategy.build(),
            history: Vec::new(),
            patterns: Vec::new(),
            candidate_counts,
            recommendation: None,
            state: SessionState::Init,
        })
    }

    /// Produce the first recommendation.
    ///
    /// Uses the configured starting word, or asks the strategy over the full
    /// candidate set. Does nothing once the session has left `Init`.
    pub fn start(&mut self) -> Option<&Word> {
        if self.state == SessionState::Init {
            self.recommendation = if self.max_guesses == 0 {
                None
            } else {
                self.starting_word.clone().or_else(|| self.recommend())
            };
            self.state = if self.recommendation.is_some() {
                SessionState::Guessing
            } else {
                SessionState::Exhausted
            };
        }
        self.recommendation.as_ref()
    }

    /// Play the current recommendation against the target.
    ///
    /// # Errors
    /// Returns `MissingTarget` when the session was built without a target.
    pub fn step(&mut self) -> Result<SessionState, SolverError> {
        let target = self.target.clone().ok_or(SolverError::MissingTarget)?;

        self.start();
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let Some(guess) = self.recommendation.clone() else {
            self.state = SessionState::Exhausted;
            return Ok(self.state);
        };

        let pattern = Pattern::calculate(&guess, &target);
        self.advance(guess, pattern)
    }

    /// Step until the session ends
    ///
    /// # Errors
    /// Returns `MissingTarget` when the session was built without a target.
    pub fn run(&mut self) -> Result<SessionOutcome, SolverError> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.outcome())
    }

    /// Fold in one turn of feedback reported from outside.
    ///
    /// The played word need not be the current recommendation. A session that
    /// has already finished ignores further feedback.
    ///
    /// # Errors
    /// Returns `InvalidWordLength`/`InvalidCharacters` for a malformed guess
    /// or green pattern, and `InconsistentFeedback` when the report
    /// contradicts itself or earlier turns. The session is left unchanged.
    pub fn apply_external_feedback(
        &mut self,
        feedback: &ExternalFeedback,
    ) -> Result<SessionState, SolverError> {
        self.start();
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let guess = Word::new(&feedback.guess)?;
        let pattern = Pattern::from_external(
            &guess,
            &feedback.green_pattern,
            feedback.yellow_letters.as_deref(),
        )?;
        self.advance(guess, pattern)
    }

    fn advance(&mut self, guess: Word, pattern: Pattern) -> Result<SessionState, SolverError> {
        let solved = pattern.is_perfect();
        if !solved {
            self.constraints.validate(&guess, pattern)?;
        }

        self.store.remove_guessed(&guess);
        if !solved {
            self.constraints.apply_pattern(&guess, pattern);
            self.store.filter(&self.constraints);
        }
        self.history.push(guess);
        self.patterns.push(pattern);
        self.candidate_counts.push(self.store.answer_count());

        if solved {
            self.recommendation = None;
            self.state = SessionState::Solved;
            return Ok(self.state);
        }

        self.recommendation = if self.history.len() >= self.max_guesses {
            None
        } else {
            self.recommend()
        };
        self.state = if self.recommendation.is_some() {
            SessionState::Guessing
        } else {
            SessionState::Exhausted
        };

        Ok(self.state)
    }

    fn recommend(&mut self) -> Option<Word> {
        let belief = BeliefState::new(self.store.answers(), &self.constraints, &self.history);
        self.strategy.select_guess(&belief, &self.store)
    }

    /// Snapshot of the session so far
    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            target: self.target.clone(),
            guesses: self.history.clone(),
            patterns: self.patterns.clone(),
            candidate_counts: self.candidate_counts.clone(),
            solved: self.is_solved(),
        }
    }

    #[must_use]
    pub fn remaining_candidate_count(&self) -> usize {
        self.store.answer_count()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    #[must_use]
    pub fn guess_history(&self) -> &[Word] {
        &self.history
    }

    /// Feedback received for each guess in `guess_history`
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[must_use]
    pub const fn current_recommendation(&self) -> Option<&Word> {
        self.recommendation.as_ref()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Candidates before the first guess, then after each turn
    #[must_use]
    pub fn candidate_counts(&self) -> &[usize] {
        &self.candidate_counts
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// Remaining candidates, best score first
    #[must_use]
    pub fn candidates(&self) -> &[CandidateWord] {
        self.store.answers()
    }

    #[must_use]
    pub const fn store(&self) -> &CandidateStore {
        &self.store
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyType {
        &self.strategy
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}
