//! Guess selection and the solving loop
//!
//! Four policies sit behind the `Strategy` trait. A `Session` drives one of
//! them turn by turn, handing it a fresh `BeliefState` for every decision.

mod astar;
mod bayes;
mod belief;
pub mod entropy;
mod frequency;
mod session;
pub mod strategy;

pub use astar::AStarEvaluation;
pub use bayes::BayesianBelief;
pub use belief::BeliefState;
pub use frequency::FrequencyHeuristic;
pub use session::{
    DEFAULT_MAX_GUESSES, ExternalFeedback, Session, SessionConfig, SessionOutcome, SessionState,
};
pub use strategy::{EntropyHeuristic, Strategy, StrategyKind, StrategyType};
