//! Wordle Belief
//!
//! A Wordle engine that tracks an explicit belief state (the answers still
//! consistent with every piece of feedback) and plugs interchangeable guess
//! policies into one solving loop: letter frequency, Shannon entropy,
//! Bayesian MAP and an A*-style search cost.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_belief::candidates::CandidateStore;
//! use wordle_belief::core::{Pattern, Word};
//! use wordle_belief::solver::{Session, SessionConfig, StrategyKind};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "--G-G");
//!
//! let answers: Vec<Word> = ["crane", "slate", "grape", "plate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let store = CandidateStore::new(&answers, &[], true);
//!
//! let config = SessionConfig::default()
//!     .with_target("plate")
//!     .with_strategy(StrategyKind::Entropy);
//! let outcome = Session::new(&store, config).unwrap().run().unwrap();
//! assert!(outcome.solved);
//! ```

// Error type
pub mod error;

// Core domain types
pub mod core;

// Accumulated feedback facts
pub mod constraints;

// Scored answer and guess pools
pub mod candidates;

// Strategies and the solving loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
