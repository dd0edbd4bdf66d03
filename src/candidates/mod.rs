//! Candidate pools and letter-frequency scoring

mod frequency;
mod store;

pub use frequency::LetterFrequency;
pub use store::{CandidateStore, CandidateWord};
