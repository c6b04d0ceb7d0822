#![deny(warnings)]
pub mod planner;

pub use planner::{CandidateScore, MovePlanner, Recommendation, candidate_claims};
