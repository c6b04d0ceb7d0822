use crate::model::claim::Claim;
use crate::model::params::GameParameters;
use crate::prob::combinatorics::binomial_tail;
use serde::{Deserialize, Serialize};

/// Unconditional claim probability together with the quantities that
/// produced it, for downstream display and reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalEstimate {
    pub probability: f64,
    /// Dice the observer already contributes to the claim.
    pub contribution: u32,
    /// Matches still needed from the unknown dice.
    pub required: u32,
    pub unknown_dice: u32,
    pub match_probability: f64,
}

/// Probability that `claim` is true given only the observer's own dice,
/// with no assumptions about any claimant.
pub fn normal_probability(claim: Claim, params: &GameParameters) -> NormalEstimate {
    let match_probability = params.match_probability(claim.face);
    let contribution = params.observer_contribution(claim.face);
    let unknown_dice = params.unknown_dice();
    let required = claim.quantity.saturating_sub(contribution);
    let probability = binomial_tail(unknown_dice, match_probability, i64::from(required));

    NormalEstimate {
        probability,
        contribution,
        required,
        unknown_dice,
        match_probability,
    }
}
