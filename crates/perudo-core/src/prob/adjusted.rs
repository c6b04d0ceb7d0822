//! Claimant-aware claim probability.
//!
//! Models the claimant's hidden hand as `K` = number of their dice that
//! count toward the claim, conditions on the fact that they voiced the
//! claim at all (a claimant short of the expected-matches threshold only
//! claims with probability `bluff_rate`), and integrates the truth
//! probability over the resulting posterior.

use crate::model::claim::Claim;
use crate::model::params::GameParameters;
use crate::prob::combinatorics::{binomial_coefficient, binomial_tail};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Output of the claimant-aware model. Every intermediate stage is kept,
/// indexed by `k = 0..=claimant_dice`, so a caller can render the full
/// derivation rather than just the final scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedEstimate {
    pub probability: f64,
    /// Dice the observer already contributes to the claim.
    pub contribution: u32,
    /// Matches still needed from everyone but the observer.
    pub required: u32,
    pub claimant_dice: u32,
    /// Dice belonging to neither the observer nor the claimant.
    pub rest_dice: u32,
    pub match_probability: f64,
    /// Expected matches in the claimant's hand, rounded down; at or above
    /// it the claimant is assumed to claim truthfully with certainty.
    pub threshold: u32,
    /// Normalizing constant: the marginal probability of hearing the claim.
    pub claim_probability: f64,
    /// Binomial prior over the claimant's matching dice.
    pub prior: Vec<f64>,
    /// Likelihood of the claim being voiced for each hand.
    pub claim_given_matches: Vec<f64>,
    /// Unnormalized product of prior and likelihood.
    pub joint: Vec<f64>,
    /// Posterior over the claimant's hand after hearing the claim.
    pub posterior: Vec<f64>,
    /// Probability the remaining players supply the shortfall, per hand.
    pub truth_given_matches: Vec<f64>,
    /// Posterior-weighted truth probabilities; their sum is `probability`.
    pub weighted: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdjustedModelError {
    /// Every hand assigns zero joint probability to the observed claim, so
    /// the posterior is undefined.
    UndefinedPosterior { claim_probability: f64 },
}

impl fmt::Display for AdjustedModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustedModelError::UndefinedPosterior { claim_probability } => write!(
                f,
                "claim likelihood sums to {claim_probability}; the posterior over the claimant's hand is undefined"
            ),
        }
    }
}

impl std::error::Error for AdjustedModelError {}

/// Probability that `claim` is true given that the modeled claimant voiced
/// it, integrating over the claimant's possible hands.
pub fn adjusted_probability(
    claim: Claim,
    params: &GameParameters,
) -> Result<AdjustedEstimate, AdjustedModelError> {
    let match_probability = params.match_probability(claim.face);
    let contribution = params.observer_contribution(claim.face);
    let required = claim.quantity.saturating_sub(contribution);
    let claimant_dice = params.claimant_dice();
    let rest_dice = params.rest_dice();
    let threshold = (f64::from(claimant_dice) * match_probability).floor() as u32;

    let prior: Vec<f64> = (0..=claimant_dice)
        .map(|k| {
            binomial_coefficient(claimant_dice, i64::from(k))
                * match_probability.powi(k as i32)
                * (1.0 - match_probability).powi((claimant_dice - k) as i32)
        })
        .collect();

    let claim_given_matches: Vec<f64> = (0..=claimant_dice)
        .map(|k| {
            if k >= threshold {
                1.0
            } else {
                params.bluff_rate()
            }
        })
        .collect();

    let joint: Vec<f64> = prior
        .iter()
        .zip(&claim_given_matches)
        .map(|(prior, likelihood)| prior * likelihood)
        .collect();

    let (posterior, claim_probability) = normalize(&joint)?;

    let truth_given_matches: Vec<f64> = (0..=claimant_dice)
        .map(|k| {
            // required - k may go negative; the tail treats that as certainty.
            binomial_tail(
                rest_dice,
                match_probability,
                i64::from(required) - i64::from(k),
            )
        })
        .collect();

    let weighted: Vec<f64> = posterior
        .iter()
        .zip(&truth_given_matches)
        .map(|(posterior, truth)| posterior * truth)
        .collect();

    let probability = weighted.iter().sum();

    Ok(AdjustedEstimate {
        probability,
        contribution,
        required,
        claimant_dice,
        rest_dice,
        match_probability,
        threshold,
        claim_probability,
        prior,
        claim_given_matches,
        joint,
        posterior,
        truth_given_matches,
        weighted,
    })
}

/// Bayes' rule denominator and division, split out so the degenerate
/// zero-mass case stays a typed error instead of a NaN posterior.
fn normalize(joint: &[f64]) -> Result<(Vec<f64>, f64), AdjustedModelError> {
    let total: f64 = joint.iter().sum();
    if total <= 0.0 {
        return Err(AdjustedModelError::UndefinedPosterior {
            claim_probability: total,
        });
    }
    let posterior = joint.iter().map(|mass| mass / total).collect();
    Ok((posterior, total))
}

#[cfg(test)]
mod tests {
    use super::{AdjustedModelError, adjusted_probability, normalize};
    use crate::model::claim::Claim;
    use crate::model::face::Face;
    use crate::model::params::GameParameters;

    const EPSILON: f64 = 1e-9;

    fn params(
        total: u32,
        observer: &str,
        claimant_dice: u32,
        bluff_rate: f64,
        wild_ones: bool,
    ) -> GameParameters {
        GameParameters::new(
            total,
            observer.parse().unwrap(),
            claimant_dice,
            bluff_rate,
            wild_ones,
        )
        .unwrap()
    }

    #[test]
    fn posterior_sums_to_one() {
        let params = params(18, "2,3,3,6", 6, 0.25, true);
        let estimate = adjusted_probability(Claim::new(7, Face::Three), &params).unwrap();
        let total: f64 = estimate.posterior.iter().sum();
        assert!((total - 1.0).abs() < EPSILON);
        assert!(estimate.claim_probability > 0.0);
        assert!((0.0..=1.0 + EPSILON).contains(&estimate.probability));
    }

    #[test]
    fn zero_threshold_makes_every_hand_truthful() {
        // claimant_dice = 5, p = 1/6 => threshold = floor(5/6) = 0, so the
        // likelihood is 1 everywhere and the posterior equals the prior
        // even with a zero bluff rate.
        let params = params(12, "4,5", 5, 0.0, false);
        let estimate = adjusted_probability(Claim::new(3, Face::Four), &params).unwrap();

        assert_eq!(estimate.threshold, 0);
        assert!(estimate.claim_given_matches.iter().all(|&l| l == 1.0));
        assert!((estimate.claim_probability - 1.0).abs() < EPSILON);
        for (posterior, prior) in estimate.posterior.iter().zip(&estimate.prior) {
            assert!((posterior - prior).abs() < EPSILON);
        }
    }

    #[test]
    fn threshold_splits_the_likelihood() {
        // claimant_dice = 6, p = 1/3 => threshold = 2.
        let params = params(20, "2,2", 6, 0.4, true);
        let estimate = adjusted_probability(Claim::new(8, Face::Five), &params).unwrap();

        assert_eq!(estimate.threshold, 2);
        assert_eq!(estimate.claim_given_matches.len(), 7);
        assert!((estimate.claim_given_matches[0] - 0.4).abs() < EPSILON);
        assert!((estimate.claim_given_matches[1] - 0.4).abs() < EPSILON);
        assert!(estimate.claim_given_matches[2..].iter().all(|&l| l == 1.0));

        // Bluffing makes short hands less likely than the prior says.
        assert!(estimate.posterior[0] < estimate.prior[0]);
    }

    #[test]
    fn hand_computed_two_player_case() {
        // total=3, observer holds one 5, claimant holds one die, no wilds.
        // Claim 2x5: contribution 1, R=1, rest=1, p=1/6, threshold=0.
        // posterior = prior = [5/6, 1/6]; truth = [1/6, 1];
        // probability = 5/36 + 6/36 = 11/36.
        let params = params(3, "5", 1, 0.5, false);
        let estimate = adjusted_probability(Claim::new(2, Face::Five), &params).unwrap();

        assert_eq!(estimate.required, 1);
        assert_eq!(estimate.rest_dice, 1);
        assert!((estimate.probability - 11.0 / 36.0).abs() < EPSILON);
    }

    #[test]
    fn observer_surplus_covers_the_claimant_shortfall() {
        // Observer alone covers the claim: required = 0, so every hand is
        // certain and the probability collapses to 1.
        let params = params(10, "3,3,3", 2, 0.7, false);
        let estimate = adjusted_probability(Claim::new(3, Face::Three), &params).unwrap();
        assert_eq!(estimate.required, 0);
        assert!(estimate.truth_given_matches.iter().all(|&t| t == 1.0));
        assert!((estimate.probability - 1.0).abs() < EPSILON);
    }

    #[test]
    fn stage_vectors_share_a_length() {
        let params = params(15, "1,2,6", 4, 0.3, true);
        let estimate = adjusted_probability(Claim::new(6, Face::Six), &params).unwrap();
        let len = estimate.claimant_dice as usize + 1;
        assert_eq!(estimate.prior.len(), len);
        assert_eq!(estimate.claim_given_matches.len(), len);
        assert_eq!(estimate.joint.len(), len);
        assert_eq!(estimate.posterior.len(), len);
        assert_eq!(estimate.truth_given_matches.len(), len);
        assert_eq!(estimate.weighted.len(), len);
    }

    #[test]
    fn final_probability_is_the_weighted_sum() {
        let params = params(18, "4,4,1", 5, 0.6, true);
        let estimate = adjusted_probability(Claim::new(9, Face::Four), &params).unwrap();
        let recomputed: f64 = estimate
            .posterior
            .iter()
            .zip(&estimate.truth_given_matches)
            .map(|(posterior, truth)| posterior * truth)
            .sum();
        assert!((estimate.probability - recomputed).abs() < EPSILON);
    }

    #[test]
    fn normalize_rejects_zero_mass() {
        let err = normalize(&[0.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            AdjustedModelError::UndefinedPosterior {
                claim_probability: 0.0
            }
        );
        assert!(err.to_string().contains("undefined"));
    }
}
