//! Monte Carlo cross-checks for the analytic models.

use crate::model::claim::Claim;
use crate::model::face::Face;
use crate::model::params::GameParameters;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Empirical frequency with which `claim` holds, rolling the unknown dice
/// uniformly `trials` times and adding the observer's fixed contribution.
///
/// This ignores the claimant model entirely; it is the sampling
/// counterpart of the unconditional estimate.
pub fn simulate_claim<R: Rng + ?Sized>(
    claim: Claim,
    params: &GameParameters,
    trials: u32,
    rng: &mut R,
) -> f64 {
    let trials = trials.max(1);
    let contribution = params.observer_contribution(claim.face);
    let unknown_dice = params.unknown_dice();
    let wild_ones = params.wild_ones();

    let mut hits = 0u32;
    for _ in 0..trials {
        let mut matches = contribution;
        for _ in 0..unknown_dice {
            let die = Face::ALL[rng.gen_range(0..Face::ALL.len())];
            if die.matches(claim.face, wild_ones) {
                matches += 1;
            }
        }
        if matches >= claim.quantity {
            hits += 1;
        }
    }

    f64::from(hits) / f64::from(trials)
}

/// Deterministic variant for tests and reproducible cross-checks.
pub fn simulate_claim_with_seed(
    claim: Claim,
    params: &GameParameters,
    trials: u32,
    seed: u64,
) -> f64 {
    let mut rng = SmallRng::seed_from_u64(seed);
    simulate_claim(claim, params, trials, &mut rng)
}
