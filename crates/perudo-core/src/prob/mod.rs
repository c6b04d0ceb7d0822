//! Claim-probability engine.
//!
//! This module is composed of:
//! - `combinatorics`: binomial primitives shared by both models.
//! - `normal`: unconditional claim probability from the observer's dice alone.
//! - `adjusted`: Bayesian claim probability conditioned on one claimant's behavior.
//! - `sampler`: Monte Carlo cross-checks over the unknown dice.

pub mod adjusted;
pub mod combinatorics;
pub mod normal;
pub mod sampler;

pub use adjusted::{AdjustedEstimate, AdjustedModelError, adjusted_probability};
pub use combinatorics::{binomial_coefficient, binomial_tail};
pub use normal::{NormalEstimate, normal_probability};
pub use sampler::{simulate_claim, simulate_claim_with_seed};
