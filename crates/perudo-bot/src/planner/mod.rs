//! Next-move selection: score the legal follow-up claims against calling
//! the bluff on the claim already on the table.

mod candidates;

pub use candidates::candidate_claims;

use perudo_core::model::claim::Claim;
use perudo_core::model::params::GameParameters;
use perudo_core::prob::adjusted::{AdjustedModelError, adjusted_probability};
use perudo_core::prob::normal::normal_probability;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// Confidence discount applied to a candidate on a different face class,
/// where the claimant's hand tells us nothing; kept as a fixed policy
/// constant rather than a full Bayesian recomputation.
const CROSS_FACE_DISCOUNT: f64 = 0.5;

/// The advised next move, with its estimated success probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Recommendation {
    CallBluff { success_probability: f64 },
    MakeClaim {
        claim: Claim,
        success_probability: f64,
    },
}

impl Recommendation {
    pub fn success_probability(&self) -> f64 {
        match self {
            Recommendation::CallBluff {
                success_probability,
            }
            | Recommendation::MakeClaim {
                success_probability,
                ..
            } => *success_probability,
        }
    }
}

/// One candidate claim scored under both views: the unconditional model,
/// and the claimant-aware score used for selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub claim: Claim,
    pub unconditional: f64,
    pub adjusted: f64,
}

pub struct MovePlanner;

impl MovePlanner {
    /// Recommends the next move: the best-scoring follow-up claim, unless
    /// calling the bluff on the current claim is at least as likely to
    /// succeed.
    pub fn recommend(
        params: &GameParameters,
        current: Claim,
    ) -> Result<Recommendation, AdjustedModelError> {
        let standing = adjusted_probability(current, params)?;
        let call_bluff_probability = (1.0 - standing.probability).clamp(0.0, 1.0);

        let scored = Self::score_candidates(params, current)?;
        log_candidates(&scored);

        let best = scored
            .into_iter()
            .reduce(|best, next| if next.adjusted > best.adjusted { next } else { best });

        let recommendation = decide(call_bluff_probability, best);
        log_recommendation(params, current, &recommendation);
        Ok(recommendation)
    }

    /// Scores every candidate in the bounded search window. Candidates on
    /// the current claim's face class (including a wild 1 under wild-ones)
    /// get the full claimant-aware recomputation; other faces fall back to
    /// the discounted unconditional estimate.
    pub fn score_candidates(
        params: &GameParameters,
        current: Claim,
    ) -> Result<Vec<CandidateScore>, AdjustedModelError> {
        let mut scored = Vec::new();
        for candidate in candidate_claims(current) {
            let unconditional = normal_probability(candidate, params).probability;
            let adjusted = if candidate.face.matches(current.face, params.wild_ones()) {
                adjusted_probability(candidate, params)?.probability
            } else {
                unconditional * (1.0 - params.bluff_rate() * CROSS_FACE_DISCOUNT)
            };
            scored.push(CandidateScore {
                claim: candidate,
                unconditional,
                adjusted,
            });
        }
        Ok(scored)
    }
}

/// Ties favor calling the bluff: a new claim has to strictly outscore the
/// challenge to be worth making.
fn decide(call_bluff_probability: f64, best: Option<CandidateScore>) -> Recommendation {
    match best {
        Some(candidate) if candidate.adjusted > call_bluff_probability => {
            Recommendation::MakeClaim {
                claim: candidate.claim,
                success_probability: candidate.adjusted,
            }
        }
        _ => Recommendation::CallBluff {
            success_probability: call_bluff_probability,
        },
    }
}

fn log_recommendation(params: &GameParameters, current: Claim, recommendation: &Recommendation) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    event!(
        target: "perudo_bot::planner",
        Level::INFO,
        total_dice = params.total_dice(),
        claimant_dice = params.claimant_dice(),
        bluff_rate = params.bluff_rate(),
        current = %current,
        choice = ?recommendation,
        probability = recommendation.success_probability()
    );
}

fn log_candidates(scored: &[CandidateScore]) {
    if !tracing::enabled!(Level::DEBUG) || !candidate_logging_enabled() {
        return;
    }

    for score in scored {
        event!(
            target: "perudo_bot::planner",
            Level::DEBUG,
            candidate = %score.claim,
            unconditional = score.unconditional,
            adjusted = score.adjusted
        );
    }
}

fn candidate_logging_enabled() -> bool {
    std::env::var("PERUDO_PLANNER_DETAILS")
        .map(|raw| matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(false)
}
