use crate::model::claim::Claim;
use crate::model::params::GameParameters;
use crate::prob::adjusted::{AdjustedEstimate, AdjustedModelError, adjusted_probability};
use crate::prob::normal::{NormalEstimate, normal_probability};
use serde::{Deserialize, Serialize};

/// One claim evaluated under both models, bundled with the parameters a
/// front end needs to render the derivation. Serializes to JSON so the
/// caller can rebuild every intermediate table without recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimAnalysis {
    pub claim: Claim,
    pub total_dice: u32,
    pub wild_ones: bool,
    pub normal: NormalEstimate,
    pub adjusted: AdjustedEstimate,
}

impl ClaimAnalysis {
    pub fn capture(claim: Claim, params: &GameParameters) -> Result<Self, AdjustedModelError> {
        Ok(Self {
            claim,
            total_dice: params.total_dice(),
            wild_ones: params.wild_ones(),
            normal: normal_probability(claim, params),
            adjusted: adjusted_probability(claim, params)?,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
