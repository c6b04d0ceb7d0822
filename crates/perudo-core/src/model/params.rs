use crate::model::face::Face;
use crate::model::roll::DiceRoll;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Validated inputs for one round of claim analysis.
///
/// Construction enforces the boundary rules; the probability engine
/// assumes a constructed value is consistent and never re-validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameParameters {
    total_dice: u32,
    observer: DiceRoll,
    claimant_dice: u32,
    bluff_rate: f64,
    wild_ones: bool,
}

impl GameParameters {
    pub fn new(
        total_dice: u32,
        observer: DiceRoll,
        claimant_dice: u32,
        bluff_rate: f64,
        wild_ones: bool,
    ) -> Result<Self, ParameterError> {
        if total_dice == 0 {
            return Err(ParameterError::NoDiceInPlay);
        }
        if claimant_dice == 0 {
            return Err(ParameterError::NoClaimantDice);
        }
        let known = observer.len() as u32 + claimant_dice;
        if known > total_dice {
            return Err(ParameterError::KnownDiceExceedTotal {
                known,
                total: total_dice,
            });
        }
        if !bluff_rate.is_finite() || !(0.0..=1.0).contains(&bluff_rate) {
            return Err(ParameterError::BluffRateOutOfRange { rate: bluff_rate });
        }
        Ok(Self {
            total_dice,
            observer,
            claimant_dice,
            bluff_rate,
            wild_ones,
        })
    }

    pub fn total_dice(&self) -> u32 {
        self.total_dice
    }

    pub fn observer(&self) -> &DiceRoll {
        &self.observer
    }

    pub fn claimant_dice(&self) -> u32 {
        self.claimant_dice
    }

    pub fn bluff_rate(&self) -> f64 {
        self.bluff_rate
    }

    pub fn wild_ones(&self) -> bool {
        self.wild_ones
    }

    /// Per-die probability that an unknown die counts toward `face`.
    pub fn match_probability(&self, face: Face) -> f64 {
        if self.wild_ones && !face.is_wild() {
            2.0 / 6.0
        } else {
            1.0 / 6.0
        }
    }

    /// Dice the observer already contributes to a claim on `face`.
    pub fn observer_contribution(&self, face: Face) -> u32 {
        self.observer.matching(face, self.wild_ones)
    }

    /// Dice in play outside the observer's cup.
    pub fn unknown_dice(&self) -> u32 {
        self.total_dice - self.observer.len() as u32
    }

    /// Dice belonging to neither the observer nor the modeled claimant.
    pub fn rest_dice(&self) -> u32 {
        self.unknown_dice() - self.claimant_dice
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    NoDiceInPlay,
    NoClaimantDice,
    KnownDiceExceedTotal { known: u32, total: u32 },
    BluffRateOutOfRange { rate: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NoDiceInPlay => write!(f, "total dice in play must be at least 1"),
            ParameterError::NoClaimantDice => {
                write!(f, "the claimant must hold at least one die")
            }
            ParameterError::KnownDiceExceedTotal { known, total } => write!(
                f,
                "observer and claimant dice ({known}) exceed the {total} dice in play"
            ),
            ParameterError::BluffRateOutOfRange { rate } => {
                write!(f, "bluff rate {rate} is outside the range 0 to 1")
            }
        }
    }
}

impl std::error::Error for ParameterError {}
