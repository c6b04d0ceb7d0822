use crate::model::face::Face;
use core::fmt;
use serde::{Deserialize, Serialize};

/// An assertion that at least `quantity` dice across all players show
/// `face` (subject to the wild-ones rule).
///
/// The derived ordering is the game's claim ordering: a claim outranks
/// another when its quantity is higher, or when quantities are equal and
/// its face is higher.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Claim {
    pub quantity: u32,
    pub face: Face,
}

impl Claim {
    pub const fn new(quantity: u32, face: Face) -> Self {
        Self { quantity, face }
    }

    /// Whether this claim is a legal raise over `other`. Claims must
    /// strictly increase; restating or lowering is not allowed.
    pub fn beats(self, other: Claim) -> bool {
        self > other
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.quantity, self.face)
    }
}
