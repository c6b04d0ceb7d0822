use crate::model::face::Face;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One player's known dice. Order is irrelevant; repeated faces count
/// separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    faces: Vec<Face>,
}

impl DiceRoll {
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    pub fn with_faces(faces: Vec<Face>) -> Self {
        let mut roll = Self { faces };
        roll.sort();
        roll
    }

    pub fn add(&mut self, face: Face) {
        self.faces.push(face);
        self.sort();
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of dice in the roll counting toward a claim on `claimed`.
    pub fn matching(&self, claimed: Face, wild_ones: bool) -> u32 {
        self.faces
            .iter()
            .filter(|die| die.matches(claimed, wild_ones))
            .count() as u32
    }

    fn sort(&mut self) {
        self.faces.sort();
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, face) in self.faces.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRollError {
    token: String,
}

impl fmt::Display for ParseRollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid die face `{}`; expected a value from 1 to 6",
            self.token
        )
    }
}

impl std::error::Error for ParseRollError {}

impl FromStr for DiceRoll {
    type Err = ParseRollError;

    /// Parses the comma-separated form, e.g. `"1,3,3,5,6"`. Whitespace
    /// around entries is ignored; an empty string is an empty roll.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut faces = Vec::new();
        for token in s.split(',') {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                continue;
            }
            let face = trimmed
                .parse::<u8>()
                .ok()
                .and_then(Face::from_value)
                .ok_or_else(|| ParseRollError {
                    token: trimmed.to_string(),
                })?;
            faces.push(face);
        }
        Ok(Self::with_faces(faces))
    }
}
