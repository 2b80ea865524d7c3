//! Cyclic win/lose/draw arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::MoveSet;
use crate::error::GameError;

/// Round result, from the human's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    HumanWins,
    ComputerWins,
}

impl Outcome {
    /// Result line printed at the end of a round
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::HumanWins => "You win",
            Outcome::ComputerWins => "Computer wins",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Win/lose/draw relation between cycle positions `i` (human) and `j`
/// (computer) in a cycle of odd length `n`.
///
/// A move beats the `n / 2` moves following it on the cycle and loses to the
/// `n / 2` moves preceding it, so the human wins exactly when the computer's
/// move lies within the forward half-circle of the human's move. This is the
/// single source of truth for both the resolver and the outcome table.
pub fn relation(i: usize, j: usize, n: usize) -> Outcome {
    if i == j {
        return Outcome::Draw;
    }
    let d = (j + n - i) % n;
    if d <= n / 2 {
        Outcome::HumanWins
    } else {
        Outcome::ComputerWins
    }
}

impl MoveSet {
    /// Resolve a round. Both moves must be members of the set; membership is
    /// checked here as well because the resolver is reusable outside a
    /// session.
    pub fn resolve(&self, human: &str, computer: &str) -> Result<Outcome, GameError> {
        let i = self
            .index_of(human)
            .ok_or_else(|| GameError::UnknownMove(human.to_string()))?;
        let j = self
            .index_of(computer)
            .ok_or_else(|| GameError::UnknownMove(computer.to_string()))?;
        Ok(relation(i, j, self.len()))
    }
}
