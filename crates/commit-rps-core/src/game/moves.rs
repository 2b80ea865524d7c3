//! Validated move set.

use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Ordered set of distinct move names.
///
/// The order defines cyclic adjacency for win/lose resolution and is fixed
/// for the lifetime of a session. Construction is the only way to obtain a
/// `MoveSet`, so every instance has an odd length of at least 3 and no
/// duplicate names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Minimum number of moves in a playable set
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set: odd count, at least 3, no duplicates
    /// (case-sensitive exact match)
    pub fn new<I, S>(moves: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < Self::MIN_MOVES {
            return Err(GameError::TooFewMoves(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(GameError::EvenMoveCount(moves.len()));
        }
        for (i, name) in moves.iter().enumerate() {
            if moves[..i].contains(name) {
                return Err(GameError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self(moves))
    }

    /// Number of moves in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept so `len` has its conventional companion
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Moves each member beats (and loses to) on the cycle
    pub fn half(&self) -> usize {
        self.0.len() / 2
    }

    /// Position of a move name, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    /// Move at a 0-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate the move names in cycle order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Pick one move uniformly at random
    pub fn choose<R: RngCore + CryptoRng>(&self, rng: &mut R) -> &str {
        // gen_range is bounded by len, and a MoveSet is never empty.
        &self.0[rng.gen_range(0..self.0.len())]
    }
}
