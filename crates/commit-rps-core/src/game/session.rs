//! Single-shot game session: commit, one human decision, reveal.

use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::{MoveSet, Outcome};
use crate::crypto::{Commitment, SecretKey};
use crate::error::GameError;

/// One round of the game.
///
/// The secret key, the computer's move, and the commitment are all fixed at
/// construction, before any human input exists. `play` consumes the session,
/// so the key is revealed at most once.
pub struct GameSession {
    moves: MoveSet,
    key: SecretKey,
    computer_move: String,
    commitment: Commitment,
}

/// Everything published at the end of a round
#[derive(Debug)]
pub struct Reveal {
    pub human_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub key: SecretKey,
}

impl GameSession {
    /// Start a session: fresh key, uniformly random computer move, and the
    /// commitment over the move bytes.
    pub fn start<R: RngCore + CryptoRng>(moves: MoveSet, rng: &mut R) -> Result<Self, GameError> {
        let key = SecretKey::generate(rng)?;
        let computer_move = moves.choose(rng).to_string();
        let commitment = Commitment::new(&key, computer_move.as_bytes());

        // The computer's move and the key stay out of the logs until the
        // reveal.
        debug!(moves = moves.len(), %commitment, "session committed");

        Ok(Self {
            moves,
            key,
            computer_move,
            commitment,
        })
    }

    /// Move set this session was started with
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Commitment to show before asking for the human's move
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Play the human's move by its 1-based menu index, resolve the round,
    /// and reveal the key.
    pub fn play(self, choice: usize) -> Result<Reveal, GameError> {
        let human_move = match choice.checked_sub(1).and_then(|i| self.moves.get(i)) {
            Some(name) => name.to_string(),
            None => return Err(GameError::InvalidChoice(choice)),
        };
        let outcome = self.moves.resolve(&human_move, &self.computer_move)?;

        debug!(%human_move, computer_move = %self.computer_move, ?outcome, "round resolved");

        Ok(Reveal {
            human_move,
            computer_move: self.computer_move,
            outcome,
            key: self.key,
        })
    }
}
