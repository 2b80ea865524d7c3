//! Commit RPS Core Library
//!
//! This crate provides the fairness-protocol primitives (secret key
//! generation and HMAC-SHA256 commitments), the generalized cyclic
//! rock-paper-scissors rules, and the single-shot game session used by the
//! terminal front end.

pub mod crypto;
pub mod error;
pub mod game;

pub use crypto::{Commitment, SecretKey};
pub use error::GameError;
pub use game::{relation, GameSession, MoveSet, Outcome, OutcomeTable, Reveal};
