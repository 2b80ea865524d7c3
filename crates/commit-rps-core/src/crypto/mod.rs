//! Cryptographic primitives for the fairness proof.
//!
//! This module provides:
//! - SecretKey: the per-session 256-bit key
//! - Commitment: HMAC-SHA256 digest binding the key to the computer's move

mod commitment;
mod secret;

pub use commitment::Commitment;
pub use secret::SecretKey;
