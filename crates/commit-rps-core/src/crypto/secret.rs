//! Per-session secret key for the commit-reveal scheme.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;

/// 256-bit secret key, generated once per session and revealed at the end
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Generate a fresh key from a cryptographically secure source.
    ///
    /// Fails with `EntropyUnavailable` if the source cannot supply bytes;
    /// there is no fallback to a weaker generator.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, GameError> {
        let mut bytes = [0u8; 32];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

/// The reveal form: full lowercase hex
impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_keys_are_distinct() {
        let key1 = SecretKey::generate(&mut OsRng).unwrap();
        let key2 = SecretKey::generate(&mut OsRng).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_reveal_is_64_hex_chars() {
        let key = SecretKey::generate(&mut OsRng).unwrap();
        let revealed = key.to_string();
        assert_eq!(revealed.len(), 64);
        assert!(revealed.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(revealed, revealed.to_lowercase());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let key1 = SecretKey::generate(&mut StdRng::seed_from_u64(9)).unwrap();
        let key2 = SecretKey::generate(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_debug_does_not_print_the_whole_key() {
        let key = SecretKey::from_bytes([0xab; 32]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&key.to_string()));
    }
}
