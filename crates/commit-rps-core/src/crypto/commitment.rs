//! Keyed commitment for the commit-reveal scheme.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

use super::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA256(key, message)
///
/// Published before the human moves; verifiable once the key is revealed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a message under the given key
    pub fn new(key: &SecretKey, message: &[u8]) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
        mac.update(message);
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and message produce this commitment
    pub fn verify(&self, key: &SecretKey, message: &[u8]) -> bool {
        *self == Self::new(key, message)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    fn key() -> SecretKey {
        SecretKey::generate(&mut OsRng).unwrap()
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let key = key();
        let commitment1 = Commitment::new(&key, b"rock");
        let commitment2 = Commitment::new(&key, b"rock");

        assert_eq!(commitment1, commitment2);
    }

    #[test]
    fn test_commitment_verification() {
        let key = key();
        let commitment = Commitment::new(&key, b"rock");

        assert!(commitment.verify(&key, b"rock"));
    }

    #[test]
    fn test_different_messages_different_commitments() {
        let key = key();
        let commitment1 = Commitment::new(&key, b"rock");
        let commitment2 = Commitment::new(&key, b"paper");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let commitment1 = Commitment::new(&key(), b"rock");
        let commitment2 = Commitment::new(&key(), b"rock");

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_message_fails_verification() {
        let key = key();
        let commitment = Commitment::new(&key, b"rock");

        assert!(!commitment.verify(&key, b"paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let commitment = Commitment::new(&key(), b"rock");

        assert!(!commitment.verify(&key(), b"rock"));
    }

    #[test]
    fn test_display_is_64_lowercase_hex_chars() {
        let rendered = Commitment::new(&key(), b"rock").to_string();

        assert_eq!(rendered.len(), 64);
        assert!(rendered
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
