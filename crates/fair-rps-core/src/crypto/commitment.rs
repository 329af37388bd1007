//! Commitment for the commit-reveal scheme.
//!
//! The digest is published before the player chooses; the key is revealed
//! afterwards. Anyone holding the revealed key and move name can recompute
//! `HMAC-SHA256(key, move_name)` and compare it with the published digest.

use super::HmacKey;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Errors from parsing a published commitment
#[derive(Debug, Error, PartialEq)]
pub enum CommitmentParseError {
    #[error("commitment is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("commitment must be 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Commitment = HMAC-SHA256(key, message)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Create a commitment binding `key` to `message`
    pub fn new(message: &[u8], key: &HmacKey) -> Self {
        Self(Self::mac(message, key).finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given message and key produce this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, message: &[u8], key: &HmacKey) -> bool {
        Self::mac(message, key).verify_slice(&self.0).is_ok()
    }

    fn mac(message: &[u8], key: &HmacKey) -> HmacSha256 {
        // HMAC pads or hashes keys of any length, so this cannot fail.
        let mut mac = <HmacSha256 as Mac>::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(message);
        mac
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

impl FromStr for Commitment {
    type Err = CommitmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim())?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CommitmentParseError::InvalidLength(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl From<Commitment> for String {
    fn from(commitment: Commitment) -> Self {
        commitment.to_string()
    }
}

impl TryFrom<String> for Commitment {
    type Error = CommitmentParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn random_key(seed: u64) -> HmacKey {
        HmacKey::generate(&mut StdRng::seed_from_u64(seed), 32).unwrap()
    }

    #[test]
    fn test_commitment_verification() {
        let key = random_key(1);
        let commitment = Commitment::new(b"rock", &key);

        assert!(commitment.verify(b"rock", &key));
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = random_key(1);
        let commitment1 = Commitment::new(b"rock", &key);
        let commitment2 = Commitment::new(b"paper", &key);

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let commitment1 = Commitment::new(b"rock", &random_key(1));
        let commitment2 = Commitment::new(b"rock", &random_key(2));

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = random_key(1);
        let commitment = Commitment::new(b"rock", &key);

        assert!(!commitment.verify(b"paper", &key));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let commitment = Commitment::new(b"rock", &random_key(1));

        assert!(!commitment.verify(b"rock", &random_key(2)));
    }

    #[test]
    fn test_matches_rfc4231_vector() {
        // RFC 4231 test case 2
        let key = HmacKey::from_bytes(b"Jefe".to_vec());
        let commitment = Commitment::new(b"what do ya want for nothing?", &key);

        assert_eq!(
            commitment.to_string(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hex_parse() {
        let commitment = Commitment::new(b"rock", &random_key(5));
        let parsed: Commitment = commitment.to_string().parse().unwrap();
        assert_eq!(commitment, parsed);

        assert_eq!(
            "abcd".parse::<Commitment>(),
            Err(CommitmentParseError::InvalidLength(2))
        );
        assert!(matches!(
            "xyz1".parse::<Commitment>(),
            Err(CommitmentParseError::InvalidHex(_))
        ));
    }
}
