//! Secret key for the commitment.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key length used when none is configured (one SHA-256 block of output)
pub const DEFAULT_KEY_LEN: usize = 32;

/// Shortest key accepted by the front end
pub const MIN_KEY_LEN: usize = 16;

/// Longest key accepted by the front end
pub const MAX_KEY_LEN: usize = 1024;

/// The secure random source could not produce bytes.
///
/// Fatal for the round: falling back to a weaker source would void the
/// fairness proof.
#[derive(Debug, Error)]
#[error("secure random source unavailable: {0}")]
pub struct EntropyError(#[from] rand::Error);

/// Errors from parsing a revealed key
#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("key is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("key is empty")]
    Empty,
}

/// Secret HMAC key, kept private until the round resolves
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HmacKey(Vec<u8>);

impl HmacKey {
    /// Draw `len` bytes from a cryptographically secure source
    pub fn generate<R>(rng: &mut R, len: usize) -> Result<Self, EntropyError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = vec![0u8; len];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for a key built from no bytes; generated and parsed keys
    /// never are
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Only the length is shown so that stray debug logging cannot leak the key.
impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey(<{} bytes>)", self.0.len())
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl FromStr for HmacKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim())?;
        if bytes.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(bytes))
    }
}

impl From<HmacKey> for String {
    fn from(key: HmacKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for HmacKey {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
