//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - HmacKey, the secret drawn from a secure random source
//! - Commitment, the HMAC-SHA-256 digest published before the player moves

mod commitment;
mod key;

pub use commitment::{Commitment, CommitmentParseError};
pub use key::{EntropyError, HmacKey, KeyError, DEFAULT_KEY_LEN, MAX_KEY_LEN, MIN_KEY_LEN};
