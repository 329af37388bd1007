//! Move sets.

use crate::crypto::EntropyError;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors from building a move set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {0}")]
    TooFew(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenCount(usize),

    #[error("move {0:?} is listed more than once")]
    Duplicate(String),

    #[error("move names must not be blank")]
    BlankName,
}

/// Position of a move within its move set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveId(usize);

impl MoveId {
    /// Zero-based index in the move set
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based number shown in the menu
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

/// Ordered, immutable set of distinct move names.
///
/// The order defines the cycle the rules walk: every move beats the
/// `(N - 1) / 2` moves before it and loses to the `(N - 1) / 2` after it.
/// `MoveId`s are only meaningful for the set that produced them.
#[derive(Clone, Debug)]
pub struct MoveSet {
    names: Vec<String>,
    index: HashMap<String, MoveId>,
}

impl MoveSet {
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set: odd count, at least three, all distinct
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < Self::MIN_MOVES {
            return Err(MoveSetError::TooFew(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(names.len()));
        }

        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(MoveSetError::BlankName);
            }
            if index.insert(name.clone(), MoveId(i)).is_some() {
                return Err(MoveSetError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names, index })
    }

    /// Number of moves (always odd and at least three)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a move.
    ///
    /// # Panics
    /// If `id` came from a different, larger move set.
    pub fn name(&self, id: MoveId) -> &str {
        &self.names[id.0]
    }

    /// Look up a move by name
    pub fn id_of(&self, name: &str) -> Option<MoveId> {
        self.index.get(name).copied()
    }

    /// Move at a zero-based index
    pub fn get(&self, index: usize) -> Option<MoveId> {
        (index < self.names.len()).then_some(MoveId(index))
    }

    /// Move for a one-based menu number
    pub fn from_ordinal(&self, ordinal: usize) -> Option<MoveId> {
        ordinal.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Uniformly random move.
    ///
    /// Draws through `try_fill_bytes` only, so a failing source is reported
    /// instead of panicking. Draws at or above the largest multiple of `len`
    /// that fits in a `u64` are redrawn so the choice stays unbiased.
    pub fn random<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<MoveId, EntropyError> {
        let n = self.names.len() as u64;
        let zone = u64::MAX - u64::MAX % n;
        loop {
            let mut buf = [0u8; 8];
            rng.try_fill_bytes(&mut buf)?;
            let draw = u64::from_le_bytes(buf);
            if draw < zone {
                return Ok(MoveId((draw % n) as usize));
            }
        }
    }

    /// All moves in cycle order
    pub fn ids(&self) -> impl Iterator<Item = MoveId> + '_ {
        (0..self.names.len()).map(MoveId)
    }

    /// All moves with their names, in cycle order
    pub fn iter(&self) -> impl Iterator<Item = (MoveId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (MoveId(i), name.as_str()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
