//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier, used to correlate logs and transcripts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one move against another, from the first move's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Table label
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same pairing seen from the other side
    pub fn reverse(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Sentence announced to the human player
    pub fn verdict(&self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_generation() {
        let id1 = RoundId::new();
        let id2 = RoundId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_round_id_serializes_as_plain_uuid() {
        let id = RoundId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(id.to_string().len(), 36);
    }

    #[test]
    fn test_outcome_reverse() {
        assert_eq!(Outcome::Win.reverse(), Outcome::Lose);
        assert_eq!(Outcome::Lose.reverse(), Outcome::Win);
        assert_eq!(Outcome::Draw.reverse(), Outcome::Draw);
    }

    #[test]
    fn test_outcome_str() {
        assert_eq!(Outcome::Win.as_str(), "Win");
        assert_eq!(Outcome::Lose.as_str(), "Lose");
        assert_eq!(Outcome::Draw.as_str(), "Draw");
        assert_eq!(Outcome::Draw.verdict(), "It's a tie!");
    }
}
