//! Transcript of a resolved round.

use crate::crypto::{Commitment, HmacKey};
use crate::protocol::{Outcome, RoundId};
use serde::{Deserialize, Serialize};

/// Everything needed to check a round after the fact.
///
/// Key and commitment serialize as hex strings, so the record can be checked
/// with any HMAC-SHA-256 tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_id: RoundId,
    pub moves: Vec<String>,
    /// Published before the player chose
    pub commitment: Commitment,
    /// Revealed after the round resolved
    pub key: HmacKey,
    pub computer_move: String,
    pub human_move: String,
    /// From the human's side
    pub outcome: Outcome,
}

impl RoundRecord {
    /// Does the revealed key and computer move reproduce the commitment?
    pub fn verify(&self) -> bool {
        self.commitment.verify(self.computer_move.as_bytes(), &self.key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
