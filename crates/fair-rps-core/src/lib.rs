//! Fair RPS Core Library
//!
//! Rules, commitments, and the round state machine for rock-paper-scissors
//! generalized to any odd number of moves. The computer commits to its move
//! with an HMAC before the player chooses and reveals the key afterwards.

pub mod crypto;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, EntropyError, HmacKey};
pub use games::{result_of, Judge, MoveId, MoveSet, MoveSetError, OutcomeMatrix};
pub use protocol::{Game, Outcome, Resolution, RoundEnd, RoundError, RoundId, RoundRecord, RoundView};
