//! Round protocol: types, player commands, the round state machine, and
//! transcripts.

mod command;
mod record;
mod round;
mod types;

pub use command::Command;
pub use record::RoundRecord;
pub use round::{Game, Resolution, Round, RoundEnd, RoundError, RoundView};
pub use types::{Outcome, RoundId};
