//! Game traits.

use super::MoveId;
use crate::protocol::Outcome;

/// Decides the outcome of one move against another, from the first move's side
pub trait Judge {
    fn judge(&self, self_move: MoveId, other_move: MoveId) -> Outcome;

    /// Does `self_move` beat `other_move`?
    fn beats(&self, self_move: MoveId, other_move: MoveId) -> bool {
        self.judge(self_move, other_move) == Outcome::Win
    }
}
