//! Cyclic N-move rock-paper-scissors rules.

use super::moves::{MoveId, MoveSet};
use super::traits::Judge;
use crate::protocol::Outcome;
use std::cmp::Ordering;

/// Outcome of `self_move` against `other_move`, from `self_move`'s side.
///
/// With `i` and `j` the positions of the two moves in a cycle of `N`, the
/// clockwise distance is `(j - i) mod N` and the counter-clockwise distance
/// is `(i - j) mod N`. Equal distances mean the same move. A move wins when
/// the other move is nearer going counter-clockwise, i.e. it is one of the
/// `(N - 1) / 2` moves listed before it.
///
/// # Panics
/// If the move set has an even number of moves; ties off the diagonal would
/// be possible and the rule would mis-score them.
pub fn result_of(self_move: MoveId, other_move: MoveId, moves: &MoveSet) -> Outcome {
    let n = moves.len();
    assert!(n % 2 == 1, "cyclic rules need an odd number of moves, got {n}");

    let (i, j) = (self_move.index(), other_move.index());
    debug_assert!(i < n && j < n, "move outside of the move set");

    let clockwise = (j + n - i) % n;
    let counter_clockwise = (i + n - j) % n;

    match clockwise.cmp(&counter_clockwise) {
        Ordering::Equal => Outcome::Draw,
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Lose,
    }
}

/// Judge that evaluates the cyclic rule on every call
#[derive(Clone, Copy, Debug)]
pub struct CyclicRules<'a> {
    moves: &'a MoveSet,
}

impl<'a> CyclicRules<'a> {
    pub fn new(moves: &'a MoveSet) -> Self {
        Self { moves }
    }
}

impl Judge for CyclicRules<'_> {
    fn judge(&self, self_move: MoveId, other_move: MoveId) -> Outcome {
        result_of(self_move, other_move, self.moves)
    }
}

/// Precomputed N x N outcome table.
///
/// Cell `(i, j)` holds the outcome of move `i` against move `j` from move
/// `i`'s side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeMatrix {
    size: usize,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    /// Evaluate every ordered pair of moves
    pub fn build(moves: &MoveSet) -> Self {
        let size = moves.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in moves.ids() {
            for col in moves.ids() {
                cells.push(result_of(row, col, moves));
            }
        }
        Self { size, cells }
    }

    /// Number of moves per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Precomputed outcome of `self_move` against `other_move`
    pub fn lookup(&self, self_move: MoveId, other_move: MoveId) -> Outcome {
        self.cells[self_move.index() * self.size + other_move.index()]
    }

    /// Outcomes of one move against every move, in cycle order
    pub fn row(&self, self_move: MoveId) -> &[Outcome] {
        let start = self_move.index() * self.size;
        &self.cells[start..start + self.size]
    }
}

impl Judge for OutcomeMatrix {
    fn judge(&self, self_move: MoveId, other_move: MoveId) -> Outcome {
        self.lookup(self_move, other_move)
    }
}
