//! Move sets and the cyclic rules engine.

mod moves;
mod rules;
mod traits;

pub use moves::{MoveId, MoveSet, MoveSetError};
pub use rules::{result_of, CyclicRules, OutcomeMatrix};
pub use traits::Judge;
