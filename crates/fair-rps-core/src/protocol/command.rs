//! Player input while a round awaits a move.

use crate::games::{MoveId, MoveSet};

/// One parsed line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `0`: leave without playing
    Exit,
    /// `?`: show the outcome table
    Help,
    /// `1..=N`: play that move
    Play(MoveId),
    /// Anything else
    Invalid,
}

impl Command {
    /// Interpret a line of input against the menu of `moves`.
    ///
    /// Surrounding whitespace is ignored. Only the literal `0` exits, so
    /// `00` falls through to the numeric path and is rejected.
    pub fn parse(line: &str, moves: &MoveSet) -> Command {
        match line.trim() {
            "0" => Command::Exit,
            "?" => Command::Help,
            token => token
                .parse::<usize>()
                .ok()
                .and_then(|ordinal| moves.from_ordinal(ordinal))
                .map_or(Command::Invalid, Command::Play),
        }
    }
}
