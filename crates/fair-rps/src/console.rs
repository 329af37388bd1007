//! Terminal rendering of a round.

use crate::table;
use colored::Colorize;
use fair_rps_core::{Commitment, MoveSet, Outcome, OutcomeMatrix, Resolution, RoundView};
use std::io::{self, Write};

/// Writes the round protocol to a terminal (or any writer)
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RoundView for ConsoleView<W> {
    fn show_commitment(&mut self, commitment: &Commitment) -> io::Result<()> {
        writeln!(self.out, "HMAC: {}", commitment.to_string().bold())
    }

    fn show_menu(&mut self, moves: &MoveSet) -> io::Result<()> {
        writeln!(self.out, "Available moves:")?;
        for (id, name) in moves.iter() {
            writeln!(self.out, "{id} - {name}")?;
        }
        writeln!(self.out, "0 - exit")?;
        writeln!(self.out, "? - help")
    }

    fn show_help(&mut self, moves: &MoveSet, matrix: &OutcomeMatrix) -> io::Result<()> {
        write!(self.out, "{}", table::render(moves, matrix))?;
        writeln!(self.out, "{}", table::caption(moves, matrix))
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Enter your move: ")?;
        self.out.flush()
    }

    fn invalid_input(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("Invalid input: {line:?}").red())
    }

    fn show_resolution(&mut self, moves: &MoveSet, resolution: &Resolution) -> io::Result<()> {
        let computer_move = moves.name(resolution.computer_move);
        let verdict = match resolution.outcome {
            Outcome::Win => resolution.outcome.verdict().green(),
            Outcome::Lose => resolution.outcome.verdict().red(),
            Outcome::Draw => resolution.outcome.verdict().yellow(),
        };

        writeln!(self.out, "Your move: {}", moves.name(resolution.human_move))?;
        writeln!(self.out, "Computer move: {computer_move}")?;
        writeln!(self.out, "{}", verdict.bold())?;
        writeln!(self.out, "HMAC key: {}", resolution.key)?;
        writeln!(
            self.out,
            "Check: HMAC-SHA256(key, {computer_move:?}) must equal the HMAC shown before you moved \
             (fair-rps-verify --hmac <HMAC> --key <KEY> {computer_move:?})"
        )?;
        self.out.flush()
    }
}
