//! Outcome table rendering.

use colored::Colorize;
use fair_rps_core::{MoveSet, Outcome, OutcomeMatrix};

const CORNER: &str = "v You \\ PC >";

/// Render the N x (N + 1) table: one row per move, one column per opponent move
pub fn render(moves: &MoveSet, matrix: &OutcomeMatrix) -> String {
    let label_width = moves
        .iter()
        .map(|(_, name)| name.chars().count())
        .chain(std::iter::once(CORNER.chars().count()))
        .max()
        .unwrap_or_default();
    let widths: Vec<usize> = moves
        .iter()
        .map(|(_, name)| name.chars().count().max("Draw".len()))
        .collect();

    let rule = {
        let mut line = format!("+{}", "-".repeat(label_width + 2));
        for width in &widths {
            line.push_str(&format!("+{}", "-".repeat(width + 2)));
        }
        line.push('+');
        line
    };

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&format!("| {} ", pad(CORNER, label_width).green()));
    for ((_, name), width) in moves.iter().zip(&widths) {
        out.push_str(&format!("| {} ", pad(name, *width).green()));
    }
    out.push_str("|\n");
    out.push_str(&rule);
    out.push('\n');

    for (id, name) in moves.iter() {
        out.push_str(&format!("| {} ", pad(name, label_width)));
        for (outcome, width) in matrix.row(id).iter().zip(&widths) {
            out.push_str(&format!("| {} ", paint(*outcome, &pad(outcome.as_str(), *width))));
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Explanation printed under the table, with an example taken from it
pub fn caption(moves: &MoveSet, matrix: &OutcomeMatrix) -> String {
    let mut text = String::from(
        "Results are from your point of view: find your move in the left column \
         and the computer's move in the top row.",
    );

    let example = moves.ids().find_map(|mine| {
        moves
            .ids()
            .find(|theirs| matrix.lookup(mine, *theirs) == Outcome::Win)
            .map(|theirs| (mine, theirs))
    });
    if let Some((mine, theirs)) = example {
        text.push_str(&format!(
            "\nExample: if you pick \"{}\" and the computer picks \"{}\", the result is \"Win\".",
            moves.name(mine),
            moves.name(theirs)
        ));
    }
    text
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn paint(outcome: Outcome, cell: &str) -> colored::ColoredString {
    match outcome {
        Outcome::Win => cell.green(),
        Outcome::Lose => cell.red(),
        Outcome::Draw => cell.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> (MoveSet, OutcomeMatrix) {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let matrix = OutcomeMatrix::build(&moves);
        (moves, matrix)
    }

    #[test]
    fn test_render_plain() {
        colored::control::set_override(false);
        let (moves, matrix) = classic();

        let table = render(&moves, &matrix);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "| v You \\ PC > | rock | paper | scissors |");
        assert_eq!(lines[3], "| rock         | Draw | Lose  | Win      |");
        assert_eq!(lines[4], "| paper        | Win  | Draw  | Lose     |");
        assert_eq!(lines[5], "| scissors     | Lose | Win   | Draw     |");
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn test_caption_example_comes_from_table() {
        let (moves, matrix) = classic();
        let text = caption(&moves, &matrix);
        assert!(text.contains("if you pick \"rock\" and the computer picks \"scissors\""));
    }
}
