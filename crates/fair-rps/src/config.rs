//! Command line and environment configuration.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use fair_rps_core::crypto::{DEFAULT_KEY_LEN, MAX_KEY_LEN, MIN_KEY_LEN};
use fair_rps_core::{MoveSet, MoveSetError};
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE_EXAMPLE: &str = "Example usage: fair-rps rock paper scissors lizard spock";

#[derive(Parser, Debug)]
#[command(name = "fair-rps")]
#[command(about = "Rock-paper-scissors with any odd number of moves and a provably fixed computer move")]
#[command(after_help = USAGE_EXAMPLE)]
#[command(version)]
pub struct Cli {
    /// Move names in cycle order: an odd number, at least three, all distinct.
    /// Each move beats the half of the others listed just before it.
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    /// Length of the secret HMAC key in bytes
    #[arg(long, env = "FAIR_RPS_KEY_BYTES", default_value_t = DEFAULT_KEY_LEN)]
    pub key_bytes: usize,

    /// Write a JSON transcript of the resolved round to this file
    #[arg(long, env = "FAIR_RPS_TRANSCRIPT")]
    pub transcript: Option<PathBuf>,

    /// Disable colored output. Any non-empty NO_COLOR value other than a
    /// false-like one ("0", "false", "no", "off") also disables it.
    #[arg(long, env = "NO_COLOR", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Log filter for stderr, e.g. "debug" or "fair_rps_core=trace"
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Errors that stop the program before a round starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Moves(#[from] MoveSetError),

    #[error("key length must be between 16 and 1024 bytes, got {0}")]
    KeyLength(usize),
}

/// Settings for one run
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub key_len: usize,
    pub transcript: Option<PathBuf>,
    pub color: bool,
}

impl Cli {
    /// Validate the arguments into a move set and run settings
    pub fn into_parts(self) -> Result<(MoveSet, GameConfig), ConfigError> {
        let moves = MoveSet::new(self.moves)?;

        if !(MIN_KEY_LEN..=MAX_KEY_LEN).contains(&self.key_bytes) {
            return Err(ConfigError::KeyLength(self.key_bytes));
        }

        Ok((
            moves,
            GameConfig {
                key_len: self.key_bytes,
                transcript: self.transcript,
                color: !self.no_color,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fair-rps").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let (moves, config) = parse(&["rock", "paper", "scissors"]).into_parts().unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(config.key_len, DEFAULT_KEY_LEN);
        assert!(config.transcript.is_none());
    }

    #[test]
    fn test_options() {
        let cli = parse(&[
            "--key-bytes",
            "64",
            "--transcript",
            "round.json",
            "--no-color",
            "a",
            "b",
            "c",
            "d",
            "e",
        ]);
        let (moves, config) = cli.into_parts().unwrap();
        assert_eq!(moves.len(), 5);
        assert_eq!(config.key_len, 64);
        assert_eq!(config.transcript, Some(PathBuf::from("round.json")));
        assert!(!config.color);
    }

    #[test]
    fn test_hyphenated_moves_after_separator() {
        let (moves, _) = parse(&["--", "-a", "-b", "-c"]).into_parts().unwrap();
        assert_eq!(moves.name(moves.get(0).unwrap()), "-a");
    }

    #[test]
    fn test_invalid_move_lists() {
        assert!(matches!(
            parse(&[]).into_parts(),
            Err(ConfigError::Moves(MoveSetError::TooFew(0)))
        ));
        assert!(matches!(
            parse(&["a", "b", "c", "d"]).into_parts(),
            Err(ConfigError::Moves(MoveSetError::EvenCount(4)))
        ));
        assert!(matches!(
            parse(&["a", "b", "a"]).into_parts(),
            Err(ConfigError::Moves(MoveSetError::Duplicate(_)))
        ));
    }

    #[test]
    fn test_key_length_bounds() {
        assert!(matches!(
            parse(&["--key-bytes", "8", "a", "b", "c"]).into_parts(),
            Err(ConfigError::KeyLength(8))
        ));
        assert!(parse(&["--key-bytes", "16", "a", "b", "c"]).into_parts().is_ok());
    }

    #[test]
    fn test_no_color_env_accepts_any_value() {
        // The only test that touches NO_COLOR
        for (value, color) in [("1", false), ("yes", false), ("0", true), ("", true)] {
            std::env::set_var("NO_COLOR", value);
            let (_, config) = Cli::try_parse_from(["fair-rps", "a", "b", "c"])
                .unwrap()
                .into_parts()
                .unwrap();
            assert_eq!(config.color, color, "NO_COLOR={value:?}");
        }
        std::env::remove_var("NO_COLOR");
    }
}
