//! Fair RPS verifier
//!
//! Recomputes a round's HMAC from the revealed key and computer move, either
//! from the values printed during play or from a saved transcript.

use anyhow::{Context, Result};
use clap::Parser;
use fair_rps_core::{Commitment, HmacKey, RoundRecord};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "fair-rps-verify")]
#[command(about = "Check that a fair-rps computer move matches the HMAC published before play")]
#[command(version)]
struct Cli {
    /// HMAC printed at the start of the round (hex)
    #[arg(long, required_unless_present = "transcript")]
    hmac: Option<String>,

    /// HMAC key revealed at the end of the round (hex)
    #[arg(long, required_unless_present = "transcript")]
    key: Option<String>,

    /// Computer move revealed at the end of the round
    #[arg(value_name = "MOVE", required_unless_present = "transcript")]
    computer_move: Option<String>,

    /// Verify a JSON transcript written with --transcript instead
    #[arg(long, conflicts_with_all = ["hmac", "key", "computer_move"])]
    transcript: Option<PathBuf>,
}

/// The three values a check needs
struct Claim {
    commitment: Commitment,
    key: HmacKey,
    computer_move: String,
}

impl Cli {
    fn into_claim(self) -> Result<Claim> {
        if let Some(path) = self.transcript {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let record = RoundRecord::from_json(&json)
                .with_context(|| format!("{} is not a fair-rps transcript", path.display()))?;
            return Ok(Claim {
                commitment: record.commitment,
                key: record.key,
                computer_move: record.computer_move,
            });
        }

        let commitment = self
            .hmac
            .context("--hmac is required")?
            .parse()
            .context("invalid --hmac")?;
        let key = self
            .key
            .context("--key is required")?
            .parse()
            .context("invalid --key")?;
        let computer_move = self.computer_move.context("MOVE is required")?;

        Ok(Claim {
            commitment,
            key,
            computer_move,
        })
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    let claim = match cli.into_claim() {
        Ok(claim) => claim,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(1);
        }
    };

    if claim.commitment.verify(claim.computer_move.as_bytes(), &claim.key) {
        println!("OK: HMAC matches move {:?}", claim.computer_move);
        ExitCode::SUCCESS
    } else {
        println!(
            "MISMATCH: HMAC-SHA256(key, {:?}) = {}, expected {}",
            claim.computer_move,
            Commitment::new(claim.computer_move.as_bytes(), &claim.key),
            claim.commitment
        );
        ExitCode::from(1)
    }
}
