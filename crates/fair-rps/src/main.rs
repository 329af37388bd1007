//! Fair RPS
//!
//! Interactive rock-paper-scissors over any odd number of moves. The computer
//! publishes an HMAC of its move before the player chooses and reveals the
//! key afterwards.

mod config;
mod console;
mod table;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, GameConfig, USAGE_EXAMPLE};
use console::ConsoleView;
use fair_rps_core::{Game, MoveSet, RoundEnd, RoundRecord};
use rand::rngs::OsRng;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    init_tracing(&cli.log_level);

    let (moves, config) = match cli.into_parts() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Invalid input: {e}");
            eprintln!("{USAGE_EXAMPLE}");
            return ExitCode::from(1);
        }
    };

    match run(moves, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(moves: MoveSet, config: GameConfig) -> Result<()> {
    if !config.color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let game = Game::new(moves);
    info!(moves = game.moves().len(), key_len = config.key_len, "starting round");

    let mut input = BufReader::new(tokio::io::stdin());
    let mut view = ConsoleView::new(std::io::stdout().lock());

    let end = game
        .play_round(&mut OsRng, config.key_len, &mut input, &mut view)
        .await
        .context("round aborted")?;

    if let (RoundEnd::Resolved(resolution), Some(path)) = (end, &config.transcript) {
        write_transcript(path, &resolution.record(game.moves())).await?;
    }
    Ok(())
}

async fn write_transcript(path: &Path, record: &RoundRecord) -> Result<()> {
    let json = record.to_json().context("failed to encode transcript")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("failed to write transcript to {}", path.display()))?;
    info!(path = %path.display(), "transcript written");
    Ok(())
}
