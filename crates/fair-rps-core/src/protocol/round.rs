//! One round of play: commit, collect the player's move, resolve, reveal.
//!
//! ```text
//! Start -> AwaitingInput -> Help -> AwaitingInput
//!                        -> Exit          (terminal)
//!                        -> Resolved      (terminal)
//! ```
//!
//! The computer's move and key live only inside [`Round`] until it resolves;
//! the only way to read them is the [`Resolution`] handed out at the end.

use super::{Command, Outcome, RoundId, RoundRecord};
use crate::crypto::{Commitment, EntropyError, HmacKey};
use crate::games::{MoveId, MoveSet, OutcomeMatrix};
use rand::{CryptoRng, RngCore};
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, trace};

/// Errors that end a round abnormally
#[derive(Debug, Error)]
pub enum RoundError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where a round reports its progress.
///
/// The round decides what to show and when; implementations decide how.
pub trait RoundView {
    /// The digest published before the player moves
    fn show_commitment(&mut self, commitment: &Commitment) -> io::Result<()>;

    /// Numbered move list plus the exit and help entries
    fn show_menu(&mut self, moves: &MoveSet) -> io::Result<()>;

    /// Full outcome table
    fn show_help(&mut self, moves: &MoveSet, matrix: &OutcomeMatrix) -> io::Result<()>;

    /// Ask for the next line of input
    fn prompt(&mut self) -> io::Result<()>;

    /// The line could not be read as a command
    fn invalid_input(&mut self, line: &str) -> io::Result<()>;

    /// Final result and the revealed key
    fn show_resolution(&mut self, moves: &MoveSet, resolution: &Resolution) -> io::Result<()>;
}

/// How a round ended
#[derive(Clone, Debug)]
pub enum RoundEnd {
    /// The player chose `0` or closed the input
    Exited,
    /// The player picked a move
    Resolved(Resolution),
}

/// Everything revealed once a round resolves
#[derive(Clone, Debug)]
pub struct Resolution {
    pub round_id: RoundId,
    pub human_move: MoveId,
    pub computer_move: MoveId,
    /// From the human's side
    pub outcome: Outcome,
    pub key: HmacKey,
    pub commitment: Commitment,
}

impl Resolution {
    /// Recompute the published digest from the revealed key and move
    pub fn verify(&self, moves: &MoveSet) -> bool {
        self.commitment.verify(moves.name(self.computer_move).as_bytes(), &self.key)
    }

    /// Serializable transcript of this round
    pub fn record(&self, moves: &MoveSet) -> RoundRecord {
        RoundRecord {
            round_id: self.round_id,
            moves: moves.names().to_vec(),
            commitment: self.commitment,
            key: self.key.clone(),
            computer_move: moves.name(self.computer_move).to_string(),
            human_move: moves.name(self.human_move).to_string(),
            outcome: self.outcome,
        }
    }
}

/// A move set together with its precomputed outcome table
#[derive(Clone, Debug)]
pub struct Game {
    moves: MoveSet,
    matrix: OutcomeMatrix,
}

impl Game {
    pub fn new(moves: MoveSet) -> Self {
        let matrix = OutcomeMatrix::build(&moves);
        Self { moves, matrix }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn matrix(&self) -> &OutcomeMatrix {
        &self.matrix
    }

    /// Outcome for `self_move` against `other_move`
    pub fn outcome(&self, self_move: MoveId, other_move: MoveId) -> Outcome {
        self.matrix.lookup(self_move, other_move)
    }

    /// Pick the computer's move and commit to it.
    ///
    /// Nothing is shown to the player yet, so an entropy failure here aborts
    /// before any output.
    pub fn start_round<R>(&self, rng: &mut R, key_len: usize) -> Result<Round<'_>, EntropyError>
    where
        R: RngCore + CryptoRng,
    {
        let computer_move = self.moves.random(rng)?;
        let key = HmacKey::generate(rng, key_len)?;
        let commitment = Commitment::new(self.moves.name(computer_move).as_bytes(), &key);

        let id = RoundId::new();
        info!(round = %id, %commitment, "round started");

        Ok(Round {
            id,
            game: self,
            computer_move,
            key,
            commitment,
        })
    }

    /// Start a round and play it to the end
    pub async fn play_round<R, I, V>(
        &self,
        rng: &mut R,
        key_len: usize,
        input: &mut I,
        view: &mut V,
    ) -> Result<RoundEnd, RoundError>
    where
        R: RngCore + CryptoRng,
        I: AsyncBufRead + Unpin + ?Sized,
        V: RoundView + ?Sized,
    {
        let round = self.start_round(rng, key_len)?;
        round.play(input, view).await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    AwaitingInput,
    Help,
    Exit,
    Resolved(MoveId),
}

/// A round in progress
pub struct Round<'g> {
    id: RoundId,
    game: &'g Game,
    computer_move: MoveId,
    key: HmacKey,
    commitment: Commitment,
}

impl Round<'_> {
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// The digest to publish before the player moves
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Resolve against the player's move and reveal the key
    pub fn resolve(self, human_move: MoveId) -> Resolution {
        let outcome = self.game.outcome(human_move, self.computer_move);
        Resolution {
            round_id: self.id,
            human_move,
            computer_move: self.computer_move,
            outcome,
            key: self.key,
            commitment: self.commitment,
        }
    }

    /// Run the round until the player exits or picks a move.
    ///
    /// Bad input re-prompts without limit; nothing accumulates between
    /// attempts. End of input counts as exit.
    #[instrument(name = "round", skip_all, fields(id = %self.id))]
    pub async fn play<I, V>(self, input: &mut I, view: &mut V) -> Result<RoundEnd, RoundError>
    where
        I: AsyncBufRead + Unpin + ?Sized,
        V: RoundView + ?Sized,
    {
        let game = self.game;
        let moves = game.moves();
        let mut line = Vec::new();
        let mut phase = Phase::Start;

        loop {
            trace!(?phase, "round phase");
            phase = match phase {
                Phase::Start => {
                    view.show_commitment(&self.commitment)?;
                    view.show_menu(moves)?;
                    Phase::AwaitingInput
                }
                Phase::AwaitingInput => {
                    view.prompt()?;
                    line.clear();
                    if input.read_until(b'\n', &mut line).await? == 0 {
                        debug!("input closed");
                        Phase::Exit
                    } else {
                        let text = String::from_utf8_lossy(&line);
                        match Command::parse(&text, moves) {
                            Command::Exit => Phase::Exit,
                            Command::Help => Phase::Help,
                            Command::Play(human_move) => Phase::Resolved(human_move),
                            Command::Invalid => {
                                debug!(input = %text.trim(), "invalid input");
                                view.invalid_input(text.trim())?;
                                Phase::AwaitingInput
                            }
                        }
                    }
                }
                Phase::Help => {
                    view.show_help(moves, game.matrix())?;
                    view.show_menu(moves)?;
                    Phase::AwaitingInput
                }
                Phase::Exit => {
                    info!("player exited");
                    return Ok(RoundEnd::Exited);
                }
                Phase::Resolved(human_move) => {
                    let resolution = self.resolve(human_move);
                    info!(
                        human = moves.name(resolution.human_move),
                        computer = moves.name(resolution.computer_move),
                        outcome = %resolution.outcome,
                        "round resolved"
                    );
                    view.show_resolution(moves, &resolution)?;
                    return Ok(RoundEnd::Resolved(resolution));
                }
            };
        }
    }
}
