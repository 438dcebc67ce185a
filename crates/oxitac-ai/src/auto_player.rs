use std::path::Path;

use oxitac_engine::{Board, CellPos, Mark};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use crate::{loss_memory::LossMemory, session_recorder::SessionRecorder, turn_evaluator};

/// The automated player.
///
/// Owns the loss memory, the per-game recorder, and the tie-breaking
/// random source, and exposes the two calls a host game loop makes:
///
/// - [`Self::predict_next_move`] before each of the automated side's turns
/// - [`Self::notify_game_end`] exactly once after the host detects the
///   game's outcome
///
/// The memory is loaded once at construction and rewritten after every
/// recorded loss, so learned vetoes survive process restarts.
#[derive(Debug)]
pub struct AutoPlayer {
    mark: Mark,
    memory: LossMemory,
    recorder: SessionRecorder,
    rng: Pcg32,
}

impl AutoPlayer {
    /// Creates a player for `mark` whose memory persists at `memory_path`.
    ///
    /// The random seed is taken from the OS; use [`Self::with_seed`] for
    /// reproducible sessions.
    #[must_use]
    pub fn new<P>(mark: Mark, memory_path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self::with_memory(mark, LossMemory::load(memory_path))
    }

    /// Creates a player around an existing store.
    #[must_use]
    pub fn with_memory(mark: Mark, memory: LossMemory) -> Self {
        Self {
            mark,
            memory,
            recorder: SessionRecorder::new(),
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Like [`Self::with_memory`], but with a fixed seed for deterministic
    /// move selection.
    #[must_use]
    pub fn with_seed(mark: Mark, memory: LossMemory, seed: u64) -> Self {
        Self {
            mark,
            memory,
            recorder: SessionRecorder::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    #[must_use]
    pub fn memory(&self) -> &LossMemory {
        &self.memory
    }

    /// Chooses the automated side's next move and records it for the game
    /// in flight.
    ///
    /// Returns `None` only when the board is full; the host is expected to
    /// check for a finished game before asking.
    pub fn predict_next_move(&mut self, board: &Board) -> Option<CellPos> {
        let pos = turn_evaluator::select_move(board, self.mark, &self.memory, &mut self.rng)?;
        self.recorder.record(*board, pos);
        Some(pos)
    }

    /// Reports the finished game's winner (`None` for a draw).
    ///
    /// A loss commits the recorded moves to the loss memory; every outcome
    /// resets the recorder for the next game.
    pub fn notify_game_end(&mut self, winner: Option<Mark>) {
        self.recorder
            .finish_game(winner, self.mark, &mut self.memory);
    }
}
