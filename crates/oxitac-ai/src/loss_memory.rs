//! Persistent memory of moves that preceded a loss.
//!
//! The store maps a board's canonical key to the moves that were punished
//! from that position. Lookups are symmetry-aware: a candidate move is
//! checked against the lists stored under every key in the current board's
//! symmetry class (see [`symmetry`](crate::symmetry)). Insertions always go
//! under the primary, untransformed key.
//!
//! # Fuzzy matching
//!
//! A stored move vetoes a candidate when the played cell is identical, the
//! two boards hold the same number of marks, and at least
//! [`MIN_MATCHING_CELLS`] of the nine cells compare equal literally. The
//! threshold is deliberately below 9 so that near-identical late-game
//! positions share their punishments.
//!
//! # Durability
//!
//! The whole store is rewritten to its backing file after every insertion,
//! so a crash loses at most the unflushed moves of the game in flight.
//! Storage failures are never fatal: a missing or corrupt file yields an
//! empty store, and write failures leave the in-memory state serving
//! lookups for the rest of the process. Both cases are logged.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use oxitac_engine::{Board, CellPos};
use serde::{Deserialize, Serialize};

use crate::symmetry::{self, BoardKey};

/// Cell-by-cell matches required to call two boards equivalent.
///
/// Exactly 7 of 9: two differing cells still match, three do not.
pub const MIN_MATCHING_CELLS: usize = 7;

/// A board snapshot paired with the move that was played on it.
///
/// The snapshot is the exact board the move was chosen from, never a
/// symmetry-normalized copy; symmetry only widens which candidate lists a
/// lookup scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    board: Board,
    pos: CellPos,
}

impl RecordedMove {
    #[must_use]
    pub fn new(board: Board, pos: CellPos) -> Self {
        Self { board, pos }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn pos(&self) -> CellPos {
        self.pos
    }

    /// Fuzzy equivalence between this recorded move and a candidate move on
    /// a live board.
    fn matches(&self, board: &Board, pos: CellPos) -> bool {
        if self.pos != pos {
            return false;
        }
        if self.board.occupied_count() != board.occupied_count() {
            return false;
        }
        let matching_cells = self
            .board
            .cells()
            .zip(board.cells())
            .filter(|((_, stored), (_, live))| stored == live)
            .count();
        matching_cells >= MIN_MATCHING_CELLS
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum StoreError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Parse(serde_json::Error),
}

/// Durable map from canonical board keys to punished moves.
#[derive(Debug)]
pub struct LossMemory {
    entries: HashMap<BoardKey, Vec<RecordedMove>>,
    path: Option<PathBuf>,
}

impl LossMemory {
    /// Creates an empty store with no backing file.
    ///
    /// Mutations are kept in memory only; useful for tests and throwaway
    /// sessions.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            entries: HashMap::new(),
            path: None,
        }
    }

    /// Loads the store backed by the file at `path`.
    ///
    /// A missing file means a first run and yields an empty store. An
    /// unreadable or corrupt file also yields an empty store, with a
    /// diagnostic logged; the store is never in an error state.
    #[must_use]
    pub fn load<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load loss memory, starting empty"
                );
                HashMap::new()
            }
        };
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Checks whether playing `pos` on `board` repeats a punished move.
    ///
    /// Scans the recorded lists under every key of `board`'s symmetry class
    /// and applies the fuzzy-match policy to each stored move.
    #[must_use]
    pub fn is_losing_move(&self, board: &Board, pos: CellPos) -> bool {
        symmetry::symmetry_keys(board).iter().any(|key| {
            self.entries
                .get(key)
                .is_some_and(|moves| moves.iter().any(|stored| stored.matches(board, pos)))
        })
    }

    /// Records that playing `pos` on `board` preceded a loss, then rewrites
    /// the backing file.
    pub fn add_losing_move(&mut self, board: Board, pos: CellPos) {
        self.entries
            .entry(BoardKey::encode(&board))
            .or_default()
            .push(RecordedMove::new(board, pos));
        self.persist();
    }

    /// Total number of recorded moves across all keys.
    #[must_use]
    pub fn recorded_move_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded moves stored under a board's primary key.
    #[must_use]
    pub fn moves_for(&self, board: &Board) -> &[RecordedMove] {
        self.entries
            .get(&BoardKey::encode(board))
            .map_or(&[], Vec::as_slice)
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(err) = write_entries(&self.entries, path) {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "failed to persist loss memory, continuing in memory"
            );
        }
    }
}

fn read_entries(path: &Path) -> Result<HashMap<BoardKey, Vec<RecordedMove>>, StoreError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&json)?)
}

fn write_entries(
    entries: &HashMap<BoardKey, Vec<RecordedMove>>,
    path: &Path,
) -> Result<(), StoreError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string(entries)?;
    fs::write(path, json)?;
    Ok(())
}
