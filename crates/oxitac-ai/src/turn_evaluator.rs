//! Move selection for the automated side.
//!
//! [`select_move`] walks a strict priority ladder each turn:
//!
//! 1. **Immediate win** - the first empty cell (row-major) that completes a
//!    line for the automated side is taken unconditionally.
//! 2. **Immediate block** - the same scan for the opponent's mark; a cell
//!    the opponent would win on is taken to deny it.
//! 3. **Safety filter** - remaining candidates are dropped when the loss
//!    memory vetoes them or when the opponent has a winning reply to them.
//!    If nothing survives, every candidate is back on the table; a forced
//!    bad position should still play a move.
//! 4. **Positional heuristic** - the center if it is available, otherwise
//!    corners next to an occupied cell ("hot spots").
//! 5. **Tie-break** - a uniform draw among the hot spots, or among all safe
//!    moves when no hot spot exists.
//!
//! All simulation happens on private board copies; randomness is injected
//! by the caller so games can be replayed deterministically.

use arrayvec::ArrayVec;
use oxitac_engine::{Board, CELL_COUNT, CellPos, Mark};
use rand::{Rng, seq::IndexedRandom as _};

use crate::loss_memory::LossMemory;

/// Returns the first empty cell (row-major scan) where placing `mark`
/// completes a line, if any.
#[must_use]
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<CellPos> {
    board
        .empty_cells()
        .find(|&pos| board.with_mark(pos, mark).has_winning_line(mark))
}

/// A move is risky when the opponent has at least one winning reply to it.
#[must_use]
pub fn is_risky_move(board: &Board, pos: CellPos, mark: Mark) -> bool {
    let after = board.with_mark(pos, mark);
    find_winning_move(&after, mark.opponent()).is_some()
}

/// A hot spot is the center, or a corner with an occupied neighbor.
#[must_use]
pub fn is_hot_spot(board: &Board, pos: CellPos) -> bool {
    pos.is_center() || is_hot_corner(board, pos)
}

/// Corners heat up once any of their three neighbors (row midpoint, column
/// midpoint, center) carries a mark.
fn is_hot_corner(board: &Board, pos: CellPos) -> bool {
    if !pos.is_corner() {
        return false;
    }
    let neighbors = [
        CellPos::new(pos.row(), 1),
        CellPos::new(1, pos.col()),
        CellPos::CENTER,
    ];
    neighbors.iter().any(|&n| !board.is_cell_empty(n))
}

/// Selects the next move for `mark`, or `None` when the board is full.
///
/// See the module documentation for the priority ladder. The caller is
/// expected to have ruled out finished games; a full board is the only
/// input without a move.
pub fn select_move<R>(
    board: &Board,
    mark: Mark,
    memory: &LossMemory,
    rng: &mut R,
) -> Option<CellPos>
where
    R: Rng + ?Sized,
{
    if let Some(pos) = find_winning_move(board, mark) {
        return Some(pos);
    }
    if let Some(pos) = find_winning_move(board, mark.opponent()) {
        return Some(pos);
    }

    let candidates: ArrayVec<CellPos, CELL_COUNT> = board.empty_cells().collect();
    if candidates.is_empty() {
        return None;
    }

    let mut safe: ArrayVec<CellPos, CELL_COUNT> = candidates
        .iter()
        .copied()
        .filter(|&pos| !memory.is_losing_move(board, pos))
        .filter(|&pos| !is_risky_move(board, pos, mark))
        .collect();
    if safe.is_empty() {
        // Every candidate is vetoed or loses a piece of ground; all that is
        // left is to pick among them anyway.
        safe = candidates;
    }

    let hot: ArrayVec<CellPos, CELL_COUNT> = if safe.contains(&CellPos::CENTER) {
        let mut center_only = ArrayVec::new();
        center_only.push(CellPos::CENTER);
        center_only
    } else {
        safe.iter()
            .copied()
            .filter(|&pos| is_hot_corner(board, pos))
            .collect()
    };

    let pool: &[CellPos] = if hot.is_empty() { &safe } else { &hot };
    pool.choose(rng).copied()
}
