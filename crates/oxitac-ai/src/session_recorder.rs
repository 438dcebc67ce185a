use oxitac_engine::{Board, CellPos, Mark};

use crate::loss_memory::{LossMemory, RecordedMove};

/// Per-game buffer of the automated side's moves.
///
/// Each chosen move is stored with the board as it was before the move was
/// applied. When the game ends in a loss the whole buffer is committed to
/// the loss memory in playing order; every outcome clears the buffer.
#[derive(Debug, Default)]
pub struct SessionRecorder {
    moves: Vec<RecordedMove>,
}

impl SessionRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a chosen move with its pre-move board snapshot.
    pub fn record(&mut self, board: Board, pos: CellPos) {
        self.moves.push(RecordedMove::new(board, pos));
    }

    /// Moves recorded for the game in flight, in playing order.
    #[must_use]
    pub fn recorded(&self) -> &[RecordedMove] {
        &self.moves
    }

    /// Closes out the current game.
    ///
    /// A win for the opposing side commits every recorded move to `memory`;
    /// wins, draws, and losses all clear the buffer afterwards.
    pub fn finish_game(&mut self, winner: Option<Mark>, automated: Mark, memory: &mut LossMemory) {
        if winner == Some(automated.opponent()) {
            for recorded in &self.moves {
                memory.add_losing_move(*recorded.board(), recorded.pos());
            }
        }
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_moves() -> [(Board, CellPos); 2] {
        let first = Board::from_ascii(
            "
            X..
            ...
            ...
            ",
        );
        let second = Board::from_ascii(
            "
            X..
            .OX
            ...
            ",
        );
        [
            (first, CellPos::CENTER),
            (second, CellPos::new(2, 0)),
        ]
    }

    #[test]
    fn test_loss_commits_recorded_moves_in_order() {
        let mut memory = LossMemory::in_memory();
        let mut recorder = SessionRecorder::new();
        let moves = sample_moves();
        for (board, pos) in moves {
            recorder.record(board, pos);
        }

        recorder.finish_game(Some(Mark::X), Mark::O, &mut memory);

        assert!(recorder.recorded().is_empty());
        assert_eq!(memory.recorded_move_count(), 2);
        for (board, pos) in moves {
            assert!(memory.is_losing_move(&board, pos));
        }
    }

    #[test]
    fn test_win_discards_buffer() {
        let mut memory = LossMemory::in_memory();
        let mut recorder = SessionRecorder::new();
        for (board, pos) in sample_moves() {
            recorder.record(board, pos);
        }

        recorder.finish_game(Some(Mark::O), Mark::O, &mut memory);

        assert!(recorder.recorded().is_empty());
        assert!(memory.is_empty());
    }

    #[test]
    fn test_draw_discards_buffer() {
        let mut memory = LossMemory::in_memory();
        let mut recorder = SessionRecorder::new();
        for (board, pos) in sample_moves() {
            recorder.record(board, pos);
        }

        recorder.finish_game(None, Mark::O, &mut memory);

        assert!(recorder.recorded().is_empty());
        assert!(memory.is_empty());
    }
}
