use arrayvec::ArrayVec;

use crate::{
    PlayError,
    core::board::{Board, CELL_COUNT, CellPos},
    core::mark::Mark,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    InProgress,
    Won(Mark),
    Drawn,
}

/// A single game: board state, side to move, and outcome.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    side_to_move: Mark,
    state: SessionState,
    moves: ArrayVec<(Mark, CellPos), CELL_COUNT>,
}

impl GameSession {
    #[must_use]
    pub fn new(first_player: Mark) -> Self {
        Self {
            board: Board::EMPTY,
            side_to_move: first_player,
            state: SessionState::InProgress,
            moves: ArrayVec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Mark {
        self.side_to_move
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the winning mark, or `None` while in progress or drawn.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self.state {
            SessionState::Won(mark) => Some(mark),
            SessionState::InProgress | SessionState::Drawn => None,
        }
    }

    /// Moves played so far, in order.
    #[must_use]
    pub fn moves(&self) -> &[(Mark, CellPos)] {
        &self.moves
    }

    /// Plays the current side's mark at `pos` and advances the turn.
    ///
    /// On a winning or board-filling move the session transitions to its
    /// terminal state instead of switching sides.
    pub fn play(&mut self, pos: CellPos) -> Result<&SessionState, PlayError> {
        if !self.state.is_in_progress() {
            return Err(PlayError::GameOver);
        }
        self.board
            .place(pos, self.side_to_move)
            .map_err(PlayError::CellOccupied)?;
        self.moves.push((self.side_to_move, pos));

        if self.board.has_winning_line(self.side_to_move) {
            self.state = SessionState::Won(self.side_to_move);
        } else if self.board.is_full() {
            self.state = SessionState::Drawn;
        } else {
            self.side_to_move = self.side_to_move.opponent();
        }
        Ok(&self.state)
    }

    /// Clears the board and move list for a fresh game.
    pub fn restart(&mut self, first_player: Mark) {
        self.board = Board::EMPTY;
        self.side_to_move = first_player;
        self.state = SessionState::InProgress;
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(Mark::X);
        assert_eq!(session.side_to_move(), Mark::X);

        session.play(CellPos::new(0, 0)).unwrap();
        assert_eq!(session.side_to_move(), Mark::O);

        session.play(CellPos::new(1, 1)).unwrap();
        assert_eq!(session.side_to_move(), Mark::X);
        assert_eq!(
            session.moves(),
            &[(Mark::X, CellPos::new(0, 0)), (Mark::O, CellPos::new(1, 1))]
        );
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut session = GameSession::new(Mark::X);
        session.play(CellPos::CENTER).unwrap();

        let err = session.play(CellPos::CENTER).unwrap_err();
        assert!(matches!(err, PlayError::CellOccupied(_)));
        // Turn did not advance on the failed move
        assert_eq!(session.side_to_move(), Mark::O);
    }

    #[test]
    fn test_win_detection_ends_session() {
        let mut session = GameSession::new(Mark::X);
        session.play(CellPos::new(0, 0)).unwrap(); // X
        session.play(CellPos::new(1, 0)).unwrap(); // O
        session.play(CellPos::new(0, 1)).unwrap(); // X
        session.play(CellPos::new(1, 1)).unwrap(); // O
        let state = session.play(CellPos::new(0, 2)).unwrap(); // X completes the top row

        assert_eq!(*state, SessionState::Won(Mark::X));
        assert_eq!(session.winner(), Some(Mark::X));
        assert!(matches!(
            session.play(CellPos::new(2, 2)),
            Err(PlayError::GameOver)
        ));
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut session = GameSession::new(Mark::X);
        // X O X / X X O / O X O - no line for either side
        for (row, col) in [
            (0, 0),
            (0, 1),
            (1, 1),
            (2, 0),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 2),
            (0, 2),
        ] {
            session.play(CellPos::new(row, col)).unwrap();
        }
        assert!(session.state().is_drawn());
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut session = GameSession::new(Mark::X);
        session.play(CellPos::CENTER).unwrap();
        session.restart(Mark::O);

        assert_eq!(*session.board(), Board::EMPTY);
        assert_eq!(session.side_to_move(), Mark::O);
        assert!(session.state().is_in_progress());
        assert!(session.moves().is_empty());
    }
}
