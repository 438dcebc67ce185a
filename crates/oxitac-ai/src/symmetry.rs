//! Canonical board keys and symmetry classes.
//!
//! A board's key is its compact row-major encoding (see
//! [`Board::encoded`]). Two boards that are rotations or reflections of
//! each other describe the same position, so the loss memory looks a board
//! up under all six keys of its symmetry class: the identity, the three
//! nontrivial rotations, and the two axis reflections of the original
//! board. Reflections of rotations are deliberately not generated; they
//! would only duplicate keys already in the set.

use std::{collections::HashSet, fmt};

use oxitac_engine::Board;
use serde::{Deserialize, Serialize};

/// Canonical lookup key for a board position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardKey(String);

impl BoardKey {
    /// Encodes a board into its primary (untransformed) key.
    #[must_use]
    pub fn encode(board: &Board) -> Self {
        Self(board.encoded())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the keys of all boards in `board`'s symmetry class.
///
/// Boards with self-symmetry produce fewer than six distinct keys; the
/// identity key is always present.
#[must_use]
pub fn symmetry_keys(board: &Board) -> HashSet<BoardKey> {
    let mut keys = HashSet::with_capacity(6);

    let mut rotated = *board;
    for _ in 0..4 {
        keys.insert(BoardKey::encode(&rotated));
        rotated = rotated.rotated_cw();
    }

    keys.insert(BoardKey::encode(&board.flipped_rows()));
    keys.insert(BoardKey::encode(&board.flipped_cols()));

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_board_encoding() {
        let board = Board::from_ascii(
            "
            X.O
            .X.
            ...
            ",
        );
        assert_eq!(BoardKey::encode(&board).as_str(), "X-O-X----");
    }

    #[test]
    fn test_identity_key_always_present() {
        let board = Board::from_ascii(
            "
            XO.
            .X.
            ..O
            ",
        );
        assert!(symmetry_keys(&board).contains(&BoardKey::encode(&board)));
    }

    #[test]
    fn test_asymmetric_board_has_six_keys() {
        let board = Board::from_ascii(
            "
            XX.
            .O.
            ...
            ",
        );
        assert_eq!(symmetry_keys(&board).len(), 6);
    }

    #[test]
    fn test_symmetric_boards_share_keys() {
        let board = Board::from_ascii(
            "
            X..
            .O.
            ...
            ",
        );
        let rotated = board.rotated_cw();
        // A rotation belongs to the same symmetry class, so its key set
        // must contain the original's identity key and vice versa.
        assert!(symmetry_keys(&rotated).contains(&BoardKey::encode(&board)));
        assert!(symmetry_keys(&board).contains(&BoardKey::encode(&rotated)));
    }

    #[test]
    fn test_fully_symmetric_board_collapses_to_one_key() {
        let board = Board::from_ascii(
            "
            ...
            .X.
            ...
            ",
        );
        assert_eq!(symmetry_keys(&board).len(), 1);
    }

    #[test]
    fn test_empty_board_single_key() {
        assert_eq!(symmetry_keys(&Board::EMPTY).len(), 1);
    }
}
