use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the opposing mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Character used for this mark in the compact board encoding.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    /// Parses a mark from its encoding character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Self::X),
            'O' => Some(Self::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_char_round_trip() {
        for mark in [Mark::X, Mark::O] {
            assert_eq!(Mark::from_char(mark.as_char()), Some(mark));
        }
        assert_eq!(Mark::from_char('-'), None);
        assert_eq!(Mark::from_char('x'), None);
    }
}
