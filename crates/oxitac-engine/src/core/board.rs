use serde::{Deserialize, Serialize};

use crate::{CellOccupiedError, core::mark::Mark};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;
/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Character used for empty cells in the compact encoding.
pub const EMPTY_CELL_CHAR: char = '-';

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[CellPos; BOARD_SIZE]; 8] = [
    [CellPos::new(0, 0), CellPos::new(0, 1), CellPos::new(0, 2)],
    [CellPos::new(1, 0), CellPos::new(1, 1), CellPos::new(1, 2)],
    [CellPos::new(2, 0), CellPos::new(2, 1), CellPos::new(2, 2)],
    [CellPos::new(0, 0), CellPos::new(1, 0), CellPos::new(2, 0)],
    [CellPos::new(0, 1), CellPos::new(1, 1), CellPos::new(2, 1)],
    [CellPos::new(0, 2), CellPos::new(1, 2), CellPos::new(2, 2)],
    [CellPos::new(0, 0), CellPos::new(1, 1), CellPos::new(2, 2)],
    [CellPos::new(0, 2), CellPos::new(1, 1), CellPos::new(2, 0)],
];

/// Position of a cell on the 3×3 grid, row-major from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl<'de> Deserialize<'de> for CellPos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            row: usize,
            col: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.row >= BOARD_SIZE || raw.col >= BOARD_SIZE {
            return Err(serde::de::Error::custom(format!(
                "cell position ({}, {}) is outside the {BOARD_SIZE}x{BOARD_SIZE} grid",
                raw.row, raw.col
            )));
        }
        Ok(Self::new(raw.row, raw.col))
    }
}

impl CellPos {
    pub const CENTER: Self = Self::new(1, 1);

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

/// A 3×3 game board.
///
/// Cells hold `Option<Mark>`. The board is `Copy`, so callers that need to
/// try out moves work on private copies and never touch the live board.
///
/// # Compact encoding
///
/// A board serializes as a 9-character row-major string over `-`, `X`, `O`
/// (e.g. `"X---O---X"`). The same encoding doubles as the lookup key for
/// symmetry-aware board comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encoded())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(serde::de::Error::custom(format!(
                "expected {} cell characters, got {}",
                CELL_COUNT,
                chars.len()
            )));
        }

        let mut board = Self::EMPTY;
        for (i, &c) in chars.iter().enumerate() {
            if c == EMPTY_CELL_CHAR {
                continue;
            }
            let Some(mark) = Mark::from_char(c) else {
                return Err(serde::de::Error::custom(format!(
                    "invalid cell character at index {i}: {c:?}"
                )));
            };
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = Some(mark);
        }

        Ok(board)
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[None; BOARD_SIZE]; BOARD_SIZE],
    };

    /// Returns the mark at `pos`, if any.
    #[must_use]
    pub const fn cell(&self, pos: CellPos) -> Option<Mark> {
        self.cells[pos.row][pos.col]
    }

    #[must_use]
    pub const fn is_cell_empty(&self, pos: CellPos) -> bool {
        self.cells[pos.row][pos.col].is_none()
    }

    /// Places `mark` at `pos`.
    pub fn place(&mut self, pos: CellPos, mark: Mark) -> Result<(), CellOccupiedError> {
        if self.cells[pos.row][pos.col].is_some() {
            return Err(CellOccupiedError { pos });
        }
        self.cells[pos.row][pos.col] = Some(mark);
        Ok(())
    }

    /// Returns a copy with `mark` at `pos`, replacing any existing mark.
    ///
    /// This is the move-simulation primitive: the original board is left
    /// untouched.
    #[must_use]
    pub fn with_mark(mut self, pos: CellPos, mark: Mark) -> Self {
        self.cells[pos.row][pos.col] = Some(mark);
        self
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Option<Mark>)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).map(move |col| (CellPos::new(row, col), self.cells[row][col]))
        })
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells()
            .filter_map(|(pos, cell)| cell.is_none().then_some(pos))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    /// Checks whether `mark` occupies a complete row, column, or diagonal.
    #[must_use]
    pub fn has_winning_line(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&pos| self.cell(pos) == Some(mark)))
    }

    /// Returns the mark holding a winning line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| self.has_winning_line(mark))
    }

    /// Returns the board rotated 90° clockwise.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let mut rotated = Self::EMPTY;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                rotated.cells[col][BOARD_SIZE - 1 - row] = self.cells[row][col];
            }
        }
        rotated
    }

    /// Returns the board mirrored across its horizontal axis (the top row
    /// becomes the bottom row).
    #[must_use]
    pub fn flipped_rows(&self) -> Self {
        let mut flipped = Self::EMPTY;
        for row in 0..BOARD_SIZE {
            flipped.cells[BOARD_SIZE - 1 - row] = self.cells[row];
        }
        flipped
    }

    /// Returns the board mirrored across its vertical axis (the left column
    /// becomes the right column).
    #[must_use]
    pub fn flipped_cols(&self) -> Self {
        let mut flipped = Self::EMPTY;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                flipped.cells[row][BOARD_SIZE - 1 - col] = self.cells[row][col];
            }
        }
        flipped
    }

    /// Compact row-major encoding: [`EMPTY_CELL_CHAR`] for empty cells,
    /// mark characters otherwise.
    #[must_use]
    pub fn encoded(&self) -> String {
        let mut encoded = String::with_capacity(CELL_COUNT);
        for row in &self.cells {
            for cell in row {
                encoded.push(cell.map_or(EMPTY_CELL_CHAR, Mark::as_char));
            }
        }
        encoded
    }

    /// Creates a board from ASCII art for testing.
    /// `X` and `O` are marks, `.` is an empty cell.
    /// Rows are specified from top to bottom.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert_eq!(
            lines.len(),
            BOARD_SIZE,
            "Expected exactly {} rows, got {}",
            BOARD_SIZE,
            lines.len()
        );

        let mut board = Self::EMPTY;
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line
                .chars()
                .filter(|c| *c == '.' || *c == 'X' || *c == 'O')
                .collect();
            assert_eq!(
                chars.len(),
                BOARD_SIZE,
                "Each row must have exactly {} cells, got {} at row {}",
                BOARD_SIZE,
                chars.len(),
                row
            );

            for (col, &c) in chars.iter().enumerate() {
                board.cells[row][col] = Mark::from_char(c);
            }
        }
        board
    }
}
