//! Core board model: a 3x3 grid of cells with placement and terminal-state
//! evaluation.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Board side length.
pub const GRID_SIZE: usize = 3;

/// The occupant of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player's token.
    Player,
    /// The computer opponent's token.
    Opponent,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// Result of evaluating the board for a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A line of three matching marks exists.
    Winner(Mark),
    /// The board is full with no winning line.
    Draw,
    /// The match continues.
    Ongoing,
}

/// Rejected placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Coordinates outside the 3x3 grid.
    #[display("position ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals (row-major indices).
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; GRID_SIZE * GRID_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE * GRID_SIZE],
        }
    }

    /// Returns the cell at the given coordinates, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(self.cells[row * GRID_SIZE + col])
    }

    /// Checks whether the cell at the given coordinates is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Places a mark at the given coordinates.
    ///
    /// A cell transitions `Empty -> Occupied` exactly once; it never reverts
    /// except through [`Board::reset`].
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError`] when the coordinates are out of bounds or the
    /// cell is already occupied.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), PlaceError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(PlaceError::OutOfBounds { row, col });
        }
        let idx = row * GRID_SIZE + col;
        if self.cells[idx] != Cell::Empty {
            return Err(PlaceError::Occupied { row, col });
        }
        self.cells[idx] = Cell::Occupied(mark);
        Ok(())
    }

    /// Evaluates the board for a terminal state.
    ///
    /// Checks the 3 rows, 3 columns, and 2 diagonals; a line wins when all
    /// three cells share the same non-empty mark. A full board with no
    /// winning line is a draw. At most one terminal condition can hold for a
    /// well-formed board, so check order is immaterial.
    pub fn evaluate(&self) -> Verdict {
        for line in &LINES {
            if let Cell::Occupied(mark) = self.cells[line[0]]
                && self.cells[line[1]] == Cell::Occupied(mark)
                && self.cells[line[2]] == Cell::Occupied(mark)
            {
                return Verdict::Winner(mark);
            }
        }
        if self.cells.iter().all(|&c| c != Cell::Empty) {
            return Verdict::Draw;
        }
        Verdict::Ongoing
    }

    /// Returns the first empty cell in row-major scan order.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == Cell::Empty)
            .map(|idx| (idx / GRID_SIZE, idx % GRID_SIZE))
    }

    /// Returns the number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Clears all cells to empty.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; GRID_SIZE * GRID_SIZE];
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; GRID_SIZE * GRID_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
