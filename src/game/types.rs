//! Core domain types for the side-stacker board.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (moves first).
    First,
    /// Second player.
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's marker.
    Owned(Player),
}

/// Smallest side length on which four in a row is possible.
pub const MIN_BOARD_SIZE: usize = 4;

/// Square grid of cells, row-major.
///
/// Cells become non-empty only through [`Board::set`]; the grid never
/// resizes after creation. The board knows nothing about turns, AI, or
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Errors from board construction and cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Requested size cannot hold a four-in-a-row.
    #[display("Board size {} is below the minimum of {}", _0, MIN_BOARD_SIZE)]
    SizeTooSmall(usize),

    /// Row or column index outside the grid.
    #[display("Cell ({}, {}) is outside the board", _0, _1)]
    OutOfRange(usize, usize),

    /// Target cell already holds a marker.
    #[display("Cell ({}, {}) is already occupied", _0, _1)]
    CellOccupied(usize, usize),
}

impl std::error::Error for BoardError {}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::SizeTooSmall` for sizes below [`MIN_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::SizeTooSmall(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfRange` if either index is not in `[0, size)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfRange(row, col));
        }
        Ok(self.cells[row * self.size + col])
    }

    /// Unchecked read for in-range coordinates. Scan loops stay within
    /// `[0, size)` by construction.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Places a marker on an empty cell. This is the only mutator; it never
    /// overwrites a filled cell.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfRange` for bad indices and
    /// `BoardError::CellOccupied` if the cell already holds a marker.
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        match self.cell_at(row, col)? {
            Cell::Empty => {
                self.cells[row * self.size + col] = Cell::Owned(player);
                Ok(())
            }
            Cell::Owned(_) => Err(BoardError::CellOccupied(row, col)),
        }
    }

    /// Checks if the cell at the given coordinates is empty.
    /// Out-of-range coordinates count as not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell_at(row, col), Ok(Cell::Empty))
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Empties every cell, keeping the size.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.at(row, col) {
                    Cell::Empty => '.',
                    Cell::Owned(Player::First) => 'X',
                    Cell::Owned(Player::Second) => 'O',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", symbol)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
