//! Board state: an 8×8 grid of [`Cell`]s indexed by `(rank, file)`.

use crate::cell::Cell;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::coord::Square;
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Raw storage for one game's board.
///
/// Cells are addressed by `(rank, file)`, rank 0 being the top row (`8`) and
/// file 0 the left column (`a`). Writes are unconditional; nothing here knows
/// about chess rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardState {
    /// Create a board with every cell set to [`Cell::Empty`].
    pub fn create() -> Self {
        BoardState {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at `(rank, file)`.
    pub fn get(&self, rank: usize, file: usize) -> Result<Cell, BoardError> {
        Self::check_bounds(rank, file)?;
        Ok(self.cells[rank][file])
    }

    /// Overwrite the cell at `(rank, file)`.
    pub fn set(&mut self, rank: usize, file: usize, value: Cell) -> Result<(), BoardError> {
        Self::check_bounds(rank, file)?;
        self.cells[rank][file] = value;
        Ok(())
    }

    pub fn get_square(&self, square: Square) -> Cell {
        self.cells[square.rank()][square.file()]
    }

    pub fn set_square(&mut self, square: Square, value: Cell) {
        self.cells[square.rank()][square.file()] = value;
    }

    /// Cells of one rank, left to right.
    pub fn rank_cells(&self, rank: usize) -> Option<&[Cell; BOARD_SIZE]> {
        self.cells.get(rank)
    }

    /// Reset every cell to [`Cell::Empty`].
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Non-empty squares with their contents, top rank first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.get_square(sq)))
            .filter(|(_, cell)| !cell.is_empty())
    }

    #[inline]
    fn check_bounds(rank: usize, file: usize) -> Result<(), BoardError> {
        if rank >= BOARD_SIZE || file >= BOARD_SIZE {
            Err(BoardError::IndexOutOfBounds { rank, file })
        } else {
            Ok(())
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::create()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // an undrawable marker is reported in place of the board
        match crate::render::BoardRenderer::render(self) {
            Ok(lines) => {
                for line in lines {
                    writeln!(f, "{}", line)?;
                }
                Ok(())
            }
            Err(e) => writeln!(f, "{}", e),
        }
    }
}

/// Read-only access to a board of any shape, as consumed by the renderer.
///
/// [`BoardState`] always reports 8×8; other implementations (for instance a
/// grid assembled from external data) may not, and the renderer rejects them.
pub trait BoardView {
    /// Number of ranks present.
    fn rank_count(&self) -> usize;

    /// Cells of `rank`, left to right, or `None` past the last rank.
    fn rank_slice(&self, rank: usize) -> Option<&[Cell]>;
}

impl BoardView for BoardState {
    fn rank_count(&self) -> usize {
        BOARD_SIZE
    }

    fn rank_slice(&self, rank: usize) -> Option<&[Cell]> {
        self.rank_cells(rank).map(|r| &r[..])
    }
}

impl BoardView for [Vec<Cell>] {
    fn rank_count(&self) -> usize {
        self.len()
    }

    fn rank_slice(&self, rank: usize) -> Option<&[Cell]> {
        self.get(rank).map(Vec::as_slice)
    }
}

impl BoardView for Vec<Vec<Cell>> {
    fn rank_count(&self) -> usize {
        self.len()
    }

    fn rank_slice(&self, rank: usize) -> Option<&[Cell]> {
        self.get(rank).map(Vec::as_slice)
    }
}
