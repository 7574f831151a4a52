//! Fixed-format text rendering of a board.
//!
//! Output is always twelve lines:
//!
//! ```text
//!    a b c d e f g h
//!   +----------------+
//! 8 | . . . . . . . .| 8
//! ...
//! 1 | . . . . . . . .| 1
//!   +----------------+
//!    a b c d e f g h
//! ```

use crate::board::BoardView;
use crate::cell::Cell;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FILE_LABELS};
use crate::coord::rank_label;
use core::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

/// Header, border, eight ranks, border, footer.
pub const RENDERED_LINE_COUNT: usize = BOARD_SIZE + 4;

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Text renderer for 8×8 boards.
pub struct BoardRenderer;

impl BoardRenderer {
    /// Validate `board` and return a lazy iterator over its rendered lines.
    ///
    /// Fails with `InvalidBoardShape` unless the board is 8×8, and with
    /// `InvalidGlyph` when a cell would break a line.
    ///
    /// The board is copied up front, so the returned [`Lines`] neither borrows
    /// nor mutates it and can be cloned to replay the output.
    pub fn render<B: BoardView + ?Sized>(board: &B) -> Result<Lines, BoardError> {
        let grid = snapshot(board)?;
        Ok(Lines { grid, next: 0 })
    }

    /// Rendered board joined with `\n`, without a trailing newline.
    pub fn render_to_string<B: BoardView + ?Sized>(board: &B) -> Result<String, BoardError> {
        let lines: Vec<String> = Self::render(board)?.collect();
        Ok(lines.join("\n"))
    }
}

fn snapshot<B: BoardView + ?Sized>(board: &B) -> Result<Grid, BoardError> {
    let ranks = board.rank_count();
    if ranks != BOARD_SIZE {
        return Err(BoardError::InvalidBoardShape {
            ranks,
            files: BOARD_SIZE,
        });
    }
    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (rank, row) in grid.iter_mut().enumerate() {
        let cells = board.rank_slice(rank).unwrap_or(&[]);
        if cells.len() != BOARD_SIZE {
            return Err(BoardError::InvalidBoardShape {
                ranks,
                files: cells.len(),
            });
        }
        if let Some(file) = cells.iter().position(|c| !c.is_drawable()) {
            return Err(BoardError::InvalidGlyph {
                rank,
                file,
                glyph: cells[file].glyph(),
            });
        }
        row.copy_from_slice(cells);
    }
    Ok(grid)
}

fn file_header() -> String {
    let mut line = String::from("   ");
    for (i, label) in FILE_LABELS.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push(*label);
    }
    line
}

fn border() -> String {
    let mut line = String::from("  +");
    for _ in 0..BOARD_SIZE * 2 {
        line.push('-');
    }
    line.push('+');
    line
}

fn rank_line(rank: usize, cells: &[Cell; BOARD_SIZE]) -> String {
    let label = rank_label(rank).unwrap_or_default();
    let mut line = format!("{} |", label);
    for cell in cells {
        line.push(' ');
        line.push(cell.glyph());
    }
    // right frame sits directly after the last glyph, under the border's '+'
    line.push_str(&format!("| {}", label));
    line
}

/// Iterator over the lines of a rendered board.
#[derive(Clone, Debug)]
pub struct Lines {
    grid: Grid,
    next: usize,
}

impl Iterator for Lines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let idx = self.next;
        let line = match idx {
            0 => file_header(),
            1 => border(),
            i if i < BOARD_SIZE + 2 => rank_line(i - 2, &self.grid[i - 2]),
            i if i == BOARD_SIZE + 2 => border(),
            i if i == BOARD_SIZE + 3 => file_header(),
            _ => return None,
        };
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = RENDERED_LINE_COUNT.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines {}

impl FusedIterator for Lines {}
