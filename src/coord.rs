//! Mapping between grid indices and printed board labels.
//!
//! Rank index 0 is the top row, printed as `8`; rank index 7 is printed as
//! `1`. File index 0..8 is printed as `a`..`h`. The board and the renderer
//! both go through these helpers so the two can never disagree.

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FILE_LABELS};
use core::fmt;

/// Letter printed above and below `file`, or `None` when out of range.
pub const fn file_label(file: usize) -> Option<char> {
    if file < BOARD_SIZE {
        Some(FILE_LABELS[file])
    } else {
        None
    }
}

/// Number printed beside `rank`, or `None` when out of range.
pub const fn rank_label(rank: usize) -> Option<u8> {
    if rank < BOARD_SIZE {
        Some((BOARD_SIZE - rank) as u8)
    } else {
        None
    }
}

/// File index for a letter `a`..`h` (either case).
pub fn file_from_label(label: char) -> Option<usize> {
    let lower = label.to_ascii_lowercase();
    FILE_LABELS.iter().position(|&c| c == lower)
}

/// Rank index for a printed number `1`..`8`.
pub const fn rank_from_label(label: u8) -> Option<usize> {
    if label >= 1 && label as usize <= BOARD_SIZE {
        Some(BOARD_SIZE - label as usize)
    } else {
        None
    }
}

/// An in-range board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    rank: usize,
    file: usize,
}

impl Square {
    /// Fallible constructor: returns `Err(IndexOutOfBounds)` outside [0, 8).
    pub fn new(rank: usize, file: usize) -> Result<Self, BoardError> {
        if rank >= BOARD_SIZE || file >= BOARD_SIZE {
            Err(BoardError::IndexOutOfBounds { rank, file })
        } else {
            Ok(Square { rank, file })
        }
    }

    /// Parse algebraic notation such as `e4` or `A8`.
    pub fn from_algebraic(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let file = file_from_label(chars.next()?)?;
        let digit = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }
        let rank = rank_from_label(digit as u8)?;
        Some(Square { rank, file })
    }

    pub fn rank(self) -> usize {
        self.rank
    }

    pub fn file(self) -> usize {
        self.file
    }

    /// All 64 squares, top rank first, left to right.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILE_LABELS[self.file],
            BOARD_SIZE - self.rank
        )
    }
}
