//! Square occupancy.

use crate::config::EMPTY_GLYPH;
use core::fmt;

/// Contents of a single board square.
///
/// Only placeholder occupancy exists today; piece variants are meant to be
/// added here without touching the grid or the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Unoccupied square, drawn as `.`.
    #[default]
    Empty,
    /// Placeholder occupancy drawn with its glyph. The renderer rejects
    /// control and whitespace glyphs; [`Cell::marker`] checks up front.
    Marker(char),
}

impl Cell {
    /// Checked marker constructor: `None` for glyphs that cannot sit inside
    /// one rendered line (control and whitespace characters).
    pub fn marker(glyph: char) -> Option<Self> {
        if is_drawable(glyph) {
            Some(Cell::Marker(glyph))
        } else {
            None
        }
    }

    /// Whether the renderer can draw this cell.
    pub fn is_drawable(self) -> bool {
        is_drawable(self.glyph())
    }

    /// Character drawn for this cell.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Marker(c) => c,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

fn is_drawable(glyph: char) -> bool {
    !glyph.is_control() && !glyph.is_whitespace()
}
