//! Grid cell kinds and their text encoding.

use std::fmt;

/// One cell of a parsed layout.
///
/// `Spawn` is an origin marker only: once a simulation starts, agents are
/// dynamic point entities and the cell underneath them counts as floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Wall,
    #[default]
    Empty,
    Exit,
    Spawn,
}

impl Cell {
    /// Decode one layout character.  Unrecognised characters are floor,
    /// which makes both `.` and space valid blanks.
    #[inline]
    pub fn from_char(c: char) -> Cell {
        match c {
            'X' => Cell::Wall,
            'E' => Cell::Exit,
            '@' => Cell::Spawn,
            _ => Cell::Empty,
        }
    }

    /// Canonical text form (blanks render as `.`).
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => 'X',
            Cell::Empty => '.',
            Cell::Exit => 'E',
            Cell::Spawn => '@',
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
