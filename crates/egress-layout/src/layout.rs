//! The parsed grid and its text round-trip.

use std::fmt;

use crate::cell::Cell;
use crate::error::LayoutError;
use crate::scene::Scene;

/// A parsed floor plan: `height × width` cells, row-major, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Layout {
    /// Parse layout text.
    ///
    /// Every row is right-padded with empty cells to the longest row's
    /// width; rows are never truncated.  Trailing whitespace on a line is
    /// dropped before decoding (it would otherwise read as floor and skew
    /// the padding width), leading whitespace is kept — a leading blank is
    /// a real floor cell.
    pub fn parse(text: &str) -> Result<Layout, LayoutError> {
        let rows: Vec<Vec<Cell>> = text
            .lines()
            .map(|line| line.trim_end().chars().map(Cell::from_char).collect())
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(LayoutError::EmptyLayout);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Cell::Empty);
            cells.extend(row);
        }

        Ok(Layout { cells, width, height })
    }

    /// Assemble a layout from pre-built rows (used by the generator).
    ///
    /// Applies the same right-padding policy as [`Layout::parse`].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Layout, LayoutError> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(LayoutError::EmptyLayout);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Cell::Empty);
            cells.extend(row);
        }
        Ok(Layout { cells, width, height })
    }

    // ── Dimensions and access ─────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, col)` in storage coordinates (row 0 = top).
    ///
    /// # Panics
    /// Panics if out of bounds, like slice indexing.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.height && col < self.width, "cell index out of bounds");
        self.cells[row * self.width + col]
    }

    #[inline]
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_wall()
    }

    /// Iterate all cells as `(row, col, cell)` in storage order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| (i / self.width, i % self.width, c))
    }

    // ── Entity extraction ─────────────────────────────────────────────────

    /// Extract walls, spawn points, and the exit in continuous coordinates.
    ///
    /// See [`Scene::from_layout`] for the coordinate transform and the
    /// multiple-exit policy.
    pub fn scene(&self) -> Result<Scene, LayoutError> {
        Scene::from_layout(self)
    }
}

impl fmt::Display for Layout {
    /// Render back to the text format (`Layout::parse` accepts the output).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
