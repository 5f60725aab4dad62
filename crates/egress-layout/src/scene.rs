//! Continuous-space entities extracted from a [`Layout`].
//!
//! # Coordinate transform
//!
//! Storage puts row 0 at the top; the movement engine works in a bottom-left
//! system where `y` grows upward.  A cell at storage `(row, col)` maps to:
//!
//! - point entities (spawns, exit): center `(col + 0.5, height - row - 0.5)`
//! - walls: the unit rectangle `[col, col+1] × [height-row-1, height-row]`

use egress_core::Vec2;

use crate::cell::Cell;
use crate::error::LayoutError;
use crate::layout::Layout;

// ── Wall ──────────────────────────────────────────────────────────────────────

/// An axis-aligned unit-cell rectangle in continuous space.
///
/// Immutable for the simulation's lifetime.  The bounding box is first-class
/// data so collision tests need no geometry objects from any rendering
/// library.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Wall {
    /// The wall rectangle for the cell at storage `(row, col)`.
    pub fn from_cell(row: usize, col: usize, height: usize) -> Wall {
        let x0 = col as f64;
        let y0 = (height - row - 1) as f64;
        Wall { x0, y0, x1: x0 + 1.0, y1: y0 + 1.0 }
    }

    /// `true` when `p` lies **strictly** inside the open rectangle.
    ///
    /// Boundary contact does not count as a collision, so an agent exactly
    /// on a wall edge is left alone.
    #[inline]
    pub fn contains_open(&self, p: Vec2) -> bool {
        p.x > self.x0 && p.x < self.x1 && p.y > self.y0 && p.y < self.y1
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Everything the movement engine needs from a layout, in continuous space.
///
/// Read-only once extracted; shared by all frames of a run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    /// One rectangle per wall cell.
    pub walls: Vec<Wall>,

    /// Initial agent positions (cell centers of `@` markers), in scan order.
    pub spawns: Vec<Vec2>,

    /// The steering goal and absorption target.
    pub exit: Vec2,

    /// Grid width in cells, kept for arena clamping and density fields.
    pub width: usize,

    /// Grid height in cells.
    pub height: usize,
}

impl Scene {
    /// Single-pass extraction over all cells.
    ///
    /// When the layout holds more than one `E`, the last one in scan order
    /// wins; agents steer toward a single fixed exit point.  Fails with
    /// [`LayoutError::MissingExit`] when there is none.
    pub fn from_layout(layout: &Layout) -> Result<Scene, LayoutError> {
        let height = layout.height();
        let mut walls = Vec::new();
        let mut spawns = Vec::new();
        let mut exit = None;

        for (row, col, cell) in layout.iter_cells() {
            match cell {
                Cell::Wall => walls.push(Wall::from_cell(row, col, height)),
                Cell::Spawn => spawns.push(cell_center(row, col, height)),
                Cell::Exit => exit = Some(cell_center(row, col, height)),
                Cell::Empty => {}
            }
        }

        let exit = exit.ok_or(LayoutError::MissingExit)?;
        Ok(Scene {
            walls,
            spawns,
            exit,
            width: layout.width(),
            height,
        })
    }
}

/// Center of the cell at storage `(row, col)` in continuous coordinates.
#[inline]
pub fn cell_center(row: usize, col: usize, height: usize) -> Vec2 {
    Vec2::new(col as f64 + 0.5, height as f64 - row as f64 - 0.5)
}
