//! Narrow-passage detection on the static wall layout.
//!
//! A bottleneck cell is an empty cell directly touching a wall, including
//! diagonally: one iteration of binary dilation of the wall mask with the
//! full 3×3 structuring element, minus the mask itself.  Computed once per
//! layout; purely advisory (overlay data for consumers), so the result set
//! never feeds back into movement or collision.

use rustc_hash::FxHashSet;

use egress_layout::Layout;

/// Cells flagged as potential bottlenecks, in the continuous-space cell
/// convention shared with walls and the exit: `(x, y)` where `x` is the
/// storage column and `y = height - 1 - row`.
pub fn detect_bottlenecks(layout: &Layout) -> FxHashSet<(usize, usize)> {
    let width = layout.width();
    let height = layout.height();

    let mask: Vec<bool> = (0..height)
        .flat_map(|row| (0..width).map(move |col| (row, col)))
        .map(|(row, col)| layout.is_wall(row, col))
        .collect();

    let mut flagged = FxHashSet::default();

    for row in 0..height {
        for col in 0..width {
            if mask[row * width + col] {
                continue;
            }
            // Dilated AND NOT original: a non-wall cell survives exactly
            // when some 8-neighbor is wall.
            if touches_wall(&mask, width, height, row, col) {
                flagged.insert((col, height - 1 - row));
            }
        }
    }

    flagged
}

fn touches_wall(mask: &[bool], width: usize, height: usize, row: usize, col: usize) -> bool {
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if r < 0 || c < 0 || r >= height as i64 || c >= width as i64 {
                continue;
            }
            if mask[r as usize * width + c as usize] {
                return true;
            }
        }
    }
    false
}
