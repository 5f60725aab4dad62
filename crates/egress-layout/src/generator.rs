//! Procedural layout generation.
//!
//! Produces arenas the parser consumes unmodified: a solid wall border,
//! a few internal walls with gaps punched through them, one to three exits
//! cut into the border, and a scattering of spawn markers on empty floor.
//! All randomness comes from the injected [`SimRng`], so a given seed
//! always yields the same layout.

use egress_core::SimRng;

use crate::cell::Cell;
use crate::error::LayoutError;
use crate::layout::Layout;

/// Dimensions below this produce no sensible interior; smaller requests are
/// clamped up.
const MIN_SIDE: usize = 8;

/// Knobs for [`generate`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Grid width in cells (clamped to at least 8).
    pub width: usize,
    /// Grid height in cells (clamped to at least 8).
    pub height: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { width: 30, height: 20 }
    }
}

/// Generate a random enclosed layout.
///
/// Placement order matters: internal walls first, then exits (which may
/// overwrite border walls), then spawn markers on whatever floor is left.
pub fn generate(config: &GeneratorConfig, rng: &mut SimRng) -> Result<Layout, LayoutError> {
    let width = config.width.max(MIN_SIDE);
    let height = config.height.max(MIN_SIDE);

    let mut grid = vec![vec![Cell::Empty; width]; height];

    // Outer border.
    for col in 0..width {
        grid[0][col] = Cell::Wall;
        grid[height - 1][col] = Cell::Wall;
    }
    for row in grid.iter_mut() {
        row[0] = Cell::Wall;
        row[width - 1] = Cell::Wall;
    }

    add_internal_walls(&mut grid, width, height, rng);
    add_exits(&mut grid, width, height, rng);
    add_spawns(&mut grid, rng);

    Layout::from_rows(grid)
}

// ── Internal walls ────────────────────────────────────────────────────────────

fn add_internal_walls(grid: &mut [Vec<Cell>], width: usize, height: usize, rng: &mut SimRng) {
    // Vertical segments.
    for _ in 0..rng.gen_range(1..=3u32) {
        let x = between(rng, width / 4, 3 * width / 4);
        let span = between(rng, height / 3, 2 * height / 3).min(height - 2);
        let start = between(rng, 1, height - span - 1);
        for y in start..start + span {
            grid[y][x] = Cell::Wall;
        }
        punch_gaps(rng, start, span, |y| grid[y][x] = Cell::Empty);
    }

    // Horizontal segments.
    for _ in 0..rng.gen_range(1..=3u32) {
        let y = between(rng, height / 4, 3 * height / 4);
        let span = between(rng, width / 3, 2 * width / 3).min(width - 2);
        let start = between(rng, 1, width - span - 1);
        for x in start..start + span {
            grid[y][x] = Cell::Wall;
        }
        punch_gaps(rng, start, span, |x| grid[y][x] = Cell::Empty);
    }
}

/// Open 1–3 gaps of 1–3 cells each somewhere along a wall segment.
///
/// Gaps are clipped to the segment so they never chew into the border.
fn punch_gaps(rng: &mut SimRng, start: usize, span: usize, mut clear: impl FnMut(usize)) {
    let end = start + span;
    for _ in 0..rng.gen_range(1..=3u32) {
        let gap_start = between(rng, start, end.saturating_sub(2).max(start));
        let gap_len = rng.gen_range(1..=3usize);
        for i in gap_start..(gap_start + gap_len).min(end) {
            clear(i);
        }
    }
}

// ── Exits and spawns ──────────────────────────────────────────────────────────

fn add_exits(grid: &mut [Vec<Cell>], width: usize, height: usize, rng: &mut SimRng) {
    for _ in 0..rng.gen_range(1..=3u32) {
        match rng.gen_range(0..4u32) {
            0 => {
                let x = between(rng, 1, width - 2);
                grid[0][x] = Cell::Exit;
            }
            1 => {
                let x = between(rng, 1, width - 2);
                grid[height - 1][x] = Cell::Exit;
            }
            2 => {
                let y = between(rng, 1, height - 2);
                grid[y][0] = Cell::Exit;
            }
            _ => {
                let y = between(rng, 1, height - 2);
                grid[y][width - 1] = Cell::Exit;
            }
        }
    }
}

fn add_spawns(grid: &mut [Vec<Cell>], rng: &mut SimRng) {
    let target = rng.gen_range(10..=30usize);

    let mut empties: Vec<(usize, usize)> = Vec::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == Cell::Empty {
                empties.push((r, c));
            }
        }
    }

    rng.shuffle(&mut empties);
    for &(r, c) in empties.iter().take(target) {
        grid[r][c] = Cell::Spawn;
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Uniform draw from the inclusive range `[lo, hi]`; degenerate ranges
/// collapse to `lo`.
fn between(rng: &mut SimRng, lo: usize, hi: usize) -> usize {
    if hi <= lo { lo } else { rng.gen_range(lo..=hi) }
}
