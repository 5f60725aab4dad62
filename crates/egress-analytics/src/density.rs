//! Per-cell density accumulation over agent positions.
//!
//! Two policies share one field type, selected by [`AnalyticsMode`]:
//!
//! - **Path density**: every active agent bumps its current cell every
//!   frame and the field is never reset, so counts are cumulative traffic.
//!   Smoothing for display is a read-only transform (see
//!   [`gaussian_blur`](crate::gaussian_blur)) — the raw counts stay intact.
//! - **Population density**: the field is zeroed each frame and then counts
//!   each active agent once — instantaneous occupancy.
//!
//! Cells are keyed by the integer-truncated position `(floor(x), floor(y))`
//! in the bottom-left continuous convention; positions outside the field
//! are silently ignored, not an error.

use egress_core::Vec2;

// ── AnalyticsMode ─────────────────────────────────────────────────────────────

/// Which per-frame analytics the orchestrator maintains.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyticsMode {
    /// Movement only; no density field.
    #[default]
    Plain,
    /// Cumulative ever-visited counter.
    PathDensity,
    /// Instantaneous occupancy, reset each frame.
    PopulationDensity,
}

// ── DensityField ──────────────────────────────────────────────────────────────

/// A `height × width` grid of per-cell counts.
///
/// Row index is the *simulation* y coordinate (0 = bottom), matching the
/// coordinate system agent positions live in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityField {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) data: Vec<f64>,
}

impl DensityField {
    /// All-zero field covering a `width × height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![0.0; width * height] }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Count at cell `(x, y)`.
    ///
    /// # Panics
    /// Panics if out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "cell index out of bounds");
        self.data[y * self.width + x]
    }

    /// Total mass of the field.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Iterate all cells as `(x, y, value)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &v)| (i % self.width, i / self.width, v))
    }

    // ── Accumulation policies ─────────────────────────────────────────────

    /// Path mode: bump the cell under each position by one.  Never resets.
    pub fn deposit(&mut self, positions: &[Vec2]) {
        for p in positions {
            if let Some((x, y)) = p.cell() {
                if x < self.width && y < self.height {
                    self.data[y * self.width + x] += 1.0;
                }
            }
        }
    }

    /// Population mode: zero the field, then count each position once.
    ///
    /// Afterwards `sum()` equals the number of in-bounds positions.
    pub fn recount(&mut self, positions: &[Vec2]) {
        self.data.fill(0.0);
        self.deposit(positions);
    }

    /// Smoothed copy for display; `self` is untouched.
    pub fn smoothed(&self, sigma: f64) -> DensityField {
        crate::blur::gaussian_blur(self, sigma)
    }
}
