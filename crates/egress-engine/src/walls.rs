//! Wall collision resolution.
//!
//! A proposed move that lands **strictly inside** any wall's open rectangle
//! is rejected by reverting the agent to its pre-step position — the agent
//! simply does not move that frame, rather than being deflected or stopped
//! at the wall edge.  Boundary contact is not a collision.
//!
//! Reversion only ever restores the pre-step value, so checking walls in
//! any order (or via a spatial index that only visits nearby candidates)
//! produces the same result as a cumulative wall-by-wall scan.

use rstar::{AABB, RTree, RTreeObject};

use egress_core::Vec2;
use egress_layout::Wall;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: one wall rectangle.
#[derive(Clone, Debug)]
struct WallEntry {
    wall: Wall,
}

impl RTreeObject for WallEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.wall.x0, self.wall.y0], [self.wall.x1, self.wall.y1])
    }
}

// ── WallIndex ─────────────────────────────────────────────────────────────────

/// Spatial index over all wall rectangles plus the arena bounds.
///
/// Built once per layout and shared read-only by every frame.  Candidate
/// lookup is an envelope query; the strict open-rectangle test then decides
/// whether the candidate actually blocks the point (the envelope is closed,
/// so boundary-touching candidates are filtered out here).
#[derive(Debug)]
pub struct WallIndex {
    tree: RTree<WallEntry>,
    width: f64,
    height: f64,
}

impl WallIndex {
    /// Index `walls` for an arena of `width × height` cells.
    pub fn new(walls: &[Wall], width: usize, height: usize) -> Self {
        let entries = walls.iter().map(|&wall| WallEntry { wall }).collect();
        Self {
            tree: RTree::bulk_load(entries),
            width: width as f64,
            height: height as f64,
        }
    }

    /// `true` when `p` lies strictly inside some wall.
    pub fn blocks(&self, p: Vec2) -> bool {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([p.x, p.y]))
            .any(|entry| entry.wall.contains_open(p))
    }

    /// Pull a coordinate that drifted past the arena edge back onto it.
    ///
    /// Each axis clamps to its own extent (`[0, width]` and `[0, height]`);
    /// noise near the outer boundary is the only way to get here, because
    /// border walls already reject interior-bound moves.
    #[inline]
    pub fn clamp_to_arena(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// Resolve one frame's proposals in place.
    ///
    /// `previous` holds the pre-step positions used as revert targets;
    /// after every wall check, all coordinates are clamped to the arena.
    ///
    /// # Panics
    /// Panics in debug builds when the arrays disagree in length.
    pub fn resolve(&self, previous: &[Vec2], proposed: &mut [Vec2]) {
        debug_assert_eq!(previous.len(), proposed.len());

        for (p, &prev) in proposed.iter_mut().zip(previous) {
            if self.blocks(*p) {
                *p = prev;
            }
            *p = self.clamp_to_arena(*p);
        }
    }

    /// Number of indexed walls.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
