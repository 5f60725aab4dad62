//! Continuous-space 2-D point math.
//!
//! The grid lives in a planar coordinate system: one grid cell spans one
//! unit, `x` grows rightward and `y` grows upward (storage row 0 of a layout
//! is the *top* row; converters in `egress-layout` flip it).  Positions use
//! `f64` so repeated unit steps plus gaussian noise accumulate no visible
//! rounding drift over long runs.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A point (or displacement) in continuous grid space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Scale so the result has length 1, substituting a divisor of `1.0`
    /// when the length is exactly zero.  A zero vector therefore stays zero
    /// instead of producing NaN — callers relying on goal-seeking steering
    /// get a pure-noise step when already at the goal.
    #[inline]
    pub fn normalized_or_zero(self) -> Vec2 {
        let len = self.length();
        let divisor = if len == 0.0 { 1.0 } else { len };
        Vec2::new(self.x / divisor, self.y / divisor)
    }

    /// The grid cell containing this point, as `(floor(x), floor(y))`.
    ///
    /// Returns `None` when either coordinate is negative or does not fit in
    /// the cell index range, so callers can skip out-of-field positions
    /// without a panic.
    #[inline]
    pub fn cell(self) -> Option<(usize, usize)> {
        let cx = self.x.floor();
        let cy = self.y.floor();
        if cx < 0.0 || cy < 0.0 || cx > usize::MAX as f64 || cy > usize::MAX as f64 {
            return None;
        }
        Some((cx as usize, cy as usize))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
