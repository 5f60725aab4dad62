//! `egress-analytics` — structural and trajectory analytics for
//! `rust_egress`.
//!
//! Two independent concerns live here, both strictly observational: nothing
//! in this crate may alter movement or collision behavior.
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`bottleneck`] | narrow-passage detection on the static wall layout    |
//! | [`density`]    | per-cell visit/occupancy accumulation                 |
//! | [`blur`]       | read-only gaussian smoothing of a density field       |

pub mod blur;
pub mod bottleneck;
pub mod density;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use blur::gaussian_blur;
pub use bottleneck::detect_bottlenecks;
pub use density::{AnalyticsMode, DensityField};
