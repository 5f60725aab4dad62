//! `egress-engine` — the per-frame movement kinematics for `rust_egress`.
//!
//! Three stages, composed once per frame by the orchestrator in
//! `egress-sim`:
//!
//! | Module       | Stage                                                   |
//! |--------------|---------------------------------------------------------|
//! | [`steering`] | propose next positions (goal-seeking + gaussian jitter) |
//! | [`walls`]    | reject proposals inside wall cells, clamp to the arena  |
//! | [`absorb`]   | remove agents that reached the exit                     |
//!
//! The stages are deliberately wall-blind, goal-blind, and population-blind
//! respectively: steering knows nothing about walls, the collision resolver
//! nothing about the exit, absorption nothing about geometry.  Each is a
//! pure function over the position arrays plus read-only setup data.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the steering phase on rayon's thread pool. |

pub mod absorb;
pub mod steering;
pub mod walls;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use absorb::absorb;
pub use steering::propose;
pub use walls::WallIndex;
