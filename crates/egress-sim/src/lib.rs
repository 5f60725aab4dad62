//! `egress-sim` — frame loop orchestrator for the rust_egress evacuation
//! simulator.
//!
//! # Per-frame pipeline
//!
//! ```text
//! for frame in 0..config.total_frames (or until nobody is left):
//!   ① Steering   — propose next positions: unit step toward the exit
//!                  plus per-agent gaussian jitter (wall-blind).
//!   ② Collision  — revert any proposal strictly inside a wall cell to its
//!                  pre-step position; clamp to the arena.
//!   ③ Absorption — remove agents within the capture radius of the exit.
//!   ④ Analytics  — mode-dependent density update (path / population).
//! ```
//!
//! Termination is implicit: the loop ends when the active set empties or
//! the frame budget runs out; there is no modeled terminal state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the steering phase on rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use egress_analytics::AnalyticsMode;
//! use egress_core::SimConfig;
//! use egress_layout::Layout;
//! use egress_sim::{NoopObserver, SimBuilder};
//!
//! let layout = Layout::parse(text)?;
//! let mut sim = SimBuilder::from_layout(SimConfig::default(), &layout)?
//!     .mode(AnalyticsMode::PathDensity)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
