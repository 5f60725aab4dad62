//! `egress-core` — foundational types for the `rust_egress` evacuation
//! simulator.
//!
//! This crate is a dependency of every other `egress-*` crate.  It
//! intentionally has no `egress-*` dependencies and minimal external ones
//! (only `rand`/`rand_distr`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                    |
//! |-------------|---------------------------------------------|
//! | [`ids`]     | `AgentId`                                   |
//! | [`vec2`]    | `Vec2`, continuous-space 2-D point math     |
//! | [`frame`]   | `Frame`, `SimConfig`                        |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod frame;
pub mod ids;
pub mod rng;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use frame::{Frame, SimConfig};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use vec2::Vec2;
