//! `egress-layout` — the shared floor-plan data model for `rust_egress`.
//!
//! A layout arrives as plain text, one line per grid row:
//!
//! ```text
//! XXXXXXXXXX
//! X...@....X
//! X..XXXX..E
//! X........X
//! XXXXXXXXXX
//! ```
//!
//! | Char        | Cell                                    |
//! |-------------|-----------------------------------------|
//! | `X`         | wall                                    |
//! | `E`         | exit                                    |
//! | `@`         | agent spawn marker                      |
//! | anything else | empty floor (conventionally `.` or space) |
//!
//! Short rows are right-padded with empty cells to the longest row's width;
//! rows are never truncated.  Parsing a layout with no `E` succeeds — the
//! missing exit only becomes fatal when entities are extracted via
//! [`Layout::scene`], because that is the point where a simulation needs a
//! steering goal.
//!
//! Storage is row-major with row 0 at the *top*; [`Scene`] converts to the
//! continuous bottom-left coordinate system used by the movement engine
//! (`sim_y = height - row - 1`).
//!
//! The [`generator`] module procedurally produces layouts in the same
//! format (bordered arena, gapped internal walls, border exits, spawn
//! markers), driven by an injected [`SimRng`](egress_core::SimRng).

pub mod cell;
pub mod error;
pub mod generator;
pub mod layout;
pub mod scene;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::LayoutError;
pub use generator::{GeneratorConfig, generate};
pub use layout::Layout;
pub use scene::{Scene, Wall};
