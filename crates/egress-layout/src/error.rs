//! Layout error type.

use thiserror::Error;

/// Errors raised while parsing a layout or extracting its entities.
///
/// Both variants are setup-time failures: a malformed layout cannot
/// self-correct, so callers surface them immediately and never start the
/// frame loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout text contained no rows (or only zero-length rows).  The
    /// right-padding policy makes ragged rows unrepresentable, so this is
    /// the only structural failure left.
    #[error("layout text is empty")]
    EmptyLayout,

    /// No `E` cell anywhere in the grid — the simulation has no steering
    /// goal and no absorption target.
    #[error("layout has no exit cell ('E')")]
    MissingExit,
}
