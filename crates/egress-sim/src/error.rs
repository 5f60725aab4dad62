//! Simulation setup errors.

use egress_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The layout failed to parse or had no exit.  Fatal: surfaced before
    /// any frame runs, since a malformed layout cannot self-correct.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Zero agents at start.  Only raised when the builder is asked for
    /// strict validation; the default is a valid nothing-to-simulate run.
    #[error("layout contains no agents to simulate")]
    EmptyPopulation,
}

pub type SimResult<T> = Result<T, SimError>;
