//! The backend-neutral writer trait.

use crate::row::{AgentPositionRow, DensityCellRow, FrameSummaryRow};
use crate::OutputResult;

/// A sink for simulation output rows.
///
/// Implementations must tolerate `finish` being called more than once —
/// the observer calls it at sim end, and owners may call it again before
/// inspecting files.
pub trait OutputWriter {
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    fn write_positions(&mut self, rows: &[AgentPositionRow]) -> OutputResult<()>;

    fn write_density_cells(&mut self, rows: &[DensityCellRow]) -> OutputResult<()>;

    /// Flush buffers and seal the output.
    fn finish(&mut self) -> OutputResult<()>;
}
