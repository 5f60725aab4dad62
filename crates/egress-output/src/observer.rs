//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use egress_analytics::DensityField;
use egress_core::{Frame, Vec2};
use egress_sim::SimObserver;

use crate::row::{AgentPositionRow, DensityCellRow, FrameSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes frame summaries, position snapshots, and
/// density snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, active: usize, absorbed: usize) {
        let row = FrameSummaryRow {
            frame: frame.0,
            active: active as u64,
            absorbed: absorbed as u64,
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, positions: &[Vec2], density: Option<&DensityField>) {
        let rows: Vec<AgentPositionRow> = positions
            .iter()
            .enumerate()
            .map(|(slot, p)| AgentPositionRow {
                frame: frame.0,
                slot: slot as u32,
                x: p.x,
                y: p.y,
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }

        if let Some(field) = density {
            // Zero cells dominate most fields; only the occupied ones are
            // worth a row.
            let rows: Vec<DensityCellRow> = field
                .iter_cells()
                .filter(|&(_, _, v)| v > 0.0)
                .map(|(x, y, v)| DensityCellRow {
                    frame: frame.0,
                    cell_x: x as u32,
                    cell_y: y as u32,
                    value: v,
                })
                .collect();
            if !rows.is_empty() {
                let result = self.writer.write_density_cells(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
