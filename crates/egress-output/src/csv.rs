//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `frame_summaries.csv`
//! - `agent_positions.csv`
//! - `density_cells.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{AgentPositionRow, DensityCellRow, FrameSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    positions: Writer<File>,
    density: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(["frame", "active", "absorbed"])?;

        let mut positions = Writer::from_path(dir.join("agent_positions.csv"))?;
        positions.write_record(["frame", "slot", "x", "y"])?;

        let mut density = Writer::from_path(dir.join("density_cells.csv"))?;
        density.write_record(["frame", "cell_x", "cell_y", "value"])?;

        Ok(Self {
            summaries,
            positions,
            density,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.active.to_string(),
            row.absorbed.to_string(),
        ])?;
        Ok(())
    }

    fn write_positions(&mut self, rows: &[AgentPositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.frame.to_string(),
                row.slot.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_density_cells(&mut self, rows: &[DensityCellRow]) -> OutputResult<()> {
        for row in rows {
            self.density.write_record(&[
                row.frame.to_string(),
                row.cell_x.to_string(),
                row.cell_y.to_string(),
                row.value.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.positions.flush()?;
        self.density.flush()?;
        Ok(())
    }
}
