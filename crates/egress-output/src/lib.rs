//! `egress-output` — simulation output writers for rust_egress.
//!
//! The CSV backend creates three files in the configured output directory:
//!
//! | File                  | One row per                                  |
//! |-----------------------|----------------------------------------------|
//! | `frame_summaries.csv` | frame (active / absorbed counts)             |
//! | `agent_positions.csv` | active agent per snapshot frame              |
//! | `density_cells.csv`   | non-zero density cell per snapshot frame     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `egress_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use egress_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentPositionRow, DensityCellRow, FrameSummaryRow};
pub use writer::OutputWriter;
