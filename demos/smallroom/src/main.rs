//! smallroom — smallest end-to-end demo for the rust_egress simulator.
//!
//! Runs an evacuation of a two-chamber room through a one-cell doorway,
//! accumulating path density, and writes frame summaries plus snapshots to
//! `./output/` as CSV.  Set `RUST_LOG=debug` (or `trace`) for per-frame
//! logging.

use std::fs;
use std::path::Path;

use anyhow::Result;

use egress_analytics::AnalyticsMode;
use egress_core::SimConfig;
use egress_layout::Layout;
use egress_output::{CsvWriter, SimOutputObserver};
use egress_sim::SimBuilder;

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Two chambers separated by an internal wall; the doorway at mid-height is
/// the only way from the spawn side to the exit on the right border.
const LAYOUT: &str = "\
XXXXXXXXXXXXXX
X@@@....X....X
X@@@....X....X
X............E
X.......X....X
X@@.....X....X
XXXXXXXXXXXXXX
";

const OUTPUT_DIR: &str = "./output";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let layout = Layout::parse(LAYOUT)?;
    let config = SimConfig {
        total_frames: 200,
        seed: 42,
        output_interval_frames: 5,
        ..SimConfig::default()
    };

    let mut sim = SimBuilder::from_layout(config, &layout)?
        .mode(AnalyticsMode::PathDensity)
        .bottleneck_overlay()
        .build()?;

    println!(
        "{} walls, {} agents, exit at {}",
        sim.scene().walls.len(),
        sim.active_count(),
        sim.scene().exit,
    );
    if let Some(bottlenecks) = sim.bottlenecks() {
        println!("{} bottleneck cells flagged", bottlenecks.len());
    }

    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = SimOutputObserver::new(writer);

    sim.run(&mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e.into());
    }

    println!(
        "finished at {}: {} evacuated, {} still inside",
        sim.frame,
        sim.absorbed_total(),
        sim.active_count(),
    );

    if let Some(field) = sim.density() {
        let smoothed = field.smoothed(1.0);
        if let Some((x, y, v)) = smoothed
            .iter_cells()
            .max_by(|a, b| a.2.total_cmp(&b.2))
        {
            println!("hottest path cell: ({x}, {y}) with smoothed count {v:.1}");
        }
    }

    println!("CSV output written to {OUTPUT_DIR}/");
    Ok(())
}
