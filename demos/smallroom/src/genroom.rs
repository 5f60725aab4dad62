//! genroom — generate a random arena, print it, and run an evacuation.
//!
//! Usage: `genroom [seed]` (default seed 42).  The same seed always yields
//! the same arena and the same run.

use anyhow::Result;

use egress_analytics::AnalyticsMode;
use egress_core::{SimConfig, SimRng};
use egress_layout::{GeneratorConfig, generate};
use egress_sim::{NoopObserver, SimBuilder};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed: u64 = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(42);

    let mut rng = SimRng::new(seed);
    let layout = generate(&GeneratorConfig::default(), &mut rng)?;
    print!("{layout}");

    let config = SimConfig {
        total_frames: 300,
        seed,
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::from_layout(config, &layout)?
        .mode(AnalyticsMode::PopulationDensity)
        .build()?;

    let spawned = sim.active_count();
    sim.run(&mut NoopObserver);

    println!(
        "{} of {spawned} agents evacuated within {} frames",
        sim.absorbed_total(),
        sim.frame.0,
    );
    Ok(())
}
