//! Fluent builder for constructing a [`Sim`].

use tracing::{debug, warn};

use egress_analytics::{AnalyticsMode, DensityField, detect_bottlenecks};
use egress_core::{AgentId, AgentRng, Frame, SimConfig, Vec2};
use egress_engine::WallIndex;
use egress_layout::Layout;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — frame budget, seed, kinematics constants
/// - [`Layout`] — the parsed floor plan (must have an exit)
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.mode(m)`              | `AnalyticsMode::Plain`           |
/// | `.bottleneck_overlay()` | off                              |
/// | `.initial_positions(v)` | the layout's `@` spawn markers   |
/// | `.strict_population()`  | off (zero agents is a valid run) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_layout(config, &layout)?
///     .mode(AnalyticsMode::PopulationDensity)
///     .bottleneck_overlay()
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
#[derive(Debug)]
pub struct SimBuilder {
    config: SimConfig,
    layout: Layout,
    mode: AnalyticsMode,
    overlay: bool,
    initial_positions: Option<Vec<Vec2>>,
    strict_population: bool,
}

impl SimBuilder {
    /// Create a builder for `layout`.
    ///
    /// Fails with [`SimError::Layout`] when the layout has no exit cell —
    /// the one setup error no amount of stepping can recover from.
    pub fn from_layout(config: SimConfig, layout: &Layout) -> SimResult<Self> {
        // Extraction is repeated in build(); validating here keeps the
        // failure at the earliest caller-visible point.
        layout.scene()?;
        Ok(Self {
            config,
            layout: layout.clone(),
            mode: AnalyticsMode::Plain,
            overlay: false,
            initial_positions: None,
            strict_population: false,
        })
    }

    /// Select which analytics the sim maintains each frame.
    pub fn mode(mut self, mode: AnalyticsMode) -> Self {
        self.mode = mode;
        self
    }

    /// Also compute the static bottleneck cell set at build time.
    ///
    /// Purely advisory overlay data; movement is unaffected.
    pub fn bottleneck_overlay(mut self) -> Self {
        self.overlay = true;
        self
    }

    /// Replace the layout's spawn markers with explicit start positions.
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.initial_positions = Some(positions);
        self
    }

    /// Treat a zero-agent start as an error instead of a valid no-op run.
    pub fn strict_population(mut self) -> Self {
        self.strict_population = true;
        self
    }

    /// Validate inputs, seed the per-agent RNGs, and return a ready-to-run
    /// [`Sim`] at frame zero.
    pub fn build(self) -> SimResult<Sim> {
        let scene = self.layout.scene()?;

        let positions = self
            .initial_positions
            .unwrap_or_else(|| scene.spawns.clone());

        if positions.is_empty() {
            if self.strict_population {
                return Err(SimError::EmptyPopulation);
            }
            warn!("no agents to simulate; run will finish immediately");
        }

        let rngs: Vec<AgentRng> = (0..positions.len() as u32)
            .map(|i| AgentRng::new(self.config.seed, AgentId(i)))
            .collect();

        let density = match self.mode {
            AnalyticsMode::Plain => None,
            AnalyticsMode::PathDensity | AnalyticsMode::PopulationDensity => {
                Some(DensityField::new(scene.width, scene.height))
            }
        };

        let bottlenecks = self.overlay.then(|| detect_bottlenecks(&self.layout));

        let wall_index = WallIndex::new(&scene.walls, scene.width, scene.height);

        debug!(
            agents = positions.len(),
            walls = scene.walls.len(),
            mode = ?self.mode,
            "simulation built"
        );

        Ok(Sim {
            config: self.config,
            frame: Frame::ZERO,
            scene,
            wall_index,
            positions,
            rngs,
            mode: self.mode,
            density,
            bottlenecks,
            absorbed_total: 0,
        })
    }
}
