//! The `Sim` struct and its frame loop.

use rustc_hash::FxHashSet;
use tracing::trace;

use egress_analytics::{AnalyticsMode, DensityField};
use egress_core::{AgentRng, Frame, SimConfig, Vec2};
use egress_engine::{WallIndex, absorb, propose};
use egress_layout::Scene;

use crate::SimObserver;

/// The main simulation runner.
///
/// Owns the only mutable state of a run — the active position array, the
/// per-agent RNGs, and the optional density field.  Walls, the exit point,
/// and the bottleneck overlay are fixed at build time and shared read-only
/// by every frame.  Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (frame budget, seed, kinematics constants).
    pub config: SimConfig,

    /// The current frame — advanced after each completed step.
    pub frame: Frame,

    pub(crate) scene: Scene,
    pub(crate) wall_index: WallIndex,
    pub(crate) positions: Vec<Vec2>,
    pub(crate) rngs: Vec<AgentRng>,
    pub(crate) mode: AnalyticsMode,
    pub(crate) density: Option<DensityField>,
    pub(crate) bottlenecks: Option<FxHashSet<(usize, usize)>>,
    pub(crate) absorbed_total: u64,
}

impl Sim {
    // ── Read access ───────────────────────────────────────────────────────

    /// Positions of all still-active agents.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn active_count(&self) -> usize {
        self.positions.len()
    }

    /// Total agents absorbed since the start of the run.
    pub fn absorbed_total(&self) -> u64 {
        self.absorbed_total
    }

    /// Walls, exit, and spawn points this run was built from.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn mode(&self) -> AnalyticsMode {
        self.mode
    }

    /// The density field, when the analytics mode maintains one.
    pub fn density(&self) -> Option<&DensityField> {
        self.density.as_ref()
    }

    /// Bottleneck overlay cells, when requested at build time.
    pub fn bottlenecks(&self) -> Option<&FxHashSet<(usize, usize)>> {
        self.bottlenecks.as_ref()
    }

    /// `true` once everyone has evacuated or the frame budget is spent.
    pub fn is_finished(&self) -> bool {
        self.positions.is_empty() || self.frame >= self.config.end_frame()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one frame; returns the number of agents absorbed.
    ///
    /// An empty active set is a graceful no-op.  The frame counter itself
    /// is advanced by the run loop, so single-stepping callers can inspect
    /// state between `step` and the counter bump.
    pub fn step(&mut self) -> usize {
        if self.positions.is_empty() {
            return 0;
        }

        // ① Steering: wall-blind proposals.
        let mut next = propose(
            &self.positions,
            &mut self.rngs,
            self.scene.exit,
            self.config.step_size,
            self.config.noise_sigma,
        );

        // ② Collision: pre-step positions are the revert targets.
        self.wall_index.resolve(&self.positions, &mut next);
        self.positions = next;

        // ③ Absorption.
        let absorbed = absorb(
            &mut self.positions,
            &mut self.rngs,
            self.scene.exit,
            self.config.capture_radius,
        );
        self.absorbed_total += absorbed as u64;

        // ④ Analytics.
        match self.mode {
            AnalyticsMode::Plain => {}
            AnalyticsMode::PathDensity => {
                if let Some(field) = &mut self.density {
                    field.deposit(&self.positions);
                }
            }
            AnalyticsMode::PopulationDensity => {
                if let Some(field) = &mut self.density {
                    field.recount(&self.positions);
                }
            }
        }

        trace!(
            frame = self.frame.0,
            active = self.positions.len(),
            absorbed,
            "frame complete"
        );
        absorbed
    }

    // ── Run loops ─────────────────────────────────────────────────────────

    /// Run from the current frame until the budget is spent or the active
    /// set empties, with observer hooks at every frame boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        loop {
            let now = self.frame;
            if now >= self.config.end_frame() || self.positions.is_empty() {
                break;
            }

            observer.on_frame_start(now);
            let absorbed = self.step();
            observer.on_frame_end(now, self.positions.len(), absorbed);
            self.maybe_snapshot(now, observer);

            self.frame.advance();
        }
        observer.on_sim_end(self.frame);
    }

    /// Run exactly `n` frames from the current position, ignoring the
    /// budget and tolerating an already-empty active set.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.frame;
            observer.on_frame_start(now);
            let absorbed = self.step();
            observer.on_frame_end(now, self.positions.len(), absorbed);
            self.maybe_snapshot(now, observer);
            self.frame.advance();
        }
    }

    fn maybe_snapshot<O: SimObserver>(&self, now: Frame, observer: &mut O) {
        if self.config.output_interval_frames > 0
            && now.0.is_multiple_of(self.config.output_interval_frames)
        {
            observer.on_snapshot(now, &self.positions, self.density.as_ref());
        }
    }
}
