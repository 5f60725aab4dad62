//! Simulation observer trait for progress reporting and data collection.

use egress_analytics::DensityField;
use egress_core::{Frame, Vec2};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, active: usize, absorbed: usize) {
///         println!("{frame}: {active} active, {absorbed} just evacuated");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any movement.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called at the end of each frame.
    ///
    /// `active` is the population after absorption; `absorbed` is how many
    /// agents evacuated during this frame.
    fn on_frame_end(&mut self, _frame: Frame, _active: usize, _absorbed: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_frames`).
    ///
    /// Provides read-only access to the active positions and, when the
    /// analytics mode maintains one, the density field — so output writers
    /// can record state without the sim knowing about any format.
    fn on_snapshot(&mut self, _frame: Frame, _positions: &[Vec2], _density: Option<&DensityField>) {
    }

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
