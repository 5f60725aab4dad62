//! Exit-seeking steering: propose next positions, walls unseen.
//!
//! Pure kinematics toward the goal: each agent takes a `step_size` move
//! along the unit vector toward the exit, perturbed by independent
//! per-agent, per-axis gaussian noise.  An agent exactly on the exit point
//! has no defined direction; the normalization substitutes a divisor of 1,
//! so such an agent moves by noise alone instead of dividing by zero.

use egress_core::{AgentRng, Vec2};

/// Proposed positions for all active agents.
///
/// `positions` and `rngs` are parallel arrays (same spawn order); each
/// agent draws its jitter from its own RNG stream, which keeps runs
/// reproducible under the `parallel` feature.
///
/// # Panics
/// Panics in debug builds when the arrays disagree in length.
pub fn propose(
    positions: &[Vec2],
    rngs: &mut [AgentRng],
    exit: Vec2,
    step_size: f64,
    noise_sigma: f64,
) -> Vec<Vec2> {
    debug_assert_eq!(positions.len(), rngs.len());

    #[cfg(not(feature = "parallel"))]
    {
        positions
            .iter()
            .zip(rngs.iter_mut())
            .map(|(&p, rng)| step_one(p, rng, exit, step_size, noise_sigma))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        positions
            .par_iter()
            .zip(rngs.par_iter_mut())
            .map(|(&p, rng)| step_one(p, rng, exit, step_size, noise_sigma))
            .collect()
    }
}

#[inline]
fn step_one(p: Vec2, rng: &mut AgentRng, exit: Vec2, step_size: f64, noise_sigma: f64) -> Vec2 {
    let direction = (exit - p).normalized_or_zero() * step_size;
    let noise = Vec2::new(rng.normal(0.0, noise_sigma), rng.normal(0.0, noise_sigma));
    p + direction + noise
}
