//! Exit absorption: remove agents that reached the goal.

use egress_core::{AgentRng, Vec2};

/// Drop every agent with Euclidean distance to `exit` strictly below
/// `capture_radius`, keeping `positions` and `rngs` in lockstep.
///
/// Survivor order is preserved (agents keep their relative indices and
/// their RNG streams); an empty active set is a graceful no-op.  Returns
/// the number of agents absorbed this call.
///
/// # Panics
/// Panics in debug builds when the arrays disagree in length.
pub fn absorb(
    positions: &mut Vec<Vec2>,
    rngs: &mut Vec<AgentRng>,
    exit: Vec2,
    capture_radius: f64,
) -> usize {
    debug_assert_eq!(positions.len(), rngs.len());

    let before = positions.len();
    let mut kept = 0;
    for i in 0..positions.len() {
        if positions[i].distance(exit) >= capture_radius {
            positions.swap(kept, i);
            rngs.swap(kept, i);
            kept += 1;
        }
    }
    positions.truncate(kept);
    rngs.truncate(kept);

    before - kept
}
