//! Flat row types shared by all output backends.

/// One row per simulated frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSummaryRow {
    pub frame: u64,
    /// Population after this frame's absorption.
    pub active: u64,
    /// Agents that evacuated during this frame.
    pub absorbed: u64,
}

/// One row per active agent in a snapshot frame.
///
/// `slot` is the agent's index in the active array at snapshot time; it is
/// not stable across frames once absorption starts compacting the set.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentPositionRow {
    pub frame: u64,
    pub slot: u32,
    pub x: f64,
    pub y: f64,
}

/// One row per non-zero density cell in a snapshot frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityCellRow {
    pub frame: u64,
    pub cell_x: u32,
    pub cell_y: u32,
    pub value: f64,
}
