//! Fundamental clock and geometry helpers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One clock sample, supplied by the driving loop each frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Monotonic elapsed time in milliseconds.
    pub now_ms: u64,
    /// Frame delta in seconds.
    pub dt_secs: f32,
}

impl FrameTime {
    pub fn new(now_ms: u64, dt_secs: f32) -> Self {
        Self { now_ms, dt_secs }
    }
}

/// Circle overlap test — the collision primitive for the headless core.
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}
