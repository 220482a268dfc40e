//! Level definitions — hardcoded wave schedules.
//!
//! Each level is an ordered list of timed waves plus the fixed spawn-point
//! set enemies appear at. Spawn points live here because tile-map loading
//! belongs to an external collaborator.

use glam::Vec2;

use crate::enums::EnemyArchetype;

/// A timed sub-phase of a level with its own enemy type and spawn rate.
#[derive(Debug, Clone)]
pub struct Wave {
    /// How long this wave runs (seconds, > 0).
    pub duration_secs: u32,
    /// Interval between spawn batches (milliseconds, > 0).
    pub spawn_interval_ms: u64,
    /// What to spawn.
    pub enemy_type: EnemyArchetype,
    /// Enemies per spawn batch (>= 1).
    pub spawn_amount: u32,
}

impl Wave {
    pub fn duration_ms(&self) -> u64 {
        self.duration_secs as u64 * 1000
    }
}

/// One level: an ordered wave schedule plus the arena's fixed entry points.
#[derive(Debug, Clone)]
pub struct Level {
    pub waves: Vec<Wave>,
    pub spawn_points: Vec<Vec2>,
    pub player_start: Vec2,
}

/// The built-in campaign. Always at least one level.
pub fn campaign_levels() -> Vec<Level> {
    vec![
        // Level 1: bats, then bats in pairs, then the first blobs.
        Level {
            waves: vec![
                Wave {
                    duration_secs: 10,
                    spawn_interval_ms: 1000,
                    enemy_type: EnemyArchetype::Bat,
                    spawn_amount: 1,
                },
                Wave {
                    duration_secs: 15,
                    spawn_interval_ms: 800,
                    enemy_type: EnemyArchetype::Bat,
                    spawn_amount: 2,
                },
                Wave {
                    duration_secs: 20,
                    spawn_interval_ms: 600,
                    enemy_type: EnemyArchetype::Blob,
                    spawn_amount: 1,
                },
            ],
            spawn_points: perimeter_spawn_points(),
            player_start: Vec2::ZERO,
        },
        // Level 2: blobs in pairs, then skeletons in growing numbers.
        Level {
            waves: vec![
                Wave {
                    duration_secs: 15,
                    spawn_interval_ms: 800,
                    enemy_type: EnemyArchetype::Blob,
                    spawn_amount: 2,
                },
                Wave {
                    duration_secs: 20,
                    spawn_interval_ms: 600,
                    enemy_type: EnemyArchetype::Skeleton,
                    spawn_amount: 1,
                },
                Wave {
                    duration_secs: 25,
                    spawn_interval_ms: 400,
                    enemy_type: EnemyArchetype::Skeleton,
                    spawn_amount: 2,
                },
            ],
            spawn_points: perimeter_spawn_points(),
            player_start: Vec2::ZERO,
        },
    ]
}

/// Entry points ringing the arena edge, out of the player's reach at start.
fn perimeter_spawn_points() -> Vec<Vec2> {
    vec![
        Vec2::new(-900.0, -600.0),
        Vec2::new(0.0, -650.0),
        Vec2::new(900.0, -600.0),
        Vec2::new(-950.0, 0.0),
        Vec2::new(950.0, 0.0),
        Vec2::new(-900.0, 600.0),
        Vec2::new(0.0, 650.0),
        Vec2::new(900.0, 600.0),
    ]
}
