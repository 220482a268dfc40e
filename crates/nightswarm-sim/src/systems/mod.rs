//! Per-frame systems, run by the engine in a fixed order.

pub mod bullet_collision;
pub mod cleanup;
pub mod gun;
pub mod movement;
pub mod player_collision;
pub mod snapshot;
pub mod wave_spawner;
