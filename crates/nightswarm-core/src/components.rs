//! Runtime entity state for one session.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the sim systems, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DAMAGE, DEFAULT_MAX_HP, DEFAULT_SPEED};
use crate::enums::EnemyArchetype;

/// Persistent player stat block, upgraded through the shop.
/// Survives every screen transition; only a process restart resets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub max_hp: i32,
    /// Movement speed (world units per second).
    pub speed: f32,
    pub damage: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            max_hp: DEFAULT_MAX_HP,
            speed: DEFAULT_SPEED,
            damage: DEFAULT_DAMAGE,
        }
    }
}

/// The runtime player, rebuilt from [`PlayerStats`] each session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Raw movement input; normalized by the movement system.
    pub move_dir: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub speed: f32,
    /// False while inside the post-hit invulnerability window.
    pub vulnerable: bool,
    /// When the last hit landed (milliseconds).
    pub hurt_time_ms: u64,
}

/// A live enemy, built from its archetype profile at spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec2,
    pub archetype: EnemyArchetype,
    pub hp: i32,
    pub speed: f32,
    pub radius: f32,
    pub xp_value: u32,
}

/// A bullet in flight. Direction is unit length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    pub direction: Vec2,
    pub spawned_at_ms: u64,
}

/// Gun cooldown state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gun {
    pub can_shoot: bool,
    /// When the last burst fired (milliseconds).
    pub shoot_time_ms: u64,
}

impl Default for Gun {
    fn default() -> Self {
        Self {
            can_shoot: true,
            shoot_time_ms: 0,
        }
    }
}
