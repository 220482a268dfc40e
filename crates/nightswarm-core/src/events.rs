//! Events emitted by the core for the frontend each frame.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyArchetype;

/// Logic transitions surfaced to the frontend (and consumed by the
/// director to drive progression).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began (index into the level's wave list).
    WaveStarted { wave_index: usize },
    /// A bullet destroyed an enemy.
    EnemyKilled {
        archetype: EnemyArchetype,
        xp_value: u32,
    },
    /// The player took contact damage.
    PlayerHit { remaining_hp: i32 },
    /// Player hit points reached zero; the session is over.
    PlayerDied,
    /// All waves exhausted and the field cleared.
    LevelCleared { level_index: usize },
    /// The last level was cleared and left via the shop.
    GameCompleted,
}

/// Audio cues for the frontend sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A shot burst was fired.
    Shoot,
    /// A bullet or enemy contact landed.
    Impact,
    /// A shop purchase was rejected.
    Denied,
}
