//! Frame snapshot — the complete visible state handed to the frontend
//! each tick. The rendering collaborator needs nothing else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::PlayerStats;
use crate::enums::EnemyArchetype;
use crate::events::{AudioEvent, GameEvent};
use crate::types::FrameTime;

/// Complete per-frame state produced by the game director.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: FrameTime,
    pub screen: ScreenView,
    /// Spendable points.
    pub points: u32,
    pub stats: PlayerStats,
    pub level_index: usize,
    pub level_count: usize,
    pub music_volume: f32,
    pub sfx_volume: f32,
    /// Present only while a session is live (Game screen).
    pub session: Option<SessionView>,
    pub events: Vec<GameEvent>,
    pub audio_events: Vec<AudioEvent>,
}

/// Which screen is showing, with its cursor state where one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScreenView {
    MainMenu { selected: usize },
    Settings { selected: usize },
    SkillTree,
    Game,
    Shop { selected: usize, entries: Vec<ShopEntryView> },
    Death,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::MainMenu { selected: 0 }
    }
}

/// One line of the shop menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopEntryView {
    pub label: String,
    pub cost: u32,
    /// Whether the player can currently pay for it. Next Level is free.
    pub affordable: bool,
}

/// The live session as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub wave: WaveView,
    pub score: SessionScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    /// False while flashing through the invulnerability window.
    pub vulnerable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub archetype: EnemyArchetype,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub direction: Vec2,
}

/// Wave HUD data: "Wave 2/3 - Time: 14" or "Wave Complete - Clear Enemies!".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveView {
    /// 1-based wave number, clamped to the wave count once exhausted.
    pub wave_number: u32,
    pub wave_count: u32,
    /// Seconds left in the current wave; zero once exhausted.
    pub time_remaining_secs: u32,
    /// True when every wave has run; only enemy cleanup remains.
    pub all_waves_done: bool,
}

/// Running totals for one session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionScore {
    pub enemies_spawned: u32,
    pub enemies_killed: u32,
    /// Points earned this session (already folded into the profile).
    pub points_earned: u32,
}
