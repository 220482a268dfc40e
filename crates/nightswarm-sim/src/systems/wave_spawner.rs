//! Wave spawning system — walks the level's wave schedule and decides
//! when and what to spawn.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightswarm_core::enums::EnemyArchetype;
use nightswarm_core::events::GameEvent;
use nightswarm_core::levels::Level;

/// One enemy to be materialized by the engine.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub archetype: EnemyArchetype,
    pub position: Vec2,
}

/// Progress through a level's wave schedule.
///
/// `last_spawn_ms == None` means a spawn is due on the next check: the
/// first batch of a session (and of each wave) fires immediately rather
/// than waiting out a full interval.
#[derive(Debug, Clone)]
pub struct WaveTimeline {
    pub wave_index: usize,
    pub wave_start_ms: u64,
    pub last_spawn_ms: Option<u64>,
}

impl WaveTimeline {
    pub fn new(now_ms: u64) -> Self {
        Self {
            wave_index: 0,
            wave_start_ms: now_ms,
            last_spawn_ms: None,
        }
    }

    /// All waves have run; no further spawns regardless of elapsed time.
    pub fn exhausted(&self, level: &Level) -> bool {
        self.wave_index >= level.waves.len()
    }
}

/// Advance the timeline and return any spawns due this tick.
pub fn run(
    timeline: &mut WaveTimeline,
    level: &Level,
    rng: &mut ChaCha8Rng,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) -> Vec<SpawnRequest> {
    if timeline.exhausted(level) {
        return Vec::new();
    }

    let wave = &level.waves[timeline.wave_index];

    // Duration expiry takes precedence over spawning: a wave that just
    // ended never spawns again on the same tick.
    if now_ms - timeline.wave_start_ms >= wave.duration_ms() {
        timeline.wave_index += 1;
        timeline.wave_start_ms = now_ms;
        timeline.last_spawn_ms = None;
        if timeline.wave_index < level.waves.len() {
            events.push(GameEvent::WaveStarted {
                wave_index: timeline.wave_index,
            });
        }
        return Vec::new();
    }

    let due = timeline
        .last_spawn_ms
        .map_or(true, |last| now_ms - last >= wave.spawn_interval_ms);
    if !due {
        return Vec::new();
    }
    timeline.last_spawn_ms = Some(now_ms);

    if level.spawn_points.is_empty() {
        return Vec::new();
    }

    (0..wave.spawn_amount)
        .map(|_| SpawnRequest {
            archetype: wave.enemy_type,
            position: level.spawn_points[rng.gen_range(0..level.spawn_points.len())],
        })
        .collect()
}
