//! Session engine — one level playthrough.
//!
//! `SessionEngine` owns the player, the enemy and bullet sets, the wave
//! timeline, and a seeded RNG; it runs all systems in a fixed order each
//! tick and produces `SessionFrame`s. Same seed, same inputs, same run.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use nightswarm_core::archetypes::get_profile;
use nightswarm_core::components::{Bullet, Enemy, Gun, Player, PlayerStats};
use nightswarm_core::enums::SessionOutcome;
use nightswarm_core::events::{AudioEvent, GameEvent};
use nightswarm_core::levels::Level;
use nightswarm_core::state::{SessionScore, SessionView};
use nightswarm_core::types::FrameTime;

use crate::systems;
use crate::systems::wave_spawner::{SpawnRequest, WaveTimeline};

/// Everything needed to start a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub level: Level,
    pub level_index: usize,
    pub stats: PlayerStats,
    /// RNG seed for determinism. Same seed = same spawn positions.
    pub seed: u64,
}

/// Output of one engine tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFrame {
    pub view: SessionView,
    pub events: Vec<GameEvent>,
    pub audio_events: Vec<AudioEvent>,
}

/// The live session. Discarded whole when the director leaves the Game
/// screen; nothing in here persists.
pub struct SessionEngine {
    level: Level,
    level_index: usize,
    player: Player,
    gun: Gun,
    firing: bool,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    timeline: WaveTimeline,
    rng: ChaCha8Rng,
    score: SessionScore,
    outcome: Option<SessionOutcome>,
}

impl SessionEngine {
    /// Start a fresh session. The runtime player is rebuilt from the
    /// persistent stats; hit points never carry over between sessions.
    pub fn new(config: SessionConfig, now_ms: u64) -> Self {
        let player = Player {
            position: config.level.player_start,
            move_dir: Vec2::ZERO,
            hp: config.stats.max_hp,
            max_hp: config.stats.max_hp,
            speed: config.stats.speed,
            vulnerable: true,
            hurt_time_ms: 0,
        };

        Self {
            level: config.level,
            level_index: config.level_index,
            player,
            gun: Gun::default(),
            firing: true,
            enemies: Vec::new(),
            bullets: Vec::new(),
            timeline: WaveTimeline::new(now_ms),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: SessionScore::default(),
            outcome: None,
        }
    }

    /// Advance the session by one frame and return the resulting view
    /// and events. After an outcome is set, systems stop running and
    /// only the snapshot is rebuilt.
    pub fn tick(&mut self, time: FrameTime) -> SessionFrame {
        let mut events = Vec::new();
        let mut audio_events = Vec::new();

        if self.outcome.is_none() {
            // 1. Shooting
            if self.firing {
                if let Some(burst) =
                    systems::gun::try_shoot(&mut self.gun, self.player.position, time.now_ms)
                {
                    audio_events.push(AudioEvent::Shoot);
                    self.bullets.extend(burst);
                }
            }
            // 2. Movement and timers
            systems::movement::run(&mut self.player, &mut self.enemies, &mut self.bullets, time);
            // 3. Bullet-enemy resolution
            systems::bullet_collision::run(
                &mut self.bullets,
                &mut self.enemies,
                &mut self.score,
                &mut events,
                &mut audio_events,
            );
            // 4. Player-enemy resolution
            systems::player_collision::run(
                &mut self.player,
                &self.enemies,
                time.now_ms,
                &mut events,
                &mut audio_events,
            );
            // 5. Expired bullets
            systems::cleanup::run(&mut self.bullets, time.now_ms);
            // 6. Wave management
            let spawns = systems::wave_spawner::run(
                &mut self.timeline,
                &self.level,
                &mut self.rng,
                time.now_ms,
                &mut events,
            );
            for request in spawns {
                self.enemies.push(materialize(request));
                self.score.enemies_spawned += 1;
            }
            // 7. Outcome check (death takes precedence over level clear)
            self.check_outcome(&mut events);
        }

        SessionFrame {
            view: systems::snapshot::build(
                &self.player,
                &self.enemies,
                &self.bullets,
                &self.timeline,
                &self.level,
                &self.score,
                time.now_ms,
            ),
            events,
            audio_events,
        }
    }

    /// Set the player's movement input for subsequent ticks.
    pub fn set_move_direction(&mut self, direction: Vec2) {
        self.player.move_dir = direction;
    }

    /// Hold or release the trigger.
    pub fn set_firing(&mut self, firing: bool) {
        self.firing = firing;
    }

    /// How the session ended, if it has.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    pub fn score(&self) -> SessionScore {
        self.score
    }

    fn check_outcome(&mut self, events: &mut Vec<GameEvent>) {
        if self.player.hp <= 0 {
            self.outcome = Some(SessionOutcome::PlayerDied);
            events.push(GameEvent::PlayerDied);
        } else if self.timeline.exhausted(&self.level) && self.enemies.is_empty() {
            self.outcome = Some(SessionOutcome::LevelCleared);
            events.push(GameEvent::LevelCleared {
                level_index: self.level_index,
            });
        }
    }
}

/// Build a live enemy from a spawn request via its archetype profile.
fn materialize(request: SpawnRequest) -> Enemy {
    let profile = get_profile(request.archetype);
    Enemy {
        position: request.position,
        archetype: request.archetype,
        hp: profile.hp,
        speed: profile.speed,
        radius: profile.radius,
        xp_value: profile.xp_value,
    }
}
