//! Snapshot system: builds the read-only SessionView for the frontend.
//!
//! Never modifies session state.

use nightswarm_core::components::{Bullet, Enemy, Player};
use nightswarm_core::levels::Level;
use nightswarm_core::state::{
    BulletView, EnemyView, PlayerView, SessionScore, SessionView, WaveView,
};

use crate::systems::wave_spawner::WaveTimeline;

pub fn build(
    player: &Player,
    enemies: &[Enemy],
    bullets: &[Bullet],
    timeline: &WaveTimeline,
    level: &Level,
    score: &SessionScore,
    now_ms: u64,
) -> SessionView {
    SessionView {
        player: PlayerView {
            position: player.position,
            hp: player.hp,
            max_hp: player.max_hp,
            vulnerable: player.vulnerable,
        },
        enemies: enemies
            .iter()
            .map(|enemy| EnemyView {
                position: enemy.position,
                archetype: enemy.archetype,
            })
            .collect(),
        bullets: bullets
            .iter()
            .map(|bullet| BulletView {
                position: bullet.position,
                direction: bullet.direction,
            })
            .collect(),
        wave: build_wave_view(timeline, level, now_ms),
        score: *score,
    }
}

fn build_wave_view(timeline: &WaveTimeline, level: &Level, now_ms: u64) -> WaveView {
    let wave_count = level.waves.len() as u32;
    if timeline.exhausted(level) {
        return WaveView {
            wave_number: wave_count,
            wave_count,
            time_remaining_secs: 0,
            all_waves_done: true,
        };
    }

    let wave = &level.waves[timeline.wave_index];
    let elapsed_secs = (now_ms.saturating_sub(timeline.wave_start_ms) / 1000) as u32;
    WaveView {
        wave_number: timeline.wave_index as u32 + 1,
        wave_count,
        time_remaining_secs: wave.duration_secs.saturating_sub(elapsed_secs),
        all_waves_done: false,
    }
}
