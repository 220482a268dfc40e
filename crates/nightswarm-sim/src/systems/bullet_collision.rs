//! Bullet–enemy resolution.
//!
//! Every enemy overlapping a bullet is destroyed and scored; the bullet
//! is spent after processing no matter how many enemies it took with it.

use nightswarm_core::components::{Bullet, Enemy};
use nightswarm_core::constants::BULLET_RADIUS;
use nightswarm_core::events::{AudioEvent, GameEvent};
use nightswarm_core::state::SessionScore;
use nightswarm_core::types::circles_overlap;

pub fn run(
    bullets: &mut Vec<Bullet>,
    enemies: &mut Vec<Enemy>,
    score: &mut SessionScore,
    events: &mut Vec<GameEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let mut surviving = Vec::with_capacity(bullets.len());

    for bullet in bullets.drain(..) {
        let mut hit_any = false;
        enemies.retain(|enemy| {
            if circles_overlap(bullet.position, BULLET_RADIUS, enemy.position, enemy.radius) {
                hit_any = true;
                score.enemies_killed += 1;
                score.points_earned += enemy.xp_value;
                events.push(GameEvent::EnemyKilled {
                    archetype: enemy.archetype,
                    xp_value: enemy.xp_value,
                });
                false
            } else {
                true
            }
        });

        if hit_any {
            audio_events.push(AudioEvent::Impact);
        } else {
            surviving.push(bullet);
        }
    }

    *bullets = surviving;
}
