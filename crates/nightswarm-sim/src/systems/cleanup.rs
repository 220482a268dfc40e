//! Cleanup system: removes bullets that outlived their flight time.

use nightswarm_core::components::Bullet;
use nightswarm_core::constants::BULLET_LIFETIME_MS;

pub fn run(bullets: &mut Vec<Bullet>, now_ms: u64) {
    bullets.retain(|bullet| now_ms - bullet.spawned_at_ms < BULLET_LIFETIME_MS);
}
