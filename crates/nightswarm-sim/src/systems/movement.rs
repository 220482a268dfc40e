//! Kinematic integration and timers.
//!
//! Moves the player along its input direction, restores vulnerability
//! after the hit window, walks enemies toward the player, and flies
//! bullets along their fan directions.

use nightswarm_core::components::{Bullet, Enemy, Player};
use nightswarm_core::constants::{BULLET_SPEED, INVULNERABILITY_MS};
use nightswarm_core::types::FrameTime;

pub fn run(player: &mut Player, enemies: &mut [Enemy], bullets: &mut [Bullet], time: FrameTime) {
    let input = player.move_dir.normalize_or_zero();
    player.position += input * player.speed * time.dt_secs;

    if !player.vulnerable && time.now_ms - player.hurt_time_ms >= INVULNERABILITY_MS {
        player.vulnerable = true;
    }

    for enemy in enemies.iter_mut() {
        let seek = (player.position - enemy.position).normalize_or_zero();
        enemy.position += seek * enemy.speed * time.dt_secs;
    }

    for bullet in bullets.iter_mut() {
        bullet.position += bullet.direction * BULLET_SPEED * time.dt_secs;
    }
}
