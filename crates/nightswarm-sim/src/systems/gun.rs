//! Gun cooldown state machine and the 8-way shot fan.

use glam::Vec2;

use nightswarm_core::components::{Bullet, Gun};
use nightswarm_core::constants::GUN_COOLDOWN_MS;

/// The eight fixed firing directions, before normalization.
const FIRE_DIRECTIONS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-1.0, 0.0),
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
];

/// Unit vectors for the shot fan: cardinals plus diagonals.
pub fn fire_directions() -> [Vec2; 8] {
    FIRE_DIRECTIONS.map(|(x, y)| Vec2::new(x, y).normalize())
}

/// Pull the trigger. Returns a burst of 8 bullets at the player center
/// while the gun is ready; otherwise re-arms the gun once the cooldown
/// has elapsed, emitting nothing on that tick.
pub fn try_shoot(gun: &mut Gun, origin: Vec2, now_ms: u64) -> Option<Vec<Bullet>> {
    if gun.can_shoot {
        gun.can_shoot = false;
        gun.shoot_time_ms = now_ms;
        Some(
            fire_directions()
                .iter()
                .map(|direction| Bullet {
                    position: origin,
                    direction: *direction,
                    spawned_at_ms: now_ms,
                })
                .collect(),
        )
    } else {
        if now_ms - gun.shoot_time_ms >= GUN_COOLDOWN_MS {
            gun.can_shoot = true;
        }
        None
    }
}
