//! Player–enemy resolution.
//!
//! Contact damage is exactly-once per vulnerability window: the flag
//! flips false on the first overlapping tick, so any number of
//! simultaneous overlaps costs a single hit.

use nightswarm_core::components::{Enemy, Player};
use nightswarm_core::constants::{CONTACT_DAMAGE, PLAYER_RADIUS};
use nightswarm_core::events::{AudioEvent, GameEvent};
use nightswarm_core::types::circles_overlap;

pub fn run(
    player: &mut Player,
    enemies: &[Enemy],
    now_ms: u64,
    events: &mut Vec<GameEvent>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let touched = enemies
        .iter()
        .any(|enemy| circles_overlap(player.position, PLAYER_RADIUS, enemy.position, enemy.radius));

    if touched && player.vulnerable {
        player.hp -= CONTACT_DAMAGE;
        player.vulnerable = false;
        player.hurt_time_ms = now_ms;
        audio_events.push(AudioEvent::Impact);
        events.push(GameEvent::PlayerHit {
            remaining_hp: player.hp,
        });
    }
}
