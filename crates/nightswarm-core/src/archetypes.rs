//! Enemy archetype stat profiles.

use crate::enums::EnemyArchetype;

/// Stat block for one enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeProfile {
    /// Movement speed toward the player (world units per second).
    pub speed: f32,
    /// Hit points at spawn.
    pub hp: i32,
    /// Collider radius.
    pub radius: f32,
    /// Points awarded on kill.
    pub xp_value: u32,
}

/// Look up the profile for an archetype.
pub fn get_profile(archetype: EnemyArchetype) -> ArchetypeProfile {
    match archetype {
        EnemyArchetype::Bat => ArchetypeProfile {
            speed: 250.0,
            hp: 10,
            radius: 16.0,
            xp_value: 10,
        },
        EnemyArchetype::Blob => ArchetypeProfile {
            speed: 160.0,
            hp: 20,
            radius: 18.0,
            xp_value: 20,
        },
        EnemyArchetype::Skeleton => ArchetypeProfile {
            speed: 320.0,
            hp: 30,
            radius: 20.0,
            xp_value: 35,
        },
    }
}
