//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Enemy archetype category.
///
/// The stat side of an archetype lives in [`crate::archetypes`]; the
/// visual side belongs to the rendering collaborator, which keys its
/// sprite sets by [`EnemyArchetype::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Fast, fragile, cheap.
    Bat,
    /// Slow and worth more.
    Blob,
    /// Fastest and worth the most.
    Skeleton,
}

impl EnemyArchetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bat => "bat",
            Self::Blob => "blob",
            Self::Skeleton => "skeleton",
        }
    }
}

/// How a session ended. Once set, the session engine stops running systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// All waves exhausted and every enemy destroyed.
    LevelCleared,
    /// Player hit points reached zero.
    PlayerDied,
}
