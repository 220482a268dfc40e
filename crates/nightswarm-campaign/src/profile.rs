//! The campaign profile: everything that survives a screen transition.

use serde::{Deserialize, Serialize};

use nightswarm_core::components::PlayerStats;

/// What happens to campaign progress when the player dies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathPolicy {
    /// Level index and points persist; death only costs the session.
    #[default]
    KeepProgress,
    /// Back to the first level; points and stats are kept.
    RestartCampaign,
    /// A completely fresh profile.
    HardReset,
}

/// Persistent progress: points, stats, and which level is next.
/// Mutated only by the shop ledger, kill scoring, and the death policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignProfile {
    pub points: u32,
    pub stats: PlayerStats,
    pub level_index: usize,
}

impl CampaignProfile {
    /// Apply the configured death policy. Called once on entering the
    /// death screen.
    pub fn apply_death_policy(&mut self, policy: DeathPolicy) {
        match policy {
            DeathPolicy::KeepProgress => {}
            DeathPolicy::RestartCampaign => self.level_index = 0,
            DeathPolicy::HardReset => *self = Self::default(),
        }
    }
}
