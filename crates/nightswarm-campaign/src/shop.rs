//! The shop ledger: point-gated stat upgrades between levels.
//!
//! Purchases are atomic — either the cost is paid and the stat delta
//! lands, or nothing changes at all.

use serde::{Deserialize, Serialize};

use crate::profile::CampaignProfile;

/// Purchasable stat upgrades, in shop display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopItem {
    /// +5 bullet damage.
    Damage,
    /// +20 maximum hit points.
    MaxHp,
    /// +50 movement speed.
    Speed,
}

impl ShopItem {
    pub const ALL: [ShopItem; 3] = [ShopItem::Damage, ShopItem::MaxHp, ShopItem::Speed];

    pub fn cost(self) -> u32 {
        match self {
            Self::Damage => 150,
            Self::MaxHp => 100,
            Self::Speed => 80,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Damage => "Damage (+5) (150 pts)",
            Self::MaxHp => "Max HP (+20) (100 pts)",
            Self::Speed => "Speed (+50) (80 pts)",
        }
    }
}

/// Attempt a purchase against the profile. Returns the cost paid, or an
/// error message suitable for UI feedback; on error nothing changes.
pub fn purchase(profile: &mut CampaignProfile, item: ShopItem) -> Result<u32, String> {
    let cost = item.cost();
    if profile.points < cost {
        return Err(format!(
            "Insufficient points: have {}, need {}",
            profile.points, cost
        ));
    }
    profile.points -= cost;
    match item {
        ShopItem::Damage => profile.stats.damage += 5,
        ShopItem::MaxHp => profile.stats.max_hp += 20,
        ShopItem::Speed => profile.stats.speed += 50.0,
    }
    Ok(cost)
}
