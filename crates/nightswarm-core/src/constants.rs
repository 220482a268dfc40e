//! Game constants and tuning parameters.

/// Nominal frame-update rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Gun ---

/// Cooldown between shot bursts (milliseconds).
pub const GUN_COOLDOWN_MS: u64 = 500;

/// Bullet travel speed (world units per second).
pub const BULLET_SPEED: f32 = 1200.0;

/// Bullet lifetime before it expires unspent (milliseconds).
pub const BULLET_LIFETIME_MS: u64 = 1000;

/// Bullet collider radius.
pub const BULLET_RADIUS: f32 = 6.0;

// --- Player ---

/// Player hitbox radius.
pub const PLAYER_RADIUS: f32 = 20.0;

/// Damage taken per enemy contact.
pub const CONTACT_DAMAGE: i32 = 10;

/// Window after a hit during which no further damage is applied (milliseconds).
pub const INVULNERABILITY_MS: u64 = 400;

// --- Default persistent stats ---

/// Starting maximum hit points.
pub const DEFAULT_MAX_HP: i32 = 100;

/// Starting movement speed (world units per second).
pub const DEFAULT_SPEED: f32 = 500.0;

/// Starting bullet damage.
pub const DEFAULT_DAMAGE: i32 = 10;

// --- Audio settings ---

/// Music volume when no settings file exists.
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;

/// Sound-effect volume when no settings file exists.
pub const DEFAULT_SFX_VOLUME: f32 = 0.1;

/// Volume change per settings-menu adjustment.
pub const VOLUME_STEP: f32 = 0.1;
