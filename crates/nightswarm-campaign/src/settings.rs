//! Audio settings persistence.
//!
//! Two volume floats in a JSON file. A missing or unreadable file, or
//! one with missing keys, silently falls back to defaults — the player
//! never sees a settings error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use nightswarm_core::constants::{DEFAULT_MUSIC_VOLUME, DEFAULT_SFX_VOLUME};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    #[serde(default = "default_music_volume")]
    pub music_volume: f32,
    #[serde(default = "default_sfx_volume")]
    pub sfx_volume: f32,
}

fn default_music_volume() -> f32 {
    DEFAULT_MUSIC_VOLUME
}

fn default_sfx_volume() -> f32 {
    DEFAULT_SFX_VOLUME
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
        }
    }
}

impl AudioSettings {
    fn clamped(mut self) -> Self {
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }
}

/// Load settings, falling back to defaults on any failure.
pub fn load(path: &Path) -> AudioSettings {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return AudioSettings::default(),
    };
    match serde_json::from_str::<AudioSettings>(&json) {
        Ok(settings) => settings.clamped(),
        Err(_) => AudioSettings::default(),
    }
}

/// Write settings to disk, creating parent directories as needed.
pub fn save(path: &Path, settings: &AudioSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create settings directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write settings file: {e}"))?;
    Ok(())
}
