//! Player visual preferences
//!
//! Read from LocalStorage separately from the best score.

use serde::Deserialize;

use crate::consts::SETTINGS_KEY;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Screen shake when an orb escapes
    pub screen_shake: bool,
    /// White flash on level-up
    pub level_flash: bool,
    /// Draw hit explosions
    pub particles: bool,
    /// Neon glow (shadow blur) around orbs and particles
    pub glow: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, no flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            level_flash: true,
            particles: true,
            glow: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective level flash (respects reduced_motion)
    pub fn effective_level_flash(&self) -> bool {
        self.level_flash && !self.reduced_motion
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(SETTINGS_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
                log::warn!("Stored settings unreadable, using defaults");
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No settings storage on native ({}), using defaults", SETTINGS_KEY);
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_cues() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_screen_shake());
        assert!(!settings.effective_level_flash());
        assert!(Settings::default().effective_screen_shake());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "glow": false }"#).expect("valid json");
        assert!(!settings.glow);
        assert!(settings.particles);
        assert!(Settings::from_json("nope").is_none());
    }
}
