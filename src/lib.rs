//! Neon Rush - A reflex arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, difficulty ramp, hits, session)
//! - `game`: Host-facing frame loop wrapping the simulation
//! - `renderer`: Draw-command generation and Canvas2D output
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Key/value storage for the best score
//! - `tuning`: Data-driven game balance

pub mod best_score;
pub mod game;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use best_score::BestScore;
pub use game::{Game, RunStats};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame length assumed by the headless runner (60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Screen shake offset range (± pixels per axis)
    pub const SHAKE_MAGNITUDE: f32 = 10.0;
    /// How long the shake offset stays applied
    pub const SHAKE_DURATION_MS: i32 = 50;
    /// Opacity of the one-frame level-up flash
    pub const FLASH_ALPHA: f32 = 0.3;

    /// Orb pulse amplitude (drawn radius wobbles by half of this)
    pub const PULSE_AMPLITUDE: f32 = 5.0;
    /// Orb glow blur before pulse
    pub const ORB_GLOW: f32 = 20.0;
    /// White core radius relative to the orb
    pub const ORB_CORE_RATIO: f32 = 0.4;
    pub const PARTICLE_GLOW: f32 = 10.0;

    /// LocalStorage keys
    pub const BEST_SCORE_KEY: &str = "neon_rush_best";
    pub const SETTINGS_KEY: &str = "neon_rush_settings";
}
