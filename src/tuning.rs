//! Data-driven game balance
//!
//! Every number that shapes how hard a run feels lives here. `Default` is the
//! shipped balance; a JSON file may override any subset of fields.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed sampling interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max]` (degenerate ranges yield `min`)
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..=self.max)
        } else {
            self.min
        }
    }
}

/// Balance table for spawning, difficulty ramp, scoring and particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    /// Spawn interval at level 1 (ms)
    pub spawn_interval_ms: f32,
    /// Interval reduction per completed level-up (ms)
    pub spawn_interval_step_ms: f32,
    /// Interval never drops below this (ms)
    pub spawn_interval_floor_ms: f32,
    /// Spawn events per level
    pub spawns_per_level: u32,

    // === Orbs ===
    /// Base fall speed at level 1 (px/frame)
    pub base_fall_speed: f32,
    /// Base fall speed increase per level-up
    pub fall_speed_step: f32,
    /// Random speed added on top of the base
    pub fall_speed_jitter: Range,
    /// Extra speed factor per level above 1 (0.1 = +10%)
    pub level_speed_factor: f32,
    /// Unscaled orb radius
    pub orb_radius: Range,
    /// Size multiplier at level 1
    pub size_multiplier: f32,
    /// Size multiplier reduction per level-up
    pub size_multiplier_step: f32,
    /// Size multiplier never drops below this
    pub size_multiplier_floor: f32,
    /// Pulse phase advance per frame
    pub pulse_step: f32,

    // === Multi-spawn ===
    /// Chance of a second orb on a spawn event at level 1
    pub multi_spawn_chance: f32,
    /// Chance increase per level-up
    pub multi_spawn_step: f32,
    /// Chance never exceeds this
    pub multi_spawn_cap: f32,

    // === Session ===
    /// Lives at the start of a run
    pub starting_lives: u8,
    /// Points per hit, multiplied by the level
    pub points_per_level: u64,
    /// Extra pointer slack around an orb's radius (px)
    pub hit_tolerance: f32,

    // === Particles ===
    /// Particles per popped orb
    pub burst_size: usize,
    /// Per-axis particle velocity
    pub particle_speed: Range,
    pub particle_size: Range,
    /// Life lost per frame
    pub particle_decay: Range,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 800.0,
            spawn_interval_step_ms: 50.0,
            spawn_interval_floor_ms: 300.0,
            spawns_per_level: 15,

            base_fall_speed: 1.5,
            fall_speed_step: 0.4,
            fall_speed_jitter: Range::new(2.0, 4.0),
            level_speed_factor: 0.1,
            orb_radius: Range::new(20.0, 40.0),
            size_multiplier: 0.7,
            size_multiplier_step: 0.02,
            size_multiplier_floor: 0.4,
            pulse_step: 0.1,

            multi_spawn_chance: 0.3,
            multi_spawn_step: 0.05,
            multi_spawn_cap: 0.8,

            starting_lives: 3,
            points_per_level: 10,
            hit_tolerance: 30.0,

            burst_size: 15,
            particle_speed: Range::new(-7.5, 7.5),
            particle_size: Range::new(2.0, 6.0),
            particle_decay: Range::new(0.02, 0.07),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning table from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse JSON, falling back to the default table on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "spawns_per_level": 10, "hit_tolerance": 12.5 }"#)
            .expect("valid json");
        assert_eq!(tuning.spawns_per_level, 10);
        assert_eq!(tuning.hit_tolerance, 12.5);
        assert_eq!(tuning.spawn_interval_ms, 800.0);
        assert_eq!(tuning.burst_size, 15);
    }

    #[test]
    fn test_range_sample_stays_inside() {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
        let range = Range::new(2.0, 4.0);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!((2.0..=4.0).contains(&v));
        }
        assert_eq!(Range::new(5.0, 5.0).sample(&mut rng), 5.0);
        assert_eq!(Range::new(5.0, 1.0).sample(&mut rng), 5.0);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let tuning = Tuning::from_json_or_default("{ not json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_json_survives_save_and_load() {
        let mut tuning = Tuning::default();
        tuning.multi_spawn_cap = 0.5;
        let json = tuning.to_json().expect("serializable");
        assert_eq!(Tuning::from_json(&json).expect("valid json"), tuning);
    }
}
