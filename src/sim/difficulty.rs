//! Difficulty ramp
//!
//! Counts spawn events and advances the level every `spawns_per_level` spawns.
//! Parameters are a pure function of the level, so they only ever tighten
//! within a run. Level 1 runs on the base values; each level-up recomputes
//! interval and size from the new level.

use crate::tuning::Tuning;

/// Parameters derived from the current level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    /// Time between spawn events (ms)
    pub spawn_interval_ms: f32,
    /// Fall speed before jitter and level factor (px/frame)
    pub base_fall_speed: f32,
    /// Scales the sampled orb radius
    pub size_multiplier: f32,
    /// Chance that a spawn event releases a second orb
    pub multi_spawn_chance: f32,
}

impl DifficultyParams {
    /// Base values in effect before the first level-up
    pub fn base(tuning: &Tuning) -> Self {
        Self {
            spawn_interval_ms: tuning.spawn_interval_ms,
            base_fall_speed: tuning.base_fall_speed,
            size_multiplier: tuning.size_multiplier,
            multi_spawn_chance: tuning.multi_spawn_chance.min(tuning.multi_spawn_cap),
        }
    }

    /// Parameters for a level (1-based).
    ///
    /// Interval and size are recomputed from the level itself once it has
    /// been reached by a level-up. Fall speed and multi-spawn chance step up
    /// once per level-up.
    pub fn for_level(level: u32, tuning: &Tuning) -> Self {
        if level <= 1 {
            return Self::base(tuning);
        }
        let level_ups = (level - 1) as f32;
        let level = level as f32;
        Self {
            spawn_interval_ms: (tuning.spawn_interval_ms - tuning.spawn_interval_step_ms * level)
                .max(tuning.spawn_interval_floor_ms),
            base_fall_speed: tuning.base_fall_speed + tuning.fall_speed_step * level_ups,
            size_multiplier: (tuning.size_multiplier - tuning.size_multiplier_step * level)
                .max(tuning.size_multiplier_floor),
            multi_spawn_chance: (tuning.multi_spawn_chance
                + tuning.multi_spawn_step * level_ups)
                .min(tuning.multi_spawn_cap),
        }
    }
}

/// Spawn counter, level and the parameters in effect
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub spawn_counter: u32,
    pub level: u32,
    pub params: DifficultyParams,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_counter: 0,
            level: 1,
            params: DifficultyParams::base(tuning),
        }
    }

    /// Back to level 1 base values
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Record one spawn event. Returns true when the level advanced.
    pub fn on_spawn_tick(&mut self, tuning: &Tuning) -> bool {
        self.spawn_counter += 1;
        if self.spawn_counter % tuning.spawns_per_level.max(1) != 0 {
            return false;
        }
        self.level += 1;
        self.params = DifficultyParams::for_level(self.level, tuning);
        log::info!(
            "Level {}: interval {}ms, base speed {:.1}, size x{:.2}, multi {:.2}",
            self.level,
            self.params.spawn_interval_ms,
            self.params.base_fall_speed,
            self.params.size_multiplier,
            self.params.multi_spawn_chance
        );
        true
    }

    /// Fall speed factor for orbs spawned at the current level
    pub fn speed_factor(&self, tuning: &Tuning) -> f32 {
        1.0 + tuning.level_speed_factor * self.level.saturating_sub(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_base_values() {
        let tuning = Tuning::default();
        let d = Difficulty::new(&tuning);
        assert_eq!(d.level, 1);
        assert_eq!(d.spawn_counter, 0);
        assert_eq!(d.params.spawn_interval_ms, 800.0);
        assert!(approx(d.params.base_fall_speed, 1.5));
        assert!(approx(d.params.size_multiplier, 0.7));
        assert!(approx(d.params.multi_spawn_chance, 0.3));
        assert!(approx(d.speed_factor(&tuning), 1.0));
    }

    #[test]
    fn test_fifteen_ticks_reach_level_two() {
        let tuning = Tuning::default();
        let mut d = Difficulty::new(&tuning);
        for i in 1..15 {
            assert!(!d.on_spawn_tick(&tuning), "levelled up early at tick {}", i);
        }
        assert!(d.on_spawn_tick(&tuning));
        assert_eq!(d.level, 2);
        assert_eq!(d.params.spawn_interval_ms, 700.0);
        assert!(approx(d.params.multi_spawn_chance, 0.35));
        assert!(approx(d.params.size_multiplier, 0.66));
        assert!(approx(d.params.base_fall_speed, 1.9));
        assert!(approx(d.speed_factor(&tuning), 1.1));
    }

    #[test]
    fn test_parameters_clamp_at_limits() {
        let tuning = Tuning::default();
        let p = DifficultyParams::for_level(100, &tuning);
        assert_eq!(p.spawn_interval_ms, 300.0);
        assert!(approx(p.size_multiplier, 0.4));
        assert!(approx(p.multi_spawn_chance, 0.8));
    }

    #[test]
    fn test_reset_restores_base() {
        let tuning = Tuning::default();
        let mut d = Difficulty::new(&tuning);
        for _ in 0..40 {
            d.on_spawn_tick(&tuning);
        }
        assert_eq!(d.level, 3);
        d.reset(&tuning);
        assert_eq!(d, Difficulty::new(&tuning));
    }

    proptest! {
        #[test]
        fn prop_level_advances_once_per_fifteen_spawns(ticks in 0u32..500) {
            let tuning = Tuning::default();
            let mut d = Difficulty::new(&tuning);
            let mut level_ups = 0;
            for _ in 0..ticks {
                if d.on_spawn_tick(&tuning) {
                    level_ups += 1;
                }
            }
            prop_assert_eq!(level_ups, ticks / 15);
            prop_assert_eq!(d.level, 1 + ticks / 15);
        }

        #[test]
        fn prop_params_follow_closed_form(level in 2u32..200) {
            let tuning = Tuning::default();
            let l = level as f32;
            let p = DifficultyParams::for_level(level, &tuning);
            prop_assert!(approx(p.spawn_interval_ms, (800.0 - 50.0 * l).max(300.0)));
            prop_assert!(approx(p.size_multiplier, (0.7 - 0.02 * l).max(0.4)));
            prop_assert!(approx(p.multi_spawn_chance, (0.3 + 0.05 * (l - 1.0)).min(0.8)));
        }

        #[test]
        fn prop_ticks_match_level_formula(ticks in 0u32..400) {
            let tuning = Tuning::default();
            let mut d = Difficulty::new(&tuning);
            for _ in 0..ticks {
                d.on_spawn_tick(&tuning);
            }
            prop_assert_eq!(d.params, DifficultyParams::for_level(d.level, &tuning));
        }

        #[test]
        fn prop_params_never_loosen(level in 1u32..200) {
            let tuning = Tuning::default();
            let here = DifficultyParams::for_level(level, &tuning);
            let next = DifficultyParams::for_level(level + 1, &tuning);
            prop_assert!(next.spawn_interval_ms <= here.spawn_interval_ms);
            prop_assert!(next.size_multiplier <= here.size_multiplier);
            prop_assert!(next.multi_spawn_chance >= here.multi_spawn_chance);
            prop_assert!(next.base_fall_speed > here.base_fall_speed);
        }
    }
}
