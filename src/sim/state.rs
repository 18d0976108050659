//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use crate::best_score::BestScore;
use crate::consts::{PULSE_AMPLITUDE, SHAKE_MAGNITUDE};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, nothing simulated yet
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Orb palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeonColor {
    Pink,
    Cyan,
    Violet,
    Amber,
    Mint,
}

impl NeonColor {
    pub const ALL: [NeonColor; 5] = [
        NeonColor::Pink,
        NeonColor::Cyan,
        NeonColor::Violet,
        NeonColor::Amber,
        NeonColor::Mint,
    ];

    pub fn css(self) -> &'static str {
        match self {
            NeonColor::Pink => "#ff006e",
            NeonColor::Cyan => "#00f5ff",
            NeonColor::Violet => "#8338ec",
            NeonColor::Amber => "#ffbe0b",
            NeonColor::Mint => "#06ffa5",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Drawable area reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A falling target
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
    /// Hit radius (the pulse never changes it)
    pub radius: f32,
    /// Fall speed (px/frame)
    pub speed: f32,
    pub color: NeonColor,
    /// Pulse phase (radians)
    pub phase: f32,
}

impl Orb {
    /// Sample a new orb just above the top edge, using the difficulty in effect
    pub fn spawn<R: Rng + ?Sized>(
        id: u32,
        rng: &mut R,
        viewport: Viewport,
        difficulty: &Difficulty,
        tuning: &Tuning,
    ) -> Self {
        let radius = tuning.orb_radius.sample(rng) * difficulty.params.size_multiplier;
        let x = if viewport.width > radius * 2.0 {
            rng.random_range(radius..=viewport.width - radius)
        } else {
            viewport.width / 2.0
        };
        let speed = (tuning.fall_speed_jitter.sample(rng) + difficulty.params.base_fall_speed)
            * difficulty.speed_factor(tuning);

        Self {
            id,
            pos: Vec2::new(x, -radius),
            radius,
            speed,
            color: NeonColor::random(rng),
            phase: 0.0,
        }
    }

    /// Fall one frame and advance the pulse
    pub fn update(&mut self, pulse_step: f32) {
        self.pos.y += self.speed;
        self.phase += pulse_step;
    }

    /// Current pulse offset (rendering only)
    pub fn pulse(&self) -> f32 {
        self.phase.sin() * PULSE_AMPLITUDE
    }
}

/// A cosmetic fragment from a popped orb
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: NeonColor,
    pub size: f32,
    /// 1.0 at birth, dead at or below 0
    pub life: f32,
    /// Life lost per frame
    pub decay: f32,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, pos: Vec2, color: NeonColor, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                tuning.particle_speed.sample(rng),
                tuning.particle_speed.sample(rng),
            ),
            color,
            size: tuning.particle_size.sample(rng),
            life: 1.0,
            decay: tuning.particle_decay.sample(rng),
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Transient visual-only effects for the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Offset the whole view briefly
    Shake { offset: Vec2 },
    /// Full-screen flash for one frame
    Flash,
}

/// Things that happened during a frame or input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    OrbSpawned { id: u32 },
    LevelUp { level: u32 },
    OrbPopped { id: u32, pos: Vec2, points: u64 },
    LifeLost { lives: u8 },
    GameOver { score: u64, best: u64, new_best: bool },
    Cue(Cue),
}

/// The whole session context: entities, bookkeeping and the RNG
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub best: BestScore,
    pub difficulty: Difficulty,
    /// Time accumulated toward the next spawn event (ms)
    pub spawn_timer_ms: f32,
    pub viewport: Viewport,
    /// Frames simulated this run
    pub frame: u64,
    /// Live orbs in spawn order (newest last)
    pub orbs: Vec<Orb>,
    pub particles: Vec<Particle>,
    /// Pending events, drained by the host
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            difficulty: Difficulty::new(&tuning),
            lives: tuning.starting_lives,
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            best: BestScore::default(),
            spawn_timer_ms: 0.0,
            viewport,
            frame: 0,
            orbs: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn level(&self) -> u32 {
        self.difficulty.level
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn one orb with the current parameters, then count the spawn
    pub fn spawn_orb(&mut self) {
        let id = self.next_entity_id();
        let orb = Orb::spawn(
            id,
            &mut self.rng,
            self.viewport,
            &self.difficulty,
            &self.tuning,
        );
        log::debug!(
            "Spawned orb {} at x={:.0} r={:.1} v={:.2}",
            id,
            orb.pos.x,
            orb.radius,
            orb.speed
        );
        self.orbs.push(orb);
        self.events.push(GameEvent::OrbSpawned { id });

        if self.difficulty.on_spawn_tick(&self.tuning) {
            self.events.push(GameEvent::LevelUp {
                level: self.difficulty.level,
            });
            self.events.push(GameEvent::Cue(Cue::Flash));
        }
    }

    /// Explosion burst at a popped orb
    pub fn spawn_burst(&mut self, pos: Vec2, color: NeonColor) {
        for _ in 0..self.tuning.burst_size {
            let particle = Particle::new(&mut self.rng, pos, color, &self.tuning);
            self.particles.push(particle);
        }
    }

    /// Random shake offset in `±SHAKE_MAGNITUDE` per axis
    pub(crate) fn shake_offset(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(-SHAKE_MAGNITUDE..=SHAKE_MAGNITUDE),
            self.rng.random_range(-SHAKE_MAGNITUDE..=SHAKE_MAGNITUDE),
        )
    }

    /// Independent coin flip with probability `chance`
    pub(crate) fn roll(&mut self, chance: f32) -> bool {
        self.rng.random::<f32>() < chance
    }
}
