//! Host-facing game loop
//!
//! Wraps the simulation with frame timing, best-score persistence and the
//! visual cues. The host calls `frame` once per display refresh and keeps
//! scheduling only while it returns true.

use glam::Vec2;

use crate::best_score::BestScore;
use crate::consts::FLASH_ALPHA;
use crate::hud::HudSnapshot;
use crate::persistence::KeyValueStore;
use crate::platform::FrameClock;
use crate::renderer::scene::{self, DrawCommand, SceneOptions};
use crate::settings::Settings;
use crate::sim::{Cue, GameEvent, GameState, Viewport, resolve_hit, tick};
use crate::tuning::Tuning;

/// Counters for the current run, fed by simulation events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub orbs_spawned: u32,
    pub orbs_popped: u32,
    pub lives_lost: u32,
    pub level_ups: u32,
}

/// One game instance: simulation plus its collaborators
pub struct Game<S: KeyValueStore> {
    pub state: GameState,
    store: S,
    settings: Settings,
    clock: FrameClock,
    stats: RunStats,
    /// Score, lives, level or phase changed since the HUD was last drawn
    hud_dirty: bool,
    /// Flash opacity waiting for the next drawn frame
    pending_flash: Option<f32>,
    /// Shake offset waiting for the host to apply
    pending_shake: Option<Vec2>,
}

impl<S: KeyValueStore> Game<S> {
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport, settings: Settings, store: S) -> Self {
        let mut state = GameState::new(seed, tuning, viewport);
        state.best = BestScore::load(&store);
        log::info!(
            "Game initialized with seed {} ({}x{})",
            seed,
            viewport.width,
            viewport.height
        );
        Self {
            state,
            store,
            settings,
            clock: FrameClock::new(),
            stats: RunStats::default(),
            hud_dirty: true,
            pending_flash: None,
            pending_shake: None,
        }
    }

    /// Start (or restart) a run at `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.state.start_game();
        self.clock.reset(now_ms);
        self.pending_flash = None;
        self.pending_shake = None;
        self.handle_events();
    }

    /// Run one frame. Returns true if the host should schedule another.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let elapsed_ms = self.clock.delta_ms(now_ms);
        tick(&mut self.state, elapsed_ms);
        self.handle_events();
        self.state.is_running()
    }

    /// Pointer/touch down in canvas coordinates. Returns true on a hit.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let hit = resolve_hit(&mut self.state, Vec2::new(x, y)).is_some();
        self.handle_events();
        hit
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.viewport = Viewport::new(width, height);
        log::debug!("Viewport resized to {}x{}", width, height);
    }

    /// Draw commands for the current state (consumes a pending flash)
    pub fn scene(&mut self) -> Vec<DrawCommand> {
        let flash = self.pending_flash.take();
        scene::build(&self.state, flash, SceneOptions::from(&self.settings))
    }

    /// Shake offset to apply now, if an orb just escaped
    pub fn take_shake(&mut self) -> Option<Vec2> {
        self.pending_shake.take()
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::from_state(&self.state)
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// True once after any HUD-visible change
    pub fn take_hud_dirty(&mut self) -> bool {
        std::mem::take(&mut self.hud_dirty)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => {
                    self.stats = RunStats::default();
                    self.hud_dirty = true;
                }
                GameEvent::OrbSpawned { .. } => self.stats.orbs_spawned += 1,
                GameEvent::OrbPopped { id, points, .. } => {
                    log::debug!("Popped orb {} for {} points", id, points);
                    self.stats.orbs_popped += 1;
                    self.hud_dirty = true;
                }
                GameEvent::LifeLost { .. } => {
                    self.stats.lives_lost += 1;
                    self.hud_dirty = true;
                }
                GameEvent::LevelUp { level } => {
                    log::debug!("Reached level {} after {} spawns", level, self.stats.orbs_spawned);
                    self.stats.level_ups += 1;
                    self.hud_dirty = true;
                }
                GameEvent::GameOver {
                    score,
                    best,
                    new_best,
                } => {
                    log::info!(
                        "Run over: score {} (best {}), {} popped, {} spawned",
                        score,
                        best,
                        self.stats.orbs_popped,
                        self.stats.orbs_spawned
                    );
                    if new_best {
                        self.state.best.save(&mut self.store);
                    }
                    self.hud_dirty = true;
                }
                GameEvent::Cue(Cue::Shake { offset }) => {
                    if self.settings.effective_screen_shake() {
                        self.pending_shake = Some(offset);
                    }
                }
                GameEvent::Cue(Cue::Flash) => {
                    if self.settings.effective_level_flash() {
                        self.pending_flash = Some(FLASH_ALPHA);
                    }
                }
            }
        }
    }
}
