//! Session transitions: Idle/GameOver -> Running -> GameOver

use super::state::{GameEvent, GamePhase, GameState};

impl GameState {
    /// Begin a fresh run. Same effect from Idle and from GameOver.
    pub fn start_game(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.difficulty.reset(&self.tuning);
        self.orbs.clear();
        self.particles.clear();
        self.spawn_timer_ms = 0.0;
        self.frame = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!("Run started (best {})", self.best.value());
    }

    /// End the run. Only the first call per run has any effect.
    pub(crate) fn end_game(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        let new_best = self.best.record(self.score);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            best: self.best.value(),
            new_best,
        });
        if new_best {
            log::info!("Game over - new best score {}!", self.score);
        } else {
            log::info!(
                "Game over - score {} (best {})",
                self.score,
                self.best.value()
            );
        }
    }
}
