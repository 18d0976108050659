//! Values for the score/lives/level display and the game-over screen

use crate::sim::{GamePhase, GameState};

const HEART: &str = "\u{2764}";

/// Everything the DOM overlay shows, computed from the state on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub best: u64,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            lives: state.lives,
            level: state.level(),
            best: state.best.value(),
        }
    }

    /// One heart per remaining life
    pub fn hearts(&self) -> String {
        HEART.repeat(self.lives as usize)
    }

    /// Last life: the lives display pulses red
    pub fn low_lives(&self) -> bool {
        self.lives == 1
    }

    pub fn final_score_text(&self) -> String {
        format!("SCORE: {}", self.score)
    }

    pub fn best_score_text(&self) -> String {
        format!("BEST: {}", self.best)
    }

    pub fn show_start_screen(&self) -> bool {
        self.phase == GamePhase::Idle
    }

    pub fn show_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
