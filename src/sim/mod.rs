//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod input;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{has_exited_floor, point_hits_orb};
pub use difficulty::{Difficulty, DifficultyParams};
pub use input::resolve_hit;
pub use state::{Cue, GameEvent, GamePhase, GameState, NeonColor, Orb, Particle, Viewport};
pub use tick::tick;
