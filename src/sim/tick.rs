//! Per-frame simulation step
//!
//! Order within a frame: spawning, then orbs (newest first), then particles.

use super::collision::has_exited_floor;
use super::state::{Cue, GameEvent, GameState};

/// Advance the game by one frame that took `elapsed_ms`
pub fn tick(state: &mut GameState, elapsed_ms: f32) {
    if !state.is_running() {
        return;
    }
    state.frame += 1;

    update_spawning(state, elapsed_ms);
    update_orbs(state);
    update_particles(state);
}

fn update_spawning(state: &mut GameState, elapsed_ms: f32) {
    state.spawn_timer_ms += elapsed_ms.max(0.0);
    if state.spawn_timer_ms <= state.difficulty.params.spawn_interval_ms {
        return;
    }

    state.spawn_orb();
    // The first spawn's tick may have levelled up; the flip uses whatever is current now
    let chance = state.difficulty.params.multi_spawn_chance;
    if state.roll(chance) {
        state.spawn_orb();
    }
    state.spawn_timer_ms = 0.0;
}

fn update_orbs(state: &mut GameState) {
    let floor = state.viewport.height;
    let pulse_step = state.tuning.pulse_step;

    for i in (0..state.orbs.len()).rev() {
        state.orbs[i].update(pulse_step);
        if !has_exited_floor(&state.orbs[i], floor) {
            continue;
        }

        let orb = state.orbs.remove(i);
        state.lives = state.lives.saturating_sub(1);
        log::debug!("Orb {} escaped, {} lives left", orb.id, state.lives);

        let offset = state.shake_offset();
        state.events.push(GameEvent::LifeLost { lives: state.lives });
        state.events.push(GameEvent::Cue(Cue::Shake { offset }));

        if state.lives == 0 {
            state.end_game();
            break;
        }
    }
}

fn update_particles(state: &mut GameState) {
    for particle in state.particles.iter_mut() {
        particle.update();
    }
    state.particles.retain(|p| !p.is_dead());
}
