//! Pointer hit resolution

use glam::Vec2;

use super::collision::point_hits_orb;
use super::state::{GameEvent, GameState};

/// Resolve a pointer-down at `point`.
///
/// Scans newest orb first and pops at most one orb. Returns the points awarded,
/// or `None` on a miss or when no run is active.
pub fn resolve_hit(state: &mut GameState, point: Vec2) -> Option<u64> {
    if !state.is_running() {
        return None;
    }

    let tolerance = state.tuning.hit_tolerance;
    let idx = state
        .orbs
        .iter()
        .rposition(|orb| point_hits_orb(point, orb, tolerance))?;

    let orb = state.orbs.remove(idx);
    state.spawn_burst(orb.pos, orb.color);

    let points = state.tuning.points_per_level * state.level() as u64;
    state.score += points;
    state.events.push(GameEvent::OrbPopped {
        id: orb.id,
        pos: orb.pos,
        points,
    });
    log::debug!("Popped orb {} for {} (score {})", orb.id, points, state.score);

    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{NeonColor, Orb, Viewport};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(7, Tuning::default(), Viewport::new(800.0, 600.0));
        state.start_game();
        state
    }

    fn push_orb(state: &mut GameState, x: f32, y: f32, radius: f32) -> u32 {
        let id = state.next_entity_id();
        state.orbs.push(Orb {
            id,
            pos: Vec2::new(x, y),
            radius,
            speed: 3.0,
            color: NeonColor::Amber,
            phase: 0.0,
        });
        id
    }

    #[test]
    fn test_hit_awards_points_and_bursts() {
        let mut state = running_state();
        push_orb(&mut state, 200.0, 200.0, 20.0);

        assert_eq!(resolve_hit(&mut state, Vec2::new(210.0, 205.0)), Some(10));
        assert_eq!(state.score, 10);
        assert!(state.orbs.is_empty());
        assert_eq!(state.particles.len(), 15);
        assert!(state.particles.iter().all(|p| p.color == NeonColor::Amber));
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut state = running_state();
        push_orb(&mut state, 200.0, 200.0, 20.0);

        assert_eq!(resolve_hit(&mut state, Vec2::new(400.0, 400.0)), None);
        assert_eq!(state.score, 0);
        assert_eq!(state.orbs.len(), 1);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_overlapping_orbs_pop_newest_only() {
        let mut state = running_state();
        let older = push_orb(&mut state, 200.0, 200.0, 20.0);
        let newer = push_orb(&mut state, 210.0, 200.0, 20.0);

        assert!(resolve_hit(&mut state, Vec2::new(205.0, 200.0)).is_some());
        assert_eq!(state.orbs.len(), 1);
        assert_eq!(state.orbs[0].id, older);
        assert!(state.events.iter().any(
            |e| matches!(e, GameEvent::OrbPopped { id, .. } if *id == newer)
        ));
    }

    #[test]
    fn test_ignored_when_not_running() {
        let mut state = GameState::new(7, Tuning::default(), Viewport::new(800.0, 600.0));
        push_orb(&mut state, 200.0, 200.0, 20.0);
        assert_eq!(resolve_hit(&mut state, Vec2::new(200.0, 200.0)), None);
        assert_eq!(state.orbs.len(), 1);
    }

    #[test]
    fn test_points_scale_with_level() {
        let mut state = running_state();
        for _ in 0..30 {
            state.difficulty.on_spawn_tick(&state.tuning);
        }
        assert_eq!(state.level(), 3);
        push_orb(&mut state, 100.0, 100.0, 20.0);
        assert_eq!(resolve_hit(&mut state, Vec2::new(100.0, 100.0)), Some(30));
    }

    proptest! {
        #[test]
        fn prop_hit_iff_within_tolerance(
            dx in -80.0f32..80.0,
            dy in -80.0f32..80.0,
            radius in 8.0f32..28.0,
        ) {
            let mut state = running_state();
            push_orb(&mut state, 400.0, 300.0, radius);
            let point = Vec2::new(400.0 + dx, 300.0 + dy);
            let expected = point.distance(Vec2::new(400.0, 300.0)) < radius + 30.0;
            let hit = resolve_hit(&mut state, point).is_some();
            prop_assert_eq!(hit, expected);
            prop_assert_eq!(state.orbs.is_empty(), expected);
        }

        #[test]
        fn prop_score_is_ten_per_level_per_hit(hits in 0u64..40) {
            let mut state = running_state();
            for _ in 0..hits {
                push_orb(&mut state, 100.0, 100.0, 20.0);
                resolve_hit(&mut state, Vec2::new(100.0, 100.0));
            }
            prop_assert_eq!(state.score, 10 * state.level() as u64 * hits);
        }
    }
}
