//! Hit and boundary tests
//!
//! Orbs are circles; the pointer is a point with extra slack around it.

use glam::Vec2;

use super::state::Orb;

/// True if `point` is strictly within `orb.radius + tolerance` of the center
#[inline]
pub fn point_hits_orb(point: Vec2, orb: &Orb, tolerance: f32) -> bool {
    point.distance(orb.pos) < orb.radius + tolerance
}

/// True once the orb's top edge is below `floor`
#[inline]
pub fn has_exited_floor(orb: &Orb, floor: f32) -> bool {
    orb.pos.y > floor + orb.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::NeonColor;

    fn orb_at(x: f32, y: f32, radius: f32) -> Orb {
        Orb {
            id: 1,
            pos: Vec2::new(x, y),
            radius,
            speed: 3.0,
            color: NeonColor::Mint,
            phase: 0.0,
        }
    }

    #[test]
    fn test_hit_inside_tolerance() {
        let orb = orb_at(100.0, 100.0, 20.0);
        assert!(point_hits_orb(Vec2::new(100.0, 100.0), &orb, 30.0));
        assert!(point_hits_orb(Vec2::new(149.0, 100.0), &orb, 30.0));
    }

    #[test]
    fn test_boundary_is_a_miss() {
        let orb = orb_at(100.0, 100.0, 20.0);
        // Exactly radius + tolerance away
        assert!(!point_hits_orb(Vec2::new(150.0, 100.0), &orb, 30.0));
        assert!(!point_hits_orb(Vec2::new(130.0, 140.0), &orb, 30.0));
    }

    #[test]
    fn test_exit_needs_whole_orb_below_floor() {
        let floor = 600.0;
        assert!(!has_exited_floor(&orb_at(0.0, 610.0, 20.0), floor));
        assert!(!has_exited_floor(&orb_at(0.0, 620.0, 20.0), floor));
        assert!(has_exited_floor(&orb_at(0.0, 620.5, 20.0), floor));
    }
}
