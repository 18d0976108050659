//! Draw-command generation
//!
//! Turns the simulation state into a flat list of primitives. Backends only
//! have to know how to fill a glowing circle and a full-screen rectangle.

use glam::Vec2;

use crate::consts::{ORB_CORE_RATIO, ORB_GLOW, PARTICLE_GLOW};
use crate::settings::Settings;
use crate::sim::GameState;

const WHITE: &str = "#ffffff";

/// A single primitive for the rendering backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled circle with an optional shadow glow
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
        alpha: f32,
        /// Shadow blur radius (0 = no glow)
        glow: f32,
        glow_color: &'static str,
    },
    /// Translucent full-screen fill
    Flash { color: &'static str, alpha: f32 },
}

/// Which optional layers to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOptions {
    pub particles: bool,
    pub glow: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            particles: true,
            glow: true,
        }
    }
}

impl From<&Settings> for SceneOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            particles: settings.particles,
            glow: settings.glow,
        }
    }
}

/// Build the frame. `flash` is the level-up flash opacity, if one is pending.
pub fn build(state: &GameState, flash: Option<f32>, options: SceneOptions) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.orbs.len() * 2 + state.particles.len() + 1);
    let glow_scale = if options.glow { 1.0 } else { 0.0 };

    if let Some(alpha) = flash {
        commands.push(DrawCommand::Flash {
            color: WHITE,
            alpha,
        });
    }

    for orb in state.orbs.iter().rev() {
        let pulse = orb.pulse();
        let color = orb.color.css();
        let glow = (ORB_GLOW + pulse) * glow_scale;
        commands.push(DrawCommand::Circle {
            center: orb.pos,
            radius: orb.radius + pulse / 2.0,
            color,
            alpha: 1.0,
            glow,
            glow_color: color,
        });
        // Inner white core
        commands.push(DrawCommand::Circle {
            center: orb.pos,
            radius: orb.radius * ORB_CORE_RATIO,
            color: WHITE,
            alpha: 1.0,
            glow,
            glow_color: color,
        });
    }

    if options.particles {
        for particle in state.particles.iter().rev() {
            let color = particle.color.css();
            commands.push(DrawCommand::Circle {
                center: particle.pos,
                radius: particle.size,
                color,
                alpha: particle.life.clamp(0.0, 1.0),
                glow: PARTICLE_GLOW * glow_scale,
                glow_color: color,
            });
        }
    }

    commands
}
