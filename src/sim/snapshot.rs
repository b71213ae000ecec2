//! Read-only frame data for the renderer and HUD

use glam::Vec2;
use serde::Serialize;

use super::entity::{Color, EnemyKind};
use super::session::SessionPhase;
use super::state::Simulation;
use crate::consts::{MAX_CHARGE, MAX_SHIELD};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub size: f32,
    pub health_ratio: f32,
    /// Draw the white hit flash this frame
    pub flashing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUpView {
    pub pos: Vec2,
    /// Base size times the pulse factor
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub color: Color,
    pub rgb: [u8; 3],
    /// Opacity, 1 when fresh and 0 when expired
    pub fade: f32,
    pub size: f32,
}

/// Everything visible in one frame, copied out of the simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: SessionPhase,
    pub frame: u64,
    pub ship: Vec2,
    pub score: u64,
    pub shield: f32,
    pub max_shield: f32,
    pub charge: f32,
    pub max_charge: f32,
    pub slow_motion_active: bool,
    pub slow_motion_ready: bool,
    pub time_scale: f32,
    pub corridor: Vec<f32>,
    pub bullets: Vec<Vec2>,
    pub enemies: Vec<EnemyView>,
    pub powerups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
}

impl RenderSnapshot {
    pub fn capture<R>(sim: &Simulation<R>, phase: SessionPhase) -> Self {
        let world = &sim.world;
        let slow_motion = &sim.economy.slow_motion;
        Self {
            phase,
            frame: sim.frame,
            ship: sim.ship.pos,
            score: sim.economy.score,
            shield: sim.economy.shield,
            max_shield: MAX_SHIELD,
            charge: slow_motion.charge,
            max_charge: MAX_CHARGE,
            slow_motion_active: slow_motion.active,
            slow_motion_ready: slow_motion.is_ready(),
            time_scale: slow_motion.time_scale,
            corridor: sim.corridor.markers.clone(),
            bullets: world.bullets.iter().map(|b| b.pos).collect(),
            enemies: world
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    kind: e.kind,
                    size: e.size,
                    health_ratio: e.health_ratio(),
                    flashing: e.is_flashing(),
                })
                .collect(),
            powerups: world
                .powerups
                .iter()
                .map(|p| PowerUpView {
                    pos: p.pos,
                    size: p.size * p.pulse_scale(),
                })
                .collect(),
            particles: world
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    color: p.color,
                    rgb: p.color.rgb(),
                    fade: p.fade(),
                    size: p.render_size(),
                })
                .collect(),
        }
    }
}
