//! Session state machine: Playing and GameOver
//!
//! The session is the only thing a host talks to. It sanitizes frame time,
//! gates commands on the phase, and owns the reset rules.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::snapshot::RenderSnapshot;
use super::state::{FrameEvent, Simulation};
use crate::config::SimConfig;
use crate::error::SessionError;

/// Phase of a run. Slow motion is a sub-mode of `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Playing,
    GameOver,
}

/// A play session wrapping the simulation core
#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    config: SimConfig,
    phase: SessionPhase,
    sim: Simulation<R>,
}

impl Session<Pcg32> {
    /// Start a session seeded from `config.seed`
    pub fn new(config: SimConfig) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Start a session with a caller-supplied random source
    pub fn with_rng(config: SimConfig, rng: R) -> Self {
        let sim = Simulation::with_rng(config.arena(), rng);
        log::info!(
            "Session started: {}x{} arena, seed {}",
            config.width,
            config.height,
            config.seed
        );
        Self {
            config,
            phase: SessionPhase::Playing,
            sim,
        }
    }

    /// Clamp frame time to `[0, max_frame_dt]`; non-finite input counts as no time.
    /// An unusable `max_frame_dt` falls back to the default cap.
    pub fn sanitize_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() {
            return 0.0;
        }
        let max = self.config.max_frame_dt;
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            SimConfig::default().max_frame_dt
        };
        dt.clamp(0.0, max)
    }

    /// Advance one frame. Ignored after game over.
    pub fn step(&mut self, dt: f32) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let dt = self.sanitize_dt(dt);
        self.sim.step(dt);

        if self.sim.economy.is_depleted() {
            self.phase = SessionPhase::GameOver;
            log::info!(
                "Game over after {} frames, final score {}",
                self.sim.frame,
                self.sim.economy.score
            );
        }
    }

    /// Shoot toward a screen point. Ignored after game over.
    pub fn fire(&mut self, target_x: f32, target_y: f32) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        self.sim.fire(Vec2::new(target_x, target_y));
    }

    /// Try to start slow motion. Returns whether it started.
    pub fn request_slow_motion(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }
        self.sim.request_slow_motion()
    }

    /// Begin a fresh run. Only valid after game over; a running session is
    /// left untouched.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Playing {
            log::warn!("Ignoring reset while playing");
            return Err(SessionError::ResetWhilePlaying);
        }
        self.sim.reset();
        self.phase = SessionPhase::Playing;
        log::info!("Session reset");
        Ok(())
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    /// Direct access for hosts and tests that stage entities
    pub fn simulation_mut(&mut self) -> &mut Simulation<R> {
        &mut self.sim
    }

    /// Events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        self.sim.drain_events()
    }

    /// Copy of everything a renderer needs for this frame
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.sim, self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::{Enemy, EnemyKind};

    fn session() -> Session {
        Session::new(SimConfig::default())
    }

    fn ram_ship(session: &mut Session) {
        let pos = session.simulation().ship.pos;
        session
            .simulation_mut()
            .world
            .add_enemy(Enemy::new(pos, EnemyKind::Normal));
    }

    fn end_run(session: &mut Session) {
        while session.is_playing() {
            ram_ship(session);
            session.step(0.0);
        }
    }

    #[test]
    fn test_sanitize_dt() {
        let s = session();
        assert_eq!(s.sanitize_dt(0.016), 0.016);
        assert_eq!(s.sanitize_dt(5.0), 0.1);
        assert_eq!(s.sanitize_dt(-1.0), 0.0);
        assert_eq!(s.sanitize_dt(f32::NAN), 0.0);
        assert_eq!(s.sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_bad_frame_cap_falls_back_to_default() {
        let cap = SimConfig::default().max_frame_dt;
        for max_frame_dt in [-1.0, 0.0, f32::NAN, f32::INFINITY] {
            let mut s = Session::new(SimConfig {
                max_frame_dt,
                ..SimConfig::default()
            });
            assert_eq!(s.sanitize_dt(0.016), 0.016);
            assert_eq!(s.sanitize_dt(5.0), cap);
            s.step(0.016);
            assert_eq!(s.simulation().frame, 1);
        }
    }

    #[test]
    fn test_five_contacts_end_the_run() {
        let mut s = session();
        for _ in 0..4 {
            ram_ship(&mut s);
            s.step(0.0);
            assert!(s.is_playing());
        }
        ram_ship(&mut s);
        s.step(0.0);
        assert_eq!(s.phase(), SessionPhase::GameOver);
        assert_eq!(s.simulation().economy.shield, 0.0);
    }

    #[test]
    fn test_commands_ignored_after_game_over() {
        let mut s = session();
        end_run(&mut s);

        let frame = s.simulation().frame;
        s.step(0.016);
        assert_eq!(s.simulation().frame, frame);

        s.fire(600.0, 0.0);
        assert!(s.simulation().world.bullets.is_empty());

        s.simulation_mut().economy.slow_motion.add_charge(MAX_CHARGE);
        assert!(!s.request_slow_motion());
        assert!(!s.simulation().economy.slow_motion.active);
    }

    #[test]
    fn test_reset_rejected_while_playing() {
        let mut s = session();
        s.step(0.016);
        s.fire(600.0, 0.0);
        assert_eq!(s.reset(), Err(SessionError::ResetWhilePlaying));
        assert_eq!(s.simulation().world.bullets.len(), 1);
        assert_eq!(s.simulation().frame, 1);
    }

    #[test]
    fn test_reset_clears_run() {
        let mut s = session();
        s.simulation_mut().economy.award(500);
        s.simulation_mut().economy.slow_motion.add_charge(40.0);
        for _ in 0..200 {
            s.step(0.05);
        }
        s.fire(600.0, 0.0);
        end_run(&mut s);

        assert!(s.reset().is_ok());
        assert!(s.is_playing());
        let sim = s.simulation();
        assert_eq!(sim.economy.score, 0);
        assert_eq!(sim.economy.shield, MAX_SHIELD);
        assert_eq!(sim.economy.slow_motion.charge, 0.0);
        assert_eq!(sim.economy.slow_motion.time_scale, 1.0);
        assert_eq!(sim.ship.path_time, 0.0);
        assert_eq!(sim.spawner.enemy_interval, ENEMY_SPAWN_INTERVAL);
        assert_eq!(sim.spawner.enemy_timer, 0.0);
        assert_eq!(sim.spawner.powerup_timer, 0.0);
        assert!(sim.world.is_empty());
    }

    #[test]
    fn test_snapshot_reflects_phase() {
        let mut s = session();
        assert_eq!(s.snapshot().phase, SessionPhase::Playing);
        end_run(&mut s);
        let snap = s.snapshot();
        assert_eq!(snap.phase, SessionPhase::GameOver);
        assert_eq!(snap.shield, 0.0);
    }
}
