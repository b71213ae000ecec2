//! Simulation state
//!
//! Everything one run needs lives on [`Simulation`]: no ambient timers, no
//! globals. The per-frame pipeline is in `tick.rs`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::economy::Economy;
use super::entity::{Bullet, EnemyKind};
use super::world::World;
use crate::config::Arena;
use crate::consts::*;

/// The player's ship, flown along a fixed path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Progress along the path curve
    pub path_time: f32,
}

impl Ship {
    pub fn new(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new((arena.width / 2.0).floor(), arena.height - SHIP_BASE_OFFSET),
            path_time: 0.0,
        }
    }

    /// Point on the weaving path for the current path time
    pub fn path_target(&self, arena: &Arena) -> Vec2 {
        Vec2::new(
            arena.width / 2.0 + self.path_time.sin() * SHIP_PATH_AMPLITUDE_X,
            arena.height - SHIP_BASE_OFFSET
                + (self.path_time * 0.7).sin() * SHIP_PATH_AMPLITUDE_Y,
        )
    }

    /// Step toward the path target.
    ///
    /// The approach is linear in `dt` (`pos += (target - pos) * dt * k`), so
    /// larger frames close more of the gap. Callers cap `dt` to keep
    /// `dt * k` below 1.
    pub fn advance(&mut self, dt: f32, arena: &Arena) {
        self.path_time += dt * SHIP_PATH_RATE;
        let target = self.path_target(arena);
        self.pos += (target - self.pos) * dt * SHIP_SMOOTHING;
    }

    /// Where bullets leave the ship
    pub fn muzzle(&self) -> Vec2 {
        self.pos - Vec2::new(0.0, SHIP_MUZZLE_OFFSET)
    }
}

/// Scrolling floor markers, recycled when they pass the bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub markers: Vec<f32>,
}

impl Default for Corridor {
    fn default() -> Self {
        Self {
            markers: (0..CORRIDOR_MARKERS)
                .map(|i| i as f32 * CORRIDOR_MARKER_SPACING)
                .collect(),
        }
    }
}

impl Corridor {
    pub fn advance(&mut self, distance: f32, height: f32) {
        for y in &mut self.markers {
            *y += distance;
            if *y > height {
                *y = CORRIDOR_WRAP_Y;
            }
        }
    }
}

/// Timed spawners for enemies and power-ups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    pub enemy_timer: f32,
    /// Shrinks after every enemy spawn, down to a floor
    pub enemy_interval: f32,
    pub powerup_timer: f32,
    pub powerup_interval: f32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            enemy_timer: 0.0,
            enemy_interval: ENEMY_SPAWN_INTERVAL,
            powerup_timer: 0.0,
            powerup_interval: POWERUP_SPAWN_INTERVAL,
        }
    }
}

/// Which spawners fired this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnDue {
    pub enemy: bool,
    pub powerup: bool,
}

impl Spawner {
    pub fn advance(&mut self, dt: f32) -> SpawnDue {
        let mut due = SpawnDue::default();

        self.enemy_timer += dt;
        if self.enemy_timer >= self.enemy_interval {
            self.enemy_timer = 0.0;
            self.enemy_interval =
                (self.enemy_interval - ENEMY_SPAWN_INTERVAL_STEP).max(ENEMY_SPAWN_INTERVAL_MIN);
            due.enemy = true;
        }

        self.powerup_timer += dt;
        if self.powerup_timer >= self.powerup_interval {
            self.powerup_timer = 0.0;
            due.powerup = true;
        }

        due
    }
}

/// Something that happened during a frame, for audio/HUD feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameEvent {
    EnemySpawned { kind: EnemyKind },
    PowerUpSpawned,
    /// Hit but not destroyed
    EnemyHit { kind: EnemyKind, health_left: u8 },
    EnemyDestroyed { kind: EnemyKind, score: u64, charge: f32 },
    PowerUpCollected { charge: f32 },
    ShipDamaged { damage: f32, shield: f32 },
    ShieldDepleted,
    SlowMotionStarted,
    SlowMotionEnded,
}

/// The simulation core: entities, resources, and the random source
#[derive(Debug, Clone)]
pub struct Simulation<R = Pcg32> {
    pub arena: Arena,
    pub ship: Ship,
    pub world: World,
    pub economy: Economy,
    pub corridor: Corridor,
    pub spawner: Spawner,
    /// Steps taken since the last reset
    pub frame: u64,
    pub(crate) rng: R,
    pub(crate) events: Vec<FrameEvent>,
}

impl Simulation<Pcg32> {
    /// Create a simulation with a seeded PCG random source
    pub fn new(arena: Arena, seed: u64) -> Self {
        Self::with_rng(arena, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(arena: Arena, rng: R) -> Self {
        Self {
            arena,
            ship: Ship::new(&arena),
            world: World::new(),
            economy: Economy::default(),
            corridor: Corridor::default(),
            spawner: Spawner::default(),
            frame: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Fire a bullet from the ship's nose toward a screen point
    pub fn fire(&mut self, target: Vec2) {
        let bullet = Bullet::new(self.ship.muzzle(), target);
        log::trace!("Bullet fired toward {target}");
        self.world.add_bullet(bullet);
    }

    /// Try to start slow motion. No-op unless the charge is full.
    pub fn request_slow_motion(&mut self) -> bool {
        let started = self.economy.slow_motion.activate();
        if started {
            log::info!("Slow motion engaged");
            self.events.push(FrameEvent::SlowMotionStarted);
        }
        started
    }

    /// Restore the start-of-run state. The random stream continues.
    pub fn reset(&mut self) {
        self.ship = Ship::new(&self.arena);
        self.world.clear();
        self.economy = Economy::default();
        self.corridor = Corridor::default();
        self.spawner = Spawner::default();
        self.frame = 0;
        self.events.clear();
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[FrameEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(1200.0, 800.0)
    }

    #[test]
    fn test_ship_starts_at_base() {
        let ship = Ship::new(&Arena::new(1201.0, 800.0));
        assert_eq!(ship.pos, Vec2::new(600.0, 700.0));
        assert_eq!(ship.muzzle(), Vec2::new(600.0, 680.0));
    }

    #[test]
    fn test_ship_approach_is_frame_dependent() {
        let arena = arena();
        let mut ship = Ship::new(&arena);
        ship.pos = Vec2::new(500.0, 700.0);
        ship.advance(0.1, &arena);

        let path_time = 0.05f32;
        let target = Vec2::new(
            600.0 + path_time.sin() * 200.0,
            700.0 + (path_time * 0.7).sin() * 30.0,
        );
        let expected = Vec2::new(500.0, 700.0) + (target - Vec2::new(500.0, 700.0)) * 0.3;
        assert!((ship.path_time - path_time).abs() < 1e-6);
        assert!((ship.pos - expected).length() < 1e-3);
    }

    #[test]
    fn test_ship_idle_at_zero_dt() {
        let arena = arena();
        let mut ship = Ship::new(&arena);
        let before = ship.clone();
        ship.advance(0.0, &arena);
        assert_eq!(ship, before);
    }

    #[test]
    fn test_corridor_wraps_markers() {
        let mut corridor = Corridor::default();
        assert_eq!(corridor.markers.len(), CORRIDOR_MARKERS);
        assert_eq!(corridor.markers[19], 950.0);

        corridor.advance(10.0, 800.0);
        assert_eq!(corridor.markers[0], 10.0);
        assert_eq!(corridor.markers[15], 760.0);
        assert_eq!(corridor.markers[16], CORRIDOR_WRAP_Y);
        assert_eq!(corridor.markers[19], CORRIDOR_WRAP_Y);
    }

    #[test]
    fn test_enemy_interval_shrinks_to_floor() {
        let mut spawner = Spawner::default();
        assert!(!spawner.advance(1.9).enemy);
        let due = spawner.advance(0.2);
        assert!(due.enemy);
        assert_eq!(spawner.enemy_timer, 0.0);
        assert!((spawner.enemy_interval - 1.99).abs() < 1e-6);

        for _ in 0..500 {
            spawner.advance(spawner.enemy_interval);
        }
        assert_eq!(spawner.enemy_interval, ENEMY_SPAWN_INTERVAL_MIN);
    }

    #[test]
    fn test_powerup_interval_fixed() {
        let mut spawner = Spawner::default();
        let mut spawned = 0;
        for _ in 0..170 {
            if spawner.advance(0.1).powerup {
                spawned += 1;
            }
        }
        assert_eq!(spawned, 2);
        assert_eq!(spawner.powerup_interval, POWERUP_SPAWN_INTERVAL);
    }

    #[test]
    fn test_fire_uses_muzzle() {
        let mut sim = Simulation::new(arena(), 1);
        sim.fire(Vec2::new(600.0, 0.0));
        assert_eq!(sim.world.bullets.len(), 1);
        assert_eq!(sim.world.bullets[0].pos, sim.ship.muzzle());
        assert!(sim.world.bullets[0].vel.y < 0.0);
    }

    #[test]
    fn test_request_slow_motion_records_event() {
        let mut sim = Simulation::new(arena(), 1);
        assert!(!sim.request_slow_motion());
        assert!(sim.events().is_empty());

        sim.economy.slow_motion.add_charge(MAX_CHARGE);
        assert!(sim.request_slow_motion());
        assert_eq!(sim.drain_events(), vec![FrameEvent::SlowMotionStarted]);
        assert!(sim.events().is_empty());
    }
}
