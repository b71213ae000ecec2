//! Entity collections
//!
//! One ordered `Vec` per entity type. Updates only flag entities inactive;
//! `sweep` compacts every collection afterwards so nothing is removed while
//! it is being iterated.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Bullet, Color, Enemy, Particle, PowerUp};
use crate::config::Arena;
use crate::consts::{
    EXPLOSION_LIFETIME_MAX, EXPLOSION_LIFETIME_MIN, EXPLOSION_PARTICLES, EXPLOSION_SPEED,
};

/// All live entities, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn add_powerup(&mut self, powerup: PowerUp) {
        self.powerups.push(powerup);
    }

    /// Emit a burst of particles with random velocity and lifetime
    pub fn spawn_explosion<R: Rng>(&mut self, pos: Vec2, color: Color, rng: &mut R) {
        self.particles.reserve(EXPLOSION_PARTICLES);
        for _ in 0..EXPLOSION_PARTICLES {
            let vel = Vec2::new(
                rng.random_range(-EXPLOSION_SPEED..=EXPLOSION_SPEED),
                rng.random_range(-EXPLOSION_SPEED..=EXPLOSION_SPEED),
            );
            let lifetime = rng.random_range(EXPLOSION_LIFETIME_MIN..=EXPLOSION_LIFETIME_MAX);
            self.particles.push(Particle::new(pos, vel, color, lifetime));
        }
    }

    /// Advance every entity by `dt`, then drop the ones that expired
    pub fn update(&mut self, dt: f32, corridor_speed: f32, arena: &Arena) {
        for bullet in &mut self.bullets {
            bullet.update(dt, arena);
        }
        for enemy in &mut self.enemies {
            enemy.update(dt, corridor_speed, arena);
        }
        for powerup in &mut self.powerups {
            powerup.update(dt, corridor_speed, arena);
        }
        for particle in &mut self.particles {
            particle.update(dt);
        }
        self.sweep();
    }

    /// Remove inactive entities, preserving the order of the rest
    pub fn sweep(&mut self) {
        self.bullets.retain(|b| b.active);
        self.enemies.retain(|e| e.active);
        self.powerups.retain(|p| p.active);
        self.particles.retain(|p| p.is_alive());
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.particles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
            && self.enemies.is_empty()
            && self.powerups.is_empty()
            && self.particles.is_empty()
    }
}
