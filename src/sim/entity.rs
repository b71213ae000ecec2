//! Entity types and their per-frame lifecycle rules
//!
//! Entities never remove themselves: `update` clears the `active` flag and the
//! owning collection sweeps inactive entries afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Arena;
use crate::consts::*;

/// Abstract palette for effects (the renderer maps these to pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Orange,
    Yellow,
    Red,
}

impl Color {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Orange => [255, 165, 0],
            Color::Yellow => [255, 255, 0],
            Color::Red => [255, 0, 0],
        }
    }
}

/// A short-lived explosion fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Seconds remaining
    pub lifetime: f32,
    /// Lifetime at creation, for the fade ratio
    pub max_lifetime: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Color, lifetime: f32) -> Self {
        Self {
            pos,
            vel,
            color,
            lifetime,
            max_lifetime: lifetime,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Remaining life as a fraction of the original, in [0, 1]
    pub fn fade(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }

    /// Draw radius, shrinking from 4 to 1 as the particle fades
    pub fn render_size(&self) -> f32 {
        (4.0 * self.fade()).max(1.0)
    }
}

/// A player shot travelling in a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Fixed at creation
    pub vel: Vec2,
    pub active: bool,
}

impl Bullet {
    /// Aim from `origin` toward `target`; a target on the origin fires straight up
    pub fn new(origin: Vec2, target: Vec2) -> Self {
        let dir = (target - origin).try_normalize().unwrap_or(Vec2::NEG_Y);
        Self {
            pos: origin,
            vel: dir * BULLET_SPEED,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32, arena: &Arena) {
        if !self.active {
            return;
        }
        self.pos += self.vel * dt;
        if !arena.contains(self.pos.x, self.pos.y) {
            self.active = false;
        }
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    /// Tougher, slower, worth more and grants slow-motion charge
    Special,
}

impl EnemyKind {
    pub fn health(self) -> u8 {
        match self {
            EnemyKind::Normal => ENEMY_NORMAL_HEALTH,
            EnemyKind::Special => ENEMY_SPECIAL_HEALTH,
        }
    }

    pub fn size(self) -> f32 {
        match self {
            EnemyKind::Normal => ENEMY_NORMAL_SIZE,
            EnemyKind::Special => ENEMY_SPECIAL_SIZE,
        }
    }

    /// Amplitude factor of the lateral weave
    pub fn side_speed(self) -> f32 {
        match self {
            EnemyKind::Normal => ENEMY_NORMAL_SIDE_SPEED,
            EnemyKind::Special => ENEMY_SPECIAL_SIDE_SPEED,
        }
    }

    pub fn score(self) -> u64 {
        match self {
            EnemyKind::Normal => SCORE_NORMAL,
            EnemyKind::Special => SCORE_SPECIAL,
        }
    }

    /// Slow-motion charge granted on destruction
    pub fn charge_reward(self) -> f32 {
        match self {
            EnemyKind::Normal => 0.0,
            EnemyKind::Special => CHARGE_SPECIAL_KILL,
        }
    }
}

/// Result of a single hit on an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Destroyed,
    Survived,
}

/// An enemy drifting down the corridor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub health: u8,
    pub max_health: u8,
    pub size: f32,
    /// Drives the lateral sinusoid
    pub move_timer: f32,
    /// Seconds of white flash left after a hit
    pub hit_flash: f32,
    pub active: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, kind: EnemyKind) -> Self {
        let health = kind.health();
        Self {
            pos,
            kind,
            health,
            max_health: health,
            size: kind.size(),
            move_timer: 0.0,
            hit_flash: 0.0,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32, corridor_speed: f32, arena: &Arena) {
        if !self.active {
            return;
        }
        self.pos.y += corridor_speed * dt;

        self.move_timer += dt;
        self.pos.x += (self.move_timer * 2.0).sin() * self.kind.side_speed() * dt * 0.5;
        self.pos.x = self.pos.x.max(self.size).min(arena.width - self.size);

        if self.pos.y > arena.height + OFFSCREEN_MARGIN {
            self.active = false;
        }

        if self.hit_flash > 0.0 {
            self.hit_flash = (self.hit_flash - dt).max(0.0);
        }
    }

    pub fn take_damage(&mut self) -> DamageOutcome {
        self.health = self.health.saturating_sub(1);
        self.hit_flash = ENEMY_HIT_FLASH;
        if self.health == 0 {
            self.active = false;
            DamageOutcome::Destroyed
        } else {
            DamageOutcome::Survived
        }
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }

    pub fn is_flashing(&self) -> bool {
        self.hit_flash > 0.0
    }
}

/// A charge pickup drifting down the corridor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: f32,
    pub pulse_timer: f32,
    pub active: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: POWERUP_SIZE,
            pulse_timer: 0.0,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32, corridor_speed: f32, arena: &Arena) {
        if !self.active {
            return;
        }
        self.pos.y += corridor_speed * dt;
        self.pulse_timer += dt;

        if self.pos.y > arena.height + OFFSCREEN_MARGIN {
            self.active = false;
        }
    }

    /// Size multiplier for the pulsing animation, in [0.4, 1.0]
    pub fn pulse_scale(&self) -> f32 {
        (self.pulse_timer * 8.0).sin() * 0.3 + 0.7
    }
}
