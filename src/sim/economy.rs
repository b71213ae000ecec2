//! Score, shield and slow-motion resources
//!
//! Shield regeneration and the slow-motion countdown run on unscaled time,
//! so slowing the world never stretches the player's cooldowns.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Slow-motion charge and activation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlowMotion {
    /// Accumulated charge, in [0, MAX_CHARGE]
    pub charge: f32,
    pub active: bool,
    /// Seconds of slow motion left while active
    pub timer: f32,
    /// Multiplier applied to simulated time
    pub time_scale: f32,
}

impl Default for SlowMotion {
    fn default() -> Self {
        Self {
            charge: 0.0,
            active: false,
            timer: 0.0,
            time_scale: 1.0,
        }
    }
}

impl SlowMotion {
    pub fn add_charge(&mut self, amount: f32) {
        self.charge = (self.charge + amount).clamp(0.0, MAX_CHARGE);
    }

    /// Full charge. A full bar earned mid slow motion restarts the countdown.
    pub fn is_ready(&self) -> bool {
        self.charge >= MAX_CHARGE
    }

    /// Spend the full charge to start slow motion. Returns false if not ready.
    pub fn activate(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.active = true;
        self.timer = SLOW_MOTION_DURATION;
        self.charge = 0.0;
        self.time_scale = SLOW_MOTION_SCALE;
        true
    }

    /// Count down on unscaled time. Returns true on the step slow motion ends.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.active {
            self.time_scale = 1.0;
            return false;
        }
        self.timer -= dt;
        self.time_scale = SLOW_MOTION_SCALE;
        if self.timer <= 0.0 {
            self.active = false;
            self.timer = 0.0;
            self.time_scale = 1.0;
            return true;
        }
        false
    }
}

/// Per-run resources: score, shield, and the slow-motion controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economy {
    pub score: u64,
    /// Player health, in [0, MAX_SHIELD]
    pub shield: f32,
    /// Unscaled seconds since the run started
    pub clock: f64,
    /// `clock` value at the most recent shield damage
    pub last_damage_at: Option<f64>,
    pub slow_motion: SlowMotion,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            score: 0,
            shield: MAX_SHIELD,
            clock: 0.0,
            last_damage_at: None,
            slow_motion: SlowMotion::default(),
        }
    }
}

impl Economy {
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Advance the unscaled clock, regenerating shield once the damage
    /// cooldown has passed
    pub fn regenerate(&mut self, dt: f32) {
        self.clock += dt as f64;
        if self.regen_ready() {
            self.shield = (self.shield + SHIELD_REGEN_RATE * dt).min(MAX_SHIELD);
        }
    }

    pub fn regen_ready(&self) -> bool {
        match self.last_damage_at {
            Some(at) => self.clock - at >= SHIELD_REGEN_DELAY as f64,
            None => true,
        }
    }

    /// Apply shield damage and restart the regen cooldown. Returns the shield left.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        self.shield = (self.shield - amount).max(0.0);
        self.last_damage_at = Some(self.clock);
        self.shield
    }

    pub fn is_depleted(&self) -> bool {
        self.shield <= 0.0
    }
}
