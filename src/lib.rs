//! Corridor Run - A fixed-camera rail shooter simulation core
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, economy, session)
//! - `config`: Arena bounds and frame pacing, loadable from JSON
//! - `error`: Error types for the outer API surface

pub mod config;
pub mod error;
pub mod sim;

pub use config::{Arena, SimConfig};
pub use error::{ConfigError, SessionError};
pub use sim::{FrameEvent, RenderSnapshot, Session, SessionPhase, Simulation};

/// Game balance constants
pub mod consts {
    /// Downward scroll rate of enemies, power-ups and corridor markers (units/s)
    pub const CORRIDOR_SPEED: f32 = 200.0;
    /// Number of recycled corridor markers
    pub const CORRIDOR_MARKERS: usize = 20;
    /// Vertical spacing of corridor markers at start
    pub const CORRIDOR_MARKER_SPACING: f32 = 50.0;
    /// Where a marker reappears after scrolling past the bottom
    pub const CORRIDOR_WRAP_Y: f32 = -50.0;

    /// Ship rests this far above the bottom edge
    pub const SHIP_BASE_OFFSET: f32 = 100.0;
    /// Horizontal amplitude of the ship path
    pub const SHIP_PATH_AMPLITUDE_X: f32 = 200.0;
    /// Vertical amplitude of the ship path
    pub const SHIP_PATH_AMPLITUDE_Y: f32 = 30.0;
    /// Path-time advances at this fraction of simulated time
    pub const SHIP_PATH_RATE: f32 = 0.5;
    /// Smoothing gain toward the path target (per second, frame-dependent)
    pub const SHIP_SMOOTHING: f32 = 3.0;
    /// Bullets leave from the ship nose
    pub const SHIP_MUZZLE_OFFSET: f32 = 20.0;

    pub const BULLET_SPEED: f32 = 800.0;

    pub const ENEMY_NORMAL_HEALTH: u8 = 1;
    pub const ENEMY_SPECIAL_HEALTH: u8 = 3;
    pub const ENEMY_NORMAL_SIZE: f32 = 15.0;
    pub const ENEMY_SPECIAL_SIZE: f32 = 25.0;
    pub const ENEMY_NORMAL_SIDE_SPEED: f32 = 100.0;
    pub const ENEMY_SPECIAL_SIDE_SPEED: f32 = 50.0;
    pub const ENEMY_HIT_FLASH: f32 = 0.2;
    pub const ENEMY_SPECIAL_CHANCE: f64 = 0.2;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 2.0;
    pub const ENEMY_SPAWN_INTERVAL_MIN: f32 = 0.8;
    pub const ENEMY_SPAWN_INTERVAL_STEP: f32 = 0.01;

    pub const POWERUP_SIZE: f32 = 12.0;
    pub const POWERUP_SPAWN_INTERVAL: f32 = 8.0;

    /// Entities spawn this far above the top edge
    pub const SPAWN_Y: f32 = -50.0;
    /// Horizontal spawn margin from either side
    pub const SPAWN_MARGIN_X: f32 = 50.0;
    /// Enemies and power-ups are dropped this far below the bottom edge
    pub const OFFSCREEN_MARGIN: f32 = 50.0;

    pub const POWERUP_COLLECT_RADIUS: f32 = 30.0;
    pub const SHIP_HIT_RADIUS: f32 = 40.0;

    pub const SCORE_NORMAL: u64 = 50;
    pub const SCORE_SPECIAL: u64 = 100;

    pub const MAX_SHIELD: f32 = 100.0;
    pub const SHIELD_REGEN_RATE: f32 = 20.0;
    pub const SHIELD_REGEN_DELAY: f32 = 2.0;
    pub const SHIELD_CONTACT_DAMAGE: f32 = 20.0;

    pub const MAX_CHARGE: f32 = 100.0;
    pub const CHARGE_POWERUP: f32 = 25.0;
    pub const CHARGE_SPECIAL_KILL: f32 = 15.0;
    pub const SLOW_MOTION_DURATION: f32 = 3.0;
    pub const SLOW_MOTION_SCALE: f32 = 0.3;

    pub const EXPLOSION_PARTICLES: usize = 15;
    pub const EXPLOSION_SPEED: f32 = 200.0;
    pub const EXPLOSION_LIFETIME_MIN: f32 = 0.5;
    pub const EXPLOSION_LIFETIME_MAX: f32 = 1.5;
}
