//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Entities only flag themselves inactive; collections sweep afterwards
//! - Randomness comes from an injected, seedable RNG
//! - Stable iteration order (insertion order)
//! - No rendering or input dependencies

pub mod collision;
pub mod economy;
pub mod entity;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{bullet_hits_enemy, first_enemy_hit, ship_collects_powerup, ship_hits_enemy};
pub use economy::{Economy, SlowMotion};
pub use entity::{Bullet, Color, DamageOutcome, Enemy, EnemyKind, Particle, PowerUp};
pub use session::{Session, SessionPhase};
pub use snapshot::{EnemyView, ParticleView, PowerUpView, RenderSnapshot};
pub use state::{Corridor, FrameEvent, Ship, Simulation, SpawnDue, Spawner};
pub use world::World;
