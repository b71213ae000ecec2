//! Per-frame simulation step
//!
//! Order within a step matters:
//! 1. Slow-motion countdown and shield regeneration run on real `dt`
//! 2. Ship, corridor, spawners and entities run on `dt * time_scale`
//! 3. Collisions resolve only after every entity has moved, and bullet hits
//!    resolve before ship contact, so a kill can land on the same frame the
//!    enemy would have rammed the ship

use glam::Vec2;
use rand::Rng;

use super::collision::{first_enemy_hit, ship_collects_powerup, ship_hits_enemy};
use super::entity::{Color, DamageOutcome, Enemy, EnemyKind, PowerUp};
use super::state::{FrameEvent, Simulation};
use super::world::World;
use crate::consts::*;

impl<R: Rng> Simulation<R> {
    /// Advance the simulation by `dt` seconds of wall-clock time.
    ///
    /// `dt` is expected to be finite, non-negative and already capped by the
    /// caller; [`super::Session::step`] takes care of that.
    pub fn step(&mut self, dt: f32) {
        // Sampled before the countdown, so the frame that ends slow motion is still slowed
        let scaled_dt = dt * self.economy.slow_motion.time_scale;

        if self.economy.slow_motion.advance(dt) {
            log::info!("Slow motion ended");
            self.events.push(FrameEvent::SlowMotionEnded);
        }

        self.ship.advance(scaled_dt, &self.arena);
        self.economy.regenerate(dt);
        self.corridor
            .advance(CORRIDOR_SPEED * scaled_dt, self.arena.height);

        self.spawn(scaled_dt);
        self.world.update(scaled_dt, CORRIDOR_SPEED, &self.arena);

        self.collect_powerups();
        self.resolve_bullet_hits();
        self.resolve_ship_contacts();

        self.frame += 1;
        log::trace!(
            "frame {} dt={:.4} scale={} enemies={} bullets={} particles={}",
            self.frame,
            dt,
            self.economy.slow_motion.time_scale,
            self.world.enemies.len(),
            self.world.bullets.len(),
            self.world.particles.len()
        );
    }

    fn spawn(&mut self, scaled_dt: f32) {
        let due = self.spawner.advance(scaled_dt);

        if due.enemy {
            let x = self.spawn_x();
            let kind = if self.rng.random_bool(ENEMY_SPECIAL_CHANCE) {
                EnemyKind::Special
            } else {
                EnemyKind::Normal
            };
            log::debug!(
                "Spawned {kind:?} enemy at x={x:.0}, next in {:.2}s",
                self.spawner.enemy_interval
            );
            self.world.add_enemy(Enemy::new(Vec2::new(x, SPAWN_Y), kind));
            self.events.push(FrameEvent::EnemySpawned { kind });
        }

        if due.powerup {
            let x = self.spawn_x();
            log::debug!("Spawned power-up at x={x:.0}");
            self.world.add_powerup(PowerUp::new(Vec2::new(x, SPAWN_Y)));
            self.events.push(FrameEvent::PowerUpSpawned);
        }
    }

    fn spawn_x(&mut self) -> f32 {
        let lo = SPAWN_MARGIN_X;
        let hi = (self.arena.width - SPAWN_MARGIN_X).max(lo);
        self.rng.random_range(lo..=hi)
    }

    fn collect_powerups(&mut self) {
        let ship = self.ship.pos;
        // Deferred so particle spawning doesn't alias the power-up borrow
        let mut collected: Vec<Vec2> = Vec::new();

        for powerup in self.world.powerups.iter_mut().filter(|p| p.active) {
            if ship_collects_powerup(ship, powerup) {
                powerup.active = false;
                collected.push(powerup.pos);
            }
        }

        for pos in collected {
            self.economy.slow_motion.add_charge(CHARGE_POWERUP);
            self.events.push(FrameEvent::PowerUpCollected {
                charge: CHARGE_POWERUP,
            });
            self.world.spawn_explosion(pos, Color::Yellow, &mut self.rng);
        }

        self.world.powerups.retain(|p| p.active);
    }

    fn resolve_bullet_hits(&mut self) {
        let mut explosions: Vec<Vec2> = Vec::new();
        let World {
            bullets, enemies, ..
        } = &mut self.world;

        for bullet in bullets.iter_mut().filter(|b| b.active) {
            let Some(index) = first_enemy_hit(bullet, enemies) else {
                continue;
            };
            // One bullet, one enemy
            bullet.active = false;

            let enemy = &mut enemies[index];
            match enemy.take_damage() {
                DamageOutcome::Destroyed => {
                    let score = enemy.kind.score();
                    let charge = enemy.kind.charge_reward();
                    self.economy.award(score);
                    self.economy.slow_motion.add_charge(charge);
                    log::debug!("{:?} enemy destroyed (+{score})", enemy.kind);
                    self.events.push(FrameEvent::EnemyDestroyed {
                        kind: enemy.kind,
                        score,
                        charge,
                    });
                    explosions.push(enemy.pos);
                }
                DamageOutcome::Survived => {
                    self.events.push(FrameEvent::EnemyHit {
                        kind: enemy.kind,
                        health_left: enemy.health,
                    });
                }
            }
        }

        for pos in explosions {
            self.world.spawn_explosion(pos, Color::Orange, &mut self.rng);
        }
        self.world.sweep();
    }

    fn resolve_ship_contacts(&mut self) {
        let ship = self.ship.pos;
        let mut contacts: Vec<Vec2> = Vec::new();

        for enemy in self.world.enemies.iter_mut().filter(|e| e.active) {
            if ship_hits_enemy(ship, enemy) {
                enemy.active = false;
                contacts.push(enemy.pos);
            }
        }

        if contacts.is_empty() {
            return;
        }

        for pos in contacts {
            let shield = self.economy.take_damage(SHIELD_CONTACT_DAMAGE);
            log::debug!("Ship hit, shield at {shield:.0}");
            self.events.push(FrameEvent::ShipDamaged {
                damage: SHIELD_CONTACT_DAMAGE,
                shield,
            });
            self.world.spawn_explosion(pos, Color::Red, &mut self.rng);
        }
        self.world.enemies.retain(|e| e.active);

        if self.economy.is_depleted() {
            self.events.push(FrameEvent::ShieldDepleted);
        }
    }
}
