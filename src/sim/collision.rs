//! Proximity tests between positioned entities
//!
//! Everything is a circle-circle distance check. Entity counts stay in the
//! tens, so callers scan collections in full without a broad phase.

use glam::Vec2;

use super::entity::{Bullet, Enemy, PowerUp};
use crate::consts::{POWERUP_COLLECT_RADIUS, SHIP_HIT_RADIUS};

/// Strict distance test: `|a - b| < radius`
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Bullet center inside the enemy's body
#[inline]
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    within_radius(bullet.pos, enemy.pos, enemy.size)
}

/// Ship close enough to pick up a power-up
#[inline]
pub fn ship_collects_powerup(ship: Vec2, powerup: &PowerUp) -> bool {
    within_radius(ship, powerup.pos, POWERUP_COLLECT_RADIUS)
}

/// Enemy touching the ship
#[inline]
pub fn ship_hits_enemy(ship: Vec2, enemy: &Enemy) -> bool {
    within_radius(ship, enemy.pos, SHIP_HIT_RADIUS)
}

/// Index of the first active enemy the bullet overlaps, in collection order
pub fn first_enemy_hit(bullet: &Bullet, enemies: &[Enemy]) -> Option<usize> {
    enemies
        .iter()
        .position(|enemy| enemy.active && bullet_hits_enemy(bullet, enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EnemyKind;

    fn bullet_at(pos: Vec2) -> Bullet {
        Bullet {
            pos,
            vel: Vec2::ZERO,
            active: true,
        }
    }

    #[test]
    fn test_within_radius_is_strict() {
        assert!(within_radius(Vec2::ZERO, Vec2::new(14.9, 0.0), 15.0));
        assert!(!within_radius(Vec2::ZERO, Vec2::new(15.0, 0.0), 15.0));
        assert!(!within_radius(Vec2::ZERO, Vec2::new(3.0, 4.0), 5.0));
    }

    #[test]
    fn test_bullet_uses_enemy_size() {
        let normal = Enemy::new(Vec2::new(100.0, 100.0), EnemyKind::Normal);
        let special = Enemy::new(Vec2::new(100.0, 100.0), EnemyKind::Special);
        let bullet = bullet_at(Vec2::new(120.0, 100.0));
        assert!(!bullet_hits_enemy(&bullet, &normal));
        assert!(bullet_hits_enemy(&bullet, &special));
    }

    #[test]
    fn test_ship_radii() {
        let ship = Vec2::new(600.0, 700.0);
        let near = PowerUp::new(Vec2::new(600.0, 671.0));
        let far = PowerUp::new(Vec2::new(600.0, 670.0));
        assert!(ship_collects_powerup(ship, &near));
        assert!(!ship_collects_powerup(ship, &far));

        let touching = Enemy::new(Vec2::new(639.0, 700.0), EnemyKind::Normal);
        let clear = Enemy::new(Vec2::new(640.0, 700.0), EnemyKind::Normal);
        assert!(ship_hits_enemy(ship, &touching));
        assert!(!ship_hits_enemy(ship, &clear));
    }

    #[test]
    fn test_first_enemy_hit_prefers_collection_order() {
        let mut enemies = vec![
            Enemy::new(Vec2::new(500.0, 100.0), EnemyKind::Normal),
            Enemy::new(Vec2::new(105.0, 100.0), EnemyKind::Special),
            Enemy::new(Vec2::new(100.0, 100.0), EnemyKind::Normal),
        ];
        let bullet = bullet_at(Vec2::new(100.0, 100.0));
        assert_eq!(first_enemy_hit(&bullet, &enemies), Some(1));

        enemies[1].active = false;
        assert_eq!(first_enemy_hit(&bullet, &enemies), Some(2));

        enemies[2].active = false;
        assert_eq!(first_enemy_hit(&bullet, &enemies), None);
    }
}
