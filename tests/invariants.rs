use corridor_run::consts::*;
use corridor_run::sim::{Bullet, Enemy, EnemyKind, PowerUp};
use corridor_run::{Session, SimConfig};
use glam::Vec2;
use proptest::prelude::*;

/// One host frame: elapsed time plus whatever the player (or a test) did
#[derive(Debug, Clone)]
struct Frame {
    dt: f32,
    fire_at: Option<(f32, f32)>,
    slow_motion: bool,
    ram: bool,
    pickup: bool,
}

fn frame() -> impl Strategy<Value = Frame> {
    (
        0.0f32..0.2,
        prop::option::of((0.0f32..1200.0, 0.0f32..800.0)),
        any::<bool>(),
        prop::bool::weighted(0.05),
        prop::bool::weighted(0.2),
    )
        .prop_map(|(dt, fire_at, slow_motion, ram, pickup)| Frame {
            dt,
            fire_at,
            slow_motion,
            ram,
            pickup,
        })
}

proptest! {
    #[test]
    fn resources_stay_in_bounds(seed in any::<u64>(), frames in prop::collection::vec(frame(), 1..300)) {
        let mut s = Session::new(SimConfig { seed, ..SimConfig::default() });

        for f in &frames {
            let ship = s.simulation().ship.pos;
            if f.ram {
                s.simulation_mut().world.add_enemy(Enemy::new(ship, EnemyKind::Normal));
            }
            if f.pickup {
                s.simulation_mut().world.add_powerup(PowerUp::new(ship));
            }
            if let Some((x, y)) = f.fire_at {
                s.fire(x, y);
            }
            if f.slow_motion {
                s.request_slow_motion();
            }
            s.step(f.dt);

            let economy = &s.simulation().economy;
            prop_assert!((0.0..=MAX_SHIELD).contains(&economy.shield));
            prop_assert!((0.0..=MAX_CHARGE).contains(&economy.slow_motion.charge));
            let scale = economy.slow_motion.time_scale;
            prop_assert!(scale == 1.0 || scale == SLOW_MOTION_SCALE);

            for enemy in &s.simulation().world.enemies {
                prop_assert!(enemy.active);
                prop_assert!(enemy.health >= 1);
            }
            prop_assert!(s.simulation().world.bullets.iter().all(|b| b.active && b.vel.is_finite()));
        }
    }

    #[test]
    fn score_never_decreases(seed in any::<u64>(), dts in prop::collection::vec(0.0f32..0.1, 1..400)) {
        let mut s = Session::new(SimConfig { seed, ..SimConfig::default() });
        let mut last = 0;
        for dt in dts {
            s.fire(600.0, 0.0);
            s.step(dt);
            let score = s.simulation().economy.score;
            prop_assert!(score >= last);
            last = score;
        }
    }

    #[test]
    fn bullet_speed_is_fixed(ox in 0.0f32..1200.0, oy in 0.0f32..800.0, tx in 0.0f32..1200.0, ty in 0.0f32..800.0) {
        let bullet = Bullet::new(Vec2::new(ox, oy), Vec2::new(tx, ty));
        prop_assert!(bullet.vel.is_finite());
        prop_assert!((bullet.vel.length() - BULLET_SPEED).abs() < 0.5);
    }
}
