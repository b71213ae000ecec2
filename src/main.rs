//! Corridor Run headless runner
//!
//! Drives a session at the configured frame rate with a simple autopilot and
//! logs what happens. Usage: `corridor-run [config.json] [frames]`

use std::process::ExitCode;

use corridor_run::sim::FrameEvent;
use corridor_run::{Session, SessionPhase, SimConfig};

/// Frames to run when none are given (one minute at 60 FPS)
const DEFAULT_FRAMES: u64 = 3600;
/// Autopilot fires every this many frames
const FIRE_EVERY: u64 = 6;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("invalid frame count: {e}");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_FRAMES,
    };

    log::info!("Corridor Run (headless) running {frames} frames");
    let dt = config.frame_dt();
    let mut session = Session::new(config);
    let mut runs = 1u32;
    let mut kills = 0u32;
    let mut best = 0u64;

    for frame in 0..frames {
        if session.phase() == SessionPhase::GameOver {
            best = best.max(session.simulation().economy.score);
            if session.reset().is_ok() {
                runs += 1;
            }
        }

        autopilot(&mut session, frame);
        session.step(dt);

        for event in session.drain_events() {
            match event {
                FrameEvent::EnemyDestroyed { .. } => kills += 1,
                FrameEvent::ShieldDepleted => {
                    log::info!("Run {runs} ended at score {}", session.simulation().economy.score)
                }
                _ => {}
            }
        }
    }

    let snap = session.snapshot();
    best = best.max(snap.score);
    log::info!(
        "Done: {runs} run(s), {kills} kills, best score {best}, shield {:.0}, charge {:.0}",
        snap.shield,
        snap.charge
    );
    ExitCode::SUCCESS
}

/// Aim at the lowest enemy on screen and spend charge as soon as it is full
fn autopilot(session: &mut Session, frame: u64) {
    if session.simulation().economy.slow_motion.is_ready() {
        session.request_slow_motion();
    }
    if !frame.is_multiple_of(FIRE_EVERY) {
        return;
    }
    let target = session
        .simulation()
        .world
        .enemies
        .iter()
        .filter(|e| e.pos.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.pos);
    if let Some(target) = target {
        session.fire(target.x, target.y);
    }
}
