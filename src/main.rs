//! Headless campaign driver
//!
//! Runs a scripted session against the simulation core: drag, launch,
//! wait for rest, repeat until the campaign ends one way or the other.
//! Useful for tuning passes and smoke-testing without a renderer.
//! Pass a JSON tuning file as the first argument to override defaults.

use glam::Vec2;

use angry_sling::sim::{GameWorld, LevelState, TickInput, tick};
use angry_sling::tuning::Tuning;

/// Pull-back points cycled through on successive attempts, relative to
/// the anchor. All down-left, so the launch goes up-right toward the
/// obstacles.
const PULLS: [Vec2; 3] = [
    Vec2::new(-70.0, 60.0),
    Vec2::new(-90.0, 40.0),
    Vec2::new(-55.0, 80.0),
];

fn main() {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::load_or_default(Some(&json)),
            Err(err) => {
                log::warn!("could not read tuning file {path}: {err}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let mut world = GameWorld::new(tuning);
    log::info!("campaign start: {} levels", world.levels.len());

    let mut attempt = 0usize;
    // Hard cap so a pathological tuning file cannot hang the driver
    for _ in 0..200_000u32 {
        match world.level().state {
            LevelState::Playing if !world.launched => {
                drag_and_launch(&mut world, PULLS[attempt % PULLS.len()]);
                attempt += 1;
            }
            LevelState::Playing => {
                tick(&mut world, &TickInput::default());
            }
            LevelState::Completed => {
                let last = world.current_level == world.levels.len() - 1;
                tick(&mut world, &TickInput::default());
                if last && world.advance_ticks >= world.tuning.level_advance_ticks {
                    break;
                }
            }
            LevelState::Failed => break,
        }
    }

    let hud = world.snapshot().hud;
    log::info!(
        "session over on level {}/{} ({}): state {:?}, score {}/{}, total {}, attempts left {}",
        hud.level_index + 1,
        hud.level_count,
        hud.level_name,
        hud.state,
        hud.level_score,
        hud.target_score,
        hud.total_score,
        hud.attempts_left,
    );
}

/// Press on the ball, drag to the pull point over a few ticks, release
fn drag_and_launch(world: &mut GameWorld, pull: Vec2) {
    let anchor = world.anchor;
    tick(
        world,
        &TickInput {
            pointer: world.ball.pos,
            pointer_pressed: true,
            pointer_down: true,
            ..Default::default()
        },
    );
    for step in 1..=4 {
        let t = step as f32 / 4.0;
        tick(
            world,
            &TickInput {
                pointer: anchor + pull * t,
                pointer_down: true,
                ..Default::default()
            },
        );
    }
    tick(
        world,
        &TickInput {
            pointer: anchor + pull,
            pointer_released: true,
            ..Default::default()
        },
    );
}
