//! Whirlwind Arena headless demo
//!
//! Drives the simulation with a simple idle pilot and logs one line per
//! simulated second. Useful for balance checks and for watching a seed
//! play out without a renderer.
//!
//! Usage: `whirlwind-arena [seed] [--dump]`

use std::env;
use std::process;

use log::info;
use whirlwind_arena::sim::{GameState, InputSnapshot, advance};

/// Wall-clock frame the demo pretends to run at.
const FRAME_MS: f32 = 16.0;
/// Stop after this much simulated time even if the pilot is still alive.
const MAX_RUN_SECS: f32 = 120.0;

/// Idle pilot: step away from the nearest enemy, axis by axis. Stands in
/// for a human so demo runs last more than a few seconds.
fn demo_input(state: &GameState) -> InputSnapshot {
    let player = state.player.pos;
    let nearest = state.enemies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .partial_cmp(&b.pos.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let Some(enemy) = nearest else {
        return InputSnapshot::default();
    };

    let away = player - enemy.pos;
    InputSnapshot {
        up: away.y < 0.0,
        down: away.y > 0.0,
        left: away.x < 0.0,
        right: away.x > 0.0,
    }
}

fn main() {
    env_logger::init();

    let mut seed: u64 = 0xA12EA;
    let mut dump = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dump" => dump = true,
            other => match other.parse() {
                Ok(parsed) => seed = parsed,
                Err(_) => {
                    eprintln!("usage: whirlwind-arena [seed] [--dump]");
                    process::exit(2);
                }
            },
        }
    }

    info!("starting run with seed {seed}");
    let mut state = GameState::new(seed);
    let mut last_logged = 0u32;

    while !state.game_over && state.game_time < MAX_RUN_SECS {
        let input = demo_input(&state);
        state = advance(&state, FRAME_MS, Some(&input));

        let secs = state.game_time as u32;
        if secs > last_logged {
            last_logged = secs;
            info!(
                "t={secs}s hp={:.0}/{:.0} enemies={} particles={} score={}",
                state.player.health,
                state.player.max_health,
                state.enemies.len(),
                state.particles.len(),
                state.score
            );
        }
    }

    if state.game_over {
        info!("pilot died at t={:.1}s with score {}", state.game_time, state.score);
    } else {
        info!("pilot survived the full {MAX_RUN_SECS}s");
    }

    if dump {
        let json = serde_json::to_string_pretty(&state).expect("snapshot serializes");
        println!("{json}");
    }
}
