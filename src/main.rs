//! Neon Cycles entry point
//!
//! Headless driver: loads a round config, runs the simulation at a fixed
//! minimum tick interval with deterministic demo steering, and reports the
//! outcome. A rendering frontend would replace the steering source and blit
//! `round.canvas()` each tick.

use std::path::Path;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use neon_cycles::SetupError;
use neon_cycles::config::RoundConfig;
use neon_cycles::consts::TICK_HZ;
use neon_cycles::sim::{Round, Steering, TickInput, tick};

/// Safety stop for the headless demo; a round normally ends long before this.
const MAX_TICKS: u64 = 100_000;

/// How long each demo steering decision is held, in ticks.
const STEER_HOLD_TICKS: u64 = 20;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("setup failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SetupError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => RoundConfig::load(Path::new(&path))?,
        None => RoundConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC1C1E5);

    let mut round = Round::new(&config, seed)?;
    let mut rng = Pcg32::seed_from_u64(seed ^ 0x5EED);
    let mut steering = vec![Steering::NONE; round.players.len()];

    let frame = Duration::from_secs(1) / TICK_HZ;

    while !round.all_inactive() && round.tick_count() < MAX_TICKS {
        let started = Instant::now();

        // Demo steering: each rider re-rolls its turn input every few ticks.
        if round.tick_count() % STEER_HOLD_TICKS == 0 {
            for s in &mut steering {
                *s = match rng.random_range(0..4u8) {
                    0 => Steering::LEFT,
                    1 => Steering::RIGHT,
                    _ => Steering::NONE,
                };
            }
        }

        let input = TickInput {
            steering: steering.clone(),
            ..Default::default()
        };
        tick(&mut round, &input);

        // Frame gate: a fixed minimum interval between ticks, nothing more.
        let elapsed = started.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }

    for player in &round.players {
        let name = config
            .players
            .get(player.id as usize)
            .map(|p| p.nickname.as_str())
            .unwrap_or("?");
        match player.collided_at {
            Some(t) => log::info!("{name} crashed at tick {t}"),
            None => log::info!("{name} still riding at tick {}", round.tick_count()),
        }
    }

    Ok(())
}
