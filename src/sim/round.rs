//! Round aggregate
//!
//! Owns the canvas and the fixed player collection for one round. Replaces
//! any ambient global registry: everything the tick loop touches is reachable
//! from here, and spawn randomization comes from the round's seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{PlayerSetup, RoundConfig, SetupError};

use super::canvas::{Color, PixelCanvas};
use super::player::Player;

/// One round of the game: canvas, players, tick counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    seed: u64,
    /// Bumped on restart so respawns draw a fresh RNG stream.
    restarts: u32,
    pub(crate) tick: u64,
    pub(crate) canvas: PixelCanvas,
    pub players: Vec<Player>,
}

impl Round {
    /// Build a round from a validated config. Spawn positions and headings
    /// are drawn from the seed, so a seed fully determines the round.
    pub fn new(config: &RoundConfig, seed: u64) -> Result<Self, SetupError> {
        config.validate()?;

        let size = config.arena.pixels();
        let mut rng = Pcg32::seed_from_u64(seed);
        let players = spawn_players(&config.players, size, &mut rng);

        log::info!(
            "round start: seed {seed}, {} players, arena {size}px",
            players.len()
        );

        Ok(Self {
            seed,
            restarts: 0,
            tick: 0,
            canvas: PixelCanvas::new(size),
            players,
        })
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks advanced so far this round.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// The shared pixel buffer, for blit-to-display.
    #[inline]
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Round-end signal: true once every player has collided.
    pub fn all_inactive(&self) -> bool {
        self.players.iter().all(|p| !p.active)
    }

    /// Players still riding.
    pub fn survivors(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.active)
    }

    /// Clear the canvas and respawn every player for a fresh round.
    ///
    /// Respawns draw from a new RNG stream, so consecutive rounds differ but
    /// the whole sequence is still determined by the seed.
    pub fn restart(&mut self, config: &RoundConfig) {
        self.restarts += 1;
        self.tick = 0;
        self.canvas.clear(Color::BACKGROUND);

        let size = self.canvas.size();
        let mut rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.restarts as u64));
        self.players = spawn_players(&config.players, size, &mut rng);

        log::info!("round restart #{}", self.restarts);
    }

    // Global debug commands: affect every player, not per-player.

    pub fn double_all_speeds(&mut self) {
        for p in &mut self.players {
            p.double_speed();
        }
    }

    pub fn halve_all_speeds(&mut self) {
        for p in &mut self.players {
            p.halve_speed();
        }
    }

    pub fn double_all_sizes(&mut self) {
        for p in &mut self.players {
            p.double_size();
        }
    }

    pub fn halve_all_sizes(&mut self) {
        for p in &mut self.players {
            p.halve_size();
        }
    }
}

/// Spawn one player per setup entry at a randomized position and heading,
/// keeping a 10% margin off the arena edges.
fn spawn_players(setups: &[PlayerSetup], size: usize, rng: &mut Pcg32) -> Vec<Player> {
    let arena = size as f32;
    let margin = arena * 0.1;

    setups
        .iter()
        .enumerate()
        .map(|(i, setup)| {
            let position = Vec2::new(
                rng.random_range(margin..arena - margin),
                rng.random_range(margin..arena - margin),
            );
            let heading = rng.random_range(0.0..2.0);
            Player::new(
                i as u32,
                position,
                heading,
                setup.speed.value(),
                setup.size.half_width(),
                setup.color,
                setup.controls,
            )
        })
        .collect()
}
