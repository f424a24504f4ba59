//! Round setup
//!
//! The finalized list of player settings and the arena size that the
//! simulation consumes. Configs come from an external GUI or a JSON file;
//! validation happens here so the core never sees a degenerate round.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_PLAYERS, MIN_PLAYERS};
use crate::sim::Color;

/// Setup failures are fatal to the round and reported to the caller.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("player count {0} outside {MIN_PLAYERS}..={MAX_PLAYERS}")]
    PlayerCount(usize),
    #[error("player {0} uses the background color")]
    BackgroundColor(usize),
    #[error("players {0} and {1} share a trail color")]
    DuplicateColor(usize, usize),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Arena side-length presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArenaSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl ArenaSize {
    /// Side length of the square canvas in pixels.
    pub fn pixels(self) -> usize {
        match self {
            ArenaSize::Small => 400,
            ArenaSize::Normal => 600,
            ArenaSize::Large => 800,
        }
    }
}

/// Initial speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedPreset {
    /// Pixels advanced per tick.
    pub fn value(self) -> f32 {
        match self {
            SpeedPreset::Slow => 1.0,
            SpeedPreset::Normal => 2.0,
            SpeedPreset::Fast => 4.0,
        }
    }
}

/// Initial trail thickness presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizePreset {
    Thin,
    #[default]
    Normal,
    Fat,
}

impl SizePreset {
    /// Stroke half-width in pixels.
    pub fn half_width(self) -> u32 {
        match self {
            SizePreset::Thin => 3,
            SizePreset::Normal => 5,
            SizePreset::Fat => 9,
        }
    }
}

/// Turn-key assignment, as platform keycodes. The driver maps pressed keys to
/// a per-tick [`crate::sim::Steering`] snapshot; the core never polls keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlKeys {
    pub left: u32,
    pub right: u32,
}

/// Per-player setup, as delivered by the setup GUI or config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSetup {
    /// Display name; unused by the core, reported by the driver.
    pub nickname: String,
    pub color: Color,
    #[serde(default)]
    pub speed: SpeedPreset,
    #[serde(default)]
    pub size: SizePreset,
    pub controls: ControlKeys,
}

/// Everything needed to start a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    #[serde(default)]
    pub arena: ArenaSize,
    pub players: Vec<PlayerSetup>,
}

impl Default for RoundConfig {
    /// A two-player round: WASD-side keys vs arrow keys.
    fn default() -> Self {
        Self {
            arena: ArenaSize::Normal,
            players: vec![
                PlayerSetup {
                    nickname: "blue".into(),
                    color: Color::CYAN,
                    speed: SpeedPreset::Normal,
                    size: SizePreset::Normal,
                    controls: ControlKeys { left: 0x41, right: 0x44 }, // A / D
                },
                PlayerSetup {
                    nickname: "amber".into(),
                    color: Color::ORANGE,
                    speed: SpeedPreset::Normal,
                    size: SizePreset::Normal,
                    controls: ControlKeys { left: 0x25, right: 0x27 }, // arrows
                },
            ],
        }
    }
}

impl RoundConfig {
    /// Check the bounds the simulation relies on.
    pub fn validate(&self) -> Result<(), SetupError> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.color.is_background() {
                return Err(SetupError::BackgroundColor(i));
            }
            for (j, other) in self.players.iter().enumerate().skip(i + 1) {
                if player.color == other.color {
                    return Err(SetupError::DuplicateColor(i, j));
                }
            }
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = std::fs::read_to_string(path)?;
        let config: RoundConfig = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!(
            "loaded round config: {} players, arena {}px",
            config.players.len(),
            config.arena.pixels()
        );
        Ok(config)
    }
}
