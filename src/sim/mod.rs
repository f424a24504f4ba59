//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable player processing order (by list position)
//! - No rendering or input-backend dependencies

pub mod canvas;
pub mod player;
pub mod round;
pub mod tick;

pub use canvas::{Color, PixelCanvas};
pub use player::{Player, Steering};
pub use round::Round;
pub use tick::{TickInput, tick};
