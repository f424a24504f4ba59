//! Neon Cycles - a local multiplayer light-cycle arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, trail rasterization, collisions)
//! - `config`: Round setup (arena/speed/size presets, colors, control keys)
//!
//! The crate is the simulation core plus a thin headless driver; rendering and
//! input backends are external collaborators that consume the pixel buffer and
//! feed input snapshots into `sim::tick`.

pub mod config;
pub mod sim;

pub use config::{RoundConfig, SetupError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Driver tick rate (frame gate, not a real-time guarantee)
    pub const TICK_HZ: u32 = 60;

    /// Heading change per tick while a turn key is held, in half-turns
    pub const TURN_RATE: f32 = 0.01;

    /// Collision probe distance ahead of the head, in pixels
    pub const PROBE_DISTANCE: f32 = 2.5;

    /// Speed clamp. The floor keeps repeated halving strictly positive; the
    /// ceiling bounds the per-tick sub-step count, which is `ceil(speed)`.
    pub const MIN_SPEED: f32 = 0.001;
    pub const MAX_SPEED: f32 = 512.0;

    /// Trail half-width clamp. A half-width of 0 would disable drawing.
    pub const MIN_HALF_WIDTH: u32 = 1;
    pub const MAX_HALF_WIDTH: u32 = 128;

    /// Player count bounds for a round
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 6;
}

/// Unit direction vector for a heading given in half-turns.
///
/// Heading 0.0 points +x, 0.5 points +y, 1.0 points -x.
#[inline]
pub fn heading_to_dir(heading: f32) -> Vec2 {
    let theta = heading * std::f32::consts::PI;
    Vec2::new(theta.cos(), theta.sin())
}

/// Perpendicular of a direction vector (rotated +90 degrees).
#[inline]
pub fn perp(dir: Vec2) -> Vec2 {
    Vec2::new(-dir.y, dir.x)
}

/// Wrap a coordinate into `[0, size)` with floor modulo.
///
/// `rem_euclid` can round a tiny negative input up to exactly `size`; that
/// case folds back to 0 so the result is always strictly below `size`.
#[inline]
pub fn wrap_coord(v: f32, size: f32) -> f32 {
    let wrapped = v.rem_euclid(size);
    if wrapped >= size { 0.0 } else { wrapped }
}

/// Normalize a heading into `[0, 2)` half-turns.
#[inline]
pub fn wrap_heading(heading: f32) -> f32 {
    let wrapped = heading.rem_euclid(2.0);
    if wrapped >= 2.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_to_dir_cardinals() {
        let right = heading_to_dir(0.0);
        assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);

        let up = heading_to_dir(0.5);
        assert!(up.x.abs() < 1e-6 && (up.y - 1.0).abs() < 1e-6);

        let left = heading_to_dir(1.0);
        assert!((left.x + 1.0).abs() < 1e-6 && left.y.abs() < 1e-6);
    }

    #[test]
    fn test_wrap_coord() {
        assert_eq!(wrap_coord(402.0, 400.0), 2.0);
        assert_eq!(wrap_coord(-1.0, 400.0), 399.0);
        assert_eq!(wrap_coord(399.5, 400.0), 399.5);
    }

    #[test]
    fn test_wrap_heading() {
        assert!((wrap_heading(2.01) - 0.01).abs() < 1e-6);
        assert!((wrap_heading(-0.25) - 1.75).abs() < 1e-6);
    }
}
