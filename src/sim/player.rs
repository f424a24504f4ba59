//! Player entity and per-tick kinematics
//!
//! A player is a position, a continuous heading, and the stroke parameters
//! that drive rasterization. All mutation happens through small operations
//! called from the tick loop or from global debug commands.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ControlKeys;
use crate::consts::{MAX_HALF_WIDTH, MAX_SPEED, MIN_HALF_WIDTH, MIN_SPEED};
use crate::{heading_to_dir, wrap_heading};

use super::canvas::Color;

/// Turn-key state for one player for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

impl Steering {
    pub const NONE: Steering = Steering { left: false, right: false };
    pub const LEFT: Steering = Steering { left: true, right: false };
    pub const RIGHT: Steering = Steering { left: false, right: true };
}

/// A light cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    /// Position in canvas coordinates, wrapped into `[0, size)` each tick.
    pub position: Vec2,
    /// Display-only marker one unit step ahead of the position.
    pub head_marker: Vec2,
    /// Heading in half-turns, normalized to `[0, 2)`.
    /// Direction is `(cos(heading*PI), sin(heading*PI))`: 0.0 is +x, 0.5 is +y.
    pub heading: f32,
    /// Pixels advanced per tick; `ceil(speed)` unit sub-steps when >= 1.
    pub speed: f32,
    /// Trail stroke half-width in pixels.
    pub half_width: u32,
    pub color: Color,
    /// False after a collision; inactive players neither advance nor draw.
    pub active: bool,
    /// Gates painting and collision probing. An invisible player still moves.
    pub visible: bool,
    pub controls: ControlKeys,
    /// Tick at which this player collided, if it has.
    pub collided_at: Option<u64>,
}

impl Player {
    pub fn new(
        id: u32,
        position: Vec2,
        heading: f32,
        speed: f32,
        half_width: u32,
        color: Color,
        controls: ControlKeys,
    ) -> Self {
        let heading = wrap_heading(heading);
        Self {
            id,
            position,
            head_marker: position + heading_to_dir(heading),
            heading,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            half_width: half_width.clamp(MIN_HALF_WIDTH, MAX_HALF_WIDTH),
            color,
            active: true,
            visible: true,
            controls,
            collided_at: None,
        }
    }

    /// Adjust heading by one turn increment in the pressed direction.
    ///
    /// Left takes priority when both keys are down; this is an explicit
    /// tie-break, not an artifact of check order.
    pub fn steer(&mut self, steering: Steering, turn_rate: f32) {
        if steering.left {
            self.heading = wrap_heading(self.heading + turn_rate);
        } else if steering.right {
            self.heading = wrap_heading(self.heading - turn_rate);
        }
    }

    /// Sub-steps for this tick: `(count, step length)`.
    ///
    /// `ceil(speed)` unit steps at speed >= 1, otherwise a single sub-pixel
    /// step of length `speed`.
    pub fn step_plan(&self) -> (u32, f32) {
        if self.speed >= 1.0 {
            (self.speed.ceil() as u32, 1.0)
        } else {
            (1, self.speed)
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn double_speed(&mut self) {
        self.set_speed(self.speed * 2.0);
    }

    pub fn halve_speed(&mut self) {
        self.set_speed(self.speed / 2.0);
    }

    pub fn double_size(&mut self) {
        self.half_width = (self.half_width * 2).min(MAX_HALF_WIDTH);
    }

    pub fn halve_size(&mut self) {
        self.half_width = (self.half_width / 2).max(MIN_HALF_WIDTH);
    }

    /// Flag this player as collided. Idempotent: the first tick sticks.
    pub fn mark_collided(&mut self, tick: u64) {
        if self.active {
            self.active = false;
            self.collided_at = Some(tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TURN_RATE;
    use proptest::prelude::*;

    fn test_player() -> Player {
        Player::new(
            0,
            Vec2::new(100.0, 100.0),
            0.0,
            2.0,
            5,
            Color::CYAN,
            ControlKeys { left: 65, right: 68 },
        )
    }

    #[test]
    fn test_steer_left_priority_on_both_keys() {
        let mut p = test_player();
        p.steer(Steering { left: true, right: true }, TURN_RATE);
        assert!((p.heading - TURN_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_steer_neither_key_is_noop() {
        let mut p = test_player();
        p.steer(Steering::NONE, TURN_RATE);
        assert_eq!(p.heading, 0.0);
    }

    #[test]
    fn test_steer_right_wraps_heading() {
        let mut p = test_player();
        p.steer(Steering::RIGHT, TURN_RATE);
        assert!(p.heading > 1.9 && p.heading < 2.0);
    }

    #[test]
    fn test_step_plan() {
        let mut p = test_player();
        assert_eq!(p.step_plan(), (2, 1.0));

        p.set_speed(2.5);
        assert_eq!(p.step_plan(), (3, 1.0));

        p.set_speed(0.25);
        assert_eq!(p.step_plan(), (1, 0.25));
    }

    #[test]
    fn test_halve_size_converges_to_minimum() {
        let mut p = test_player();
        for _ in 0..10 {
            p.halve_size();
        }
        assert_eq!(p.half_width, MIN_HALF_WIDTH);
        p.halve_size();
        assert_eq!(p.half_width, MIN_HALF_WIDTH);
    }

    #[test]
    fn test_double_size_caps() {
        let mut p = test_player();
        for _ in 0..10 {
            p.double_size();
        }
        assert_eq!(p.half_width, MAX_HALF_WIDTH);
    }

    #[test]
    fn test_speed_clamps_both_ways() {
        let mut p = test_player();
        for _ in 0..64 {
            p.halve_speed();
        }
        assert!(p.speed >= MIN_SPEED);

        for _ in 0..64 {
            p.double_speed();
        }
        assert_eq!(p.speed, MAX_SPEED);
    }

    #[test]
    fn test_mark_collided_idempotent() {
        let mut p = test_player();
        p.mark_collided(7);
        p.mark_collided(9);
        assert!(!p.active);
        assert_eq!(p.collided_at, Some(7));
    }

    proptest! {
        #[test]
        fn prop_speed_stays_positive(initial in 0.01f32..16.0, halvings in 0usize..100) {
            let mut p = test_player();
            p.set_speed(initial);
            for _ in 0..halvings {
                p.halve_speed();
            }
            prop_assert!(p.speed > 0.0);
        }

        #[test]
        fn prop_heading_stays_normalized(turns in proptest::collection::vec(0u8..3, 0..200)) {
            let mut p = test_player();
            for t in turns {
                let steering = match t {
                    0 => Steering::NONE,
                    1 => Steering::LEFT,
                    _ => Steering::RIGHT,
                };
                p.steer(steering, TURN_RATE);
                prop_assert!((0.0..2.0).contains(&p.heading));
            }
        }
    }
}
