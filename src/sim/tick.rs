//! Fixed timestep simulation tick
//!
//! The arena simulator: advances every active player along its heading,
//! rasterizes the thick trail stroke into the shared canvas, and probes for
//! collisions against already-painted pixels. One tick is fully synchronous;
//! players are processed in list order, and paints commit immediately, so an
//! earlier player's stroke is visible to a later player's probe within the
//! same tick.

use glam::Vec2;

use crate::consts::{PROBE_DISTANCE, TURN_RATE};
use crate::{heading_to_dir, perp, wrap_coord};

use super::canvas::PixelCanvas;
use super::player::{Player, Steering};
use super::round::Round;

/// Input snapshot for a single tick (deterministic)
///
/// The simulation never polls an input backend; the driver assembles this
/// from whatever keys are down and passes it in.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steering per player, indexed by list order. Missing entries mean no
    /// turn input for that player.
    pub steering: Vec<Steering>,
    /// Debug one-shots. Global: they hit every player, not one.
    pub double_speed: bool,
    pub halve_speed: bool,
    pub double_size: bool,
    pub halve_size: bool,
}

impl TickInput {
    pub fn steering_for(&self, player_idx: usize) -> Steering {
        self.steering.get(player_idx).copied().unwrap_or_default()
    }
}

/// Advance the round by one tick.
pub fn tick(round: &mut Round, input: &TickInput) {
    if input.double_speed {
        round.double_all_speeds();
    }
    if input.halve_speed {
        round.halve_all_speeds();
    }
    if input.double_size {
        round.double_all_sizes();
    }
    if input.halve_size {
        round.halve_all_sizes();
    }

    let arena = round.canvas.size() as f32;
    let tick_no = round.tick;
    let was_over = round.all_inactive();

    for idx in 0..round.players.len() {
        let steering = input.steering_for(idx);
        advance_player(
            &mut round.players[idx],
            &mut round.canvas,
            steering,
            arena,
            tick_no,
        );
    }

    round.tick += 1;

    if !was_over && round.all_inactive() {
        log::info!("round over at tick {}", round.tick);
    }
}

/// Advance one player: steer, sub-step, probe, paint, wrap.
fn advance_player(
    player: &mut Player,
    canvas: &mut PixelCanvas,
    steering: Steering,
    arena: f32,
    tick_no: u64,
) {
    if !player.active {
        return;
    }

    player.steer(steering, TURN_RATE);

    let dir = heading_to_dir(player.heading);
    let side = perp(dir);
    let (steps, step_len) = player.step_plan();
    let half_width = player.half_width as f32;
    // Backward depth samples thicken the stroke along the travel direction so
    // the trail stays gap-free through turns and at high speed.
    let depth = (0.7 * half_width + 3.0) as u32;

    for _ in 0..steps {
        player.position += dir * step_len;

        // Invisible players still move; they neither probe nor paint.
        if !player.visible {
            continue;
        }

        // Collision probe ahead of the head. Reads only, never paints. The
        // probe reaches 2.5 px while sub-steps are at most 1 px, so a trail
        // can never be tunneled through.
        let probe = player.position + dir * PROBE_DISTANCE;
        if !canvas.get(probe.x, probe.y).is_background() {
            player.mark_collided(tick_no);
            log::debug!(
                "player {} collided at tick {tick_no} ({:.1}, {:.1})",
                player.id,
                player.position.x,
                player.position.y
            );
            break;
        }

        // Rasterize the stroke cross-section at the head. Every write is
        // first-writer-wins; committed cells are never repainted.
        let base = player.position - side * half_width;
        for i in 1..(2 * player.half_width) {
            let column = base + side * i as f32;
            canvas.paint_if_empty(column.x, column.y, player.color);
            for j in 1..=depth {
                let sample = column - dir * j as f32;
                canvas.paint_if_empty(sample.x, sample.y, player.color);
            }
        }
    }

    player.position = Vec2::new(
        wrap_coord(player.position.x, arena),
        wrap_coord(player.position.y, arena),
    );
    // One step ahead of the stored position, display orientation only.
    player.head_marker = player.position + dir;
}
