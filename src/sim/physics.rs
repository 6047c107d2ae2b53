//! Swing physics and obstacle motion
//!
//! The web behaves like a slack rubber band: no pull inside the slack
//! distance, a spring pull proportional to the stretch beyond it. One
//! semi-implicit Euler step per tick, with uniform damping afterwards.

use glam::Vec2;

use super::state::{Obstacle, ObstacleKind, Player, Viewport};
use crate::direction_to;
use crate::tuning::Tuning;

/// Enemy weave: `y += sin(x * ENEMY_WAVE_FREQ) * ENEMY_WAVE_AMP` every tick
const ENEMY_WAVE_FREQ: f32 = 0.01;
const ENEMY_WAVE_AMP: f32 = 2.0;
/// Sign bob: `y += sin(t * SIGN_BOB_RATE + x * SIGN_BOB_FREQ) * SIGN_BOB_AMP`
const SIGN_BOB_RATE: f32 = 3.0;
const SIGN_BOB_FREQ: f32 = 0.02;
const SIGN_BOB_AMP: f32 = 0.5;

/// Outcome of one player integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStep {
    /// Player reached the ground this step
    pub grounded: bool,
}

/// Web pull on the player, zero inside the slack distance
pub fn web_tension(player_pos: Vec2, anchor: Vec2, tuning: &Tuning) -> Vec2 {
    match direction_to(player_pos, anchor) {
        Some((dir, dist)) if dist > tuning.web_slack => {
            dir * tuning.web_tension * (dist - tuning.web_slack)
        }
        _ => Vec2::ZERO,
    }
}

/// Advance the player by one tick
///
/// Gravity, then web tension, then position, then damping, then the
/// ground and left-edge clamps.
pub fn integrate_player(
    player: &mut Player,
    anchor: Option<Vec2>,
    viewport: &Viewport,
    tuning: &Tuning,
) -> PlayerStep {
    player.vel.y += tuning.gravity;

    if let Some(anchor) = anchor {
        player.vel += web_tension(player.pos, anchor, tuning);
    }

    player.pos += player.vel;
    player.vel *= tuning.air_damping;

    let ground = viewport.height - player.radius;
    let grounded = player.pos.y >= ground;
    if grounded {
        player.pos.y = ground;
        player.vel.y = 0.0;
    }
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    }

    PlayerStep { grounded }
}

/// Advance an obstacle by one tick
///
/// `time` is the run clock in seconds.
pub fn advance_obstacle(obstacle: &mut Obstacle, time: f32) {
    obstacle.pos += obstacle.vel;
    match obstacle.kind {
        ObstacleKind::Drone => {}
        ObstacleKind::Enemy => {
            obstacle.pos.y += (obstacle.pos.x * ENEMY_WAVE_FREQ).sin() * ENEMY_WAVE_AMP;
        }
        ObstacleKind::Sign => {
            obstacle.pos.y +=
                (time * SIGN_BOB_RATE + obstacle.pos.x * SIGN_BOB_FREQ).sin() * SIGN_BOB_AMP;
        }
    }
}

/// True once an obstacle has left the playfield for good
pub fn is_offscreen(obstacle: &Obstacle, viewport: &Viewport) -> bool {
    obstacle.pos.x + obstacle.size.x < 0.0
        || obstacle.pos.y + obstacle.size.y < 0.0
        || obstacle.pos.y > viewport.height
}

/// Move all obstacles and drop the ones that left the playfield
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, time: f32, viewport: &Viewport) {
    for obstacle in obstacles.iter_mut() {
        advance_obstacle(obstacle, time);
    }
    obstacles.retain(|o| !is_offscreen(o, viewport));
}
