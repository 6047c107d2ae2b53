//! Obstacle spawning
//!
//! One roll per tick against the current spawn rate; the rate climbs every
//! tick up to a ceiling.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Vertical drift of a drone, fixed at spawn from the run clock
const DRONE_DRIFT: f32 = 2.0;
const DRONE_PHASE_RATE: f32 = 1.0;
/// Signs barely drift; most of their motion is the per-tick bob
const SIGN_DRIFT: f32 = 0.3;
const SIGN_PHASE_RATE: f32 = 2.0;
/// Amplitude of the spawn-height wobble for signs
const SIGN_SPAWN_BOB: f32 = 10.0;

/// Map a uniform roll in [0, 1) to a variant: 40% drone, 30% enemy, 30% sign
pub fn pick_kind(roll: f32) -> ObstacleKind {
    if roll < 0.4 {
        ObstacleKind::Drone
    } else if roll < 0.7 {
        ObstacleKind::Enemy
    } else {
        ObstacleKind::Sign
    }
}

/// Spawn rate for the next tick
pub fn next_spawn_rate(rate: f32, tuning: &Tuning) -> f32 {
    (rate + tuning.spawn_rate_step).min(tuning.spawn_rate_max)
}

/// Ramp the spawn rate and maybe spawn one obstacle
///
/// Returns the new obstacle's ID if one was spawned.
pub fn spawn_step(state: &mut GameState) -> Option<u32> {
    state.spawn_rate = next_spawn_rate(state.spawn_rate, &state.tuning);

    let roll: f32 = state.rng().random();
    if roll >= state.spawn_rate {
        return None;
    }

    let kind = pick_kind(state.rng().random());
    Some(spawn_obstacle(state, kind))
}

/// Spawn an obstacle of the given kind just past the right edge
pub fn spawn_obstacle(state: &mut GameState, kind: ObstacleKind) -> u32 {
    let time = state.time_secs();
    let speed = state.scroll_speed;
    let viewport = state.viewport;
    let (size, margin_x, margin_y, max_boost, ground_offset) = {
        let t = &state.tuning;
        (
            t.obstacle_size,
            t.spawn_margin_x,
            t.spawn_margin_y,
            t.obstacle_max_boost,
            t.sign_ground_offset,
        )
    };

    let y = match kind {
        ObstacleKind::Drone | ObstacleKind::Enemy => {
            let band = (viewport.height - 2.0 * margin_y).max(0.0);
            margin_y + state.rng().random::<f32>() * band
        }
        ObstacleKind::Sign => {
            viewport.height - ground_offset + (time * SIGN_PHASE_RATE).sin() * SIGN_SPAWN_BOB
        }
    };

    let vx = -(speed + state.rng().random::<f32>() * max_boost);
    let vy = match kind {
        ObstacleKind::Drone => (time * DRONE_PHASE_RATE).sin() * DRONE_DRIFT,
        ObstacleKind::Enemy => 0.0,
        ObstacleKind::Sign => (time * SIGN_PHASE_RATE).cos() * SIGN_DRIFT,
    };

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind,
        pos: Vec2::new(viewport.width + margin_x, y),
        vel: Vec2::new(vx, vy),
        size: Vec2::splat(size),
    });
    log::debug!("Spawned {:?} #{} at y={:.1}", kind, id, y);
    id
}
