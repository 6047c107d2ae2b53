//! Player/obstacle collision
//!
//! Everything is a circle: the player by its radius, obstacles by a
//! per-variant hit radius around their centre.

use glam::Vec2;

use super::state::{GameOverCause, GameState, GamePhase, Obstacle, ObstacleKind, Player};
use crate::circle_overlap;
use crate::tuning::Tuning;

/// Whether the player overlaps one obstacle
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    circle_overlap(
        player.pos,
        player.radius,
        obstacle.center(),
        tuning.hit_radius(obstacle.kind),
    )
}

/// First obstacle (in spawn order) the player overlaps
pub fn first_hit<'a>(
    player: &Player,
    obstacles: &'a [Obstacle],
    tuning: &Tuning,
) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|o| player_hits_obstacle(player, o, tuning))
}

/// Check the player against every obstacle and end the run on a hit
///
/// Does nothing once the run is over. Returns the variant that was hit.
pub fn detect_collisions(state: &mut GameState) -> Option<ObstacleKind> {
    if state.phase != GamePhase::Playing {
        return None;
    }
    let kind = first_hit(&state.player, &state.obstacles, &state.tuning)?.kind;
    state.end_run(GameOverCause::Obstacle(kind));
    Some(kind)
}

/// Obstacle centred on a point, for tests and scripted scenarios
pub fn obstacle_centered_at(id: u32, kind: ObstacleKind, center: Vec2, size: f32) -> Obstacle {
    let size = Vec2::splat(size);
    Obstacle {
        id,
        kind,
        pos: center - size / 2.0,
        vel: Vec2::ZERO,
        size,
    }
}
