//! Read-only view of the simulation for renderers
//!
//! A snapshot owns copies of everything a frame needs, so a renderer can
//! never reach back into the live state.

use glam::Vec2;
use serde::Serialize;

use super::state::{
    Building, GameOverCause, GamePhase, GameState, Obstacle, ObstacleKind, Player, Viewport,
};

/// Obstacle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl From<&Obstacle> for ObstacleView {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            id: obstacle.id,
            kind: obstacle.kind,
            pos: obstacle.pos,
            size: obstacle.size,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub player: Player,
    pub anchor: Option<Vec2>,
    pub buildings: Vec<Building>,
    pub skyline: Vec<Building>,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub high_score: u64,
    pub speed: f32,
    pub distance: f32,
    /// Seconds until the next run starts, while on the game-over screen
    pub countdown: Option<u32>,
    pub game_over_cause: Option<GameOverCause>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            viewport: state.viewport,
            player: state.player,
            anchor: state.anchor,
            buildings: state.buildings.clone(),
            skyline: state.skyline.clone(),
            obstacles: state.obstacles.iter().map(ObstacleView::from).collect(),
            score: state.score(),
            high_score: state.high_score.max(state.score()),
            speed: state.scroll_speed,
            distance: state.distance,
            countdown: state.countdown.map(|c| c.remaining()),
            game_over_cause: state.game_over_cause,
        }
    }

    /// Serialize for a JavaScript renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::obstacle_centered_at;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_copies_state() {
        let mut state = GameState::new(8, Viewport::new(800.0, 600.0), Tuning::default());
        state.start_run();
        state.distance = 123.7;
        state.anchor = Some(Vec2::new(300.0, 200.0));
        state
            .obstacles
            .push(obstacle_centered_at(4, ObstacleKind::Sign, Vec2::new(500.0, 520.0), 25.0));

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 123);
        assert_eq!(snap.high_score, 123);
        assert_eq!(snap.anchor, Some(Vec2::new(300.0, 200.0)));
        assert_eq!(snap.buildings.len(), 10);
        assert_eq!(snap.skyline.len(), 20);
        assert_eq!(snap.obstacles[0].kind, ObstacleKind::Sign);
        assert_eq!(snap.countdown, None);

        // Later changes do not leak into an existing snapshot
        state.obstacles.clear();
        assert_eq!(snap.obstacles.len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let mut state = GameState::new(8, Viewport::new(800.0, 600.0), Tuning::default());
        state.start_run();
        state.end_run(GameOverCause::Obstacle(ObstacleKind::Enemy));
        let json = Snapshot::capture(&state).to_json().expect("snapshot serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["phase"], "game-over");
        assert_eq!(value["countdown"], 3);
        assert_eq!(value["game_over_cause"]["obstacle"], "enemy");
        assert_eq!(value["anchor"], serde_json::Value::Null);
        assert_eq!(value["buildings"].as_array().map(Vec::len), Some(10));
    }
}
