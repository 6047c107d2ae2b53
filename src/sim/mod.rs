//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (left to right for buildings, spawn order for obstacles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod countdown;
pub mod input;
pub mod physics;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{detect_collisions, obstacle_centered_at, player_hits_obstacle};
pub use countdown::RestartCountdown;
pub use input::{Gesture, GestureOutcome, apply_gesture, choose_anchor, release_boost};
pub use physics::{integrate_player, web_tension};
pub use snapshot::{ObstacleView, Snapshot};
pub use state::{
    Building, GameOverCause, GamePhase, GameState, Obstacle, ObstacleKind, Player, Viewport,
};
pub use tick::{TickInput, tick};
