//! Web Swing - A rope-swinging side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, world generation, collisions)
//! - `driver`: Frame-driven owner of the simulation (input queue, countdown, resize)
//! - `platform`: Browser bindings for an external renderer
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use driver::Simulation;
pub use error::{SimError, SimResult};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
///
/// All velocities and accelerations are per tick; one tick is one animation frame.
pub mod consts {
    /// Nominal frame duration, used to turn tick counts into animation time
    pub const FRAME_SECS: f32 = 1.0 / 60.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_START_X: f32 = 100.0;

    /// Swing physics
    pub const GRAVITY: f32 = 0.8;
    pub const WEB_TENSION: f32 = 0.015;
    pub const WEB_SLACK: f32 = 10.0;
    pub const AIR_DAMPING: f32 = 0.99;
    pub const RELEASE_BOOST: f32 = 5.0;

    /// Web targeting: search window ahead of the player and the aim point inside it
    pub const ANCHOR_REACH: f32 = 300.0;
    pub const ANCHOR_AIM_AHEAD: f32 = 200.0;
    /// Synthetic anchor used when no building is in reach
    pub const FALLBACK_ANCHOR_AHEAD: f32 = 250.0;
    pub const FALLBACK_ANCHOR_ABOVE: f32 = 150.0;

    /// Scrolling and difficulty ramp
    pub const INITIAL_SCROLL_SPEED: f32 = 2.0;
    pub const SCROLL_SPEED_STEP: f32 = 0.005;
    pub const SPAWN_RATE_START: f32 = 0.02;
    pub const SPAWN_RATE_STEP: f32 = 0.0001;
    pub const SPAWN_RATE_MAX: f32 = 0.05;

    /// Obstacles
    pub const OBSTACLE_SIZE: f32 = 25.0;
    pub const SPAWN_MARGIN_X: f32 = 50.0;
    pub const SPAWN_MARGIN_Y: f32 = 100.0;
    pub const OBSTACLE_MAX_BOOST: f32 = 2.0;
    pub const DRONE_HIT_RADIUS: f32 = 15.0;
    pub const ENEMY_HIT_RADIUS: f32 = 15.0;
    pub const SIGN_HIT_RADIUS: f32 = 20.0; // Oversized on purpose
    pub const SIGN_GROUND_OFFSET: f32 = 80.0;

    /// Foreground buildings
    pub const FOREGROUND_COUNT: usize = 10;
    pub const FOREGROUND_SPACING: f32 = 250.0;
    pub const FOREGROUND_GAP: f32 = 200.0;
    pub const FOREGROUND_JITTER: f32 = 100.0;
    pub const FOREGROUND_WIDTH: (f32, f32) = (80.0, 120.0);
    pub const FOREGROUND_HEIGHT: (f32, f32) = (120.0, 200.0);

    /// Background skyline (parallax layer)
    pub const SKYLINE_COUNT: usize = 20;
    pub const SKYLINE_SPACING: f32 = 150.0;
    pub const SKYLINE_GAP: f32 = 120.0;
    pub const SKYLINE_JITTER: f32 = 60.0;
    pub const SKYLINE_WIDTH: (f32, f32) = (60.0, 180.0);
    pub const SKYLINE_HEIGHT: (f32, f32) = (200.0, 500.0);
    pub const SKYLINE_PARALLAX: f32 = 0.5;

    /// Seconds shown on the game-over screen before the next run starts
    pub const RESTART_COUNTDOWN_SECS: u32 = 3;
}

/// True when two circles overlap (touching does not count)
#[inline]
pub fn circle_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Unit direction and distance from `from` to `to`, or `None` when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Option<(Vec2, f32)> {
    let delta = to - from;
    let dist = delta.length();
    if dist > 0.0 {
        Some((delta / dist, dist))
    } else {
        None
    }
}
