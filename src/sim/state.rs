//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; the driver owns exactly one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::countdown::RestartCountdown;
use super::world;
use crate::consts::FRAME_SECS;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    /// Title screen, waiting for the first press
    Menu,
    /// Active run
    Playing,
    /// Run ended; state is frozen until restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameOverCause {
    /// Player hit the ground
    Ground,
    /// Player touched an obstacle
    Obstacle(ObstacleKind),
}

/// Drawable area supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Finite and strictly positive in both axes
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The swinging player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Player {
    /// Player at the start position: fixed x, vertically centred, at rest
    pub fn spawn(viewport: &Viewport, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x, viewport.height / 2.0),
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
        }
    }
}

/// A building in one of the scrolling layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Building {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Roof centre, where a web attaches
    pub fn top_center(&self, viewport: &Viewport) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, viewport.height - self.height)
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObstacleKind {
    /// Drifts vertically at a constant rate picked at spawn
    Drone,
    /// Weaves up and down as it flies
    Enemy,
    /// Hangs near the ground and bobs
    Sign,
}

/// An obstacle entity (`pos` is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    pub player: Player,
    /// Current web attachment; `Some` exactly while a web is attached
    pub anchor: Option<Vec2>,
    /// Foreground buildings, ordered left to right
    pub buildings: Vec<Building>,
    /// Background skyline, ordered left to right
    pub skyline: Vec<Building>,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub scroll_speed: f32,
    pub spawn_rate: f32,
    /// Cumulative scroll distance
    pub distance: f32,
    pub high_score: u64,
    pub game_over_cause: Option<GameOverCause>,
    /// Auto-restart timer, running only during `GameOver`
    pub countdown: Option<RestartCountdown>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state on the menu screen
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::spawn(&viewport, &tuning),
            scroll_speed: tuning.initial_scroll_speed,
            spawn_rate: tuning.spawn_rate_start,
            tuning,
            viewport,
            phase: GamePhase::Menu,
            time_ticks: 0,
            anchor: None,
            buildings: Vec::new(),
            skyline: Vec::new(),
            obstacles: Vec::new(),
            distance: 0.0,
            high_score: 0,
            game_over_cause: None,
            countdown: None,
            next_id: 1,
        };

        // Menu shows the city behind the title
        state.generate_layers();

        state
    }

    /// Reset every per-run entity and enter `Playing`
    ///
    /// High score, seed stream and viewport carry over between runs.
    pub fn start_run(&mut self) {
        self.player = Player::spawn(&self.viewport, &self.tuning);
        self.anchor = None;
        self.obstacles.clear();
        self.distance = 0.0;
        self.scroll_speed = self.tuning.initial_scroll_speed;
        self.spawn_rate = self.tuning.spawn_rate_start;
        self.time_ticks = 0;
        self.game_over_cause = None;
        self.countdown = None;
        self.generate_layers();
        self.phase = GamePhase::Playing;
        log::info!("Run started (seed {})", self.seed);
    }

    /// Freeze the run and start the auto-restart countdown
    ///
    /// Returns false if the run had already ended.
    pub fn end_run(&mut self, cause: GameOverCause) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.game_over_cause = Some(cause);
        self.high_score = self.high_score.max(self.score());
        self.countdown = Some(RestartCountdown::new(self.tuning.restart_countdown_secs));
        log::info!(
            "Game over ({:?}) - score {}, high score {}",
            cause,
            self.score(),
            self.high_score
        );
        true
    }

    /// Leave `GameOver` for the menu, cancelling any pending restart
    pub fn return_to_menu(&mut self) {
        self.countdown = None;
        self.anchor = None;
        self.phase = GamePhase::Menu;
        log::info!("Returned to menu");
    }

    /// Score is whole units of distance travelled
    pub fn score(&self) -> u64 {
        self.distance.max(0.0) as u64
    }

    /// Animation time in seconds for the current run
    pub fn time_secs(&self) -> f32 {
        self.time_ticks as f32 * FRAME_SECS
    }

    pub fn web_attached(&self) -> bool {
        self.anchor.is_some()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Scroll both building layers by the current speed, topping them back up
    pub fn scroll_layers(&mut self) {
        let speed = self.scroll_speed;
        world::advance_layer(&mut self.buildings, &self.tuning.foreground, speed, &mut self.rng);
        world::advance_layer(&mut self.skyline, &self.tuning.skyline, speed, &mut self.rng);
    }

    fn generate_layers(&mut self) {
        self.buildings = world::initial_layer(&self.tuning.foreground, &mut self.rng);
        self.skyline = world::initial_layer(&self.tuning.skyline, &mut self.rng);
    }
}
