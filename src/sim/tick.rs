//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is
//! one animation frame: gestures, player physics, obstacle motion, world
//! scroll, spawning, then collisions.

use super::collision::detect_collisions;
use super::input::{Gesture, GestureOutcome, apply_gesture};
use super::physics::{advance_obstacles, integrate_player};
use super::spawner::spawn_step;
use super::state::{GameOverCause, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Gestures received since the previous tick, oldest first
    pub gestures: Vec<Gesture>,
}

impl TickInput {
    pub fn with(gesture: Gesture) -> Self {
        Self {
            gestures: vec![gesture],
        }
    }
}

/// Advance the game state by one tick
///
/// Returns the gestures this tick did not apply. A run start ends the tick,
/// so anything queued after it belongs to the next one.
pub fn tick<'a>(state: &mut GameState, input: &'a TickInput) -> &'a [Gesture] {
    for (i, &gesture) in input.gestures.iter().enumerate() {
        // A fresh run starts on the next tick, from exactly the reset state
        if apply_gesture(state, gesture) == GestureOutcome::RunStarted {
            return &input.gestures[i + 1..];
        }
    }

    // Menu and game over are frozen
    if state.phase != GamePhase::Playing {
        return &[];
    }

    state.time_ticks += 1;
    let time_secs = state.time_secs();

    // --- PLAYER ---
    let step = integrate_player(
        &mut state.player,
        state.anchor,
        &state.viewport,
        &state.tuning,
    );
    if step.grounded {
        state.end_run(GameOverCause::Ground);
        return &[];
    }

    // --- OBSTACLE MOTION ---
    advance_obstacles(&mut state.obstacles, time_secs, &state.viewport);

    // --- WORLD SCROLL ---
    let speed = state.scroll_speed;
    state.scroll_layers();
    state.distance += speed;
    state.scroll_speed += state.tuning.scroll_speed_step;
    state.high_score = state.high_score.max(state.score());

    // --- SPAWNING ---
    spawn_step(state);

    // --- COLLISIONS ---
    detect_collisions(state);

    log::trace!(
        "tick {} pos=({:.1}, {:.1}) distance={:.1} obstacles={}",
        state.time_ticks,
        state.player.pos.x,
        state.player.pos.y,
        state.distance,
        state.obstacles.len()
    );
    &[]
}
