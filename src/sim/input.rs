//! Press/release gestures mapped to web commands
//!
//! Gestures carry no payload; where the player is and what is ahead decides
//! what they do.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Building, GamePhase, GameState, Player, Viewport};
use crate::direction_to;
use crate::tuning::Tuning;

/// A raw gesture from pointer or touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gesture {
    /// Press / touch start
    Start,
    /// Release / touch end
    End,
}

/// What a gesture did to the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// A new run began from the menu
    RunStarted,
    /// Web fired at this point
    Attached(Vec2),
    /// Web released with this velocity change
    Released(Vec2),
    /// Nothing applies in the current state
    Ignored,
}

/// Closest building to the aim point within reach ahead of the player
///
/// Candidates have `x` in `(player.x, player.x + reach]`; among them the one
/// whose `x` is nearest `player.x + aim_ahead` wins.
pub fn find_anchor_building<'a>(
    player: &Player,
    buildings: &'a [Building],
    tuning: &Tuning,
) -> Option<&'a Building> {
    let min_x = player.pos.x;
    let max_x = player.pos.x + tuning.anchor_reach;
    let aim = player.pos.x + tuning.anchor_aim_ahead;
    buildings
        .iter()
        .filter(|b| b.x > min_x && b.x <= max_x)
        .min_by(|a, b| (a.x - aim).abs().total_cmp(&(b.x - aim).abs()))
}

/// Where a freshly fired web attaches
pub fn choose_anchor(
    player: &Player,
    buildings: &[Building],
    viewport: &Viewport,
    tuning: &Tuning,
) -> Vec2 {
    match find_anchor_building(player, buildings, tuning) {
        Some(building) => building.top_center(viewport),
        None => Vec2::new(
            player.pos.x + tuning.fallback_anchor_ahead,
            (player.pos.y - tuning.fallback_anchor_above).max(0.0),
        ),
    }
}

/// Velocity change on release: along `player - anchor`, skipped when they coincide
pub fn release_boost(player_pos: Vec2, anchor: Vec2, tuning: &Tuning) -> Vec2 {
    direction_to(anchor, player_pos)
        .map(|(dir, _)| dir * tuning.release_boost)
        .unwrap_or(Vec2::ZERO)
}

/// Apply a gesture to the game state
pub fn apply_gesture(state: &mut GameState, gesture: Gesture) -> GestureOutcome {
    match (gesture, state.phase) {
        (Gesture::Start, GamePhase::Menu) => {
            state.start_run();
            GestureOutcome::RunStarted
        }
        (Gesture::Start, GamePhase::Playing) if state.anchor.is_none() => {
            let anchor = choose_anchor(
                &state.player,
                &state.buildings,
                &state.viewport,
                &state.tuning,
            );
            state.anchor = Some(anchor);
            log::debug!("Web attached at ({:.1}, {:.1})", anchor.x, anchor.y);
            GestureOutcome::Attached(anchor)
        }
        (Gesture::End, GamePhase::Playing) => match state.anchor.take() {
            Some(anchor) => {
                let boost = release_boost(state.player.pos, anchor, &state.tuning);
                state.player.vel += boost;
                log::debug!("Web released, boost ({:.2}, {:.2})", boost.x, boost.y);
                GestureOutcome::Released(boost)
            }
            None => GestureOutcome::Ignored,
        },
        _ => GestureOutcome::Ignored,
    }
}
