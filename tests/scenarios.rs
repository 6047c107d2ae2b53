//! End-to-end runs through the frame driver
//!
//! Frame timestamps use exact binary fractions so real-time assertions are
//! not at the mercy of float rounding.

use web_swing::sim::{
    GameOverCause, GamePhase, ObstacleKind, Snapshot, Viewport, obstacle_centered_at,
};
use web_swing::{Simulation, Tuning};

const STEP: f64 = 0.125;
const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn quiet_tuning() -> Tuning {
    Tuning {
        spawn_rate_start: 0.0,
        spawn_rate_step: 0.0,
        ..Tuning::default()
    }
}

fn started(tuning: Tuning) -> (Simulation, f64) {
    let mut sim = Simulation::new(2024, Viewport::new(WIDTH, HEIGHT), tuning).expect("valid setup");
    sim.press();
    let snap = sim.frame(0.0).expect("running");
    assert_eq!(snap.phase, GamePhase::Playing);
    (sim, 0.0)
}

fn frame(sim: &mut Simulation, now: &mut f64) -> Snapshot {
    *now += STEP;
    sim.frame(*now).expect("running")
}

#[test]
fn free_fall_from_start_to_game_over() {
    let mut sim = Simulation::new(1, Viewport::new(WIDTH, HEIGHT), quiet_tuning())
        .expect("valid setup");
    assert_eq!(sim.snapshot().phase, GamePhase::Menu);

    sim.press();
    let snap = sim.frame(0.0).expect("running");
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.distance, 0.0);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.player.pos.x, 100.0);
    assert_eq!(snap.player.pos.y, HEIGHT / 2.0);

    let mut now = 0.0;
    let mut last_y = snap.player.pos.y;
    let mut ticks = 0;
    loop {
        let snap = frame(&mut sim, &mut now);
        ticks += 1;
        assert!(ticks < 1_000, "player never reached the ground");
        assert!(snap.player.pos.y > last_y, "y must strictly increase while falling");
        assert!(snap.player.pos.y <= HEIGHT - 15.0);
        assert!(snap.obstacles.is_empty());
        last_y = snap.player.pos.y;

        if snap.phase == GamePhase::GameOver {
            assert_eq!(snap.player.pos.y, HEIGHT - 15.0);
            assert_eq!(snap.countdown, Some(3));
            assert_eq!(snap.game_over_cause, Some(GameOverCause::Ground));
            break;
        }
        assert_eq!(snap.phase, GamePhase::Playing);
    }
}

#[test]
fn drone_on_player_ends_run_next_frame() {
    let (mut sim, mut now) = started(quiet_tuning());
    let center = sim.state().player.pos;
    sim.state_mut()
        .obstacles
        .push(obstacle_centered_at(1_000, ObstacleKind::Drone, center, 25.0));

    let snap = frame(&mut sim, &mut now);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(
        snap.game_over_cause,
        Some(GameOverCause::Obstacle(ObstacleKind::Drone))
    );
    assert_eq!(snap.countdown, Some(3));

    // No further collision processing or motion once over
    let frozen = frame(&mut sim, &mut now);
    assert_eq!(frozen.player, snap.player);
    assert_eq!(frozen.obstacles, snap.obstacles);
}

#[test]
fn countdown_restarts_after_three_seconds() {
    let (mut sim, mut now) = started(quiet_tuning());
    sim.state_mut().player.pos.y = HEIGHT - 15.5;

    let snap = frame(&mut sim, &mut now);
    assert_eq!(snap.phase, GamePhase::GameOver);
    let game_over_at = now;

    // 23 frames of 1/8 s: 2.875 s on the game-over screen
    let mut seen = vec![3];
    for _ in 0..23 {
        let snap = frame(&mut sim, &mut now);
        assert_eq!(snap.phase, GamePhase::GameOver);
        let remaining = snap.countdown.expect("counting down");
        if seen.last() != Some(&remaining) {
            seen.push(remaining);
        }
    }
    assert_eq!(seen, vec![3, 2, 1]);

    // Exactly 3 s after game over: fresh run
    let snap = frame(&mut sim, &mut now);
    assert_eq!(now - game_over_at, 3.0);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.countdown, None);
    assert_eq!(snap.game_over_cause, None);
    assert_eq!(snap.player.pos.x, 100.0);
    // One tick of the new run has already been played
    assert_eq!(snap.distance, 2.0);
}

#[test]
fn countdown_is_frame_rate_independent() {
    let (mut sim, _) = started(quiet_tuning());
    sim.state_mut().player.pos.y = HEIGHT - 15.5;
    sim.frame(0.0);
    assert_eq!(sim.state().phase, GamePhase::GameOver);

    // One slow frame covering 2.5 s, then quick ones
    sim.frame(2.5);
    assert_eq!(sim.snapshot().countdown, Some(1));
    sim.frame(2.75);
    assert_eq!(sim.state().phase, GamePhase::GameOver);
    sim.frame(3.0);
    assert_eq!(sim.state().phase, GamePhase::Playing);
}

#[test]
fn countdown_cancelled_by_menu_and_shutdown() {
    let (mut sim, mut now) = started(quiet_tuning());
    sim.state_mut().player.pos.y = HEIGHT - 15.5;
    frame(&mut sim, &mut now);
    assert!(sim.return_to_menu());
    for _ in 0..40 {
        frame(&mut sim, &mut now);
    }
    assert_eq!(sim.state().phase, GamePhase::Menu);

    // Start again, end again, then tear down mid-countdown
    sim.press();
    frame(&mut sim, &mut now);
    sim.state_mut().player.pos.y = HEIGHT - 15.5;
    frame(&mut sim, &mut now);
    assert_eq!(sim.state().phase, GamePhase::GameOver);
    sim.shutdown();
    assert!(sim.frame(now + 10.0).is_none());
    assert_eq!(sim.state().phase, GamePhase::GameOver);
    assert!(sim.state().countdown.is_none());
}

#[test]
fn high_score_survives_restart() {
    let (mut sim, mut now) = started(quiet_tuning());
    for _ in 0..10 {
        frame(&mut sim, &mut now);
    }
    let score = sim.snapshot().score;
    assert!(score > 0);

    sim.state_mut().player.pos.y = HEIGHT - 15.5;
    frame(&mut sim, &mut now);
    assert!(sim.return_to_menu());
    sim.press();
    let snap = frame(&mut sim, &mut now);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.high_score, score);
}

#[test]
fn swing_press_and_release() {
    let (mut sim, mut now) = started(quiet_tuning());

    sim.press();
    let snap = frame(&mut sim, &mut now);
    let anchor = snap.anchor.expect("web attached");
    assert!(anchor.x > snap.player.pos.x);

    // Further presses while attached keep the same anchor
    sim.press();
    for _ in 0..3 {
        let snap = frame(&mut sim, &mut now);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.anchor, Some(anchor));
    }

    sim.release();
    let snap = frame(&mut sim, &mut now);
    assert!(snap.anchor.is_none());
}

#[test]
fn resize_feeds_new_bounds_to_spawns() {
    let tuning = Tuning {
        spawn_rate_start: 1.0,
        spawn_rate_max: 1.0,
        ..Tuning::default()
    };
    let (mut sim, mut now) = started(tuning);
    sim.resize(Viewport::new(1600.0, 900.0)).expect("valid resize");
    let snap = frame(&mut sim, &mut now);
    let newest = snap.obstacles.last().expect("spawned one");
    assert_eq!(newest.pos.x, 1650.0);
    assert_eq!(snap.viewport, Viewport::new(1600.0, 900.0));
}

#[test]
fn same_seed_same_game() {
    let run = || {
        let mut sim = Simulation::new(31337, Viewport::new(1024.0, 768.0), Tuning::default())
            .expect("valid setup");
        sim.press();
        let mut now = 0.0;
        let mut last = sim.frame(now).expect("running");
        for i in 0..600 {
            if i % 50 == 10 {
                sim.press();
            }
            if i % 50 == 35 {
                sim.release();
            }
            now += STEP;
            last = sim.frame(now).expect("running");
        }
        last
    };
    assert_eq!(run(), run());
}
