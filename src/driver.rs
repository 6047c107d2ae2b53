//! Simulation driver
//!
//! Owns the one [`GameState`], buffers gestures between frames, runs exactly
//! one tick per frame and keeps the auto-restart countdown on real time.
//! Hosts call [`Simulation::frame`] from their animation-frame callback and
//! draw the returned [`Snapshot`].

use crate::error::{SimError, SimResult};
use crate::sim::{GamePhase, GameState, Gesture, Snapshot, TickInput, Viewport, tick};
use crate::tuning::Tuning;

/// Frame-driven owner of a running game
#[derive(Debug)]
pub struct Simulation {
    state: GameState,
    /// Gestures received since the last frame
    input: TickInput,
    /// Timestamp of the previous frame (seconds)
    last_time: Option<f64>,
    running: bool,
}

impl Simulation {
    /// Create a simulation on the menu screen
    ///
    /// Fails fast on an unusable viewport or tuning.
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> SimResult<Self> {
        check_viewport(viewport)?;
        tuning.validate()?;
        log::info!(
            "Simulation initialized with seed {} ({}x{})",
            seed,
            viewport.width,
            viewport.height
        );
        Ok(Self {
            state: GameState::new(seed, viewport, tuning),
            input: TickInput::default(),
            last_time: None,
            running: true,
        })
    }

    /// Queue a press; applied at the start of the next frame
    pub fn press(&mut self) {
        self.input.gestures.push(Gesture::Start);
    }

    /// Queue a release; applied at the start of the next frame
    pub fn release(&mut self) {
        self.input.gestures.push(Gesture::End);
    }

    /// Feed new viewport bounds to subsequent ticks without touching the run
    pub fn resize(&mut self, viewport: Viewport) -> SimResult<()> {
        if let Err(err) = check_viewport(viewport) {
            log::warn!("Ignoring resize: {}", err);
            return Err(err);
        }
        self.state.viewport = viewport;
        log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Advance one frame
    ///
    /// `now_secs` is the host's frame timestamp. Returns `None` once the
    /// simulation has been shut down.
    pub fn frame(&mut self, now_secs: f64) -> Option<Snapshot> {
        if !self.running {
            log::warn!("Frame requested after shutdown");
            return None;
        }

        let elapsed = match self.last_time {
            Some(last) => (now_secs - last).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now_secs);

        // Time since the last frame belongs to the game-over screen it was spent on
        self.advance_countdown(elapsed);

        let input = std::mem::take(&mut self.input);
        // Gestures behind a run start wait for the next frame
        self.input.gestures = tick(&mut self.state, &input).to_vec();

        Some(Snapshot::capture(&self.state))
    }

    /// Leave the game-over screen for the menu, cancelling the auto-restart
    ///
    /// Returns false (and does nothing) outside `GameOver`.
    pub fn return_to_menu(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            return false;
        }
        self.input = TickInput::default();
        self.state.return_to_menu();
        true
    }

    /// Stop the loop for good: pending gestures and countdown are dropped
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.input = TickInput::default();
        self.state.countdown = None;
        log::info!("Simulation shut down");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios (placing obstacles, teleporting the player)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn advance_countdown(&mut self, elapsed: f64) {
        if self.state.phase != GamePhase::GameOver {
            return;
        }
        let expired = match self.state.countdown.as_mut() {
            Some(countdown) => countdown.advance(elapsed),
            None => false,
        };
        if expired {
            log::info!("Auto-restarting");
            self.state.start_run();
        }
    }
}

fn check_viewport(viewport: Viewport) -> SimResult<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(SimError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
