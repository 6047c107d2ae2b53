//! Web Swing entry point
//!
//! The browser build is the library, driven by a JavaScript host through
//! `platform::web`. The native binary plays a headless game on autopilot,
//! which is handy for smoke runs and trying out tuning files:
//!
//! ```text
//! RUST_LOG=info web-swing [seed] [tuning.json]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;
    use std::time::{SystemTime, UNIX_EPOCH};

    use web_swing::sim::{GamePhase, Snapshot, Viewport};
    use web_swing::{Simulation, Tuning};

    /// Two minutes of play at 60 fps
    const MAX_FRAMES: u32 = 60 * 120;
    const FRAME_SECS: f64 = 1.0 / 60.0;
    const VIEWPORT: (f32, f32) = (1280.0, 720.0);
    /// Longest swing before the autopilot lets go
    const MAX_HOLD_FRAMES: u32 = 40;

    /// Crude swinger: grab a web when falling through the lower half,
    /// let go after a while or once high enough
    #[derive(Debug, Default)]
    struct Autopilot {
        held_frames: u32,
    }

    impl Autopilot {
        fn steer(&mut self, sim: &mut Simulation, snap: &Snapshot) {
            let height = snap.viewport.height;
            let player = snap.player;
            match snap.anchor {
                None if player.vel.y > 0.0 && player.pos.y > height * 0.5 => {
                    sim.press();
                    self.held_frames = 0;
                }
                Some(_) => {
                    self.held_frames += 1;
                    if self.held_frames >= MAX_HOLD_FRAMES || player.pos.y < height * 0.3 {
                        sim.release();
                    }
                }
                None => {}
            }
        }
    }

    pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
        let seed = match args.first() {
            Some(arg) => arg.parse()?,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
        };
        let tuning = match args.get(1) {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };

        let mut sim = Simulation::new(seed, Viewport::new(VIEWPORT.0, VIEWPORT.1), tuning)?;
        let mut pilot = Autopilot::default();

        // Leave the menu
        sim.press();

        let mut last = None;
        for frame in 0..MAX_FRAMES {
            let Some(snap) = sim.frame(frame as f64 * FRAME_SECS) else {
                break;
            };
            if snap.phase == GamePhase::GameOver {
                log::info!(
                    "Run ended after {} frames: {:?}",
                    frame,
                    snap.game_over_cause
                );
                last = Some(snap);
                break;
            }
            pilot.steer(&mut sim, &snap);
            last = Some(snap);
        }
        sim.shutdown();

        if let Some(snap) = last {
            log::info!(
                "Score {} (high {}), speed {:.2}, {} obstacles on screen",
                snap.score,
                snap.high_score,
                snap.speed,
                snap.obstacles.len()
            );
            println!("{}", snap.to_json()?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Web Swing (native, headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = headless::run(&args) {
        log::error!("{}", e);
        eprintln!("web-swing: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the `WebSwing` handle, this is just to satisfy the compiler
}
