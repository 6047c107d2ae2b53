//! Browser bindings
//!
//! JavaScript owns the canvas, the event listeners and the
//! `requestAnimationFrame` loop; it forwards gestures here and draws the JSON
//! snapshot each frame returns. Cancelling the animation frame and calling
//! `shutdown` on unmount leaves nothing pending on the Rust side.

use std::sync::Once;

use wasm_bindgen::prelude::*;

use crate::driver::Simulation;
use crate::sim::{GamePhase, Viewport};
use crate::tuning::Tuning;

static LOGGER: Once = Once::new();

fn init_logging() {
    LOGGER.call_once(|| {
        console_error_panic_hook::set_once();
        // Another logger may already be installed by the host page
        console_log::init_with_level(log::Level::Info).ok();
    });
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebSwing {
    sim: Simulation,
}

#[wasm_bindgen]
impl WebSwing {
    /// Create a game for a canvas of the given size, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebSwing, JsValue> {
        Self::with_tuning(width, height, "{}")
    }

    /// Create a game with a (possibly partial) JSON tuning document
    #[wasm_bindgen(js_name = withTuning)]
    pub fn with_tuning(width: f32, height: f32, tuning_json: &str) -> Result<WebSwing, JsValue> {
        init_logging();
        let tuning = Tuning::from_json(tuning_json).map_err(to_js)?;
        let seed = js_sys::Date::now() as u64;
        let sim = Simulation::new(seed, Viewport::new(width, height), tuning).map_err(to_js)?;
        log::info!("Web Swing ready");
        Ok(WebSwing { sim })
    }

    /// Pointer down / touch start
    pub fn press(&mut self) {
        self.sim.press();
    }

    /// Pointer up / touch end
    pub fn release(&mut self) {
        self.sim.release();
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.sim.resize(Viewport::new(width, height)).map_err(to_js)
    }

    /// Advance one frame; `now_ms` is the `requestAnimationFrame` timestamp
    ///
    /// Returns the snapshot as JSON, or `undefined` after shutdown.
    pub fn frame(&mut self, now_ms: f64) -> Option<String> {
        let snapshot = self.sim.frame(now_ms / 1000.0)?;
        match snapshot.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                None
            }
        }
    }

    /// "Back to menu" from the game-over screen
    #[wasm_bindgen(js_name = returnToMenu)]
    pub fn return_to_menu(&mut self) -> bool {
        self.sim.return_to_menu()
    }

    /// True while on the game-over screen, for hosts that show their own overlay
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.sim.state().phase == GamePhase::GameOver
    }

    pub fn shutdown(&mut self) {
        self.sim.shutdown();
    }
}
