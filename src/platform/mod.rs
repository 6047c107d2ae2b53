//! Platform abstraction layer
//!
//! The simulation never draws; hosts drive it through these bindings:
//! - `web`: wasm-bindgen handle for a JavaScript canvas renderer

#[cfg(target_arch = "wasm32")]
pub mod web;
