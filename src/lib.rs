//! RodSpin Engine - rigid rod simulation on a 2D canvas
//!
//! Architecture:
//! - physics/     - rod state and integration
//! - render/      - camera, drawing surface, palette
//! - simulation/  - orchestration core + wasm facade
//! - app/dom      - page bootstrap and frame loop

pub mod physics;
pub mod render;
pub mod simulation;

mod app;
mod dom;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"RodSpin WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use app::mount;
pub use physics::{Rod, Vec2};
pub use render::Camera;
pub use simulation::{SimConfig, World, WorldCore, FRAME_DT};
