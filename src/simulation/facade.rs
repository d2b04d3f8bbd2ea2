use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::render::{color, Surface};

use super::WorldCore;

/// Canvas-backed simulation world exposed to the page.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    surface: Surface,
}

#[wasm_bindgen]
impl World {
    /// Create a world rendering into the given canvas and paint the
    /// initial frame.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<World, JsValue> {
        let surface = Surface::new(canvas).map_err(|e| JsValue::from_str(&e))?;
        let mut world = World {
            core: WorldCore::new(),
            surface,
        };
        world.render();
        Ok(world)
    }

    /// One display frame: physics (unless an edit has it paused) plus a
    /// redraw. Skipped entirely while stopped or scrolled off screen.
    pub fn tick(&mut self) {
        if self.core.is_stopped() {
            return;
        }
        if !self.surface.in_view() {
            return;
        }
        if !self.core.is_paused() {
            self.core.step_frame();
        }
        self.render();
    }

    /// Full redraw: background, grid, rod with both velocity arrows and
    /// the center-of-mass marker.
    pub fn render(&mut self) {
        self.surface.fill_background(color::BACKGROUND);
        self.core
            .update_camera(self.surface.width(), self.surface.height());
        self.core.camera().draw_grid(&self.surface);
        self.core.camera().draw_rod(self.core.rod(), &self.surface);
    }

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.core.is_stopped()
    }

    #[wasm_bindgen(setter)]
    pub fn set_stopped(&mut self, stopped: bool) {
        self.core.set_stopped(stopped);
    }

    /// A slider drag started: freeze physics and restart from zero state,
    /// keeping the view live so the edit is visible.
    pub fn begin_edit(&mut self) {
        self.core.begin_edit();
        self.render();
    }

    /// The drag finished: unfreeze and restart with the final value.
    pub fn end_edit(&mut self) {
        self.core.end_edit();
        self.render();
    }

    pub fn set_force(&mut self, force: f64) {
        self.core.set_force(force);
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.core.set_mass(mass);
    }

    pub fn set_length(&mut self, length: f64) {
        self.core.set_length(length);
    }

    pub fn set_substeps(&mut self, substeps: u32) {
        self.core.set_substeps(substeps);
    }

    #[wasm_bindgen(getter)]
    pub fn t(&self) -> f64 {
        self.core.t()
    }

    #[wasm_bindgen(getter)]
    pub fn force(&self) -> f64 {
        self.core.force()
    }

    #[wasm_bindgen(getter)]
    pub fn mass(&self) -> f64 {
        self.core.mass()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> f64 {
        self.core.length()
    }

    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 {
        self.core.substeps()
    }

    pub fn theta(&self) -> f64 {
        self.core.rod().theta
    }

    pub fn omega(&self) -> f64 {
        self.core.rod().omega
    }

    /// Measured speed of the center of mass.
    pub fn speed(&self) -> f64 {
        self.core.rod().speed()
    }

    /// Closed-form steady-state speed for the current parameters.
    pub fn expected_speed(&self) -> f64 {
        self.core.rod().expected_speed()
    }

    /// Load simulation parameters from a JSON document.
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        self.render();
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Refit the canvas after a window resize and repaint.
    pub fn handle_resize(&mut self) {
        self.surface.auto_resize();
        self.render();
    }
}
