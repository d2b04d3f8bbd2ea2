//! Simulation orchestration.
//!
//! `WorldCore` owns the rod, the camera and the loop state and is plain
//! Rust; the wasm facade in `facade.rs` owns the canvas surface on top of
//! it. All parameter writes go through the boundary setters in
//! `init/settings.rs` - the controls never alias physics state.

use crate::physics::Rod;
use crate::render::Camera;

#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use config::SimConfig;
pub use facade::World;
pub use step::FRAME_DT;

/// The simulation core: one rod, one camera, one clock.
pub struct WorldCore {
    rod: Rod,
    camera: Camera,

    // State
    t: f64,
    substeps: u32,
    stopped: bool,
    paused: bool,
    frame: u64,
}

impl WorldCore {
    pub fn new() -> Self {
        init::create_world_core()
    }

    pub fn rod(&self) -> &Rod {
        &self.rod
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Elapsed simulated time in seconds.
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Resume the loop. Physics continues from the exact stopped state;
    /// only an edit resets it.
    pub fn start(&mut self) {
        self.stopped = false;
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    /// A continuous parameter drag started: freeze physics and zero the
    /// state so mid-drag values never integrate.
    pub fn begin_edit(&mut self) {
        self.paused = true;
        self.reset();
    }

    /// The drag was released: unfreeze and apply the final value from a
    /// clean state.
    pub fn end_edit(&mut self) {
        self.paused = false;
        self.reset();
    }

    /// Advance one display frame of physics (1/60 s across `substeps`).
    pub fn step_frame(&mut self) {
        step::step_frame(self);
    }

    pub fn reset(&mut self) {
        self.t = 0.0;
        self.rod.reset();
    }

    pub fn set_force(&mut self, force: f64) {
        settings::set_force(self, force);
    }

    pub fn set_mass(&mut self, mass: f64) {
        settings::set_mass(self, mass);
    }

    pub fn set_length(&mut self, length: f64) {
        settings::set_length(self, length);
    }

    pub fn set_substeps(&mut self, substeps: u32) {
        settings::set_substeps(self, substeps);
    }

    pub fn force(&self) -> f64 {
        self.rod.force
    }

    pub fn mass(&self) -> f64 {
        self.rod.mass
    }

    pub fn length(&self) -> f64 {
        self.rod.length
    }

    /// Load simulation parameters from a JSON document. Values pass
    /// through the same clamps as the sliders, then the state restarts.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let cfg = SimConfig::from_json(json)?;
        config::apply(self, &cfg);
        Ok(())
    }

    pub fn config_json(&self) -> String {
        config::snapshot(self).to_json()
    }

    /// Camera pass for one frame: scale from the current rod length,
    /// focus on the rod's center of mass.
    pub fn update_camera(&mut self, viewport_w: f64, viewport_h: f64) {
        self.camera.set_scale(viewport_h, self.rod.length);
        self.camera
            .set_pos(self.rod.pos.x, self.rod.pos.y, viewport_w, viewport_h);
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
