//! Simulation parameters as JSON.

use serde::{Deserialize, Serialize};

use super::WorldCore;

pub(super) const DEFAULT_FORCE: f64 = 1.0; // Newtons
pub(super) const DEFAULT_MASS: f64 = 1.0; // kilograms
pub(super) const DEFAULT_LENGTH: f64 = 1.0; // meters
pub(super) const DEFAULT_SUBSTEPS: u32 = 1;
pub(super) const WIDTH_RATIO: f64 = 0.1;

/// Startup parameters for the simulation, loadable from a JSON document.
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub force: f64,
    pub mass: f64,
    pub length: f64,
    pub substeps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            force: DEFAULT_FORCE,
            mass: DEFAULT_MASS,
            length: DEFAULT_LENGTH,
            substeps: DEFAULT_SUBSTEPS,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("bad sim config: {e}"))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Apply a config through the boundary clamps, then restart from zero
/// state.
pub(super) fn apply(world: &mut WorldCore, cfg: &SimConfig) {
    world.set_force(cfg.force);
    world.set_mass(cfg.mass);
    world.set_length(cfg.length);
    world.set_substeps(cfg.substeps);
    world.reset();
}

pub(super) fn snapshot(world: &WorldCore) -> SimConfig {
    SimConfig {
        force: world.rod.force,
        mass: world.rod.mass,
        length: world.rod.length,
        substeps: world.substeps,
    }
}
