use crate::physics::Rod;
use crate::render::Camera;

use super::config::{DEFAULT_FORCE, DEFAULT_LENGTH, DEFAULT_MASS, DEFAULT_SUBSTEPS, WIDTH_RATIO};
use super::WorldCore;

pub(super) fn create_world_core() -> WorldCore {
    WorldCore {
        rod: Rod::new(DEFAULT_FORCE, DEFAULT_MASS, DEFAULT_LENGTH, WIDTH_RATIO),
        camera: Camera::new(DEFAULT_LENGTH),
        t: 0.0,
        substeps: DEFAULT_SUBSTEPS,
        stopped: true,
        paused: false,
        frame: 0,
    }
}
