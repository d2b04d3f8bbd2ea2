use super::WorldCore;

/// Nominal display frame timestep, seconds. Ticks are assumed to arrive
/// at the display refresh rate; the clock is not wall-clock synchronized.
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// One display frame of physics, subdivided into equal substeps for
/// integration accuracy.
pub(super) fn step_frame(world: &mut WorldCore) {
    world.t += FRAME_DT;
    let dt = FRAME_DT / world.substeps as f64;
    for _ in 0..world.substeps {
        world.rod.step(dt);
    }
    world.frame += 1;
}
