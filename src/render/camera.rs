use crate::physics::Rod;

use super::color;
use super::surface::Surface;

/// Zoom level for a one meter rod, in pixels per meter.
const REFERENCE_PPM: f64 = 300.0;
/// Grid cell size in meters.
const GRID_SPACING: f64 = 0.125;

/// Maps world space (meters, y up) to screen space (CSS pixels, y down),
/// centered on a focus point.
///
/// `set_scale` must run before `set_pos` each frame: the pixel offsets
/// derive from the current scale.
pub struct Camera {
    x: f64,
    y: f64,
    x_offset: f64,
    y_offset: f64,
    grid_spacing: f64,
    /// Pixels per meter.
    pub ppm: f64,
}

impl Camera {
    pub fn new(rod_length: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
            grid_spacing: GRID_SPACING,
            ppm: REFERENCE_PPM / rod_length,
        }
    }

    /// Recompute pixels-per-meter: reference zoom scaled down for long
    /// rods, capped at half the viewport height so the rod always fits.
    pub fn set_scale(&mut self, viewport_h: f64, rod_length: f64) {
        self.ppm = (REFERENCE_PPM / rod_length).min(viewport_h / 2.0);
    }

    /// Move the focus and recompute the pixel offsets that center the
    /// viewport on it.
    pub fn set_pos(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) {
        self.x = x;
        self.y = y;
        self.x_offset = x * self.ppm - viewport_w / 2.0;
        self.y_offset = -y * self.ppm - viewport_h / 2.0;
    }

    /// World-space focus point the view is centered on.
    pub fn focus(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Project a world point to screen pixels.
    pub fn to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        (wx * self.ppm - self.x_offset, -wy * self.ppm - self.y_offset)
    }

    /// Grid cell size and phase for the current focus, in pixels.
    /// Both phases fall in (-cell, 0], so the grid scrolls continuously
    /// as the focus moves.
    pub fn grid_layout(&self) -> (f64, f64, f64) {
        let cell = self.ppm * self.grid_spacing;
        (
            cell,
            -self.x_offset.rem_euclid(cell),
            -self.y_offset.rem_euclid(cell),
        )
    }

    pub fn draw_grid(&self, surface: &Surface) {
        let (cell, x_phase, y_phase) = self.grid_layout();
        surface.draw_grid(cell, x_phase, y_phase, color::GRID);
    }

    /// Draw the rod scene: body rectangle, predicted-velocity arrow,
    /// measured-velocity arrow, center-of-mass marker, in that order.
    pub fn draw_rod(&self, rod: &Rod, surface: &Surface) {
        let (cx, cy) = self.to_screen(rod.pos.x, rod.pos.y);
        let expected = rod.expected_speed();

        surface.draw_rotated_rect(
            cx,
            cy,
            rod.length * self.ppm,
            rod.width * self.ppm,
            rod.theta,
            color::ROD_BODY,
        );

        // The predicted magnitude points along a fixed display diagonal;
        // only its length carries information.
        let diag = std::f64::consts::SQRT_2 / 2.0;
        surface.draw_arrow(
            cx,
            cy,
            cx - expected * diag * self.ppm,
            cy - expected * diag * self.ppm,
            rod.width * self.ppm / 3.0,
            rod.width * self.ppm / 2.0,
            color::EXPECTED_VEL,
        );

        surface.draw_arrow(
            cx,
            cy,
            cx + rod.vel.x * self.ppm,
            cy - rod.vel.y * self.ppm,
            rod.width * self.ppm / 3.0,
            rod.width * self.ppm / 2.0,
            color::ACTUAL_VEL,
        );

        surface.draw_circle(cx, cy, rod.width * self.ppm / 6.0, color::CENTER_OF_MASS);
    }
}
