use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::color;

/// The canvas never takes more than this share of the window height.
const MAX_HEIGHT_RATIO: f64 = 0.8;

fn window() -> web_sys::Window {
    web_sys::window().expect("no global window")
}

fn device_pixel_ratio() -> f64 {
    window().device_pixel_ratio()
}

/// 2D drawing surface over a canvas element.
///
/// `width`/`height` are CSS pixels; the backing store is scaled by the
/// device pixel ratio so strokes stay crisp on high-DPI screens.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    pixel_ratio: f64,
}

impl Surface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context")?;

        let mut surface = Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        };
        surface.auto_resize();

        web_sys::console::log_1(
            &format!(
                "surface: {}x{} @{}x",
                surface.width, surface.height, surface.pixel_ratio
            )
            .into(),
        );

        Ok(surface)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Fit the canvas to its parent: full parent width (window width when
    /// detached), at most 80% of the window height, never taller than wide.
    pub fn auto_resize(&mut self) {
        let win = window();
        let width = match self.canvas.parent_element() {
            Some(parent) => parent.client_width() as f64,
            None => win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0),
        };
        let inner_h = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        let height = (inner_h * MAX_HEIGHT_RATIO).ceil().min(width);

        let style = self.canvas.style();
        style.set_property("width", &format!("{width}px")).ok();
        style.set_property("height", &format!("{height}px")).ok();
        self.width = width;
        self.height = height;

        // Resizing the backing store resets the context transform
        self.pixel_ratio = device_pixel_ratio();
        self.canvas.set_width((width * self.pixel_ratio).floor() as u32);
        self.canvas.set_height((height * self.pixel_ratio).floor() as u32);
        self.ctx
            .set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0)
            .ok();
    }

    /// Visibility guard so ticks can skip physics and drawing entirely
    /// while the canvas is scrolled off screen.
    pub fn in_view(&self) -> bool {
        let rect = self.canvas.get_bounding_client_rect();
        let inner_h = window().inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        rect.bottom() > 0.0 && rect.top() < inner_h
    }

    pub fn fill_background(&self, rgb: u32) {
        self.ctx.set_fill_style_str(&color::to_css(rgb));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    /// Vertical and horizontal line field. The phase offsets shift the
    /// whole field by a sub-cell amount so the grid scrolls instead of
    /// snapping; lines start two cells early to cover the shifted edge.
    pub fn draw_grid(&self, spacing: f64, x_offset: f64, y_offset: f64, rgb: u32) {
        if spacing <= 0.0 {
            return;
        }
        let vert_lines = (self.width / spacing).ceil() as i32 + 3;
        let horiz_lines = (self.height / spacing).ceil() as i32 + 3;

        self.ctx.set_stroke_style_str(&color::to_css(rgb));
        self.ctx.set_line_width(2.0);
        self.ctx.begin_path();
        for i in 0..horiz_lines {
            let y = i as f64 * spacing - 2.0 * spacing + y_offset;
            self.ctx.move_to(0.0, y);
            self.ctx.line_to(self.width, y);
        }
        for i in 0..vert_lines {
            let x = i as f64 * spacing - 2.0 * spacing + x_offset;
            self.ctx.move_to(x, 0.0);
            self.ctx.line_to(x, self.height);
        }
        self.ctx.close_path();
        self.ctx.stroke();
    }

    /// Filled circle with a black outline.
    pub fn draw_circle(&self, x: f64, y: f64, radius: f64, rgb: u32) {
        self.ctx.begin_path();
        self.ctx.move_to(x + radius, y);
        self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU).ok();
        self.ctx.set_fill_style_str(&color::to_css(rgb));
        self.ctx.fill();
        self.ctx.set_line_width(2.0);
        self.ctx.set_stroke_style_str(color::OUTLINE);
        self.ctx.stroke();
        self.ctx.close_path();
    }

    /// Filled arrow from tail to head: a quad shaft plus a triangular head
    /// with a 70-degree tip.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arrow(
        &self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        thickness: f64,
        head_size: f64,
        rgb: u32,
    ) {
        let theta = (y1 - y0).atan2(x1 - x0);
        let (st, ct) = theta.sin_cos();
        // Where the shaft meets the head
        let base_x = x1 - head_size * ct;
        let base_y = y1 - head_size * st;

        self.ctx.set_stroke_style_str(color::OUTLINE);
        self.ctx.set_fill_style_str(&color::to_css(rgb));
        self.ctx.set_line_width(2.0);

        self.ctx.begin_path();
        self.ctx.move_to(x0 - thickness * st / 2.0, y0 + thickness * ct / 2.0);
        self.ctx.line_to(x0 + thickness * st / 2.0, y0 - thickness * ct / 2.0);
        self.ctx.line_to(base_x + thickness * st / 2.0, base_y - thickness * ct / 2.0);
        self.ctx.line_to(base_x - thickness * st / 2.0, base_y + thickness * ct / 2.0);
        self.ctx.line_to(x0 - thickness * st / 2.0, y0 + thickness * ct / 2.0);
        self.ctx.stroke();
        self.ctx.fill();
        self.ctx.close_path();

        let half_width = 2.0 * head_size / (7.0 * std::f64::consts::PI / 18.0).tan();
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(base_x - half_width * st, base_y + half_width * ct);
        self.ctx.line_to(base_x + half_width * st, base_y - half_width * ct);
        self.ctx.line_to(x1, y1);
        self.ctx.fill();
        self.ctx.stroke();
        self.ctx.close_path();
    }

    /// Center-anchored filled rectangle rotated by `theta` (world angle,
    /// so the sign flips for the y-down canvas). Outline width scales with
    /// the rectangle width.
    pub fn draw_rotated_rect(&self, x: f64, y: f64, length: f64, width: f64, theta: f64, rgb: u32) {
        let (s, c) = (-theta).sin_cos();
        let (hl, hw) = (length / 2.0, width / 2.0);
        let p1 = (x + hl * c - hw * s, y + hl * s + hw * c);
        let p2 = (x + hl * c + hw * s, y + hl * s - hw * c);
        let p3 = (x - hl * c + hw * s, y - hl * s - hw * c);
        let p4 = (x - hl * c - hw * s, y - hl * s + hw * c);

        self.ctx.begin_path();
        self.ctx.move_to(p1.0, p1.1);
        self.ctx.line_to(p2.0, p2.1);
        self.ctx.line_to(p3.0, p3.1);
        self.ctx.line_to(p4.0, p4.1);
        self.ctx.line_to(p1.0, p1.1);
        self.ctx.line_to(p2.0, p2.1);
        self.ctx.set_fill_style_str(&color::to_css(rgb));
        self.ctx.fill();
        self.ctx.set_line_width((width / 6.0).ceil());
        self.ctx.set_stroke_style_str(color::OUTLINE);
        self.ctx.stroke();
        self.ctx.close_path();
    }
}
