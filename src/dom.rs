use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, Window};

pub fn window() -> Window {
    web_sys::window().expect("no global window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

pub fn canvas(id: &str) -> Result<HtmlCanvasElement, String> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| format!("no #{id} canvas"))?
        .dyn_into()
        .map_err(|_| format!("#{id} is not a canvas"))
}

pub fn input(id: &str) -> Result<HtmlInputElement, String> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| format!("no #{id} input"))?
        .dyn_into()
        .map_err(|_| format!("#{id} is not an input"))
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("requestAnimationFrame failed");
}
