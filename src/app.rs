//! Page bootstrap: canvas, control panel wiring and the frame loop.
//!
//! Expected markup: a `#view` canvas, range inputs `#force`, `#mass`,
//! `#length`, `#substeps`, and a `#stopped` checkbox mirroring the run
//! state. A slider's `input` event begins an edit (physics frozen, state
//! reset); its `change` event commits the value and ends the edit.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::simulation::World;

/// Frames between status lines on the console.
const STATUS_EVERY: u64 = 300;

/// Wire the simulation to the page and start the frame loop.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    crate::init();

    let canvas = dom::canvas("view").map_err(|e| JsValue::from_str(&e))?;
    let world = Rc::new(RefCell::new(World::new(canvas)?));

    wire_slider(&world, "force", |w, v| w.set_force(v))?;
    wire_slider(&world, "mass", |w, v| w.set_mass(v))?;
    wire_slider(&world, "length", |w, v| w.set_length(v))?;
    wire_slider(&world, "substeps", |w, v| w.set_substeps(v as u32))?;
    wire_run_toggle(&world)?;
    wire_resize(&world);

    start_frame_loop(world);
    Ok(())
}

fn wire_slider<F>(world: &Rc<RefCell<World>>, id: &str, apply: F) -> Result<(), JsValue>
where
    F: Fn(&mut World, f64) + Copy + 'static,
{
    let slider = dom::input(id).map_err(|e| JsValue::from_str(&e))?;

    // Continuous drag: every movement pauses physics and re-applies the
    // in-flight value.
    let w = world.clone();
    let on_input = Closure::wrap(Box::new(move |e: web_sys::Event| {
        let Some(value) = event_value(&e) else { return };
        let mut w = w.borrow_mut();
        w.begin_edit();
        apply(&mut w, value);
    }) as Box<dyn FnMut(web_sys::Event)>);
    slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    // Drag released: commit the final value and resume.
    let w = world.clone();
    let on_change = Closure::wrap(Box::new(move |e: web_sys::Event| {
        let Some(value) = event_value(&e) else { return };
        let mut w = w.borrow_mut();
        apply(&mut w, value);
        w.end_edit();
    }) as Box<dyn FnMut(web_sys::Event)>);
    slider.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    Ok(())
}

fn event_value(e: &web_sys::Event) -> Option<f64> {
    let target = e.target()?;
    let input: &web_sys::HtmlInputElement = target.unchecked_ref();
    input.value().parse().ok()
}

fn wire_run_toggle(world: &Rc<RefCell<World>>) -> Result<(), JsValue> {
    let toggle = dom::input("stopped").map_err(|e| JsValue::from_str(&e))?;

    let w = world.clone();
    let on_change = Closure::wrap(Box::new(move |e: web_sys::Event| {
        let Some(target) = e.target() else { return };
        let input: &web_sys::HtmlInputElement = target.unchecked_ref();
        w.borrow_mut().set_stopped(input.checked());
    }) as Box<dyn FnMut(web_sys::Event)>);
    toggle.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    Ok(())
}

fn wire_resize(world: &Rc<RefCell<World>>) {
    let w = world.clone();
    let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
        w.borrow_mut().handle_resize();
    }) as Box<dyn FnMut(web_sys::Event)>);
    dom::window()
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .ok();
    on_resize.forget();
}

fn start_frame_loop(world: Rc<RefCell<World>>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let mut frames: u64 = 0;
    let mut window_start = js_sys::Date::now();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        world.borrow_mut().tick();

        frames += 1;
        if frames % STATUS_EVERY == 0 {
            let now = js_sys::Date::now();
            let fps = STATUS_EVERY as f64 * 1000.0 / (now - window_start);
            window_start = now;
            let w = world.borrow();
            web_sys::console::log_1(
                &format!(
                    "t={:.1}s theta={:.2}rad speed={:.2}m/s ({fps:.0} fps)",
                    w.t(),
                    w.theta(),
                    w.speed(),
                )
                .into(),
            );
        }

        // Request next frame
        dom::request_animation_frame(f.borrow().as_ref().unwrap());
    }) as Box<dyn FnMut()>));

    dom::request_animation_frame(g.borrow().as_ref().unwrap());
}
