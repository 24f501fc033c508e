// Browser tests for the canvas backend: `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use sink_scratch::surface::{CanvasSurface, Surface};
use sink_scratch::{Point, SceneConfig, render_rings};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let c: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    c.set_width(width);
    c.set_height(height);
    c
}

#[wasm_bindgen_test]
fn sink_background_renders_on_canvas() {
    let mut surface = CanvasSurface::new(canvas(200, 200)).unwrap();
    let rings = SceneConfig::sink().rings.unwrap();
    render_rings(&mut surface, Point::new(100.0, 100.0), &rings).unwrap();
}

#[wasm_bindgen_test]
fn negative_arc_radius_surfaces_as_error() {
    let mut surface = CanvasSurface::new(canvas(10, 10)).unwrap();
    surface.begin_path();
    assert!(surface.arc(Point::new(5.0, 5.0), -1.0, 0.0, 1.0).is_err());
}

// Auto-repeat keydowns of the control key must still be cancelled, or a held
// space bar scrolls the page.
#[wasm_bindgen_test]
fn repeated_control_key_is_still_cancelled() {
    sink_scratch::start_sink().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    let init = KeyboardEventInit::new();
    init.set_key(" ");
    init.set_repeat(true);
    init.set_cancelable(true);
    let evt = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&evt).unwrap();
    assert!(evt.default_prevented());
}
