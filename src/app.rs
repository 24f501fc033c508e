//! Browser wiring: full-window canvas, resize and key listeners, the frame
//! loop and the one-shot suspend timers. All state lives in the controller
//! stored in `SCENE`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window, window};

use crate::audio::WebAudioCue;
use crate::config::SceneConfig;
use crate::controller::{AudioCue, Controller, KeyRelease, Silent};
use crate::error::{SceneError, SceneResult};
use crate::rng::FastRng;
use crate::surface::CanvasSurface;

const CANVAS_ID: &str = "sink-scratch-canvas";

type Scene = Controller<CanvasSurface, FastRng>;

thread_local! {
    static SCENE: RefCell<Option<Scene>> = const { RefCell::new(None) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn start(config: SceneConfig) -> Result<(), JsValue> {
    let win = window().ok_or(SceneError::NoWindow)?;
    let doc = win.document().ok_or(SceneError::NoDocument)?;

    // Create / reuse the full-window canvas
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        c.set_attribute("style", "position:fixed; left:0; top:0; display:block;").ok();
        doc.body().ok_or(SceneError::NoDocument)?.append_child(&c)?;
        c
    };

    let audio: Box<dyn AudioCue> = match &config.audio {
        Some(settings) => match WebAudioCue::load(&settings.url) {
            Ok(cue) => Box::new(cue),
            Err(err) => {
                log::warn!("audio disabled: {err}");
                Box::new(Silent)
            }
        },
        None => Box::new(Silent),
    };

    let scene = Controller::new(CanvasSurface::new(canvas)?, FastRng::from_entropy(), audio, config);
    let replaced = SCENE.with(|cell| cell.replace(Some(scene)));
    fit_to_window(&win)?;

    // Listeners and the frame loop belong to the first start; later starts
    // only swap the controller they drive.
    if replaced.is_some() {
        log::info!("scene restarted");
        return Ok(());
    }

    {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = window() {
                if let Err(err) = fit_to_window(&w) {
                    log::warn!("resize redraw failed: {err}");
                }
            }
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let key = evt.key();
            with_scene(|scene| {
                if key == scene.config().key {
                    // Space would otherwise scroll the page, repeats included.
                    evt.prevent_default();
                }
                if !evt.repeat() {
                    scene.key_down(&key, evt.time_stamp());
                }
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let key = evt.key();
            let release = with_scene(|scene| scene.key_up(&key, evt.time_stamp()));
            if let Some(KeyRelease::SuspendAfter(wait_ms)) = release {
                schedule_deferred_suspend(wait_ms);
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_frame_loop();
    log::info!("scene started");
    Ok(())
}

fn with_scene<T>(f: impl FnOnce(&mut Scene) -> T) -> Option<T> {
    SCENE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn fit_to_window(win: &Window) -> SceneResult<()> {
    let width = win.inner_width()?.as_f64().unwrap_or(0.0).floor();
    let height = win.inner_height()?.as_f64().unwrap_or(0.0).floor();
    with_scene(|scene| {
        scene.surface_mut().set_size(width as u32, height as u32);
        scene.resize(width, height)
    })
    .unwrap_or(Ok(()))
}

// Fire-once; a timer that lands after the key was pressed again is a no-op.
fn schedule_deferred_suspend(wait_ms: f64) {
    let Some(win) = window() else { return };
    let callback = Closure::once_into_js(move || {
        with_scene(|scene| scene.deferred_suspend());
    });
    if let Err(err) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        wait_ms.ceil() as i32,
    ) {
        log::warn!("could not arm suspend timer: {}", SceneError::from(err));
    }
}

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(Err(err)) = with_scene(|scene| scene.tick()) {
            log::warn!("frame skipped: {err}");
        }
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
