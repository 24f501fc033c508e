//! Sink Scratch core crate.
//!
//! A full-window canvas collects short random arc "scratches" while a key is
//! held, optionally on top of a procedurally drawn sink drain and with a
//! looping scrub sound. The drawing core (`rings`, `scratch`, `controller`)
//! only talks to the [`surface::Surface`] trait so it runs headless in tests;
//! `app` and `audio` bind it to the browser.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod rings;
pub mod rng;
pub mod scratch;
pub mod surface;

mod app;
mod audio;

pub use config::{AudioSettings, SceneConfig, Staging};
pub use controller::{AudioCue, Controller, KeyRelease, Phase, Silent, SurfaceState};
pub use error::{SceneError, SceneResult};
pub use geometry::Point;
pub use rings::{DrainDecor, RingSpec, RingStack, draw_decor, render_rings};
pub use rng::{FastRng, UniformSource};
pub use scratch::{ArcDescriptor, ScratchParams, emit_batch};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Info).ok();
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Bare scratched surface, redrawn on every resize.
#[wasm_bindgen]
pub fn start_scratches() -> Result<(), JsValue> {
    app::start(SceneConfig::scratches())
}

/// Sink drain background; hold space to scratch.
#[wasm_bindgen]
pub fn start_sink() -> Result<(), JsValue> {
    app::start(SceneConfig::sink())
}

#[wasm_bindgen]
pub fn start_sink_with_audio(url: &str) -> Result<(), JsValue> {
    app::start(SceneConfig::sink_with_audio(url))
}

/// Start from a JSON-encoded [`SceneConfig`].
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    app::start(SceneConfig::from_json(json)?)
}
