//! Looping audio cue over the Web Audio API.
//!
//! The asset is fetched and decoded once in the background. The source node
//! loops forever on a context that starts suspended; `resume`/`suspend` on the
//! context gate what is heard, so the loop picks up where it paused.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::ArrayBuffer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AudioBuffer, AudioContext, Response, window};

use crate::controller::AudioCue;
use crate::error::{SceneError, SceneResult};

struct CueState {
    context: AudioContext,
    ready: bool,
}

pub struct WebAudioCue {
    state: Rc<RefCell<CueState>>,
}

impl WebAudioCue {
    /// Creates the audio context and starts loading `url`. Until the buffer
    /// is decoded and looping, `resume` does nothing.
    pub fn load(url: &str) -> SceneResult<Self> {
        let context = AudioContext::new()?;
        // Promise result is irrelevant; the context is parked until resume().
        let _ = context.suspend()?;
        let state = Rc::new(RefCell::new(CueState { context: context.clone(), ready: false }));

        let loaded = state.clone();
        let url = url.to_string();
        spawn_local(async move {
            match start_loop(&context, &url).await {
                Ok(()) => {
                    loaded.borrow_mut().ready = true;
                    log::info!("audio cue ready: {url}");
                }
                // Scene keeps running silently.
                Err(err) => log::warn!("audio cue {url} unavailable: {err}"),
            }
        });
        Ok(Self { state })
    }
}

impl AudioCue for WebAudioCue {
    fn resume(&mut self) {
        let state = self.state.borrow();
        if !state.ready {
            log::debug!("audio cue not loaded yet, resume skipped");
            return;
        }
        if let Err(err) = state.context.resume() {
            log::warn!("audio resume failed: {}", SceneError::from(err));
        }
    }

    fn suspend(&mut self) {
        let state = self.state.borrow();
        if let Err(err) = state.context.suspend() {
            log::warn!("audio suspend failed: {}", SceneError::from(err));
        }
    }
}

async fn fetch_buffer(context: &AudioContext, url: &str) -> SceneResult<AudioBuffer> {
    let win = window().ok_or(SceneError::NoWindow)?;
    let response: Response = JsFuture::from(win.fetch_with_str(url)).await?.dyn_into()?;
    if !response.ok() {
        return Err(SceneError::audio(format!("GET {url} returned {}", response.status())));
    }
    let bytes: ArrayBuffer = JsFuture::from(response.array_buffer()?).await?.dyn_into()?;
    let decoded = JsFuture::from(context.decode_audio_data(&bytes)?).await?;
    Ok(decoded.dyn_into()?)
}

async fn start_loop(context: &AudioContext, url: &str) -> SceneResult<()> {
    let buffer = fetch_buffer(context, url).await?;
    let source = context.create_buffer_source()?;
    source.set_buffer(Some(&buffer));
    source.set_loop(true);
    source.connect_with_audio_node(&context.destination())?;
    source.start()?;
    Ok(())
}
