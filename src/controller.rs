//! Top-level scene controller: surface state, the Idle/Active machine and
//! the per-frame step.
//!
//! The controller owns no timers. The host calls [`Controller::tick`] once per
//! display refresh, forwards resize and key events, and arms a one-shot timer
//! whenever [`Controller::key_up`] asks for a deferred suspend.

use crate::config::{SceneConfig, Staging};
use crate::error::SceneResult;
use crate::geometry::Point;
use crate::rings::{draw_decor, render_rings};
use crate::rng::{FastRng, UniformSource};
use crate::scratch::emit_batch;
use crate::surface::Surface;

/// Looping audio gated by resume/suspend so playback position survives toggles.
pub trait AudioCue {
    fn resume(&mut self);
    fn suspend(&mut self);
}

/// Cue for configurations without audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioCue for Silent {
    fn resume(&mut self) {}
    fn suspend(&mut self) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Active,
}

/// What the host must do after a key release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyRelease {
    /// Not the control key, or not active.
    Ignored,
    /// Audio already suspended.
    Suspended,
    /// Call [`Controller::deferred_suspend`] after this many milliseconds.
    SuspendAfter(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceState {
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl SurfaceState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, center: Point::new(width / 2.0, height / 2.0) }
    }
}

pub struct Controller<S, R = FastRng> {
    surface: S,
    rng: R,
    audio: Box<dyn AudioCue>,
    config: SceneConfig,
    state: SurfaceState,
    phase: Phase,
    first_activation_ms: Option<f64>,
    min_cue_served: bool,
}

impl<S: Surface, R: UniformSource> Controller<S, R> {
    pub fn new(surface: S, rng: R, audio: Box<dyn AudioCue>, config: SceneConfig) -> Self {
        Self {
            surface,
            rng,
            audio,
            config,
            state: SurfaceState::default(),
            phase: Phase::Idle,
            first_activation_ms: None,
            min_cue_served: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn surface_state(&self) -> SurfaceState {
        self.state
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// New surface dimensions: the old background is stale, so redraw it.
    /// The active flag is left alone.
    pub fn resize(&mut self, width: f64, height: f64) -> SceneResult<()> {
        self.state = SurfaceState::new(width, height);
        log::debug!("surface resized to {width}x{height}");
        self.reset()
    }

    /// Full clear followed by the static background.
    pub fn reset(&mut self) -> SceneResult<()> {
        let SurfaceState { width, height, center } = self.state;
        self.surface.clear(width, height);
        if let Some(rings) = &self.config.rings {
            render_rings(&mut self.surface, center, rings)?;
        }
        if let Some(decor) = &self.config.decor {
            draw_decor(&mut self.surface, center, decor)?;
        }
        if self.config.staging == Staging::Immediate {
            emit_batch(&mut self.surface, &mut self.rng, width, height, &self.config.scratch)?;
        }
        Ok(())
    }

    /// One animation frame: a scratch batch while active, nothing while idle.
    pub fn tick(&mut self) -> SceneResult<()> {
        if self.phase == Phase::Idle {
            return Ok(());
        }
        let SurfaceState { width, height, .. } = self.state;
        emit_batch(&mut self.surface, &mut self.rng, width, height, &self.config.scratch)
    }

    /// Returns `true` when this press moved the scene from Idle to Active.
    /// Auto-repeat while held is ignored, as is every press on an
    /// immediately staged scene.
    pub fn key_down(&mut self, key: &str, now_ms: f64) -> bool {
        if self.config.staging == Staging::Immediate || key != self.config.key || self.phase == Phase::Active {
            return false;
        }
        self.phase = Phase::Active;
        self.first_activation_ms.get_or_insert(now_ms);
        self.audio.resume();
        log::debug!("active at {now_ms:.0}ms");
        true
    }

    pub fn key_up(&mut self, key: &str, now_ms: f64) -> KeyRelease {
        if key != self.config.key || self.phase == Phase::Idle {
            return KeyRelease::Ignored;
        }
        self.phase = Phase::Idle;
        log::debug!("idle at {now_ms:.0}ms");
        match self.min_audible_remaining(now_ms) {
            Some(wait) => KeyRelease::SuspendAfter(wait),
            None => {
                self.audio.suspend();
                KeyRelease::Suspended
            }
        }
    }

    /// Timer target for [`KeyRelease::SuspendAfter`]. No-op if the key was
    /// pressed again in the meantime; repeated calls while idle just suspend
    /// again.
    pub fn deferred_suspend(&mut self) {
        if self.phase == Phase::Idle {
            self.audio.suspend();
        }
    }

    // Only the first release of an audio scene is held back.
    fn min_audible_remaining(&mut self, now_ms: f64) -> Option<f64> {
        let min = self.config.audio.as_ref()?.min_audible_ms;
        if self.min_cue_served {
            return None;
        }
        self.min_cue_served = true;
        let started = self.first_activation_ms?;
        let remaining = min - (now_ms - started);
        (remaining > 0.0).then_some(remaining)
    }
}
