//! Scene tuning and the built-in presets.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

use crate::rings::{DrainDecor, RingSpec, RingStack};
use crate::scratch::ScratchParams;

/// When scratches start appearing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Staging {
    /// Every reset draws one batch right away and the key is ignored.
    Immediate,
    /// Nothing is drawn until the key is held.
    #[default]
    OnKeyHold,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioSettings {
    pub url: String,
    /// Minimum time the cue plays after the first activation, even on a tap.
    pub min_audible_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// `KeyboardEvent.key` value that drives the active flag.
    pub key: String,
    pub scratch: ScratchParams,
    pub rings: Option<RingStack>,
    pub decor: Option<DrainDecor>,
    pub audio: Option<AudioSettings>,
    pub staging: Staging,
}

pub const DEFAULT_KEY: &str = " ";
pub const DEFAULT_MIN_AUDIBLE_MS: f64 = 1500.0;

impl SceneConfig {
    /// Bare scratched surface: one dense batch per reset, no background.
    pub fn scratches() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            scratch: ScratchParams {
                count: 20_000,
                min_radius: 20.0,
                max_radius: 55.0,
                min_angle_span: FRAC_PI_4,
                max_angle_span: FRAC_PI_3,
                stroke_color: "#101010".to_string(),
                line_width: 0.5,
            },
            rings: None,
            decor: None,
            audio: None,
            staging: Staging::Immediate,
        }
    }

    /// Steel sink drain; holding the key scrubs scratches over it.
    pub fn sink() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            scratch: ScratchParams {
                count: 60,
                min_radius: 20.0,
                max_radius: 55.0,
                min_angle_span: FRAC_PI_4,
                max_angle_span: FRAC_PI_3,
                stroke_color: "rgba(16, 16, 16, 0.35)".to_string(),
                line_width: 0.5,
            },
            rings: Some(sink_rings()),
            decor: Some(sink_decor()),
            audio: None,
            staging: Staging::OnKeyHold,
        }
    }

    pub fn sink_with_audio(url: impl Into<String>) -> Self {
        Self {
            audio: Some(AudioSettings { url: url.into(), min_audible_ms: DEFAULT_MIN_AUDIBLE_MS }),
            ..Self::sink()
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> crate::error::SceneResult<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::SceneError::Config(e.to_string()))
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::sink()
    }
}

/// Drain throat, grate, basin lip and basin, inside out.
fn sink_rings() -> RingStack {
    let rings = vec![
        RingSpec::new(17.0, "#050505", "#262626"),
        RingSpec::new(70.0, "#3a3d40", "#9ea3a8"),
        RingSpec::new(78.0, "#c9cdd1", "#e8ebee"),
        RingSpec::new(420.0, "#d6dadd", "#f3f5f6"),
    ];
    RingStack::from_ordered(rings)
}

fn sink_decor() -> DrainDecor {
    DrainDecor {
        hole_distance: 44.0,
        hole_radius: 6.0,
        hole_color: "#0c0c0c".to_string(),
        screw_radius: 9.0,
        screw_color: "#8a8f94".to_string(),
        slot_color: "#2e3134".to_string(),
        slot_angle: 0.5,
    }
}
