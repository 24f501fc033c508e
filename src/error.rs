//! Error taxonomy shared by the renderer, the controller and the browser glue.

use wasm_bindgen::JsValue;

/// Convenience result type used across the crate.
pub type SceneResult<T> = Result<T, SceneError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("canvas has no 2d context")]
    NoContext,

    /// Ring stack violates the non-empty, strictly increasing radius rule.
    #[error("invalid ring stack: {0}")]
    InvalidRings(String),

    /// The drawing surface rejected a primitive (e.g. a negative arc radius).
    #[error("surface error: {0}")]
    Surface(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[cfg(feature = "serde_json")]
    #[error("config error: {0}")]
    Config(String),

    /// Opaque exception thrown by a host API.
    #[error("js error: {0}")]
    Js(String),
}

impl SceneError {
    pub fn invalid_rings(msg: impl Into<String>) -> Self {
        Self::InvalidRings(msg.into())
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }
}

impl From<JsValue> for SceneError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => Self::Js(s),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
