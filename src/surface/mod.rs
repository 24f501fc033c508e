//! Drawing surface abstraction.
//!
//! The renderer only ever talks to [`Surface`]; the browser backend maps each
//! call onto `CanvasRenderingContext2d`, the recording backend keeps a command
//! log so the same drawing code runs headless under `cargo test`.

use crate::error::SceneResult;
use crate::geometry::Point;

pub mod canvas;
pub mod recording;

pub use canvas::CanvasSurface;
pub use recording::{Command, FillStyle, RecordingSurface};

/// One stop of a gradient: `offset` in `[0, 1]` plus a CSS color string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop<'a> {
    pub offset: f64,
    pub color: &'a str,
}

impl<'a> ColorStop<'a> {
    pub const fn new(offset: f64, color: &'a str) -> Self {
        Self { offset, color }
    }
}

/// Immediate-mode 2D drawing primitives, modelled on the canvas path API.
///
/// Fallible calls are the ones the browser can reject (arc with a negative
/// radius, gradient with non-finite geometry or an unparsable color).
pub trait Surface {
    /// Clear the rectangle `(0, 0, width, height)` to transparent.
    fn clear(&mut self, width: f64, height: f64);

    fn set_stroke(&mut self, color: &str, line_width: f64);

    fn set_fill_color(&mut self, color: &str);

    /// Fill style becomes a radial gradient between two circles sharing `center`.
    fn set_fill_radial(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        stops: &[ColorStop<'_>],
    ) -> SceneResult<()>;

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    /// Clockwise arc from `start` to `end` (radians).
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> SceneResult<()>;

    fn close_path(&mut self);

    fn stroke(&mut self);

    fn fill(&mut self);
}
