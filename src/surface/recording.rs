//! Headless surface that records every call instead of rasterizing.

use super::{ColorStop, Surface};
use crate::error::{SceneError, SceneResult};
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Solid(String),
    Radial {
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<(f64, String)>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Clear { width: f64, height: f64 },
    SetStroke { color: String, line_width: f64 },
    SetFill(FillStyle),
    BeginPath,
    MoveTo(Point),
    Arc { center: Point, radius: f64, start: f64, end: f64 },
    ClosePath,
    Stroke,
    Fill,
}

/// A stroked arc reconstructed from the command log.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokedArc {
    pub center: Point,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<Command>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Commands issued after the most recent clear (the whole log if none).
    pub fn since_last_clear(&self) -> &[Command] {
        match self.commands.iter().rposition(|c| matches!(c, Command::Clear { .. })) {
            Some(idx) => &self.commands[idx + 1..],
            None => &self.commands,
        }
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Clear { .. }))
            .count()
    }

    /// Every radial gradient fill style set, in issue order.
    pub fn radial_fills(&self) -> Vec<&FillStyle> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::SetFill(style @ FillStyle::Radial { .. }) => Some(style),
                _ => None,
            })
            .collect()
    }

    /// Arcs that ended up stroked: the last arc of each path followed by a `Stroke`.
    pub fn stroked_arcs(&self) -> Vec<StrokedArc> {
        let mut out = Vec::new();
        let mut pending: Option<StrokedArc> = None;
        for c in &self.commands {
            match c {
                Command::BeginPath => pending = None,
                Command::Arc { center, radius, start, end } => {
                    pending = Some(StrokedArc { center: *center, radius: *radius, start: *start, end: *end });
                }
                Command::Stroke => {
                    if let Some(arc) = pending.take() {
                        out.push(arc);
                    }
                }
                _ => {}
            }
        }
        out
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(Command::Clear { width, height });
    }

    fn set_stroke(&mut self, color: &str, line_width: f64) {
        self.commands.push(Command::SetStroke { color: color.to_string(), line_width });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(Command::SetFill(FillStyle::Solid(color.to_string())));
    }

    fn set_fill_radial(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        stops: &[ColorStop<'_>],
    ) -> SceneResult<()> {
        // Same checks the canvas performs before throwing.
        if inner_radius < 0.0 || outer_radius < 0.0 {
            return Err(SceneError::surface("negative gradient radius"));
        }
        if !(center.x.is_finite() && center.y.is_finite() && inner_radius.is_finite() && outer_radius.is_finite()) {
            return Err(SceneError::surface("non-finite gradient geometry"));
        }
        self.commands.push(Command::SetFill(FillStyle::Radial {
            center,
            inner_radius,
            outer_radius,
            stops: stops.iter().map(|s| (s.offset, s.color.to_string())).collect(),
        }));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(Command::MoveTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> SceneResult<()> {
        if radius < 0.0 {
            return Err(SceneError::surface(format!("negative arc radius {radius}")));
        }
        self.commands.push(Command::Arc { center, radius, start, end });
        Ok(())
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(Command::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroked_arcs_ignore_filled_paths() {
        let mut s = RecordingSurface::new();
        s.begin_path();
        s.arc(Point::new(1.0, 1.0), 3.0, 0.0, 1.0).unwrap();
        s.fill();
        s.begin_path();
        s.arc(Point::new(2.0, 2.0), 4.0, 0.5, 1.5).unwrap();
        s.stroke();
        let arcs = s.stroked_arcs();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].radius, 4.0);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut s = RecordingSurface::new();
        assert!(s.arc(Point::default(), -1.0, 0.0, 1.0).is_err());
        assert!(s.commands().is_empty());
    }

    #[test]
    fn since_last_clear_slices_after_final_clear() {
        let mut s = RecordingSurface::new();
        s.fill();
        s.clear(10.0, 10.0);
        s.stroke();
        s.clear(10.0, 10.0);
        s.fill();
        assert_eq!(s.since_last_clear(), &[Command::Fill]);
        assert_eq!(s.clear_count(), 2);
    }
}
