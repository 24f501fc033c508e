//! Scratch field: batches of short random arcs that pile up into a worn surface.
//!
//! Radius and angular span are coupled: the smallest arcs sweep the widest
//! angle and the largest arcs the narrowest, so every mark ends up roughly the
//! same length.

use std::f64::consts::TAU;

use crate::error::SceneResult;
use crate::geometry::Point;
use crate::rng::UniformSource;
use crate::surface::Surface;

/// Tuning for one batch of scratches.
///
/// `max_radius >= min_radius` is the caller's responsibility; an inverted
/// range is not checked and produces inverted spans.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScratchParams {
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_angle_span: f64,
    pub max_angle_span: f64,
    pub stroke_color: String,
    pub line_width: f64,
}

/// Sampled parameters of one scratch stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcDescriptor {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcDescriptor {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl ScratchParams {
    /// Angular span for an arc of `radius`: `max_angle_span` at `min_radius`,
    /// falling linearly to `min_angle_span` at `max_radius`.
    pub fn span_for_radius(&self, radius: f64) -> f64 {
        let range = self.max_radius - self.min_radius;
        let t = if range == 0.0 { 1.0 } else { (self.max_radius - radius) / range };
        self.min_angle_span + (self.max_angle_span - self.min_angle_span) * t
    }

    pub fn sample_arc<R: UniformSource + ?Sized>(&self, rng: &mut R, width: f64, height: f64) -> ArcDescriptor {
        let x = (rng.next_unit() * width).floor();
        let y = (rng.next_unit() * height).floor();
        let radius = self.min_radius + rng.next_unit() * (self.max_radius - self.min_radius);
        let start_angle = rng.next_unit() * TAU;
        let end_angle = start_angle + self.span_for_radius(radius);
        ArcDescriptor { center: Point::new(x, y), radius, start_angle, end_angle }
    }
}

/// Stroke `params.count` freshly sampled arcs over a `width` x `height` area.
/// Never clears; marks accumulate across calls.
pub fn emit_batch<S, R>(surface: &mut S, rng: &mut R, width: f64, height: f64, params: &ScratchParams) -> SceneResult<()>
where
    S: Surface + ?Sized,
    R: UniformSource + ?Sized,
{
    surface.set_stroke(&params.stroke_color, params.line_width);
    for _ in 0..params.count {
        let arc = params.sample_arc(rng, width, height);
        surface.begin_path();
        surface.arc(arc.center, arc.radius, arc.start_angle, arc.end_angle)?;
        surface.stroke();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FastRng;
    use crate::surface::{Command, RecordingSurface};
    use std::collections::VecDeque;
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, PI};

    /// Replays fixed samples in order.
    struct Scripted(VecDeque<f64>);

    impl UniformSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            self.0.pop_front().expect("script exhausted")
        }
    }

    fn params() -> ScratchParams {
        ScratchParams {
            count: 5,
            min_radius: 20.0,
            max_radius: 55.0,
            min_angle_span: FRAC_PI_4,
            max_angle_span: FRAC_PI_3,
            stroke_color: "#101010".into(),
            line_width: 0.5,
        }
    }

    #[test]
    fn span_hits_both_ends_of_the_range() {
        let p = params();
        assert!((p.span_for_radius(20.0) - FRAC_PI_3).abs() < 1e-12);
        assert!((p.span_for_radius(55.0) - FRAC_PI_4).abs() < 1e-12);
        let mid = p.span_for_radius(37.5);
        assert!((mid - (FRAC_PI_3 + FRAC_PI_4) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn span_is_non_increasing_in_radius() {
        let p = params();
        let mut prev = f64::INFINITY;
        for step in 0..=70 {
            let r = 20.0 + step as f64 * 0.5;
            let s = p.span_for_radius(r);
            assert!(s <= prev, "span grew at radius {r}");
            prev = s;
        }
    }

    #[test]
    fn degenerate_radius_range_uses_max_span() {
        let p = ScratchParams { min_radius: 30.0, max_radius: 30.0, ..params() };
        let s = p.span_for_radius(30.0);
        assert!(s.is_finite());
        assert_eq!(s, FRAC_PI_3);

        let mut rng = FastRng::from_entropy();
        for _ in 0..100 {
            let arc = p.sample_arc(&mut rng, 640.0, 480.0);
            assert_eq!(arc.radius, 30.0);
            assert!((arc.span() - FRAC_PI_3).abs() < 1e-9, "span {}", arc.span());
        }
    }

    #[test]
    fn sample_maps_uniforms_to_descriptor() {
        let p = params();
        let mut rng = Scripted(VecDeque::from(vec![0.5, 0.25, 1.0 - 1e-12, 0.5]));
        let arc = p.sample_arc(&mut rng, 101.0, 40.0);
        assert_eq!(arc.center, Point::new(50.0, 10.0));
        assert!((arc.radius - 55.0).abs() < 1e-9);
        assert!((arc.start_angle - PI).abs() < 1e-12);
        assert!((arc.span() - FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn positions_are_whole_pixels_inside_the_surface() {
        let p = params();
        let mut rng = FastRng::from_entropy();
        for _ in 0..5_000 {
            let arc = p.sample_arc(&mut rng, 300.0, 200.0);
            assert_eq!(arc.center.x, arc.center.x.floor());
            assert!((0.0..300.0).contains(&arc.center.x));
            assert!((0.0..200.0).contains(&arc.center.y));
            assert!((0.0..TAU).contains(&arc.start_angle));
        }
    }

    #[test]
    fn emit_batch_strokes_count_open_arcs_without_clearing() {
        let p = params();
        let mut s = RecordingSurface::new();
        let mut rng = FastRng::from_entropy();
        emit_batch(&mut s, &mut rng, 640.0, 480.0, &p).unwrap();
        emit_batch(&mut s, &mut rng, 640.0, 480.0, &p).unwrap();

        assert_eq!(s.stroked_arcs().len(), 10);
        assert_eq!(s.clear_count(), 0);
        assert!(!s.commands().contains(&Command::Fill));
        assert!(!s.commands().contains(&Command::ClosePath));
        assert_eq!(
            s.commands()[0],
            Command::SetStroke { color: "#101010".into(), line_width: 0.5 }
        );
    }

    #[test]
    fn zero_count_draws_nothing() {
        let p = ScratchParams { count: 0, ..params() };
        let mut s = RecordingSurface::new();
        emit_batch(&mut s, &mut FastRng::from_entropy(), 10.0, 10.0, &p).unwrap();
        assert!(s.stroked_arcs().is_empty());
    }
}
