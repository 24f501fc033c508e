// Statistical properties of the scratch sampler, checked over many draws
// from the real random source.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

use sink_scratch::surface::RecordingSurface;
use sink_scratch::{FastRng, ScratchParams, emit_batch};

fn params(count: usize) -> ScratchParams {
    ScratchParams {
        count,
        min_radius: 20.0,
        max_radius: 55.0,
        min_angle_span: FRAC_PI_4,
        max_angle_span: FRAC_PI_3,
        stroke_color: "#101010".into(),
        line_width: 0.5,
    }
}

#[test]
fn every_arc_stays_within_radius_and_span_bounds() {
    let p = params(20_000);
    let mut s = RecordingSurface::new();
    emit_batch(&mut s, &mut FastRng::from_entropy(), 1920.0, 1080.0, &p).unwrap();

    let arcs = s.stroked_arcs();
    assert_eq!(arcs.len(), 20_000);
    let eps = 1e-9;
    for a in arcs {
        assert!(a.radius >= p.min_radius && a.radius <= p.max_radius, "radius {}", a.radius);
        let span = a.end - a.start;
        assert!(span >= p.min_angle_span - eps && span <= p.max_angle_span + eps, "span {span}");
    }
}

#[test]
fn smaller_arcs_sweep_wider_angles() {
    let p = params(10_000);
    let mut s = RecordingSurface::new();
    emit_batch(&mut s, &mut FastRng::from_entropy(), 800.0, 600.0, &p).unwrap();

    let mid = (p.min_radius + p.max_radius) / 2.0;
    let (mut small, mut large) = (Vec::new(), Vec::new());
    for a in s.stroked_arcs() {
        let span = a.end - a.start;
        if a.radius < mid { small.push(span) } else { large.push(span) }
    }
    let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
    assert!(!small.is_empty() && !large.is_empty());
    assert!(mean(&small) > mean(&large));
}

#[test]
fn spans_are_strictly_ordered_by_radius_pairwise() {
    let p = params(2_000);
    let mut s = RecordingSurface::new();
    emit_batch(&mut s, &mut FastRng::from_entropy(), 500.0, 500.0, &p).unwrap();
    let mut arcs = s.stroked_arcs();
    arcs.sort_by(|a, b| a.radius.total_cmp(&b.radius));
    for w in arcs.windows(2) {
        let (s0, s1) = (w[0].end - w[0].start, w[1].end - w[1].start);
        assert!(s1 <= s0 + 1e-9, "span rose from {s0} to {s1}");
    }
}

#[test]
fn positions_cover_the_whole_surface() {
    let p = params(20_000);
    let mut s = RecordingSurface::new();
    emit_batch(&mut s, &mut FastRng::from_entropy(), 400.0, 400.0, &p).unwrap();
    let mut quadrants = [0usize; 4];
    for a in s.stroked_arcs() {
        let q = usize::from(a.center.x >= 200.0) + 2 * usize::from(a.center.y >= 200.0);
        quadrants[q] += 1;
    }
    for (i, n) in quadrants.iter().enumerate() {
        assert!(*n > 4_000 && *n < 6_000, "quadrant {i} got {n}");
    }
}
