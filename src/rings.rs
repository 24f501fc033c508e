//! Static "sink drain" background: concentric gradient bands plus decoration.
//!
//! Bands are painted as full discs, outermost first. Each inner disc covers the
//! hard outer edge of the gradient painted before it, which is what turns a
//! pile of discs into visible rings.

use std::f64::consts::{FRAC_PI_3, TAU};

use crate::error::{SceneError, SceneResult};
use crate::geometry::Point;
use crate::surface::{ColorStop, Surface};

/// One annular band: gradient runs from the previous band's outer radius
/// (`inner_color`) out to `outer_radius` (`outer_color`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingSpec {
    pub outer_radius: f64,
    pub inner_color: String,
    pub outer_color: String,
}

impl RingSpec {
    pub fn new(outer_radius: f64, inner_color: impl Into<String>, outer_color: impl Into<String>) -> Self {
        Self { outer_radius, inner_color: inner_color.into(), outer_color: outer_color.into() }
    }
}

/// Non-empty ring sequence with strictly increasing outer radii.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<RingSpec>", into = "Vec<RingSpec>")
)]
pub struct RingStack {
    rings: Vec<RingSpec>,
}

impl RingStack {
    pub fn new(rings: Vec<RingSpec>) -> SceneResult<Self> {
        if rings.is_empty() {
            return Err(SceneError::invalid_rings("no rings"));
        }
        let mut prev = 0.0;
        for (idx, ring) in rings.iter().enumerate() {
            let r = ring.outer_radius;
            if !r.is_finite() || r <= prev {
                return Err(SceneError::invalid_rings(format!(
                    "ring {idx} outer radius {r} must be finite and greater than {prev}"
                )));
            }
            prev = r;
        }
        Ok(Self { rings })
    }

    /// For literal stacks already known to be ordered.
    pub(crate) fn from_ordered(rings: Vec<RingSpec>) -> Self {
        debug_assert!(Self::new(rings.clone()).is_ok(), "ring radii out of order");
        Self { rings }
    }

    pub fn rings(&self) -> &[RingSpec] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// `(inner_radius, ring)` pairs in paint order, outermost band first.
    pub fn bands_back_to_front(&self) -> impl Iterator<Item = (f64, &RingSpec)> + '_ {
        (0..self.rings.len()).rev().map(move |i| {
            let inner = if i == 0 { 0.0 } else { self.rings[i - 1].outer_radius };
            (inner, &self.rings[i])
        })
    }
}

impl TryFrom<Vec<RingSpec>> for RingStack {
    type Error = SceneError;

    fn try_from(rings: Vec<RingSpec>) -> SceneResult<Self> {
        Self::new(rings)
    }
}

impl From<RingStack> for Vec<RingSpec> {
    fn from(stack: RingStack) -> Self {
        stack.rings
    }
}

/// Paint every band of `rings` around `center`, back to front.
pub fn render_rings<S: Surface + ?Sized>(surface: &mut S, center: Point, rings: &RingStack) -> SceneResult<()> {
    for (inner, ring) in rings.bands_back_to_front() {
        surface.set_fill_radial(
            center,
            inner,
            ring.outer_radius,
            &[
                ColorStop::new(0.0, &ring.inner_color),
                ColorStop::new(1.0, &ring.outer_color),
            ],
        )?;
        surface.begin_path();
        surface.arc(center, ring.outer_radius, 0.0, TAU)?;
        surface.fill();
    }
    Ok(())
}

pub const DRAIN_HOLES: usize = 6;

/// Drain-cover embellishment: six holes on a circle and a center screw.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrainDecor {
    pub hole_distance: f64,
    pub hole_radius: f64,
    pub hole_color: String,
    pub screw_radius: f64,
    pub screw_color: String,
    pub slot_color: String,
    /// Opening of the wedge cut into the screw head, radians.
    pub slot_angle: f64,
}

/// Layered after [`render_rings`]; holes sit at multiples of 60°.
pub fn draw_decor<S: Surface + ?Sized>(surface: &mut S, center: Point, decor: &DrainDecor) -> SceneResult<()> {
    surface.set_fill_color(&decor.hole_color);
    for k in 0..DRAIN_HOLES {
        let hole = center.offset_polar(k as f64 * FRAC_PI_3, decor.hole_distance);
        surface.begin_path();
        surface.arc(hole, decor.hole_radius, 0.0, TAU)?;
        surface.fill();
    }

    surface.set_fill_color(&decor.screw_color);
    surface.begin_path();
    surface.arc(center, decor.screw_radius, 0.0, TAU)?;
    surface.fill();

    let half = decor.slot_angle / 2.0;
    surface.set_fill_color(&decor.slot_color);
    surface.begin_path();
    surface.move_to(center);
    surface.arc(center, decor.screw_radius, -half, half)?;
    surface.close_path();
    surface.fill();
    Ok(())
}
