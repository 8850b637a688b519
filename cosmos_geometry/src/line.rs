// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-oriented helpers: intersection and stroked-segment hit tests.

use kurbo::{Line, Point};

use crate::{HitParams, PreciseHitTest};

/// Result of [`lines_intersection`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// The intersection point of the two (infinite) lines.
    pub point: Point,
    /// Parametric offset of the intersection along the first line
    /// (`0` at `p0`, `1` at `p1`).
    pub t1: f64,
    /// Parametric offset of the intersection along the second line.
    pub t2: f64,
}

impl Intersection {
    /// The sentinel returned for parallel lines: every field is NaN.
    pub const PARALLEL: Self = Self {
        point: Point::new(f64::NAN, f64::NAN),
        t1: f64::NAN,
        t2: f64::NAN,
    };

    /// Returns `true` when this is the parallel sentinel.
    pub fn is_parallel(&self) -> bool {
        self.t1.is_nan() && self.t2.is_nan()
    }

    /// Returns `true` when the intersection lies on both segments
    /// (both parametric offsets within `0..=1`).
    pub fn within_segments(&self) -> bool {
        (0.0..=1.0).contains(&self.t1) && (0.0..=1.0).contains(&self.t2)
    }
}

/// Intersects the lines through `l1` and `l2` using Cramer's rule.
///
/// Returns the intersection point together with the parametric offsets along
/// both segments. Offsets outside `0..=1` mean the segments themselves do not
/// meet even though their lines do. Parallel (or coincident) input yields
/// [`Intersection::PARALLEL`].
pub fn lines_intersection(l1: Line, l2: Line) -> Intersection {
    let (x11, y11, x12, y12) = (l1.p0.x, l1.p0.y, l1.p1.x, l1.p1.y);
    let (x21, y21, x22, y22) = (l2.p0.x, l2.p0.y, l2.p1.x, l2.p1.y);

    let denominator = (x11 - x12) * (y21 - y22) - (y11 - y12) * (x21 - x22);
    if denominator == 0.0 {
        return Intersection::PARALLEL;
    }

    let t1 = ((x11 - x21) * (y21 - y22) - (y11 - y21) * (x21 - x22)) / denominator;
    let t2 = -((x11 - x12) * (y11 - y21) - (y11 - y12) * (x11 - x21)) / denominator;
    let point = Point::new(x21 + t2 * (x22 - x21), y21 + t2 * (y22 - y21));

    Intersection { point, t1, t2 }
}

/// A simple stroked line segment (centerline + half-width).
///
/// The precise hit test uses the distance from the query point to the
/// segment and compares it against the half-width plus
/// [`HitParams::stroke_tolerance`]. No joins or caps are modeled.
#[derive(Clone, Copy, Debug)]
pub struct StrokedLine {
    /// The centerline segment in local coordinates.
    pub line: Line,
    /// Half of the stroke width in local units.
    pub half_width: f64,
}

impl PreciseHitTest for StrokedLine {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> bool {
        let p0 = self.line.p0;
        let v = self.line.p1 - p0;
        let w = pt - p0;
        let len2 = v.hypot2();
        let t = if len2 > 0.0 { w.dot(v) / len2 } else { 0.0 };
        let proj = p0 + v * t.clamp(0.0, 1.0);
        let dist = (pt - proj).hypot();
        dist <= self.half_width + params.stroke_tolerance
    }
}
