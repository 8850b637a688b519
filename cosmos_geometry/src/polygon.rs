// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Triangles and regular polygons.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::{HitParams, PreciseHitTest, StrokedLine};

/// A triangle given by its three vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Point,
    /// Second vertex.
    pub b: Point,
    /// Third vertex.
    pub c: Point,
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// The smallest axis-aligned rectangle containing all three vertices.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.a, self.b).union_pt(self.c)
    }

    /// The vertices in order.
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

fn cross(o: Point, a: Point, p: Point) -> f64 {
    (a - o).cross(p - o)
}

/// Inclusive of the edges, independent of winding.
///
/// With a positive [`HitParams::fill_tolerance`], points within that distance
/// of any edge also hit.
impl PreciseHitTest for Triangle {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> bool {
        let d1 = cross(self.a, self.b, pt);
        let d2 = cross(self.b, self.c, pt);
        let d3 = cross(self.c, self.a, pt);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        if !(has_neg && has_pos) {
            return true;
        }
        if params.fill_tolerance <= 0.0 {
            return false;
        }
        let edge_params = HitParams {
            stroke_tolerance: params.fill_tolerance,
            ..*params
        };
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
            .into_iter()
            .any(|(p0, p1)| {
                StrokedLine {
                    line: kurbo::Line::new(p0, p1),
                    half_width: 0.0,
                }
                .hit_test_local(pt, &edge_params)
            })
    }
}

/// Vertices of a regular polygon inscribed in the circle of `radius` around
/// `center`.
///
/// The first vertex sits at `rotation_degrees` measured clockwise from the
/// positive x axis (y grows downward). Fewer than three sides yield no
/// vertices.
pub fn regular_polygon_vertices(
    center: Point,
    radius: f64,
    sides: usize,
    rotation_degrees: f64,
) -> Vec<Point> {
    if sides < 3 {
        return Vec::new();
    }
    let start = rotation_degrees.to_radians();
    let step = core::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let (sin, cos) = (start + step * i as f64).sin_cos();
            Point::new(center.x + radius * cos, center.y + radius * sin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_hit_is_winding_independent() {
        let cw = Triangle::new((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        let ccw = Triangle::new((0.0, 0.0), (0.0, 10.0), (10.0, 0.0));
        let params = HitParams::default();
        for t in [cw, ccw] {
            assert!(t.hit_test_local(Point::new(2.0, 2.0), &params));
            assert!(t.hit_test_local(Point::new(5.0, 5.0), &params), "edge");
            assert!(!t.hit_test_local(Point::new(6.0, 6.0), &params));
        }
    }

    #[test]
    fn triangle_tolerance_reaches_past_edges() {
        let t = Triangle::new((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        let params = HitParams {
            fill_tolerance: 1.0,
            ..HitParams::default()
        };
        assert!(t.hit_test_local(Point::new(5.0, -0.5), &params));
        assert!(!t.hit_test_local(Point::new(5.0, -2.0), &params));
    }

    #[test]
    fn triangle_bounding_box() {
        let t = Triangle::new((0.0, 0.0), (-4.0, 6.0), (8.0, 3.0));
        assert_eq!(t.bounding_box(), Rect::new(-4.0, 0.0, 8.0, 6.0));
    }

    #[test]
    fn square_vertices() {
        let pts = regular_polygon_vertices(Point::new(10.0, 10.0), 5.0, 4, 0.0);
        assert_eq!(pts.len(), 4);
        assert!((pts[0] - Point::new(15.0, 10.0)).hypot() < 1e-9);
        assert!((pts[1] - Point::new(10.0, 15.0)).hypot() < 1e-9);
        assert!((pts[2] - Point::new(5.0, 10.0)).hypot() < 1e-9);
    }

    #[test]
    fn degenerate_polygon_is_empty() {
        assert!(regular_polygon_vertices(Point::ORIGIN, 5.0, 2, 0.0).is_empty());
    }
}
