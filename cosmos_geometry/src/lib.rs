// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cosmos Geometry: the small, pure geometry layer under a Cosmos plane.
//!
//! This crate collects the arithmetic a plane needs to place and pick its
//! matters, built on top of [`kurbo`]. Nothing here knows about planes,
//! matters, or rendering; every function is a pure computation over points
//! and rectangles.
//!
//! # Key pieces
//!
//! - [`Anchor`]: the nine named anchor points of a box plus arbitrary
//!   fractional anchors. [`Anchor::point_in`] resolves an anchor against a box.
//! - Closed-interval predicates: [`in_range`], [`point_inside`],
//!   [`rectangle_overlay`], [`rectangle_contain`], and [`rectangle_inside`].
//!   Unlike [`Rect::contains`], every predicate here includes the far edges.
//! - [`lines_intersection`]: Cramer's-rule intersection of two lines, with a
//!   NaN sentinel for parallel input.
//! - [`PreciseHitTest`]: narrow-phase "does this local point hit me?" tests for
//!   [`Rect`], [`Circle`], [`Ellipse`], [`Triangle`], and [`StrokedLine`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use cosmos_geometry::{Anchor, rectangle_contain};
//!
//! let bounds = Rect::new(10.0, 10.0, 30.0, 50.0);
//! assert_eq!(Anchor::Center.point_in(bounds), Point::new(20.0, 30.0));
//!
//! // Edges are inclusive.
//! assert!(rectangle_contain(bounds, Point::new(30.0, 50.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Ellipse, Point, Rect};

mod anchor;
mod line;
mod polygon;
mod predicates;

pub use anchor::Anchor;
pub use line::{Intersection, StrokedLine, lines_intersection};
pub use polygon::{Triangle, regular_polygon_vertices};
pub use predicates::{
    degrees_to_radians, in_range, point_inside, radians_to_degrees, rectangle_contain,
    rectangle_inside, rectangle_overlay,
};

/// Parameters controlling precise hit tests.
#[derive(Clone, Copy, Debug)]
pub struct HitParams {
    /// Tolerance in local units for hits against filled regions.
    ///
    /// Typically used to slightly inflate small shapes for touch input.
    pub fill_tolerance: f64,
    /// Tolerance in local units for hits against stroked outlines.
    pub stroke_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            fill_tolerance: 0.0,
            stroke_tolerance: 0.0,
        }
    }
}

/// Trait for precise 2D hit testing in local coordinates.
///
/// Implementors should treat the tolerances in [`HitParams`] as inclusive
/// radii. Boundaries are inclusive, matching the closed-interval predicates
/// of this crate.
pub trait PreciseHitTest {
    /// Returns `true` when `pt`, given in the shape's local coordinate space,
    /// hits the shape.
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> bool;
}

impl PreciseHitTest for Rect {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> bool {
        let tol = params.fill_tolerance.max(0.0);
        rectangle_contain(self.abs().inflate(tol, tol), pt)
    }
}

/// The hit is a fill hit when the distance from the point to the center is
/// within the radius plus tolerance.
impl PreciseHitTest for Circle {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> bool {
        let dx = pt.x - self.center.x;
        let dy = pt.y - self.center.y;
        let limit = self.radius + params.fill_tolerance.max(0.0);
        dx * dx + dy * dy <= limit * limit
    }
}

/// Ellipses are tested in their own frame, so rotated ellipses are honored.
impl PreciseHitTest for Ellipse {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> bool {
        let tol = params.fill_tolerance.max(0.0);
        let radii = self.radii();
        let (rx, ry) = (radii.x + tol, radii.y + tol);
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let center = self.center();
        let (sin, cos) = (-self.rotation()).sin_cos();
        let dx = pt.x - center.x;
        let dy = pt.y - center.y;
        let ux = dx * cos - dy * sin;
        let uy = dx * sin + dy * cos;
        (ux / rx) * (ux / rx) + (uy / ry) * (uy / ry) <= 1.0
    }
}
