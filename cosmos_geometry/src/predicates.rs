// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-interval range and rectangle predicates.
//!
//! Rectangles are normalized with [`Rect::abs`] first, so the predicates do not
//! care which corner a caller stored in `x0`/`y0`.

use kurbo::{Point, Rect};

/// `lo ≤ v ≤ hi`.
#[inline]
pub fn in_range(lo: f64, v: f64, hi: f64) -> bool {
    lo <= v && v <= hi
}

/// Whether `p` lies within the closed box spanned by the corners `a` and `b`.
///
/// Each axis is order-normalized independently, so `a` and `b` can be any two
/// opposite corners.
pub fn point_inside(p: Point, a: Point, b: Point) -> bool {
    let x_okay = in_range(a.x.min(b.x), p.x, a.x.max(b.x));
    let y_okay = in_range(a.y.min(b.y), p.y, a.y.max(b.y));
    x_okay && y_okay
}

/// Axis-aligned intersection test.
///
/// True unless one rectangle's far edge precedes the other's near edge on
/// either axis. Touching edges count as overlapping.
pub fn rectangle_overlay(a: Rect, b: Rect) -> bool {
    let (a, b) = (a.abs(), b.abs());
    let x_off = a.x1 < b.x0 || a.x0 > b.x1;
    let y_off = a.y1 < b.y0 || a.y0 > b.y1;
    !(x_off || y_off)
}

/// Whether `p` is within the closed bounds of `r`.
pub fn rectangle_contain(r: Rect, p: Point) -> bool {
    let r = r.abs();
    in_range(r.x0, p.x, r.x1) && in_range(r.y0, p.y, r.y1)
}

/// Whether `inner` lies fully within `outer` on both axes.
pub fn rectangle_inside(inner: Rect, outer: Rect) -> bool {
    let (inner, outer) = (inner.abs(), outer.abs());
    let x_in = in_range(outer.x0, inner.x0, outer.x1) && in_range(outer.x0, inner.x1, outer.x1);
    let y_in = in_range(outer.y0, inner.y0, outer.y1) && in_range(outer.y0, inner.y1, outer.y1);
    x_in && y_in
}

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}
