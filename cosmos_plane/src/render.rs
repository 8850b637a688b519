// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering capability a plane draws through.

use cosmos_geometry::{Triangle, regular_polygon_vertices};
use kurbo::{Circle, Ellipse, Line, Point, Rect};

use crate::types::Paint;

/// Drawing primitives supplied by the host's rendering backend.
///
/// All coordinates are in the renderer's own space, which is where
/// [`Plane::draw`](crate::Plane::draw) maps every matter's screen box.
/// Polygons have default implementations in terms of [`Renderer::draw_polygon`]
/// and [`Renderer::fill_polygon`].
pub trait Renderer {
    /// Restrict subsequent drawing to `clip`, or lift the restriction with `None`.
    fn set_clip(&mut self, clip: Option<Rect>);

    /// Plot a single point.
    fn draw_point(&mut self, point: Point, paint: Paint);

    /// Stroke a line segment.
    fn draw_line(&mut self, line: Line, paint: Paint);

    /// Stroke the outline of a rectangle.
    fn draw_rect(&mut self, rect: Rect, paint: Paint);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Stroke the outline of a circle.
    fn draw_circle(&mut self, circle: Circle, paint: Paint);

    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle, paint: Paint);

    /// Stroke the outline of an ellipse.
    fn draw_ellipse(&mut self, ellipse: Ellipse, paint: Paint);

    /// Fill an ellipse.
    fn fill_ellipse(&mut self, ellipse: Ellipse, paint: Paint);

    /// Stroke a closed polygon.
    fn draw_polygon(&mut self, vertices: &[Point], paint: Paint);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, vertices: &[Point], paint: Paint);

    /// Stroke a triangle.
    fn draw_triangle(&mut self, triangle: Triangle, paint: Paint) {
        self.draw_polygon(&triangle.vertices(), paint);
    }

    /// Fill a triangle.
    fn fill_triangle(&mut self, triangle: Triangle, paint: Paint) {
        self.fill_polygon(&triangle.vertices(), paint);
    }

    /// Stroke a regular polygon; see [`regular_polygon_vertices`].
    fn draw_regular_polygon(
        &mut self,
        center: Point,
        radius: f64,
        sides: usize,
        rotation_degrees: f64,
        paint: Paint,
    ) {
        let vertices = regular_polygon_vertices(center, radius, sides, rotation_degrees);
        self.draw_polygon(&vertices, paint);
    }

    /// Fill a regular polygon; see [`regular_polygon_vertices`].
    fn fill_regular_polygon(
        &mut self,
        center: Point,
        radius: f64,
        sides: usize,
        rotation_degrees: f64,
        paint: Paint,
    ) {
        let vertices = regular_polygon_vertices(center, radius, sides, rotation_degrees);
        self.fill_polygon(&vertices, paint);
    }
}
