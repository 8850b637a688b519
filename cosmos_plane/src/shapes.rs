// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in geometric matters.
//!
//! Every shape is a [`Shapelet`] around an [`Outline`]: the outline knows the
//! geometry, the shapelet adds paints, motion, and the [`Matter`] plumbing.
//! Shapes are resizable around their center and movable.
//!
//! ```rust
//! use cosmos_plane::{Circlet, Paint, Plane};
//!
//! let mut plane = Plane::new();
//! let ball = plane.insert_at(
//!     Circlet::new(5.0).with_fill(Some(Paint::rgb(0xFF_80_00))),
//!     0.0,
//!     0.0,
//! );
//! // The corner of the bounding box is outside the disc.
//! assert_eq!(plane.find_matter(0.5, 0.5), None);
//! assert_eq!(plane.find_matter(5.0, 5.0), Some(ball));
//! ```

use alloc::vec::Vec;

use cosmos_geometry::{
    Anchor, HitParams, PreciseHitTest, StrokedLine, Triangle, regular_polygon_vertices,
};
use kurbo::{Circle, Ellipse, Line, Point, Rect, Size, Vec2};

use crate::matter::Matter;
use crate::motion::{Motion, Movable};
use crate::render::Renderer;
use crate::types::{Capabilities, Paint};

/// Geometry of a shape inside its bounding box.
///
/// All local coordinates have the box's top-left corner at the origin.
pub trait Outline: 'static {
    /// Size of the bounding box.
    fn size(&self) -> Size;

    /// Stretch the geometry to a new bounding box size.
    fn resize(&mut self, size: Size);

    /// Paint the interior into `bounds`.
    fn fill(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint);

    /// Paint the contour into `bounds`.
    fn stroke(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint);

    /// Whether a box-local point hits the shape.
    fn contains(&self, local: Point, params: &HitParams) -> bool;
}

/// A movable, resizable matter drawing an [`Outline`].
///
/// The interior is filled with [`Shapelet::fill`] and the contour stroked
/// with [`Shapelet::border`]; either may be absent.
#[derive(Clone, Debug)]
pub struct Shapelet<O> {
    outline: O,
    fill: Option<Paint>,
    border: Option<Paint>,
    motion: Motion,
    caps: Capabilities,
    concealed: bool,
    hit: HitParams,
}

impl<O: Outline> Shapelet<O> {
    /// A filled shape in the default paint, motionless, without events.
    pub fn from_outline(outline: O) -> Self {
        Self {
            outline,
            fill: Some(Paint::default()),
            border: None,
            motion: Motion::new(),
            caps: Capabilities::empty(),
            concealed: false,
            hit: HitParams::default(),
        }
    }

    /// Builder form of [`Shapelet::set_fill`].
    pub fn with_fill(mut self, fill: Option<Paint>) -> Self {
        self.fill = fill;
        self
    }

    /// Builder form of [`Shapelet::set_border`].
    pub fn with_border(mut self, border: Option<Paint>) -> Self {
        self.border = border;
        self
    }

    /// Opt into interaction.
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Tolerances used by the shape's hit test.
    pub fn with_hit_params(mut self, hit: HitParams) -> Self {
        self.hit = hit;
        self
    }

    /// The geometry.
    pub fn outline(&self) -> &O {
        &self.outline
    }

    /// Interior paint.
    pub fn fill(&self) -> Option<Paint> {
        self.fill
    }

    /// Replace the interior paint.
    pub fn set_fill(&mut self, fill: Option<Paint>) {
        self.fill = fill;
    }

    /// Contour paint.
    pub fn border(&self) -> Option<Paint> {
        self.border
    }

    /// Replace the contour paint.
    pub fn set_border(&mut self, border: Option<Paint>) {
        self.border = border;
    }

    /// Hide the shape from hit testing (it is still drawn).
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Velocity and border policy.
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Velocity and border policy, mutably.
    pub fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}

impl<O: Outline> Matter for Shapelet<O> {
    fn extent(&self, _x: f64, _y: f64) -> Size {
        self.outline.size()
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, bounds: Rect) {
        if let Some(fill) = self.fill.filter(Paint::is_visible) {
            self.outline.fill(renderer, bounds, fill);
        }
        if let Some(border) = self.border.filter(Paint::is_visible) {
            self.outline.stroke(renderer, bounds, border);
        }
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn is_concealed(&self) -> bool {
        self.concealed
    }

    fn hit_test_local(&self, local: Point, _size: Size) -> bool {
        self.outline.contains(local, &self.hit)
    }

    fn resize_anchor(&self) -> Option<Anchor> {
        Some(Anchor::Center)
    }

    fn resize(&mut self, size: Size) {
        self.outline.resize(size);
    }

    fn as_movable(&self) -> Option<&dyn Movable> {
        Some(&self.motion)
    }

    fn as_movable_mut(&mut self) -> Option<&mut dyn Movable> {
        Some(&mut self.motion)
    }
}

/// Axis-aligned rectangle filling its box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectOutline {
    size: Size,
}

impl Outline for RectOutline {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn fill(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.fill_rect(bounds, paint);
    }

    fn stroke(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.draw_rect(bounds, paint);
    }

    fn contains(&self, local: Point, params: &HitParams) -> bool {
        self.size.to_rect().hit_test_local(local, params)
    }
}

/// Circle inscribed in a square box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleOutline {
    radius: f64,
}

impl CircleOutline {
    /// Radius of the circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn local(&self) -> Circle {
        Circle::new((self.radius, self.radius), self.radius)
    }

    fn placed(&self, bounds: Rect) -> Circle {
        Circle::new(bounds.origin() + Vec2::new(self.radius, self.radius), self.radius)
    }
}

impl Outline for CircleOutline {
    fn size(&self) -> Size {
        Size::new(self.radius * 2.0, self.radius * 2.0)
    }

    fn resize(&mut self, size: Size) {
        self.radius = size.width.min(size.height) * 0.5;
    }

    fn fill(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.fill_circle(self.placed(bounds), paint);
    }

    fn stroke(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.draw_circle(self.placed(bounds), paint);
    }

    fn contains(&self, local: Point, params: &HitParams) -> bool {
        self.local().hit_test_local(local, params)
    }
}

/// Axis-aligned ellipse inscribed in its box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EllipseOutline {
    radii: Vec2,
}

impl EllipseOutline {
    /// Horizontal and vertical radii.
    pub fn radii(&self) -> Vec2 {
        self.radii
    }

    fn local(&self) -> Ellipse {
        Ellipse::new(self.radii.to_point(), self.radii, 0.0)
    }

    fn placed(&self, bounds: Rect) -> Ellipse {
        Ellipse::new(bounds.origin() + self.radii, self.radii, 0.0)
    }
}

impl Outline for EllipseOutline {
    fn size(&self) -> Size {
        Size::new(self.radii.x * 2.0, self.radii.y * 2.0)
    }

    fn resize(&mut self, size: Size) {
        self.radii = Vec2::new(size.width * 0.5, size.height * 0.5);
    }

    fn fill(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.fill_ellipse(self.placed(bounds), paint);
    }

    fn stroke(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.draw_ellipse(self.placed(bounds), paint);
    }

    fn contains(&self, local: Point, params: &HitParams) -> bool {
        self.local().hit_test_local(local, params)
    }
}

/// Segment from one corner of its box to the opposite one.
///
/// `end` is the displacement from the start point; a negative component
/// starts the segment on the far side of the box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineOutline {
    end: Vec2,
}

impl LineOutline {
    /// Displacement from start to end.
    pub fn end(&self) -> Vec2 {
        self.end
    }

    fn local(&self) -> Line {
        let start = Point::new((-self.end.x).max(0.0), (-self.end.y).max(0.0));
        Line::new(start, start + self.end)
    }

    fn placed(&self, bounds: Rect) -> Line {
        let o = bounds.origin().to_vec2();
        let local = self.local();
        Line::new(local.p0 + o, local.p1 + o)
    }
}

impl Outline for LineOutline {
    /// Each side is at least one unit so that axis-aligned lines stay visible.
    fn size(&self) -> Size {
        Size::new(self.end.x.abs().max(1.0), self.end.y.abs().max(1.0))
    }

    fn resize(&mut self, size: Size) {
        let old = self.size();
        self.end.x *= size.width / old.width;
        self.end.y *= size.height / old.height;
    }

    fn fill(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.draw_line(self.placed(bounds), paint);
    }

    fn stroke(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        self.fill(renderer, bounds, paint);
    }

    fn contains(&self, local: Point, params: &HitParams) -> bool {
        StrokedLine {
            line: self.local(),
            half_width: 0.5,
        }
        .hit_test_local(local, params)
    }
}

/// Triangle given by two vertices relative to the first one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleOutline {
    b: Vec2,
    c: Vec2,
}

impl TriangleOutline {
    fn min(&self) -> Vec2 {
        Vec2::new(
            0.0_f64.min(self.b.x).min(self.c.x),
            0.0_f64.min(self.b.y).min(self.c.y),
        )
    }

    fn max(&self) -> Vec2 {
        Vec2::new(
            0.0_f64.max(self.b.x).max(self.c.x),
            0.0_f64.max(self.b.y).max(self.c.y),
        )
    }

    /// Vertices relative to the top-left corner of the box.
    pub fn local(&self) -> Triangle {
        let a = Point::ORIGIN - self.min();
        Triangle::new(a, a + self.b, a + self.c)
    }

    fn placed(&self, bounds: Rect) -> Triangle {
        let t = self.local();
        let o = bounds.origin().to_vec2();
        Triangle::new(t.a + o, t.b + o, t.c + o)
    }
}

impl Outline for TriangleOutline {
    fn size(&self) -> Size {
        (self.max() - self.min()).to_size()
    }

    fn resize(&mut self, size: Size) {
        let old = self.size();
        if old.width > 0.0 {
            let rx = size.width / old.width;
            self.b.x *= rx;
            self.c.x *= rx;
        }
        if old.height > 0.0 {
            let ry = size.height / old.height;
            self.b.y *= ry;
            self.c.y *= ry;
        }
    }

    fn fill(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.fill_triangle(self.placed(bounds), paint);
    }

    fn stroke(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.draw_triangle(self.placed(bounds), paint);
    }

    fn contains(&self, local: Point, params: &HitParams) -> bool {
        self.local().hit_test_local(local, params)
    }
}

/// Regular polygon, optionally stretched into an ellipse.
#[derive(Clone, Debug, PartialEq)]
pub struct RegularPolygonOutline {
    sides: usize,
    radii: Vec2,
    rotation: f64,
    /// Vertices relative to the top-left corner of the box.
    vertices: Vec<Point>,
    size: Size,
}

impl RegularPolygonOutline {
    fn new(sides: usize, radii: Vec2, rotation: f64) -> Self {
        let mut outline = Self {
            sides,
            radii,
            rotation,
            vertices: Vec::new(),
            size: Size::ZERO,
        };
        outline.layout();
        outline
    }

    /// Number of sides.
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Vertices relative to the top-left corner of the box.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn layout(&mut self) {
        let unit = regular_polygon_vertices(Point::ORIGIN, 1.0, self.sides, self.rotation);
        let mut vertices: Vec<Point> = unit
            .into_iter()
            .map(|p| Point::new(p.x * self.radii.x, p.y * self.radii.y))
            .collect();
        let bbox = vertices
            .iter()
            .fold(None::<Rect>, |acc, &p| {
                Some(acc.map_or_else(|| Rect::from_points(p, p), |r| r.union_pt(p)))
            })
            .unwrap_or(Rect::ZERO);
        for v in &mut vertices {
            *v -= bbox.origin().to_vec2();
        }
        self.vertices = vertices;
        self.size = bbox.size();
    }

    fn placed(&self, bounds: Rect) -> Vec<Point> {
        let o = bounds.origin().to_vec2();
        self.vertices.iter().map(|&v| v + o).collect()
    }
}

impl Outline for RegularPolygonOutline {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        if self.size.width > 0.0 {
            self.radii.x *= size.width / self.size.width;
        }
        if self.size.height > 0.0 {
            self.radii.y *= size.height / self.size.height;
        }
        self.layout();
    }

    fn fill(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.fill_polygon(&self.placed(bounds), paint);
    }

    fn stroke(&self, renderer: &mut dyn Renderer, bounds: Rect, paint: Paint) {
        renderer.draw_polygon(&self.placed(bounds), paint);
    }

    /// Fan triangulation; regular polygons are convex.
    fn contains(&self, local: Point, params: &HitParams) -> bool {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return false;
        };
        rest.windows(2)
            .any(|pair| Triangle::new(first, pair[0], pair[1]).hit_test_local(local, params))
    }
}

/// A rectangle.
pub type Rectanglet = Shapelet<RectOutline>;
/// A circle.
pub type Circlet = Shapelet<CircleOutline>;
/// An axis-aligned ellipse.
pub type Ellipselet = Shapelet<EllipseOutline>;
/// A line segment.
pub type Linelet = Shapelet<LineOutline>;
/// A triangle.
pub type Trianglet = Shapelet<TriangleOutline>;
/// A regular polygon.
pub type RegularPolygonlet = Shapelet<RegularPolygonOutline>;

impl Rectanglet {
    /// A `width` by `height` rectangle.
    pub fn new(width: f64, height: f64) -> Self {
        Self::from_outline(RectOutline {
            size: Size::new(width, height),
        })
    }

    /// A square with sides of `edge`.
    pub fn square(edge: f64) -> Self {
        Self::new(edge, edge)
    }
}

impl Circlet {
    /// A circle of `radius`.
    pub fn new(radius: f64) -> Self {
        Self::from_outline(CircleOutline { radius })
    }
}

impl Ellipselet {
    /// An ellipse with horizontal radius `a` and vertical radius `b`.
    pub fn new(a: f64, b: f64) -> Self {
        Self::from_outline(EllipseOutline {
            radii: Vec2::new(a, b),
        })
    }
}

impl Linelet {
    /// A segment whose end is `(dx, dy)` away from its start.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self::from_outline(LineOutline {
            end: Vec2::new(dx, dy),
        })
    }

    /// A horizontal segment of `length`.
    pub fn horizontal(length: f64) -> Self {
        Self::new(length, 0.0)
    }

    /// A vertical segment of `length`.
    pub fn vertical(length: f64) -> Self {
        Self::new(0.0, length)
    }
}

impl Trianglet {
    /// A triangle with vertices at the origin, `b`, and `c`.
    pub fn new(b: impl Into<Vec2>, c: impl Into<Vec2>) -> Self {
        Self::from_outline(TriangleOutline {
            b: b.into(),
            c: c.into(),
        })
    }
}

impl RegularPolygonlet {
    /// A polygon with `sides` vertices on a circle of `radius`, the first one
    /// at `rotation_degrees` clockwise from the positive x axis.
    pub fn new(sides: usize, radius: f64, rotation_degrees: f64) -> Self {
        Self::from_outline(RegularPolygonOutline::new(
            sides,
            Vec2::new(radius, radius),
            rotation_degrees,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Op, RecordingRenderer};
    use crate::{BorderStrategy, Plane, PlaneConfig, Tick};
    use alloc::vec;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn extents() {
        assert_eq!(Rectanglet::new(3.0, 4.0).extent(0.0, 0.0), Size::new(3.0, 4.0));
        assert_eq!(Rectanglet::square(5.0).extent(0.0, 0.0), Size::new(5.0, 5.0));
        assert_eq!(Circlet::new(5.0).extent(0.0, 0.0), Size::new(10.0, 10.0));
        assert_eq!(Ellipselet::new(5.0, 2.0).extent(0.0, 0.0), Size::new(10.0, 4.0));
        assert_eq!(Linelet::horizontal(8.0).extent(0.0, 0.0), Size::new(8.0, 1.0));
        assert_eq!(Linelet::new(-3.0, 4.0).extent(0.0, 0.0), Size::new(3.0, 4.0));
        assert_eq!(
            Trianglet::new((10.0, 0.0), (-2.0, 6.0)).extent(0.0, 0.0),
            Size::new(12.0, 6.0)
        );
        let square = RegularPolygonlet::new(4, 1.0, 45.0).extent(0.0, 0.0);
        assert!(close(square.width, 2.0_f64.sqrt()) && close(square.height, 2.0_f64.sqrt()));
    }

    #[test]
    fn fine_hit_tests() {
        let mut plane = Plane::new();
        let tri = plane.insert_at(Trianglet::new((10.0, 0.0), (0.0, 10.0)), 0.0, 0.0);
        assert_eq!(plane.find_matter(2.0, 2.0), Some(tri));
        assert_eq!(plane.find_matter(9.0, 9.0), None);

        let ellipse = plane.insert_at(Ellipselet::new(10.0, 5.0), 100.0, 0.0);
        assert_eq!(plane.find_matter(110.0, 5.0), Some(ellipse));
        assert_eq!(plane.find_matter(100.5, 0.5), None);

        let line = plane.insert_at(Linelet::new(10.0, 10.0), 200.0, 0.0);
        assert_eq!(plane.find_matter(205.0, 5.2), Some(line));
        assert_eq!(plane.find_matter(208.0, 2.0), None);

        let hexagon = plane.insert_at(RegularPolygonlet::new(6, 10.0, 0.0), 300.0, 0.0);
        assert_eq!(plane.find_matter(310.0, 8.66), Some(hexagon));
        assert_eq!(plane.find_matter(300.2, 0.2), None);
    }

    #[test]
    fn resizing_through_the_plane_keeps_the_center() {
        let mut plane = Plane::new();
        let ball = plane.insert_at(Circlet::new(5.0), 0.0, 0.0);
        assert!(plane.resize(ball, 20.0, 30.0));
        assert_eq!(plane.matter::<Circlet>(ball).unwrap().outline().radius(), 10.0);
        assert_eq!(plane.location(ball, Anchor::Center), Some(Point::new(5.0, 5.0)));

        let line = plane.insert_at(Linelet::horizontal(10.0), 0.0, 0.0);
        plane.set_scale(2.0, 2.0);
        assert_eq!(plane.matter::<Linelet>(line).unwrap().outline().end(), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn fill_then_border() {
        let mut rect = Rectanglet::new(4.0, 4.0)
            .with_fill(Some(Paint::rgb(0x01)))
            .with_border(Some(Paint::rgb(0x02)));
        let bounds = Rect::new(1.0, 1.0, 5.0, 5.0);
        let mut r = RecordingRenderer::default();
        rect.draw(&mut r, bounds);
        assert_eq!(
            r.ops,
            vec![
                Op::FillRect(bounds, Paint::rgb(0x01)),
                Op::DrawRect(bounds, Paint::rgb(0x02)),
            ]
        );

        rect.set_fill(Some(Paint::rgb(0x01).with_alpha(0.0)));
        let mut r = RecordingRenderer::default();
        rect.draw(&mut r, bounds);
        assert_eq!(r.ops, vec![Op::DrawRect(bounds, Paint::rgb(0x02))]);
    }

    #[test]
    fn shapes_draw_at_their_box() {
        let mut r = RecordingRenderer::default();
        Circlet::new(2.0).draw(&mut r, Rect::new(10.0, 20.0, 14.0, 24.0));
        Linelet::new(-3.0, 4.0).draw(&mut r, Rect::new(0.0, 0.0, 3.0, 4.0));
        Trianglet::new((4.0, 0.0), (0.0, 4.0))
            .with_fill(None)
            .with_border(Some(Paint::default()))
            .draw(&mut r, Rect::new(1.0, 1.0, 5.0, 5.0));
        assert_eq!(
            r.ops,
            vec![
                Op::Circle(Circle::new((12.0, 22.0), 2.0), true),
                Op::Line(Line::new((3.0, 0.0), (0.0, 4.0))),
                Op::Polygon(
                    vec![Point::new(1.0, 1.0), Point::new(5.0, 1.0), Point::new(1.0, 5.0)],
                    false
                ),
            ]
        );
    }

    #[test]
    fn shapes_bounce_in_a_plane() {
        let mut plane = Plane::with_world(
            (),
            PlaneConfig {
                extent: Some(Size::new(100.0, 100.0)),
                ..PlaneConfig::default()
            },
        );
        let mut ball = Circlet::new(5.0);
        ball.motion_mut().set_velocity(Vec2::new(5.0, 0.0));
        ball.motion_mut().set_border_strategy(BorderStrategy::Bounce);
        let id = plane.insert_at(ball, 88.0, 10.0);

        plane.on_elapse(&Tick::default());
        let ball = plane.matter::<Circlet>(id).unwrap();
        assert_eq!(ball.motion().velocity(), Vec2::new(-5.0, 0.0));
        assert_eq!(plane.boundary(id).unwrap().x1, 100.0);
    }
}
