// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border physics: a few shapes bouncing around a bounded plane.
//!
//! This example shows how to:
//! - give a plane an extent so movables collide with its edges,
//! - configure per-edge border strategies,
//! - drive the plane with ticks and paint it through a `Renderer`.
//!
//! Run:
//! - `cargo run -p cosmos_demos --example bouncing_shapes`

use core::time::Duration;

use cosmos_plane::{
    Anchor, BorderStrategy, Circlet, Paint, Plane, PlaneConfig, Rectanglet, RegularPolygonlet,
    Renderer, Tick, Trianglet, World,
};
use kurbo::{Circle, Ellipse, Line, Point, Rect, Size, Vec2};

/// Counts repaint requests so we only paint frames that changed.
#[derive(Default)]
struct Host {
    dirty: bool,
}

impl World for Host {
    fn on_refresh(&mut self) {
        self.dirty = true;
    }
}

/// A renderer that prints what it is asked to draw.
struct Printer;

impl Printer {
    fn log(&self, what: &str, paint: Paint) {
        println!("    {what} #{:06X}", paint.rgb);
    }
}

impl Renderer for Printer {
    fn set_clip(&mut self, _clip: Option<Rect>) {}

    fn draw_point(&mut self, point: Point, paint: Paint) {
        self.log(&format!("point {point:?}"), paint);
    }

    fn draw_line(&mut self, line: Line, paint: Paint) {
        self.log(&format!("line {:?} -> {:?}", line.p0, line.p1), paint);
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint) {
        self.log(&format!("rect {rect:?}"), paint);
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.log(&format!("filled rect {rect:?}"), paint);
    }

    fn draw_circle(&mut self, circle: Circle, paint: Paint) {
        self.log(&format!("circle at {:?} r={}", circle.center, circle.radius), paint);
    }

    fn fill_circle(&mut self, circle: Circle, paint: Paint) {
        self.log(
            &format!("filled circle at {:?} r={}", circle.center, circle.radius),
            paint,
        );
    }

    fn draw_ellipse(&mut self, ellipse: Ellipse, paint: Paint) {
        self.log(&format!("ellipse at {:?}", ellipse.center()), paint);
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, paint: Paint) {
        self.log(&format!("filled ellipse at {:?}", ellipse.center()), paint);
    }

    fn draw_polygon(&mut self, vertices: &[Point], paint: Paint) {
        self.log(&format!("polygon with {} vertices", vertices.len()), paint);
    }

    fn fill_polygon(&mut self, vertices: &[Point], paint: Paint) {
        self.log(
            &format!("filled polygon with {} vertices", vertices.len()),
            paint,
        );
    }
}

fn main() {
    let extent = Size::new(120.0, 80.0);
    let mut plane = Plane::with_world(
        Host::default(),
        PlaneConfig {
            name: "bouncing".into(),
            extent: Some(extent),
            background: Some(Paint::rgb(0x20_20_20)),
            ..PlaneConfig::default()
        },
    );

    // A ball bouncing everywhere.
    let mut ball = Circlet::new(6.0).with_fill(Some(Paint::rgb(0xFF_80_00)));
    ball.motion_mut().set_speed(9.0, 30.0);
    ball.motion_mut().set_border_strategy(BorderStrategy::Bounce);
    let ball = plane.insert(ball, Point::new(60.0, 40.0), Anchor::Center, Vec2::ZERO);

    // A box that bounces off the side walls but stops at the floor or ceiling.
    let mut crate_box = Rectanglet::square(10.0)
        .with_fill(None)
        .with_border(Some(Paint::rgb(0x00_C0_FF)));
    crate_box.motion_mut().set_speed(7.0, 100.0);
    crate_box
        .motion_mut()
        .set_border_strategy((BorderStrategy::Stop, BorderStrategy::Bounce));
    let crate_box = plane.insert_at(crate_box, 10.0, 10.0);

    // A static hexagon and a triangle parked next to it.
    let hexagon = plane.insert(
        RegularPolygonlet::new(6, 8.0, 0.0).with_fill(Some(Paint::rgb(0x80_FF_80))),
        Point::new(100.0, 60.0),
        Anchor::Center,
        Vec2::ZERO,
    );
    let triangle = plane.insert_at(Trianglet::new((8.0, 0.0), (4.0, 8.0)), 0.0, 0.0);
    plane.move_to(
        triangle,
        (hexagon, Anchor::LeftCenter),
        Anchor::RightCenter,
        Vec2::new(-2.0, 0.0),
    );

    let viewport = extent.to_rect();
    let interval = Duration::from_millis(16);
    for count in 0..6_u64 {
        let tick = Tick {
            count,
            interval,
            uptime: interval * u32::try_from(count).unwrap_or(u32::MAX),
        };
        plane.on_elapse(&tick);

        println!(
            "tick {count}: ball {:?}, box {:?}",
            plane.boundary(ball),
            plane.boundary(crate_box)
        );
        if std::mem::take(&mut plane.world_mut().dirty) {
            plane.draw(&mut Printer, viewport);
        }
    }

    println!("everything fits in {:?}", plane.matters_boundary());
}

