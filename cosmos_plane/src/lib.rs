// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cosmos Plane: a retained-mode 2D plane of matters.
//!
//! A [`Plane`] owns an ordered collection of matters (anything implementing
//! [`Matter`]) and provides the services a host application needs around
//! them: anchor-based placement, batched repaint requests, a lazily cached
//! union of bounds, hit testing and selection, input routing, border
//! physics for moving matters, and painting through a [`Renderer`].
//!
//! The crate does not own a window, an event loop, or a rasterizer. The
//! host forwards input and ticks to the plane, supplies a [`Renderer`] when
//! it paints, and learns about repaints and interactions through the
//! plane's [`World`].
//!
//! # Concepts
//!
//! - Paint order is insertion order. The first inserted matter paints
//!   first; the last inserted is picked first by [`Plane::find_matter`].
//! - Handles are generational [`MatterId`]s. After [`Plane::remove`] (or
//!   [`Plane::erase`]) every operation taking a stale handle is a no-op.
//! - Placement aims a matter's [`Anchor`] at a [`Target`]: a point, another
//!   matter's anchor, or fractions of other matters' boxes. Matters that are
//!   not [ready](Matter::is_ready) yet keep a [`PendingPlacement`] that
//!   [`Plane::notify_matter_ready`] replays.
//! - Update sequences ([`Plane::update_sequence`]) coalesce repaint requests:
//!   the owner's [`World::on_refresh`] fires once when the outermost sequence
//!   ends.
//! - Modes mask matters: each matter remembers the plane's mode at insertion
//!   and is hidden while [`Plane::change_mode`] selects a mode missing any of
//!   those bits.
//!
//! # Example
//!
//! ```rust
//! use cosmos_plane::{Anchor, BorderStrategy, Circlet, Plane, PlaneConfig, Tick, World};
//! use kurbo::{Size, Vec2};
//!
//! #[derive(Default)]
//! struct Host {
//!     repaints: usize,
//! }
//!
//! impl World for Host {
//!     fn on_refresh(&mut self) {
//!         self.repaints += 1;
//!     }
//! }
//!
//! let mut plane = Plane::with_world(
//!     Host::default(),
//!     PlaneConfig {
//!         extent: Some(Size::new(100.0, 100.0)),
//!         ..PlaneConfig::default()
//!     },
//! );
//!
//! let mut ball = Circlet::new(5.0);
//! ball.motion_mut().set_speed(5.0, 0.0);
//! ball.motion_mut().set_border_strategy(BorderStrategy::Bounce);
//! let id = plane.insert(ball, (95.0, 50.0).into(), Anchor::RightCenter, Vec2::ZERO);
//!
//! plane.on_elapse(&Tick::default());
//! assert!(plane.boundary(id).unwrap().x1 <= 100.0);
//! assert_eq!(plane.world().repaints, 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `cosmos_geometry`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod batch;
mod bounds;
mod draw;
mod error;
mod event;
mod matter;
mod motion;
mod physics;
mod placement;
mod plane;
mod render;
mod select;
mod shapes;
mod types;
mod world;

#[cfg(test)]
mod testing;

pub use cosmos_geometry::{Anchor, HitParams};

pub use batch::UpdateSequence;
pub use error::PlaneError;
pub use matter::Matter;
pub use motion::{BorderStrategies, BorderStrategy, Motion, Movable};
pub use placement::{PendingPlacement, Target};
pub use plane::{MatterCursor, MatterInfo, Matters, Plane};
pub use render::Renderer;
pub use shapes::{
    CircleOutline, Circlet, EllipseOutline, Ellipselet, LineOutline, Linelet, Outline,
    RectOutline, Rectanglet, RegularPolygonOutline, RegularPolygonlet, Shapelet,
    TriangleOutline, Trianglet,
};
pub use types::{
    Buttons, Capabilities, MatterId, Modifiers, Paint, PlaneConfig, PlaneId, PointerButton, Tick,
};
pub use world::World;
