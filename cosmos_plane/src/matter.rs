// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Matter`] trait: the contract every node of a plane implements.

use core::any::Any;

use cosmos_geometry::Anchor;
use kurbo::{Point, Rect, Size, Vec2};

use crate::motion::Movable;
use crate::render::Renderer;
use crate::types::{Buttons, Capabilities, Modifiers, PointerButton, Tick};

/// A visual/interactive unit placed in a [`Plane`](crate::Plane).
///
/// Only [`Matter::extent`] is required. Everything else has an inert default,
/// so simple matters stay small. Capabilities are orthogonal:
///
/// - events: [`Matter::capabilities`] opts into high-level and raw input;
/// - resizing: [`Matter::resize_anchor`] returning `Some` makes the matter
///   resizable, and the plane keeps that anchor point fixed when it resizes;
/// - motion: [`Matter::as_movable`] exposes a [`Movable`] for border physics.
///
/// Matters never reach into their plane. They are handed to it by value, get
/// a [`MatterId`](crate::MatterId) back, and every request (moving, selecting,
/// repainting) goes through the plane's methods.
pub trait Matter: Any {
    /// Size of the matter when its top-left corner is at `(x, y)` in plane space.
    ///
    /// Most matters ignore the position.
    fn extent(&self, x: f64, y: f64) -> Size;

    /// Paint the matter into `bounds`, its box in renderer space.
    ///
    /// The renderer is already clipped to `bounds`.
    fn draw(&mut self, _renderer: &mut dyn Renderer, _bounds: Rect) {}

    /// Per-tick hook, called by [`Plane::on_elapse`](crate::Plane::on_elapse)
    /// before any motion is applied.
    fn update(&mut self, _tick: &Tick) {}

    /// Whether the extent is meaningful yet.
    ///
    /// Placement requests for a matter that is not ready are stored and
    /// replayed by [`Plane::notify_matter_ready`](crate::Plane::notify_matter_ready).
    fn is_ready(&self) -> bool {
        true
    }

    /// First construction step, run right after the matter is bound.
    fn pre_construct(&mut self) {}

    /// Second construction step.
    fn construct(&mut self) {}

    /// Last construction step, run before initial placement.
    fn post_construct(&mut self) {}

    /// Interaction capabilities.
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    /// Concealed matters are skipped by hit testing but still drawn.
    fn is_concealed(&self) -> bool {
        false
    }

    /// Fine hit test for non-rectangular shapes.
    ///
    /// `local` is relative to the top-left corner of the matter's box of
    /// `size`. Only called once the point is already inside that box.
    fn hit_test_local(&self, _local: Point, _size: Size) -> bool {
        true
    }

    /// The anchor kept fixed while resizing, or `None` when not resizable.
    fn resize_anchor(&self) -> Option<Anchor> {
        None
    }

    /// Adopt a new size. Only called for resizable matters, with positive
    /// dimensions that differ from the current extent.
    fn resize(&mut self, _size: Size) {}

    /// The matter gained (`true`) or lost (`false`) the caret.
    fn own_caret(&mut self, _owned: bool) {}

    /// A completed single click landed on the matter.
    fn on_tap(&mut self, _local: Point) -> bool {
        false
    }

    /// The pointer moved over the matter.
    fn on_hover(&mut self, _local: Point) -> bool {
        false
    }

    /// The pointer left the matter.
    fn on_goodbye(&mut self, _local: Point) -> bool {
        false
    }

    /// Raw pointer press.
    fn on_pointer_pressed(&mut self, _button: PointerButton, _local: Point, _clicks: u8) -> bool {
        false
    }

    /// Raw pointer release.
    fn on_pointer_released(&mut self, _button: PointerButton, _local: Point, _clicks: u8) -> bool {
        false
    }

    /// Raw pointer motion.
    fn on_pointer_move(&mut self, _buttons: Buttons, _local: Point, _delta: Vec2) -> bool {
        false
    }

    /// Scroll wheel or touchpad scroll while hovered.
    fn on_scroll(&mut self, _delta: Vec2) -> bool {
        false
    }

    /// Key press or release while focused.
    fn on_char(
        &mut self,
        _key: char,
        _modifiers: Modifiers,
        _repeats: u32,
        _pressed: bool,
    ) -> bool {
        false
    }

    /// Committed text input while focused.
    fn on_text(&mut self, _text: &str, _entire: bool) -> bool {
        false
    }

    /// In-progress (pre-edit) text input while focused.
    fn on_editing_text(&mut self, _text: &str, _cursor: usize, _span: usize) -> bool {
        false
    }

    /// The movable view of this matter, if it moves on its own.
    fn as_movable(&self) -> Option<&dyn Movable> {
        None
    }

    /// Mutable counterpart of [`Matter::as_movable`].
    fn as_movable_mut(&mut self) -> Option<&mut dyn Movable> {
        None
    }
}
