// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owner of a plane: lifecycle callbacks and selection policy.

use kurbo::{Point, Rect};

use crate::matter::Matter;
use crate::render::Renderer;
use crate::types::{MatterId, Paint, Tick};

/// Receives a plane's notifications and decides its selection policy.
///
/// Every method has a default, so an owner only overrides what it cares
/// about. `()` is the inert owner: it never allows selection and ignores every
/// callback.
///
/// Callbacks run while the plane is mid-operation and therefore get ids and
/// read-only views, not the plane itself. Owners that need to react with
/// further plane operations should record what happened and act after the
/// call returns.
pub trait World {
    /// The plane needs repainting. Fired once per outermost update sequence.
    fn on_refresh(&mut self) {}

    /// A matter finished its placement with real geometry.
    fn on_matter_ready(&mut self, _id: MatterId) {}

    /// A matter gained (`true`) or lost (`false`) focus.
    fn on_focus(&mut self, _id: MatterId, _focused: bool) {}

    /// The pointer hovers over a matter.
    fn on_hover(&mut self, _id: MatterId, _local: Point) {}

    /// The pointer left a previously hovered matter.
    fn on_goodbye(&mut self, _id: MatterId, _local: Point) {}

    /// A single click completed on a matter.
    fn on_tap(&mut self, _id: MatterId, _local: Point) {}

    /// A single click completed on a matter that is (now) selected.
    fn on_tap_selected(&mut self, _id: MatterId, _local: Point) {}

    /// The user asked to save (Ctrl+S not consumed by the focused matter).
    fn on_save(&mut self) {}

    /// Whether `matter` may be selected at all.
    fn can_select(&self, _id: MatterId, _matter: &dyn Matter) -> bool {
        false
    }

    /// Whether more than one matter may be selected at a time.
    fn can_select_multiple(&self) -> bool {
        false
    }

    /// A selection flag is about to change to `selected`.
    fn before_select(&mut self, _id: MatterId, _selected: bool) {}

    /// A selection flag changed to `selected`.
    fn after_select(&mut self, _id: MatterId, _selected: bool) {}

    /// Per-tick hook, run after every matter of the plane was updated.
    fn update(&mut self, _tick: &Tick) {}

    /// Paint the selection indicator around a selected matter's box.
    fn draw_selection(&mut self, renderer: &mut dyn Renderer, bounds: Rect) {
        renderer.draw_rect(bounds, Paint::rgb(0x00_FF_FF));
    }
}

impl World for () {}
