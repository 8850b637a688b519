// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning: target resolution, anchored placement, deferred placement,
//! resizing, and scale propagation.

use cosmos_geometry::Anchor;
use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::PlaneError;
use crate::plane::{Plane, UNIT_SCALE};
use crate::types::MatterId;
use crate::world::World;

/// Where a placement aims, before the mover's own anchor is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Target {
    /// A literal point in plane-local space.
    Point(Point),
    /// The anchor point of another matter's box.
    Anchor(MatterId, Anchor),
    /// A fractional point inside another matter's box.
    Fraction(MatterId, f64, f64),
    /// Each axis resolved against its own reference matter.
    Split {
        /// Reference matter and fraction for the x axis.
        x: (MatterId, f64),
        /// Reference matter and fraction for the y axis.
        y: (MatterId, f64),
    },
}

impl From<Point> for Target {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<(f64, f64)> for Target {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Point(Point::new(x, y))
    }
}

impl From<(MatterId, Anchor)> for Target {
    fn from((other, anchor): (MatterId, Anchor)) -> Self {
        Self::Anchor(other, anchor)
    }
}

impl From<(MatterId, f64, f64)> for Target {
    fn from((other, fx, fy): (MatterId, f64, f64)) -> Self {
        Self::Fraction(other, fx, fy)
    }
}

impl From<(MatterId, f64, MatterId, f64)> for Target {
    fn from((x_ref, fx, y_ref, fy): (MatterId, f64, MatterId, f64)) -> Self {
        Self::Split {
            x: (x_ref, fx),
            y: (y_ref, fy),
        }
    }
}

/// A placement requested while its matter was not ready.
///
/// Replayed once by [`Plane::notify_matter_ready`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingPlacement {
    /// The resolved target point.
    pub target: Point,
    /// The mover's anchor fractions.
    pub fraction: (f64, f64),
    /// Offset applied after anchoring.
    pub offset: Vec2,
}

impl<W: World> Plane<W> {
    /// Move a matter so that its `anchor` lands on `target`, shifted by `offset`.
    ///
    /// Returns whether the position changed. Unbound or masked movers and
    /// references are ignored; see [`Plane::try_move_to`] for the reason.
    pub fn move_to(
        &mut self,
        id: MatterId,
        target: impl Into<Target>,
        anchor: Anchor,
        offset: Vec2,
    ) -> bool {
        match self.try_move_to(id, target, anchor, offset) {
            Ok(moved) => moved,
            Err(err) => {
                debug!(plane = %self.name(), %err, "move_to skipped");
                false
            }
        }
    }

    /// [`Plane::move_to`], reporting why nothing happened.
    ///
    /// A mover that is not ready is placed provisionally at
    /// `target + offset` and the request is kept for
    /// [`Plane::notify_matter_ready`].
    pub fn try_move_to(
        &mut self,
        id: MatterId,
        target: impl Into<Target>,
        anchor: Anchor,
        offset: Vec2,
    ) -> Result<bool, PlaneError> {
        let idx = self.unmasked_index(id)?;
        let point = self.resolve_target(target.into())?;
        let moved = self.place(idx, point, anchor.fraction(), offset);
        if moved {
            trace!(plane = %self.name(), ?id, x = point.x, y = point.y, "move_to");
            self.notify_updated();
        }
        Ok(moved)
    }

    /// Shift a matter by `delta`, or every selected unmasked matter when `id`
    /// is `None`.
    ///
    /// Returns whether anything moved. The group form repaints once, and only
    /// if something moved.
    pub fn move_by(&mut self, id: Option<MatterId>, delta: Vec2) -> bool {
        match id {
            Some(id) => match self.unmasked_index(id) {
                Ok(idx) => {
                    let moved = self.shift(idx, delta);
                    if moved {
                        self.notify_updated();
                    }
                    moved
                }
                Err(err) => {
                    debug!(plane = %self.name(), %err, "move_by skipped");
                    false
                }
            },
            None => {
                let selected: SmallVec<[usize; 8]> = self
                    .iter()
                    .map(MatterId::idx)
                    .filter(|&idx| self.is_unmasked_at(idx) && self.slot(idx).info.selected)
                    .collect();
                if selected.is_empty() {
                    return false;
                }
                self.batched(|plane| {
                    let mut moved = false;
                    for idx in selected {
                        moved |= plane.shift(idx, delta);
                    }
                    if moved {
                        plane.notify_updated();
                    }
                    moved
                })
            }
        }
    }

    /// Finish the deferred placement of a matter that just became ready.
    ///
    /// Propagates the plane's scale, replays the stored placement, repaints,
    /// and fires [`World::on_matter_ready`]. Does nothing (and returns `false`)
    /// when no placement is pending or the matter is still not ready.
    pub fn notify_matter_ready(&mut self, id: MatterId) -> bool {
        let idx = match self.bound_index(id) {
            Ok(idx) => idx,
            Err(err) => {
                debug!(plane = %self.name(), %err, "notify_matter_ready skipped");
                return false;
            }
        };
        let slot = self.slot(idx);
        if slot.info.pending.is_none() {
            return false;
        }
        if !slot.matter.is_ready() {
            debug!(plane = %self.name(), ?id, "matter reported ready but is not");
            return false;
        }
        let Some(pending) = self.slot_mut(idx).info.pending.take() else {
            return false;
        };

        self.batched(|plane| {
            if plane.scale != UNIT_SCALE {
                let scale = plane.scale;
                plane.rescale(idx, scale, UNIT_SCALE);
            }
            plane.place(idx, pending.target, pending.fraction, pending.offset);
            trace!(plane = %plane.name(), ?id, "deferred placement replayed");
            plane.invalidate_bounds();
            plane.notify_updated();
            plane.world.on_matter_ready(id);
        });
        true
    }

    /// Resize a resizable matter, keeping its resize anchor point fixed.
    ///
    /// Returns whether the size changed.
    pub fn resize(&mut self, id: MatterId, width: f64, height: f64) -> bool {
        match self.try_resize(id, width, height) {
            Ok(changed) => changed,
            Err(err) => {
                debug!(plane = %self.name(), %err, "resize skipped");
                false
            }
        }
    }

    /// [`Plane::resize`], reporting why nothing happened.
    pub fn try_resize(
        &mut self,
        id: MatterId,
        width: f64,
        height: f64,
    ) -> Result<bool, PlaneError> {
        let idx = self.unmasked_index(id)?;
        if !(width > 0.0 && height > 0.0) {
            return Err(PlaneError::InvalidSize { width, height });
        }
        let Some(anchor) = self.slot(idx).matter.resize_anchor() else {
            return Err(PlaneError::NotResizable(id));
        };
        let changed = self.resize_in_place(idx, Size::new(width, height), anchor);
        if changed {
            self.notify_updated();
        }
        Ok(changed)
    }

    /// Plane-wide scale.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Change the plane-wide scale.
    ///
    /// Every ready resizable matter is resized by `scale / previous` around
    /// its resize anchor. Non-positive factors are ignored.
    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        let scale = Vec2::new(sx, sy);
        if scale == self.scale || !(sx > 0.0 && sy > 0.0) {
            return;
        }
        let prev = core::mem::replace(&mut self.scale, scale);
        trace!(plane = %self.name(), sx, sy, "set_scale");

        self.batched(|plane| {
            if let Some(head) = plane.head {
                let mut idx = head;
                loop {
                    if plane.is_unmasked_at(idx) && plane.slot(idx).matter.is_ready() {
                        plane.rescale(idx, scale, prev);
                    }
                    idx = plane.slot(idx).info.next;
                    if idx == head {
                        break;
                    }
                }
            }
            plane.invalidate_bounds();
            plane.notify_updated();
        });
    }

    /// Offset added to every position before scaling, when mapping to screen.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Change the screen translation.
    pub fn set_translation(&mut self, dx: f64, dy: f64) {
        let translation = Vec2::new(dx, dy);
        if translation != self.translation {
            self.translation = translation;
            self.notify_updated();
        }
    }

    /// The `anchor` point of a matter's box in plane-local space.
    pub fn location(&self, id: MatterId, anchor: Anchor) -> Option<Point> {
        self.boundary(id).map(|bound| anchor.point_in(bound))
    }

    /// A matter's box in plane-local space.
    pub fn boundary(&self, id: MatterId) -> Option<Rect> {
        let idx = self.bound_index(id).ok()?;
        Some(self.matter_bound(idx))
    }

    pub(crate) fn resolve_target(&self, target: Target) -> Result<Point, PlaneError> {
        let bound = |id: MatterId| -> Result<Rect, PlaneError> {
            let idx = self.unmasked_index(id)?;
            Ok(self.matter_bound(idx))
        };
        match target {
            Target::Point(point) => Ok(point),
            Target::Anchor(other, anchor) => Ok(anchor.point_in(bound(other)?)),
            Target::Fraction(other, fx, fy) => Ok(Anchor::Fraction(fx, fy).point_in(bound(other)?)),
            Target::Split {
                x: (x_ref, fx),
                y: (y_ref, fy),
            } => {
                let xb = bound(x_ref)?;
                let yb = bound(y_ref)?;
                Ok(Point::new(
                    xb.x0 + xb.width() * fx,
                    yb.y0 + yb.height() * fy,
                ))
            }
        }
    }

    /// Put the `fraction` point of a matter's box at `target + offset`.
    ///
    /// A matter that is not ready keeps the request and lands at
    /// `target + offset` for now.
    pub(crate) fn place(
        &mut self,
        idx: usize,
        target: Point,
        fraction: (f64, f64),
        offset: Vec2,
    ) -> bool {
        let slot = self.slot_mut(idx);
        let correction = if slot.matter.is_ready() {
            slot.info.pending = None;
            let size = slot.matter.extent(slot.info.x, slot.info.y);
            Vec2::new(size.width * fraction.0, size.height * fraction.1)
        } else {
            slot.info.pending = Some(PendingPlacement {
                target,
                fraction,
                offset,
            });
            Vec2::ZERO
        };
        self.relocate(idx, target - correction + offset)
    }

    fn shift(&mut self, idx: usize, delta: Vec2) -> bool {
        let info = &self.slot(idx).info;
        let position = Point::new(info.x + delta.x, info.y + delta.y);
        self.relocate(idx, position)
    }

    /// Write a position; only a different one counts as a move.
    pub(crate) fn relocate(&mut self, idx: usize, position: Point) -> bool {
        let info = &mut self.slot_mut(idx).info;
        if info.x == position.x && info.y == position.y {
            return false;
        }
        info.x = position.x;
        info.y = position.y;
        self.invalidate_bounds();
        true
    }

    pub(crate) fn rescale(&mut self, idx: usize, scale: Vec2, prev: Vec2) -> bool {
        let slot = self.slot(idx);
        let Some(anchor) = slot.matter.resize_anchor() else {
            return false;
        };
        let size = slot.matter.extent(slot.info.x, slot.info.y);
        let target = Size::new(
            size.width / prev.x * scale.x,
            size.height / prev.y * scale.y,
        );
        self.resize_in_place(idx, target, anchor)
    }

    /// Resize and reposition so that the `anchor` point stays put.
    fn resize_in_place(&mut self, idx: usize, size: Size, anchor: Anchor) -> bool {
        let slot = self.slot_mut(idx);
        let (x, y) = (slot.info.x, slot.info.y);
        let old = slot.matter.extent(x, y);
        if old == size || !(size.width > 0.0 && size.height > 0.0) {
            return false;
        }
        slot.matter.resize(size);
        let new = slot.matter.extent(x, y);
        let (fx, fy) = anchor.fraction();
        let position = Point::new(
            x + (old.width - new.width) * fx,
            y + (old.height - new.height) * fy,
        );
        self.relocate(idx, position);
        self.invalidate_bounds();
        true
    }
}
