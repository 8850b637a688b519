// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick updates and border collisions for movable matters.

use kurbo::{Point, Size, Vec2};
use tracing::trace;

use crate::plane::Plane;
use crate::types::Tick;
use crate::world::World;

/// Signed overflow of `[pos, pos + len]` against `[0, limit]`.
fn overflow(pos: f64, len: f64, limit: f64) -> f64 {
    if pos < 0.0 {
        pos
    } else if pos + len > limit {
        pos + len - limit
    } else {
        0.0
    }
}

/// Pull `[pos, pos + len]` back inside `[0, limit]`.
fn clamp_into(pos: f64, len: f64, limit: f64) -> f64 {
    if pos < 0.0 {
        0.0
    } else if pos + len > limit {
        limit - len
    } else {
        pos
    }
}

impl<W: World> Plane<W> {
    /// Advance one tick.
    ///
    /// Inside a single update sequence: every visible matter is updated, then
    /// each movable with a non-zero velocity advances by it. When the plane
    /// has an extent, crossing it reports the signed overflow to
    /// [`Movable::on_border`](crate::Movable::on_border); if the policy left
    /// either velocity component at zero, the matter is pulled back inside.
    /// The owner's [`World::update`] runs last.
    pub fn on_elapse(&mut self, tick: &Tick) {
        self.batched(|plane| {
            if let Some(head) = plane.head {
                let mut idx = head;
                loop {
                    if plane.is_unmasked_at(idx) {
                        plane.elapse_matter(idx, tick);
                    }
                    idx = plane.slot(idx).info.next;
                    if idx == head {
                        break;
                    }
                }
            }
            plane.world.update(tick);
        });
    }

    fn elapse_matter(&mut self, idx: usize, tick: &Tick) {
        let area = self.extent;
        let slot = self.slot_mut(idx);
        slot.matter.update(tick);

        let Some(velocity) = slot.matter.as_movable().map(|m| m.velocity()) else {
            return;
        };
        if velocity == Vec2::ZERO {
            return;
        }

        let mut x = slot.info.x + velocity.x;
        let mut y = slot.info.y + velocity.y;
        let Size { width, height } = slot.matter.extent(x, y);

        if let Some(area) = area {
            let hdist = overflow(x, width, area.width);
            let vdist = overflow(y, height, area.height);
            if hdist != 0.0 || vdist != 0.0 {
                if let Some(movable) = slot.matter.as_movable_mut() {
                    movable.on_border(hdist, vdist);
                    let after = movable.velocity();
                    if after.x == 0.0 || after.y == 0.0 {
                        x = clamp_into(x, width, area.width);
                        y = clamp_into(y, height, area.height);
                    }
                }
                trace!(plane = %self.name(), idx, hdist, vdist, "border");
            }
        }

        self.relocate(idx, Point::new(x, y));
        self.notify_updated();
    }
}
