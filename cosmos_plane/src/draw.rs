// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting a plane through a [`Renderer`].

use cosmos_geometry::rectangle_overlay;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Vec2};

use crate::plane::Plane;
use crate::render::Renderer;
use crate::world::World;

impl<W: World> Plane<W> {
    /// Paint the background and every visible matter into `viewport`.
    ///
    /// Matters are painted in paint order, each clipped to its box snapped
    /// out to whole pixels. Matters whose box misses the viewport are
    /// skipped. Selected matters get [`World::draw_selection`] on top,
    /// unclipped. The clip is lifted before returning.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, viewport: Rect) {
        if let Some(background) = self.background.filter(|paint| paint.is_visible()) {
            renderer.fill_rect(viewport, background);
        }

        let Some(head) = self.head else {
            renderer.set_clip(None);
            return;
        };
        let origin = Vec2::new(viewport.x0, viewport.y0);
        let mut idx = head;
        loop {
            if self.is_unmasked_at(idx) {
                let bounds = self.screen_bound(idx) + origin;
                if rectangle_overlay(bounds, viewport) {
                    renderer.set_clip(Some(pixel_clip(bounds)));
                    self.slot_mut(idx).matter.draw(renderer, bounds);
                    if self.slot(idx).info.selected {
                        renderer.set_clip(None);
                        self.world.draw_selection(renderer, bounds);
                    }
                }
            }
            idx = self.slot(idx).info.next;
            if idx == head {
                break;
            }
        }
        renderer.set_clip(None);
    }
}

/// Whole-pixel clip: origin floored, size ceiled.
fn pixel_clip(bounds: Rect) -> Rect {
    let x = bounds.x0.floor();
    let y = bounds.y0.floor();
    Rect::new(x, y, x + bounds.width().ceil(), y + bounds.height().ceil())
}
