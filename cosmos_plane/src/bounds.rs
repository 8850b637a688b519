// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazily recomputed union of every visible matter's box.

use kurbo::Rect;

use crate::plane::Plane;
use crate::world::World;

/// Cached `[left, top, right, bottom]` of the union of unmasked boxes.
///
/// `right < left` marks the cache invalid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct BoundsCache {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl BoundsCache {
    pub(crate) const fn invalid() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: f64::NEG_INFINITY,
            bottom: 0.0,
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.right >= self.left
    }

    fn from_rect(rect: Rect) -> Self {
        Self {
            left: rect.x0,
            top: rect.y0,
            right: rect.x1,
            bottom: rect.y1,
        }
    }

    fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl<W: World> Plane<W> {
    /// Union of every unmasked matter's box in plane-local space.
    ///
    /// Returns [`Rect::ZERO`] when no matter is visible. The result is cached
    /// until something that could change it happens.
    pub fn matters_boundary(&self) -> Rect {
        let cache = self.bounds.get();
        if cache.is_valid() {
            return cache.rect();
        }
        let rect = self.compute_matters_boundary();
        self.bounds.set(BoundsCache::from_rect(rect));
        rect
    }

    /// The cached union without recomputing it, or `None` while it is stale.
    pub fn cached_matters_boundary(&self) -> Option<Rect> {
        let cache = self.bounds.get();
        cache.is_valid().then(|| cache.rect())
    }

    /// Mark the cached union stale.
    ///
    /// The plane does this itself after every change it performs; hosts only
    /// need it after changing a matter's geometry behind the plane's back.
    pub fn invalidate_bounds(&self) {
        self.bounds.set(BoundsCache::invalid());
    }

    fn compute_matters_boundary(&self) -> Rect {
        let mut union: Option<Rect> = None;
        for id in self.iter() {
            let idx = id.idx();
            if self.is_unmasked_at(idx) {
                let bound = self.matter_bound(idx);
                union = Some(match union {
                    Some(acc) => acc.union(bound),
                    None => bound,
                });
            }
        }
        union.unwrap_or(Rect::ZERO)
    }
}
