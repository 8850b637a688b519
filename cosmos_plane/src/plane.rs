// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core plane implementation: slots, the circular paint-order ring, and traversal.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::any::Any;
use core::cell::Cell;

use cosmos_geometry::Anchor;
use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, trace};

use crate::bounds::BoundsCache;
use crate::error::PlaneError;
use crate::matter::Matter;
use crate::placement::PendingPlacement;
use crate::types::{MatterId, Paint, PlaneConfig, PlaneId};
use crate::world::World;

pub(crate) const UNIT_SCALE: Vec2 = Vec2::new(1.0, 1.0);

/// An ordered collection of matters with placement, batching, and picking.
///
/// Matters form a circular ring in paint order: the first inserted is painted
/// first, the last inserted is painted last and picked first. The plane owns
/// every matter it holds; [`Plane::remove`] hands a matter back.
///
/// The type parameter `W` is the plane's owner ([`World`]). It defaults to
/// `()`, which never allows selection and ignores every callback.
///
/// ## Example
///
/// ```rust
/// use cosmos_plane::{Anchor, Plane, Rectanglet};
/// use kurbo::{Point, Rect, Vec2};
///
/// let mut plane = Plane::new();
/// let a = plane.insert_at(Rectanglet::new(10.0, 10.0), 0.0, 0.0);
/// let b = plane.insert(
///     Rectanglet::new(4.0, 4.0),
///     Point::new(20.0, 20.0),
///     Anchor::Center,
///     Vec2::ZERO,
/// );
///
/// assert_eq!(plane.boundary(b), Some(Rect::new(18.0, 18.0, 22.0, 22.0)));
/// assert_eq!(plane.matters_boundary(), Rect::new(0.0, 0.0, 22.0, 22.0));
/// assert_eq!(plane.find_matter(19.0, 19.0), Some(b));
/// assert_eq!(plane.iter().collect::<Vec<_>>(), [a, b]);
/// ```
pub struct Plane<W: World = ()> {
    id: PlaneId,
    name: String,
    pub(crate) world: W,
    /// slots
    slots: Vec<Option<Slot>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    count: usize,
    pub(crate) head: Option<usize>,
    pub(crate) epoch: u64,
    pub(crate) bounds: Cell<BoundsCache>,
    pub(crate) mode: u32,
    pub(crate) translation: Vec2,
    pub(crate) scale: Vec2,
    pub(crate) extent: Option<Size>,
    pub(crate) background: Option<Paint>,
    pub(crate) hovering: Option<usize>,
    pub(crate) focused: Option<usize>,
    pub(crate) depth: u32,
    pub(crate) dirty: bool,
}

impl<W: World> core::fmt::Debug for Plane<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Plane")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("matters", &self.count)
            .field("free_list", &self.free_list.len())
            .field("epoch", &self.epoch)
            .field("mode", &self.mode)
            .field("update_depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<W: World + Default> Default for Plane<W> {
    fn default() -> Self {
        Self::with_world(W::default(), PlaneConfig::default())
    }
}

pub(crate) struct Slot {
    pub(crate) generation: u32,
    pub(crate) matter: Box<dyn Matter>,
    pub(crate) info: MatterInfo,
}

/// Per-matter metadata owned by the plane that holds the matter.
#[derive(Clone, Debug)]
pub struct MatterInfo {
    master: PlaneId,
    mode: u32,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) selected: bool,
    pub(crate) pending: Option<PendingPlacement>,
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

impl MatterInfo {
    fn new(master: PlaneId, mode: u32) -> Self {
        Self {
            master,
            mode,
            x: 0.0,
            y: 0.0,
            selected: false,
            pending: None,
            next: 0,
            prev: 0,
        }
    }

    /// The plane this metadata is bound to.
    pub fn master(&self) -> PlaneId {
        self.master
    }

    /// Mode of the plane when the matter was inserted.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Top-left corner in plane-local space.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether the matter is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The placement waiting for the matter to become ready, if any.
    pub fn pending(&self) -> Option<&PendingPlacement> {
        self.pending.as_ref()
    }
}

/// Whether a matter inserted under `matter_mode` shows under `plane_mode`.
#[inline]
pub(crate) fn is_unmasked(matter_mode: u32, plane_mode: u32) -> bool {
    (matter_mode & plane_mode) == matter_mode
}

impl Plane {
    /// Create an empty plane owned by `()`.
    pub fn new() -> Self {
        Self::with_world((), PlaneConfig::default())
    }
}

impl<W: World> Plane<W> {
    /// Create an empty plane with an owner and settings.
    pub fn with_world(world: W, config: PlaneConfig) -> Self {
        Self {
            id: PlaneId::next(),
            name: config.name,
            world,
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            count: 0,
            head: None,
            epoch: 0,
            bounds: Cell::new(BoundsCache::invalid()),
            mode: config.initial_mode,
            translation: Vec2::ZERO,
            scale: UNIT_SCALE,
            extent: config.extent,
            background: config.background,
            hovering: None,
            focused: None,
            depth: 0,
            dirty: false,
        }
    }

    /// Identity of this plane.
    pub fn id(&self) -> PlaneId {
        self.id
    }

    /// Name given in [`PlaneConfig::name`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owner.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// The owner, mutably.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Number of matters, masked or not.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the plane holds no matter.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Structural version: changes on every insertion, removal, and erase.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Insert `matter` with its `anchor` point at `position`, then shift it by `offset`.
    ///
    /// The matter joins the end of the paint order. Its construction hooks run
    /// inside an update sequence, followed by the initial placement. A matter
    /// that is not ready yet is placed provisionally and finishes placement in
    /// [`Plane::notify_matter_ready`]; a ready one is scaled to the plane's
    /// current scale and reported through [`World::on_matter_ready`].
    pub fn insert<M: Matter>(
        &mut self,
        matter: M,
        position: Point,
        anchor: Anchor,
        offset: Vec2,
    ) -> MatterId {
        self.insert_boxed(Box::new(matter), position, anchor, offset)
    }

    /// Insert `matter` with its top-left corner at `(x, y)`.
    pub fn insert_at<M: Matter>(&mut self, matter: M, x: f64, y: f64) -> MatterId {
        self.insert(matter, Point::new(x, y), Anchor::LeftTop, Vec2::ZERO)
    }

    /// [`Plane::insert`] for an already boxed matter, such as one handed back
    /// by [`Plane::remove`].
    pub fn insert_boxed(
        &mut self,
        matter: Box<dyn Matter>,
        position: Point,
        anchor: Anchor,
        offset: Vec2,
    ) -> MatterId {
        let id = self.alloc(matter, MatterInfo::new(self.id, self.mode));
        let idx = id.idx();
        self.link_before_head(idx);
        self.count += 1;
        self.epoch = self.epoch.wrapping_add(1);
        trace!(plane = %self.name, ?id, "insert");

        self.batched(|plane| {
            {
                let matter = &mut plane.slot_mut(idx).matter;
                matter.pre_construct();
                matter.construct();
                matter.post_construct();
            }
            plane.place(idx, position, anchor.fraction(), offset);
            plane.invalidate_bounds();

            if plane.slot(idx).matter.is_ready() {
                if plane.scale != UNIT_SCALE {
                    let scale = plane.scale;
                    plane.rescale(idx, scale, UNIT_SCALE);
                }
                plane.notify_updated();
                plane.world.on_matter_ready(id);
            } else {
                plane.notify_updated();
            }
        });

        id
    }

    /// Remove a matter and hand it back.
    ///
    /// Returns `None` (and changes nothing) when `id` is not bound to this
    /// plane. Hover and focus pointing at the matter are cleared; a focused
    /// matter is told it lost the caret.
    pub fn remove(&mut self, id: MatterId) -> Option<Box<dyn Matter>> {
        let idx = match self.bound_index(id) {
            Ok(idx) => idx,
            Err(err) => {
                debug!(plane = %self.name, %err, "remove skipped");
                return None;
            }
        };

        let (prev, next) = {
            let info = &self.slot(idx).info;
            (info.prev, info.next)
        };
        self.slot_mut(prev).info.next = next;
        self.slot_mut(next).info.prev = prev;
        if self.head == Some(idx) {
            self.head = if next == idx { None } else { Some(next) };
        }
        if self.hovering == Some(idx) {
            self.hovering = None;
        }

        let mut matter = self.slots[idx].take().expect("dangling matter slot").matter;
        self.free_list.push(idx);
        self.count -= 1;
        self.epoch = self.epoch.wrapping_add(1);
        trace!(plane = %self.name, ?id, "remove");

        if self.focused == Some(idx) {
            self.focused = None;
            matter.own_caret(false);
            self.world.on_focus(id, false);
        }

        self.invalidate_bounds();
        self.notify_updated();
        Some(matter)
    }

    /// Drop every matter at once.
    ///
    /// No per-matter callbacks run; outstanding ids all become stale.
    pub fn erase(&mut self) {
        for idx in 0..self.slots.len() {
            if self.slots[idx].take().is_some() {
                self.free_list.push(idx);
            }
        }
        self.head = None;
        self.hovering = None;
        self.focused = None;
        self.count = 0;
        self.epoch = self.epoch.wrapping_add(1);
        self.invalidate_bounds();
    }

    /// Whether `id` refers to a matter bound to this plane.
    pub fn contains(&self, id: MatterId) -> bool {
        self.bound_index(id).is_ok()
    }

    /// Whether `id` is bound and visible under the current mode.
    pub fn matter_unmasked(&self, id: MatterId) -> bool {
        self.unmasked_index(id).is_ok()
    }

    /// The first matter in paint order.
    pub fn head(&self) -> Option<MatterId> {
        self.head.map(|idx| self.id_of(idx))
    }

    /// The matter painted right after `id`, wrapping around.
    pub fn next_of(&self, id: MatterId) -> Option<MatterId> {
        let idx = self.bound_index(id).ok()?;
        Some(self.id_of(self.slot(idx).info.next))
    }

    /// The matter painted right before `id`, wrapping around.
    pub fn prev_of(&self, id: MatterId) -> Option<MatterId> {
        let idx = self.bound_index(id).ok()?;
        Some(self.id_of(self.slot(idx).info.prev))
    }

    /// Metadata of a bound matter.
    pub fn info(&self, id: MatterId) -> Option<&MatterInfo> {
        let idx = self.bound_index(id).ok()?;
        Some(&self.slot(idx).info)
    }

    /// Typed read access to a bound matter.
    pub fn matter<T: Matter>(&self, id: MatterId) -> Option<&T> {
        let idx = self.bound_index(id).ok()?;
        let matter: &dyn Any = &*self.slot(idx).matter;
        matter.downcast_ref::<T>()
    }

    /// Mutate a bound matter of type `T`.
    ///
    /// The closure may change anything about the matter, so the bounds cache
    /// is invalidated and a repaint requested afterwards. Returns `None` when
    /// `id` is not bound or the matter is not a `T`.
    pub fn update_matter<T: Matter, R>(
        &mut self,
        id: MatterId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        let idx = self.bound_index(id).ok()?;
        let matter: &mut dyn Any = &mut *self.slot_mut(idx).matter;
        let out = f(matter.downcast_mut::<T>()?);
        self.invalidate_bounds();
        self.notify_updated();
        Some(out)
    }

    /// Iterate matters in paint order (first inserted first).
    pub fn iter(&self) -> Matters<'_, W> {
        Matters {
            plane: self,
            start: self.head,
            next: self.head,
            reverse: false,
        }
    }

    /// Iterate matters in hit-test order (last inserted first).
    pub fn iter_rev(&self) -> Matters<'_, W> {
        let start = self.head.map(|head| self.slot(head).info.prev);
        Matters {
            plane: self,
            start,
            next: start,
            reverse: true,
        }
    }

    /// A detached paint-order cursor; see [`MatterCursor`].
    pub fn cursor(&self) -> MatterCursor {
        MatterCursor {
            plane: self.id,
            start: self.head,
            next: self.head,
            epoch: self.epoch,
        }
    }

    /// Advance `cursor`, or return `None` once it is exhausted or the plane
    /// changed structurally since the cursor was created.
    pub fn advance(&self, cursor: &mut MatterCursor) -> Option<MatterId> {
        if cursor.plane != self.id || cursor.epoch != self.epoch {
            cursor.next = None;
            return None;
        }
        let idx = cursor.next?;
        let step = self.slot(idx).info.next;
        cursor.next = (Some(step) != cursor.start).then_some(step);
        Some(self.id_of(idx))
    }

    /// Current mode mask.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Switch the mode mask.
    ///
    /// A matter is visible iff every bit of the mode it was inserted under is
    /// set in the plane's mode. The selection is cleared first.
    pub fn change_mode(&mut self, mode: u32) {
        if mode != self.mode {
            self.no_selected();
            self.mode = mode;
            self.invalidate_bounds();
            self.notify_updated();
        }
    }

    /// Extent used for border physics.
    pub fn extent(&self) -> Option<Size> {
        self.extent
    }

    /// Replace the extent used for border physics (for example after the
    /// host window was resized).
    pub fn set_extent(&mut self, extent: Option<Size>) {
        self.extent = extent;
    }

    /// Background painted by [`Plane::draw`].
    pub fn set_background(&mut self, background: Option<Paint>) {
        if self.background != background {
            self.background = background;
            self.notify_updated();
        }
    }

    // --- internals ---

    fn alloc(&mut self, matter: Box<dyn Matter>, info: MatterInfo) -> MatterId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(None);
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        self.slots[idx] = Some(Slot {
            generation,
            matter,
            info,
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "MatterId uses 32-bit indices by design."
        )]
        let slot = idx as u32;
        MatterId::new(self.id, slot, generation)
    }

    fn link_before_head(&mut self, idx: usize) {
        match self.head {
            None => {
                let info = &mut self.slot_mut(idx).info;
                info.prev = idx;
                info.next = idx;
                self.head = Some(idx);
            }
            Some(head) => {
                let tail = self.slot(head).info.prev;
                {
                    let info = &mut self.slot_mut(idx).info;
                    info.prev = tail;
                    info.next = head;
                }
                self.slot_mut(tail).info.next = idx;
                self.slot_mut(head).info.prev = idx;
            }
        }
    }

    /// Access a slot; panics if `idx` is not occupied.
    pub(crate) fn slot(&self, idx: usize) -> &Slot {
        self.slots[idx].as_ref().expect("dangling matter slot")
    }

    /// Access a slot mutably; panics if `idx` is not occupied.
    pub(crate) fn slot_mut(&mut self, idx: usize) -> &mut Slot {
        self.slots[idx].as_mut().expect("dangling matter slot")
    }

    pub(crate) fn id_of(&self, idx: usize) -> MatterId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "MatterId uses 32-bit indices by design."
        )]
        let slot = idx as u32;
        MatterId::new(self.id, slot, self.slot(idx).generation)
    }

    /// Slot index of a matter bound to this plane.
    pub(crate) fn bound_index(&self, id: MatterId) -> Result<usize, PlaneError> {
        if id.plane != self.id {
            return Err(PlaneError::NotBound(id));
        }
        match self.slots.get(id.idx()).and_then(|slot| slot.as_ref()) {
            Some(slot) if slot.generation == id.generation && slot.info.master == self.id => {
                Ok(id.idx())
            }
            _ => Err(PlaneError::NotBound(id)),
        }
    }

    /// Slot index of a bound matter that the current mode does not hide.
    pub(crate) fn unmasked_index(&self, id: MatterId) -> Result<usize, PlaneError> {
        let idx = self.bound_index(id)?;
        if self.is_unmasked_at(idx) {
            Ok(idx)
        } else {
            Err(PlaneError::Masked(id))
        }
    }

    pub(crate) fn is_unmasked_at(&self, idx: usize) -> bool {
        is_unmasked(self.slot(idx).info.mode, self.mode)
    }

    /// Box of a matter in plane-local space.
    pub(crate) fn matter_bound(&self, idx: usize) -> Rect {
        let slot = self.slot(idx);
        let (x, y) = (slot.info.x, slot.info.y);
        Rect::from_origin_size((x, y), slot.matter.extent(x, y))
    }

    /// Box of a matter in screen space: the position is translated then
    /// scaled, the extent is used as is (resizable matters already carry the
    /// scale in their size).
    pub(crate) fn screen_bound(&self, idx: usize) -> Rect {
        let slot = self.slot(idx);
        let (x, y) = (slot.info.x, slot.info.y);
        let origin = Point::new(
            (x + self.translation.x) * self.scale.x,
            (y + self.translation.y) * self.scale.y,
        );
        Rect::from_origin_size(origin, slot.matter.extent(x, y))
    }
}

/// Iterator over a plane's matters; see [`Plane::iter`] and [`Plane::iter_rev`].
pub struct Matters<'a, W: World> {
    plane: &'a Plane<W>,
    start: Option<usize>,
    next: Option<usize>,
    reverse: bool,
}

impl<W: World> core::fmt::Debug for Matters<'_, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Matters")
            .field("next", &self.next)
            .field("reverse", &self.reverse)
            .finish_non_exhaustive()
    }
}

impl<W: World> Iterator for Matters<'_, W> {
    type Item = MatterId;

    fn next(&mut self) -> Option<MatterId> {
        let idx = self.next?;
        let info = &self.plane.slot(idx).info;
        let step = if self.reverse { info.prev } else { info.next };
        self.next = (Some(step) != self.start).then_some(step);
        Some(self.plane.id_of(idx))
    }
}

/// A paint-order position that does not borrow the plane.
///
/// Useful for walking a plane while mutating it between steps. Any structural
/// change (insert, remove, erase) invalidates the cursor, and
/// [`Plane::advance`] then returns `None` instead of visiting a stale ring.
#[derive(Clone, Copy, Debug)]
pub struct MatterCursor {
    plane: PlaneId,
    start: Option<usize>,
    next: Option<usize>,
    epoch: u64,
}
