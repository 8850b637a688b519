// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing, selection, focus, and hover.

use cosmos_geometry::rectangle_contain;
use kurbo::Point;
use tracing::debug;

use crate::plane::Plane;
use crate::types::MatterId;
use crate::world::World;

impl<W: World> Plane<W> {
    /// The topmost visible matter under the screen point `(x, y)`.
    ///
    /// Walks in reverse paint order, skipping masked and concealed matters.
    /// A matter is hit when its screen box contains the point (edges
    /// included) and its own [`Matter::hit_test_local`](crate::Matter::hit_test_local)
    /// accepts the point relative to that box.
    pub fn find_matter(&self, x: f64, y: f64) -> Option<MatterId> {
        self.pick(Point::new(x, y)).map(|(idx, _)| self.id_of(idx))
    }

    /// Slot and box-relative point of the topmost hit.
    pub(crate) fn pick(&self, point: Point) -> Option<(usize, Point)> {
        self.iter_rev().map(MatterId::idx).find_map(|idx| {
            let matter = &self.slot(idx).matter;
            if !self.is_unmasked_at(idx) || matter.is_concealed() {
                return None;
            }
            let bound = self.screen_bound(idx);
            if !rectangle_contain(bound, point) {
                return None;
            }
            let local = (point - bound.origin()).to_point();
            matter
                .hit_test_local(local, bound.size())
                .then_some((idx, local))
        })
    }

    /// Select exactly `id`, clearing any other selection.
    ///
    /// Requires [`World::can_select`]. Returns whether the selection changed.
    pub fn set_selected(&mut self, id: MatterId) -> bool {
        let Some(idx) = self.selectable_index(id) else {
            return false;
        };
        self.select_only(idx);
        true
    }

    /// Add `id` to the selection.
    ///
    /// Requires [`World::can_select_multiple`] and [`World::can_select`].
    /// Returns whether the selection changed.
    pub fn add_selected(&mut self, id: MatterId) -> bool {
        if !self.world.can_select_multiple() {
            return false;
        }
        let Some(idx) = self.selectable_index(id) else {
            return false;
        };
        self.flip_selected(idx, true);
        true
    }

    /// Clear every visible selection in one update sequence.
    pub fn no_selected(&mut self) {
        let Some(head) = self.head else {
            return;
        };
        self.batched(|plane| {
            let mut idx = head;
            loop {
                if plane.slot(idx).info.selected && plane.is_unmasked_at(idx) {
                    plane.flip_selected(idx, false);
                }
                idx = plane.slot(idx).info.next;
                if idx == head {
                    break;
                }
            }
        });
    }

    /// Whether `id` is bound, visible, and selected.
    pub fn is_selected(&self, id: MatterId) -> bool {
        self.unmasked_index(id)
            .is_ok_and(|idx| self.slot(idx).info.selected)
    }

    /// Number of visible selected matters.
    pub fn count_selected(&self) -> usize {
        self.selected().count()
    }

    /// Visible selected matters in paint order.
    pub fn selected(&self) -> impl Iterator<Item = MatterId> + '_ {
        self.iter()
            .filter(|id| self.is_unmasked_at(id.idx()) && self.slot(id.idx()).info.selected)
    }

    /// The first visible selected matter painted after `start`, or the first
    /// one overall when `start` is `None`. The search does not wrap around.
    pub fn find_next_selected(&self, start: Option<MatterId>) -> Option<MatterId> {
        match start {
            None => self.selected().next(),
            Some(start) => {
                let idx = self.unmasked_index(start).ok()?;
                let head = self.head?;
                let mut cur = self.slot(idx).info.next;
                while cur != head {
                    let info = &self.slot(cur).info;
                    if info.selected && self.is_unmasked_at(cur) {
                        return Some(self.id_of(cur));
                    }
                    cur = info.next;
                }
                None
            }
        }
    }

    /// Hand the caret to `id`, or take it away from everyone with `None`.
    ///
    /// Only matters that allow events can own the caret; naming one that does
    /// not releases the caret. Masked or unbound matters are ignored.
    pub fn set_caret_owner(&mut self, id: Option<MatterId>) {
        let target = match id {
            Some(id) => match self.bound_index(id) {
                Ok(idx) => Some(idx),
                Err(err) => {
                    debug!(plane = %self.name(), %err, "set_caret_owner skipped");
                    return;
                }
            },
            None => None,
        };
        if target.is_some() && target == self.focused {
            return;
        }
        match target {
            Some(idx) if self.slot(idx).matter.capabilities().events_allowed() => {
                if !self.is_unmasked_at(idx) {
                    return;
                }
                self.release_caret();
                self.focused = Some(idx);
                self.slot_mut(idx).matter.own_caret(true);
                let id = self.id_of(idx);
                self.world.on_focus(id, true);
            }
            _ => self.release_caret(),
        }
    }

    /// The visible matter owning the caret.
    pub fn focused_matter(&self) -> Option<MatterId> {
        self.focused
            .filter(|&idx| self.is_unmasked_at(idx))
            .map(|idx| self.id_of(idx))
    }

    /// The visible matter under the pointer, as of the last pointer motion.
    pub fn hovering_matter(&self) -> Option<MatterId> {
        self.hovering
            .filter(|&idx| self.is_unmasked_at(idx))
            .map(|idx| self.id_of(idx))
    }

    fn release_caret(&mut self) {
        if let Some(idx) = self.focused.take() {
            self.slot_mut(idx).matter.own_caret(false);
            let id = self.id_of(idx);
            self.world.on_focus(id, false);
        }
    }

    /// Bound, visible, unselected, and allowed by the world.
    fn selectable_index(&self, id: MatterId) -> Option<usize> {
        let idx = match self.unmasked_index(id) {
            Ok(idx) => idx,
            Err(err) => {
                debug!(plane = %self.name(), %err, "selection skipped");
                return None;
            }
        };
        (!self.slot(idx).info.selected && self.can_select_at(idx)).then_some(idx)
    }

    pub(crate) fn can_select_at(&self, idx: usize) -> bool {
        self.world.can_select(self.id_of(idx), &*self.slot(idx).matter)
    }

    pub(crate) fn select_only(&mut self, idx: usize) {
        self.batched(|plane| {
            plane.no_selected();
            plane.flip_selected(idx, true);
        });
    }

    fn flip_selected(&mut self, idx: usize, selected: bool) {
        let id = self.id_of(idx);
        self.world.before_select(id, selected);
        self.slot_mut(idx).info.selected = selected;
        self.world.after_select(id, selected);
        self.notify_updated();
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{Block, Event, Recorder};
    use crate::{Capabilities, MatterId, Plane, PlaneConfig};
    use alloc::vec;
    use alloc::vec::Vec;

    fn stacked() -> (Plane<Recorder>, [MatterId; 3]) {
        let mut plane = Plane::with_world(Recorder::multiple(), PlaneConfig::default());
        let a = plane.insert_at(Block::new(10.0, 10.0), 0.0, 0.0);
        let b = plane.insert_at(Block::new(10.0, 10.0), 5.0, 5.0);
        let c = plane.insert_at(Block::new(10.0, 10.0), 8.0, 8.0);
        (plane, [a, b, c])
    }

    #[test]
    fn topmost_matter_wins() {
        let (plane, [a, b, c]) = stacked();
        assert_eq!(plane.find_matter(9.0, 9.0), Some(c));
        assert_eq!(plane.find_matter(6.0, 6.0), Some(b));
        assert_eq!(plane.find_matter(1.0, 1.0), Some(a));
        assert_eq!(plane.find_matter(18.0, 18.0), Some(c), "edges are inclusive");
        assert_eq!(plane.find_matter(18.1, 18.0), None);
    }

    #[test]
    fn concealed_and_fine_tested_matters_are_skipped() {
        let mut plane = Plane::new();
        let below = plane.insert_at(Block::new(10.0, 10.0), 0.0, 0.0);
        plane.insert_at(Block::new(10.0, 10.0).concealed(), 0.0, 0.0);
        assert_eq!(plane.find_matter(5.0, 5.0), Some(below));

        let hollow = plane.insert_at(Block::new(10.0, 10.0).hollow(), 0.0, 0.0);
        assert_eq!(plane.find_matter(5.0, 5.0), Some(below));
        assert_eq!(plane.find_matter(0.5, 5.0), Some(hollow));
    }

    #[test]
    fn hit_testing_follows_translation_and_scale() {
        let mut plane = Plane::new();
        let id = plane.insert_at(Block::new(10.0, 10.0), 10.0, 10.0);
        plane.set_translation(5.0, 0.0);
        assert_eq!(plane.find_matter(12.0, 12.0), None);
        assert_eq!(plane.find_matter(16.0, 12.0), Some(id));
        plane.set_scale(2.0, 2.0);
        // Block is not resizable, so only its origin scales.
        assert_eq!(plane.find_matter(31.0, 21.0), Some(id));
        assert_eq!(plane.find_matter(16.0, 12.0), None);
    }

    #[test]
    fn set_selected_replaces_and_brackets() {
        let (mut plane, [a, b, _]) = stacked();
        assert!(plane.set_selected(a));
        assert!(plane.set_selected(b));
        assert!(!plane.is_selected(a));
        assert!(plane.is_selected(b));
        assert_eq!(plane.count_selected(), 1);
        assert!(!plane.set_selected(b), "already selected");

        let brackets: Vec<_> = plane
            .world()
            .events
            .iter()
            .filter(|e| matches!(e, Event::BeforeSelect(..) | Event::AfterSelect(..)))
            .cloned()
            .collect();
        assert_eq!(
            brackets,
            vec![
                Event::BeforeSelect(a, true),
                Event::AfterSelect(a, true),
                Event::BeforeSelect(a, false),
                Event::AfterSelect(a, false),
                Event::BeforeSelect(b, true),
                Event::AfterSelect(b, true),
            ]
        );
    }

    #[test]
    fn selection_batches_repaint_once() {
        let (mut plane, [a, b, _]) = stacked();
        plane.set_selected(a);
        let before = plane.world().refreshes;
        plane.set_selected(b);
        assert_eq!(plane.world().refreshes, before + 1);
    }

    #[test]
    fn add_selected_needs_multiple_selection() {
        let (mut plane, [a, b, c]) = stacked();
        assert!(plane.add_selected(a));
        assert!(plane.add_selected(c));
        assert_eq!(plane.selected().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(plane.find_next_selected(None), Some(a));
        assert_eq!(plane.find_next_selected(Some(a)), Some(c));
        assert_eq!(plane.find_next_selected(Some(b)), Some(c));
        assert_eq!(plane.find_next_selected(Some(c)), None);

        plane.no_selected();
        assert_eq!(plane.count_selected(), 0);

        let mut single = Plane::with_world(Recorder::selecting(), PlaneConfig::default());
        let x = single.insert_at(Block::new(1.0, 1.0), 0.0, 0.0);
        assert!(!single.add_selected(x));
        assert!(single.set_selected(x));
    }

    #[test]
    fn inert_world_never_selects() {
        let mut plane = Plane::new();
        let id = plane.insert_at(Block::new(1.0, 1.0), 0.0, 0.0);
        assert!(!plane.set_selected(id));
        assert!(!plane.is_selected(id));
    }

    #[test]
    fn caret_moves_between_event_matters_only() {
        let mut plane = Plane::with_world(Recorder::default(), PlaneConfig::default());
        let a = plane.insert_at(Block::new(1.0, 1.0).with_caps(Capabilities::EVENTS), 0.0, 0.0);
        let b = plane.insert_at(Block::new(1.0, 1.0).with_caps(Capabilities::EVENTS), 0.0, 0.0);
        let inert = plane.insert_at(Block::new(1.0, 1.0), 0.0, 0.0);

        plane.set_caret_owner(Some(a));
        assert_eq!(plane.focused_matter(), Some(a));
        plane.set_caret_owner(Some(b));
        assert_eq!(plane.focused_matter(), Some(b));
        assert_eq!(plane.matter::<Block>(a).unwrap().caret, Some(false));
        assert_eq!(plane.matter::<Block>(b).unwrap().caret, Some(true));

        plane.set_caret_owner(Some(inert));
        assert_eq!(plane.focused_matter(), None);
        assert_eq!(plane.matter::<Block>(b).unwrap().caret, Some(false));

        plane.set_caret_owner(Some(a));
        let removed = plane.remove(a).unwrap();
        assert_eq!(plane.focused_matter(), None);
        assert!(plane.world().events.contains(&Event::Focus(a, false)));
        drop(removed);
    }
}
