// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Update sequences: nestable scopes that coalesce repaint requests.

use core::ops::{Deref, DerefMut};

use tracing::{debug, trace};

use crate::plane::Plane;
use crate::world::World;

impl<W: World> Plane<W> {
    /// Enter an update sequence.
    ///
    /// Prefer [`Plane::update_sequence`], which cannot be left unbalanced.
    pub fn begin_update_sequence(&mut self) {
        self.depth += 1;
    }

    /// Leave an update sequence.
    ///
    /// Leaving the outermost sequence repaints once if anything asked for a
    /// repaint inside it. Extra calls are ignored.
    pub fn end_update_sequence(&mut self) {
        if self.depth == 0 {
            debug!(plane = %self.name(), "unbalanced end_update_sequence");
            return;
        }
        self.depth -= 1;
        if self.depth == 0 && self.dirty {
            self.dirty = false;
            self.refresh();
        }
    }

    /// Whether at least one update sequence is open.
    pub fn is_in_update_sequence(&self) -> bool {
        self.depth > 0
    }

    /// Whether a repaint request would be honored right away.
    pub fn should_update(&self) -> bool {
        self.depth == 0
    }

    /// Request a repaint: immediately outside update sequences, otherwise
    /// once the outermost sequence ends.
    pub fn notify_updated(&mut self) {
        if self.depth == 0 {
            self.refresh();
        } else {
            self.dirty = true;
        }
    }

    /// Open an update sequence that closes when the guard is dropped.
    ///
    /// The guard dereferences to the plane, so the whole batch is written
    /// against it:
    ///
    /// ```rust
    /// use cosmos_plane::{Plane, Rectanglet};
    /// use kurbo::Vec2;
    ///
    /// let mut plane = Plane::new();
    /// let id = plane.insert_at(Rectanglet::new(10.0, 10.0), 0.0, 0.0);
    /// {
    ///     let mut batch = plane.update_sequence();
    ///     for _ in 0..5 {
    ///         batch.move_by(Some(id), Vec2::new(1.0, 0.0));
    ///     }
    ///     assert!(batch.is_in_update_sequence());
    /// }
    /// assert!(!plane.is_in_update_sequence());
    /// ```
    pub fn update_sequence(&mut self) -> UpdateSequence<'_, W> {
        self.begin_update_sequence();
        UpdateSequence { plane: self }
    }

    /// Run `f` inside an update sequence.
    pub(crate) fn batched<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut batch = self.update_sequence();
        f(&mut *batch)
    }

    fn refresh(&mut self) {
        trace!(plane = %self.name(), "refresh");
        self.world.on_refresh();
    }
}

/// Scoped update sequence; see [`Plane::update_sequence`].
pub struct UpdateSequence<'a, W: World> {
    plane: &'a mut Plane<W>,
}

impl<W: World> core::fmt::Debug for UpdateSequence<'_, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("UpdateSequence").field(&self.plane).finish()
    }
}

impl<W: World> Deref for UpdateSequence<'_, W> {
    type Target = Plane<W>;

    fn deref(&self) -> &Plane<W> {
        self.plane
    }
}

impl<W: World> DerefMut for UpdateSequence<'_, W> {
    fn deref_mut(&mut self) -> &mut Plane<W> {
        self.plane
    }
}

impl<W: World> Drop for UpdateSequence<'_, W> {
    fn drop(&mut self) {
        self.plane.end_update_sequence();
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{Block, Recorder};
    use crate::{Plane, PlaneConfig};
    use kurbo::Vec2;

    fn plane() -> Plane<Recorder> {
        Plane::with_world(Recorder::default(), PlaneConfig::default())
    }

    #[test]
    fn repaints_immediately_outside_sequences() {
        let mut plane = plane();
        plane.notify_updated();
        plane.notify_updated();
        assert_eq!(plane.world().refreshes, 2);
        assert!(plane.should_update());
    }

    #[test]
    fn nested_sequences_repaint_once_at_the_outermost_end() {
        let mut plane = plane();
        plane.begin_update_sequence();
        plane.begin_update_sequence();
        plane.notify_updated();
        assert!(!plane.should_update());
        plane.end_update_sequence();
        assert_eq!(plane.world().refreshes, 0);
        plane.notify_updated();
        plane.end_update_sequence();
        assert_eq!(plane.world().refreshes, 1);
        assert!(!plane.is_in_update_sequence());
    }

    #[test]
    fn clean_sequence_does_not_repaint() {
        let mut plane = plane();
        drop(plane.update_sequence());
        assert_eq!(plane.world().refreshes, 0);
    }

    #[test]
    fn unbalanced_end_is_ignored() {
        let mut plane = plane();
        plane.end_update_sequence();
        plane.begin_update_sequence();
        plane.notify_updated();
        plane.end_update_sequence();
        assert_eq!(plane.world().refreshes, 1);
    }

    #[test]
    fn five_moves_in_one_batch_repaint_once() {
        let mut plane = plane();
        let id = plane.insert_at(Block::new(10.0, 10.0), 0.0, 0.0);
        let before = plane.world().refreshes;
        {
            let mut batch = plane.update_sequence();
            for _ in 0..5 {
                batch.move_by(Some(id), Vec2::new(1.0, 1.0));
            }
            assert_eq!(batch.world().refreshes, before);
        }
        assert_eq!(plane.world().refreshes, before + 1);
        assert_eq!(plane.info(id).unwrap().position(), (5.0, 5.0).into());
    }
}
