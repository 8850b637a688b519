// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing host input to matters and to the plane's owner.
//!
//! Pointer coordinates are in screen space; matters receive them relative to
//! their screen box. Keyboard and text input goes to the caret owner.

use kurbo::{Point, Vec2};
use tracing::trace;

use crate::plane::Plane;
use crate::types::{Buttons, Modifiers, PointerButton};
use crate::world::World;

impl<W: World> Plane<W> {
    /// A pointer button went down.
    ///
    /// A single left click focuses the matter under the pointer (or nobody),
    /// clears the selection, and forwards the raw press to a matter that
    /// accepts low-level events. Returns whether that matter handled it.
    pub fn on_pointer_pressed(
        &mut self,
        button: PointerButton,
        x: f64,
        y: f64,
        clicks: u8,
    ) -> bool {
        if clicks != 1 || button != PointerButton::Left {
            return false;
        }
        self.batched(|plane| {
            let hit = plane.pick(Point::new(x, y));
            let target = hit.map(|(idx, _)| plane.id_of(idx));
            plane.set_caret_owner(target);
            plane.no_selected();

            match hit {
                Some((idx, local)) if plane.low_level_at(idx) => plane
                    .slot_mut(idx)
                    .matter
                    .on_pointer_pressed(button, local, clicks),
                _ => false,
            }
        })
    }

    /// A pointer button went up.
    ///
    /// A single left click taps the matter under the pointer, forwards the
    /// raw release, then applies the tap policy: a selectable matter becomes
    /// the selection (and takes the caret if it accepts events); tapping
    /// anything else clears the selection. The owner hears
    /// [`World::on_tap`] and, for a selected matter,
    /// [`World::on_tap_selected`]. Returns whether the tapped matter ended up
    /// selected.
    pub fn on_pointer_released(
        &mut self,
        button: PointerButton,
        x: f64,
        y: f64,
        clicks: u8,
    ) -> bool {
        if clicks != 1 || button != PointerButton::Left {
            return false;
        }
        self.batched(|plane| {
            let Some((idx, local)) = plane.pick(Point::new(x, y)) else {
                return false;
            };
            let id = plane.id_of(idx);
            let caps = plane.slot(idx).matter.capabilities();
            if caps.events_allowed() {
                let matter = &mut plane.slot_mut(idx).matter;
                matter.on_tap(local);
                if caps.low_level_events_allowed() {
                    matter.on_pointer_released(button, local, clicks);
                }
            }

            if !plane.slot(idx).info.selected {
                if plane.can_select_at(idx) {
                    plane.select_only(idx);
                    if caps.events_allowed() {
                        plane.set_caret_owner(Some(id));
                    }
                } else {
                    plane.no_selected();
                }
            }

            trace!(plane = %plane.name(), ?id, "tap");
            plane.world.on_tap(id, local);
            let selected = plane.slot(idx).info.selected;
            if selected {
                plane.world.on_tap_selected(id, local);
            }
            selected
        })
    }

    /// The pointer moved.
    ///
    /// Only plain motion (no button held) is tracked: leaving a matter says
    /// goodbye to it, and the matter now under the pointer becomes the hover
    /// target. Returns whether a matter is under the pointer.
    pub fn on_pointer_move(&mut self, buttons: Buttons, x: f64, y: f64, delta: Vec2) -> bool {
        if !buttons.is_empty() {
            return false;
        }
        let point = Point::new(x, y);
        self.batched(|plane| {
            let hit = plane.pick(point);
            if hit.map(|(idx, _)| idx) != plane.hovering {
                plane.say_goodbye(point);
            }
            let Some((idx, local)) = hit else {
                return false;
            };

            plane.hovering = Some(idx);
            let caps = plane.slot(idx).matter.capabilities();
            if caps.events_allowed() {
                let matter = &mut plane.slot_mut(idx).matter;
                matter.on_hover(local);
                if caps.low_level_events_allowed() {
                    matter.on_pointer_move(buttons, local, delta);
                }
            }
            let id = plane.id_of(idx);
            plane.world.on_hover(id, local);
            true
        })
    }

    /// Scroll input, forwarded to the hover target.
    pub fn on_scroll(&mut self, delta: Vec2) -> bool {
        match self.hovering_matter() {
            Some(id) if self.events_at(id.idx()) => {
                self.batched(|plane| plane.slot_mut(id.idx()).matter.on_scroll(delta))
            }
            _ => false,
        }
    }

    /// Key input, forwarded to the caret owner.
    ///
    /// A Ctrl+S press that the caret owner leaves unhandled asks the owner to
    /// save.
    pub fn on_char(
        &mut self,
        key: char,
        modifiers: Modifiers,
        repeats: u32,
        pressed: bool,
    ) -> bool {
        let handled = match self.focused_matter() {
            Some(id) => self.batched(|plane| {
                plane
                    .slot_mut(id.idx())
                    .matter
                    .on_char(key, modifiers, repeats, pressed)
            }),
            None => false,
        };
        if !handled
            && pressed
            && modifiers.contains(Modifiers::CTRL)
            && key.eq_ignore_ascii_case(&'s')
        {
            self.world.on_save();
            return true;
        }
        handled
    }

    /// Committed text, forwarded to the caret owner.
    pub fn on_text(&mut self, text: &str, entire: bool) -> bool {
        match self.focused_matter() {
            Some(id) => self.batched(|plane| plane.slot_mut(id.idx()).matter.on_text(text, entire)),
            None => false,
        }
    }

    /// Pre-edit text, forwarded to the caret owner.
    pub fn on_editing_text(&mut self, text: &str, cursor: usize, span: usize) -> bool {
        match self.focused_matter() {
            Some(id) => self.batched(|plane| {
                plane
                    .slot_mut(id.idx())
                    .matter
                    .on_editing_text(text, cursor, span)
            }),
            None => false,
        }
    }

    fn say_goodbye(&mut self, point: Point) {
        let Some(idx) = self.hovering.take() else {
            return;
        };
        let local = (point - self.screen_bound(idx).origin()).to_point();
        if self.events_at(idx) {
            self.slot_mut(idx).matter.on_goodbye(local);
        }
        let id = self.id_of(idx);
        self.world.on_goodbye(id, local);
    }

    fn events_at(&self, idx: usize) -> bool {
        self.slot(idx).matter.capabilities().events_allowed()
    }

    fn low_level_at(&self, idx: usize) -> bool {
        self.slot(idx).matter.capabilities().low_level_events_allowed()
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{Block, Event, Recorder};
    use crate::{Buttons, Capabilities, Modifiers, Plane, PlaneConfig, PointerButton};
    use alloc::vec;
    use kurbo::{Point, Vec2};

    const ALL: Capabilities = Capabilities::EVENTS.union(Capabilities::LOW_LEVEL_EVENTS);

    fn plane(world: Recorder) -> Plane<Recorder> {
        Plane::with_world(world, PlaneConfig::default())
    }

    fn click(plane: &mut Plane<Recorder>, x: f64, y: f64) -> bool {
        plane.on_pointer_pressed(PointerButton::Left, x, y, 1);
        plane.on_pointer_released(PointerButton::Left, x, y, 1)
    }

    #[test]
    fn click_taps_selects_and_focuses() {
        let mut plane = plane(Recorder::selecting());
        let id = plane.insert_at(Block::new(10.0, 10.0).with_caps(ALL), 10.0, 10.0);

        assert!(click(&mut plane, 13.0, 14.0));
        assert!(plane.is_selected(id));
        assert_eq!(plane.focused_matter(), Some(id));

        let block = plane.matter::<Block>(id).unwrap();
        assert_eq!(block.log[3..], ["pressed", "tap", "released"]);
        assert_eq!(block.last_local, Some(Point::new(3.0, 4.0)));

        let local = Point::new(3.0, 4.0);
        assert!(plane.world().events.contains(&Event::Tap(id, local)));
        assert!(plane.world().events.contains(&Event::TapSelected(id, local)));
    }

    #[test]
    fn low_level_events_need_both_flags() {
        let mut plane = plane(Recorder::default());
        let id = plane.insert_at(Block::new(10.0, 10.0).with_caps(Capabilities::EVENTS), 0.0, 0.0);
        assert!(!click(&mut plane, 5.0, 5.0));
        assert_eq!(plane.matter::<Block>(id).unwrap().log[3..], ["tap"]);
    }

    #[test]
    fn clicking_empty_space_clears_focus_and_selection() {
        let mut plane = plane(Recorder::selecting());
        let id = plane.insert_at(Block::new(10.0, 10.0).with_caps(ALL), 0.0, 0.0);
        click(&mut plane, 5.0, 5.0);
        assert!(plane.is_selected(id));

        assert!(!click(&mut plane, 50.0, 50.0));
        assert!(!plane.is_selected(id));
        assert_eq!(plane.focused_matter(), None);
    }

    #[test]
    fn only_single_left_clicks_count() {
        let mut plane = plane(Recorder::selecting());
        let id = plane.insert_at(Block::new(10.0, 10.0).with_caps(ALL), 0.0, 0.0);
        assert!(!plane.on_pointer_pressed(PointerButton::Right, 5.0, 5.0, 1));
        assert!(!plane.on_pointer_released(PointerButton::Left, 5.0, 5.0, 2));
        assert!(!plane.is_selected(id));
        assert_eq!(plane.matter::<Block>(id).unwrap().log.len(), 3);
    }

    #[test]
    fn tapping_an_unselectable_matter_clears_selection() {
        let mut plane = plane(Recorder::default());
        let id = plane.insert_at(Block::new(10.0, 10.0), 0.0, 0.0);
        assert!(!plane.on_pointer_released(PointerButton::Left, 5.0, 5.0, 1));
        assert_eq!(plane.world().events, vec![Event::Tap(id, Point::new(5.0, 5.0))]);
    }

    #[test]
    fn hover_and_goodbye_follow_the_pointer() {
        let mut plane = plane(Recorder::default());
        let a = plane.insert_at(Block::new(10.0, 10.0).with_caps(ALL), 0.0, 0.0);
        let b = plane.insert_at(Block::new(10.0, 10.0), 20.0, 0.0);

        assert!(plane.on_pointer_move(Buttons::empty(), 2.0, 2.0, Vec2::ZERO));
        assert_eq!(plane.hovering_matter(), Some(a));
        assert!(plane.on_pointer_move(Buttons::empty(), 3.0, 2.0, Vec2::new(1.0, 0.0)));

        assert!(plane.on_pointer_move(Buttons::empty(), 25.0, 5.0, Vec2::ZERO));
        assert_eq!(plane.hovering_matter(), Some(b));

        assert!(!plane.on_pointer_move(Buttons::empty(), 50.0, 50.0, Vec2::ZERO));
        assert_eq!(plane.hovering_matter(), None);

        assert_eq!(
            plane.world().events,
            vec![
                Event::Hover(a, Point::new(2.0, 2.0)),
                Event::Hover(a, Point::new(3.0, 2.0)),
                Event::Goodbye(a, Point::new(25.0, 5.0)),
                Event::Hover(b, Point::new(5.0, 5.0)),
                Event::Goodbye(b, Point::new(30.0, 50.0)),
            ]
        );
        assert_eq!(
            plane.matter::<Block>(a).unwrap().log[3..],
            ["hover", "move", "hover", "move", "goodbye"]
        );
        assert_eq!(plane.matter::<Block>(b).unwrap().log.len(), 3);
    }

    #[test]
    fn dragging_does_not_change_hover() {
        let mut plane = plane(Recorder::default());
        plane.insert_at(Block::new(10.0, 10.0), 0.0, 0.0);
        assert!(!plane.on_pointer_move(Buttons::LEFT, 2.0, 2.0, Vec2::ZERO));
        assert_eq!(plane.hovering_matter(), None);
    }

    #[test]
    fn scroll_goes_to_the_hover_target() {
        let mut plane = plane(Recorder::default());
        let id = plane.insert_at(Block::new(10.0, 10.0).with_caps(Capabilities::EVENTS), 0.0, 0.0);
        assert!(!plane.on_scroll(Vec2::new(0.0, 1.0)));
        plane.on_pointer_move(Buttons::empty(), 2.0, 2.0, Vec2::ZERO);
        assert!(plane.on_scroll(Vec2::new(0.0, 1.0)));
        assert_eq!(plane.matter::<Block>(id).unwrap().log.last(), Some(&"scroll"));
    }

    #[test]
    fn keys_and_text_go_to_the_caret_owner() {
        let mut plane = plane(Recorder::default());
        let id = plane.insert_at(
            Block::new(10.0, 10.0)
                .with_caps(Capabilities::EVENTS)
                .handling_keys(),
            0.0,
            0.0,
        );
        assert!(!plane.on_char('a', Modifiers::empty(), 0, true));

        plane.set_caret_owner(Some(id));
        assert!(plane.on_char('a', Modifiers::empty(), 0, true));
        assert!(plane.on_text("hello", true));
        assert!(plane.on_editing_text("he", 2, 0));
        assert_eq!(
            plane.matter::<Block>(id).unwrap().log[3..],
            ["char", "text", "editing_text"]
        );
    }

    #[test]
    fn unhandled_ctrl_s_saves() {
        let mut plane = plane(Recorder::default());
        assert!(plane.on_char('s', Modifiers::CTRL, 0, true));
        assert!(!plane.on_char('s', Modifiers::CTRL, 0, false));
        assert!(!plane.on_char('s', Modifiers::empty(), 0, true));
        assert_eq!(plane.world().events, vec![Event::Save]);

        let id = plane.insert_at(
            Block::new(10.0, 10.0)
                .with_caps(Capabilities::EVENTS)
                .handling_keys(),
            0.0,
            0.0,
        );
        plane.set_caret_owner(Some(id));
        assert!(plane.on_char('S', Modifiers::CTRL, 0, true));
        assert_eq!(plane.world().events.iter().filter(|e| **e == Event::Save).count(), 1);
    }
}
