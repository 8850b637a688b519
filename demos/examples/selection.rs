// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection, focus, and deferred placement on a plane.
//!
//! This example shows how to:
//! - let the plane's owner decide which matters are selectable,
//! - route pointer and keyboard input through the plane,
//! - place a matter that only knows its size later (a "label" whose text is
//!   laid out asynchronously) and replay its placement once it is ready,
//! - hide groups of matters with modes.
//!
//! Run:
//! - `cargo run -p cosmos_demos --example selection`

use cosmos_plane::{
    Anchor, Capabilities, Matter, MatterId, Modifiers, Plane, PlaneConfig, PointerButton,
    Rectanglet, World,
};
use kurbo::{Point, Size, Vec2};

/// Owner that allows selecting anything and narrates what happens.
#[derive(Default)]
struct Desk {
    repaints: usize,
}

impl World for Desk {
    fn on_refresh(&mut self) {
        self.repaints += 1;
    }

    fn on_matter_ready(&mut self, id: MatterId) {
        println!("  ready: {id:?}");
    }

    fn on_focus(&mut self, id: MatterId, focused: bool) {
        println!("  focus {}: {id:?}", if focused { "in" } else { "out" });
    }

    fn on_tap(&mut self, id: MatterId, local: Point) {
        println!("  tap on {id:?} at {local:?}");
    }

    fn on_save(&mut self) {
        println!("  save requested");
    }

    fn can_select(&self, _id: MatterId, _matter: &dyn Matter) -> bool {
        true
    }

    fn after_select(&mut self, id: MatterId, selected: bool) {
        println!("  {} {id:?}", if selected { "selected" } else { "deselected" });
    }
}

/// A text label whose size is unknown until its text has been laid out.
struct Label {
    text: &'static str,
    laid_out: Option<Size>,
    typed: String,
}

impl Label {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            laid_out: None,
            typed: String::new(),
        }
    }

    /// Pretend layout: 7 units per character, 12 units tall.
    fn layout(&mut self) {
        let width = 7.0 * self.text.chars().count() as f64;
        self.laid_out = Some(Size::new(width, 12.0));
    }
}

impl Matter for Label {
    fn extent(&self, _x: f64, _y: f64) -> Size {
        self.laid_out.unwrap_or(Size::ZERO)
    }

    fn is_ready(&self) -> bool {
        self.laid_out.is_some()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::EVENTS
    }

    fn own_caret(&mut self, owned: bool) {
        println!("  label {:?} caret: {owned}", self.text);
    }

    fn on_text(&mut self, text: &str, _entire: bool) -> bool {
        self.typed.push_str(text);
        true
    }
}

fn main() {
    let mut plane = Plane::with_world(
        Desk::default(),
        PlaneConfig {
            name: "desk".into(),
            initial_mode: 0b01,
            ..PlaneConfig::default()
        },
    );

    println!("building the desk");
    let card = plane.insert_at(Rectanglet::new(80.0, 50.0), 20.0, 20.0);
    let label = plane.insert_at(Label::new("Untitled"), 0.0, 0.0);

    // The label is not laid out yet, so this placement is remembered.
    plane.move_to(label, (card, Anchor::CenterBottom), Anchor::CenterTop, Vec2::new(0.0, 4.0));
    println!("label pending: {:?}", plane.info(label).and_then(|i| i.pending()));

    plane.update_matter(label, Label::layout);
    plane.notify_matter_ready(label);
    println!("label placed at {:?}", plane.boundary(label));

    println!("clicking the card");
    plane.on_pointer_pressed(PointerButton::Left, 30.0, 30.0, 1);
    plane.on_pointer_released(PointerButton::Left, 30.0, 30.0, 1);

    println!("clicking the label and typing");
    let at = plane.location(label, Anchor::Center).unwrap_or_default();
    plane.on_pointer_pressed(PointerButton::Left, at.x, at.y, 1);
    plane.on_pointer_released(PointerButton::Left, at.x, at.y, 1);
    plane.on_text("Groceries", true);
    println!(
        "label typed {:?}",
        plane.matter::<Label>(label).map(|l| l.typed.as_str())
    );
    plane.on_char('s', Modifiers::CTRL, 0, true);

    println!("dragging the selection");
    plane.move_by(None, Vec2::new(10.0, 0.0));
    println!("selected: {:?}", plane.selected().collect::<Vec<_>>());

    println!("switching modes");
    plane.change_mode(0b10);
    let sticky = plane.insert_at(Rectanglet::square(30.0), 200.0, 20.0);
    println!(
        "card visible: {}, sticky visible: {}",
        plane.matter_unmasked(card),
        plane.matter_unmasked(sticky)
    );
    println!("hit at card: {:?}", plane.find_matter(30.0, 30.0));

    plane.change_mode(0b11);
    println!("all visible, union {:?}", plane.matters_boundary());
    println!("{} repaint requests", plane.world().repaints);
}
