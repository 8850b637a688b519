// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matters, owners, and renderers shared by the unit tests.

use alloc::vec::Vec;

use cosmos_geometry::Anchor;
use kurbo::{Circle, Ellipse, Line, Point, Rect, Size, Vec2};

use crate::matter::Matter;
use crate::motion::{BorderStrategies, Motion, Movable};
use crate::render::Renderer;
use crate::types::{Buttons, Capabilities, MatterId, Modifiers, Paint, PointerButton, Tick};
use crate::world::World;

/// A configurable rectangular matter that records what happens to it.
#[derive(Debug)]
pub(crate) struct Block {
    pub(crate) size: Size,
    pub(crate) ready: bool,
    pub(crate) caps: Capabilities,
    pub(crate) concealed: bool,
    pub(crate) hollow: bool,
    pub(crate) anchor: Option<Anchor>,
    pub(crate) handles_keys: bool,
    pub(crate) motion: Option<Motion>,
    pub(crate) caret: Option<bool>,
    pub(crate) updates: u64,
    pub(crate) log: Vec<&'static str>,
    pub(crate) last_local: Option<Point>,
}

impl Block {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ready: true,
            caps: Capabilities::empty(),
            concealed: false,
            hollow: false,
            anchor: None,
            handles_keys: false,
            motion: None,
            caret: None,
            updates: 0,
            log: Vec::new(),
            last_local: None,
        }
    }

    pub(crate) fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    pub(crate) fn with_caps(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    pub(crate) fn concealed(mut self) -> Self {
        self.concealed = true;
        self
    }

    /// Only the one-unit rim of the box accepts hits.
    pub(crate) fn hollow(mut self) -> Self {
        self.hollow = true;
        self
    }

    pub(crate) fn resizable(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub(crate) fn handling_keys(mut self) -> Self {
        self.handles_keys = true;
        self
    }

    pub(crate) fn moving(
        mut self,
        vx: f64,
        vy: f64,
        strategies: impl Into<BorderStrategies>,
    ) -> Self {
        let mut motion = Motion::new();
        motion.set_velocity(Vec2::new(vx, vy));
        motion.set_border_strategy(strategies);
        self.motion = Some(motion);
        self
    }

    pub(crate) fn velocity(&self) -> Vec2 {
        self.motion.map(|m| m.velocity()).unwrap_or_default()
    }

    fn record(&mut self, what: &'static str, local: Point) -> bool {
        self.log.push(what);
        self.last_local = Some(local);
        true
    }
}

impl Matter for Block {
    fn extent(&self, _x: f64, _y: f64) -> Size {
        self.size
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, bounds: Rect) {
        renderer.fill_rect(bounds, Paint::rgb(0xFF_00_00));
    }

    fn update(&mut self, _tick: &Tick) {
        self.updates += 1;
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn pre_construct(&mut self) {
        self.log.push("pre_construct");
    }

    fn construct(&mut self) {
        self.log.push("construct");
    }

    fn post_construct(&mut self) {
        self.log.push("post_construct");
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn is_concealed(&self) -> bool {
        self.concealed
    }

    fn hit_test_local(&self, local: Point, size: Size) -> bool {
        !self.hollow
            || local.x <= 1.0
            || local.y <= 1.0
            || local.x >= size.width - 1.0
            || local.y >= size.height - 1.0
    }

    fn resize_anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn own_caret(&mut self, owned: bool) {
        self.caret = Some(owned);
    }

    fn on_tap(&mut self, local: Point) -> bool {
        self.record("tap", local)
    }

    fn on_hover(&mut self, local: Point) -> bool {
        self.record("hover", local)
    }

    fn on_goodbye(&mut self, local: Point) -> bool {
        self.record("goodbye", local)
    }

    fn on_pointer_pressed(&mut self, _button: PointerButton, local: Point, _clicks: u8) -> bool {
        self.record("pressed", local)
    }

    fn on_pointer_released(&mut self, _button: PointerButton, local: Point, _clicks: u8) -> bool {
        self.record("released", local)
    }

    fn on_pointer_move(&mut self, _buttons: Buttons, local: Point, _delta: Vec2) -> bool {
        self.record("move", local)
    }

    fn on_scroll(&mut self, _delta: Vec2) -> bool {
        self.log.push("scroll");
        true
    }

    fn on_char(
        &mut self,
        _key: char,
        _modifiers: Modifiers,
        _repeats: u32,
        _pressed: bool,
    ) -> bool {
        self.log.push("char");
        self.handles_keys
    }

    fn on_text(&mut self, _text: &str, _entire: bool) -> bool {
        self.log.push("text");
        true
    }

    fn on_editing_text(&mut self, _text: &str, _cursor: usize, _span: usize) -> bool {
        self.log.push("editing_text");
        true
    }

    fn as_movable(&self) -> Option<&dyn Movable> {
        self.motion.as_ref().map(|m| m as &dyn Movable)
    }

    fn as_movable_mut(&mut self) -> Option<&mut dyn Movable> {
        self.motion.as_mut().map(|m| m as &mut dyn Movable)
    }
}

/// Owner notifications, in the order they arrived.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    Focus(MatterId, bool),
    Hover(MatterId, Point),
    Goodbye(MatterId, Point),
    Tap(MatterId, Point),
    TapSelected(MatterId, Point),
    Save,
    BeforeSelect(MatterId, bool),
    AfterSelect(MatterId, bool),
}

/// An owner that counts repaints and records every notification.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) refreshes: usize,
    pub(crate) ready: Vec<MatterId>,
    pub(crate) events: Vec<Event>,
    pub(crate) ticks: u64,
    select: bool,
    multiple: bool,
}

impl Recorder {
    /// Allows selecting one matter at a time.
    pub(crate) fn selecting() -> Self {
        Self {
            select: true,
            ..Self::default()
        }
    }

    /// Allows selecting any number of matters.
    pub(crate) fn multiple() -> Self {
        Self {
            select: true,
            multiple: true,
            ..Self::default()
        }
    }
}

impl World for Recorder {
    fn on_refresh(&mut self) {
        self.refreshes += 1;
    }

    fn on_matter_ready(&mut self, id: MatterId) {
        self.ready.push(id);
    }

    fn on_focus(&mut self, id: MatterId, focused: bool) {
        self.events.push(Event::Focus(id, focused));
    }

    fn on_hover(&mut self, id: MatterId, local: Point) {
        self.events.push(Event::Hover(id, local));
    }

    fn on_goodbye(&mut self, id: MatterId, local: Point) {
        self.events.push(Event::Goodbye(id, local));
    }

    fn on_tap(&mut self, id: MatterId, local: Point) {
        self.events.push(Event::Tap(id, local));
    }

    fn on_tap_selected(&mut self, id: MatterId, local: Point) {
        self.events.push(Event::TapSelected(id, local));
    }

    fn on_save(&mut self) {
        self.events.push(Event::Save);
    }

    fn can_select(&self, _id: MatterId, _matter: &dyn Matter) -> bool {
        self.select
    }

    fn can_select_multiple(&self) -> bool {
        self.multiple
    }

    fn before_select(&mut self, id: MatterId, selected: bool) {
        self.events.push(Event::BeforeSelect(id, selected));
    }

    fn after_select(&mut self, id: MatterId, selected: bool) {
        self.events.push(Event::AfterSelect(id, selected));
    }

    fn update(&mut self, _tick: &Tick) {
        self.ticks += 1;
    }
}

/// One recorded renderer call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Clip(Option<Rect>),
    Point(Point),
    Line(Line),
    DrawRect(Rect, Paint),
    FillRect(Rect, Paint),
    Circle(Circle, bool),
    Ellipse(Ellipse, bool),
    Polygon(Vec<Point>, bool),
}

/// A renderer that remembers every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) ops: Vec<Op>,
}

impl Renderer for RecordingRenderer {
    fn set_clip(&mut self, clip: Option<Rect>) {
        self.ops.push(Op::Clip(clip));
    }

    fn draw_point(&mut self, point: Point, _paint: Paint) {
        self.ops.push(Op::Point(point));
    }

    fn draw_line(&mut self, line: Line, _paint: Paint) {
        self.ops.push(Op::Line(line));
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint) {
        self.ops.push(Op::DrawRect(rect, paint));
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.ops.push(Op::FillRect(rect, paint));
    }

    fn draw_circle(&mut self, circle: Circle, _paint: Paint) {
        self.ops.push(Op::Circle(circle, false));
    }

    fn fill_circle(&mut self, circle: Circle, _paint: Paint) {
        self.ops.push(Op::Circle(circle, true));
    }

    fn draw_ellipse(&mut self, ellipse: Ellipse, _paint: Paint) {
        self.ops.push(Op::Ellipse(ellipse, false));
    }

    fn fill_ellipse(&mut self, ellipse: Ellipse, _paint: Paint) {
        self.ops.push(Op::Ellipse(ellipse, true));
    }

    fn draw_polygon(&mut self, vertices: &[Point], _paint: Paint) {
        self.ops.push(Op::Polygon(vertices.to_vec(), false));
    }

    fn fill_polygon(&mut self, vertices: &[Point], _paint: Paint) {
        self.ops.push(Op::Polygon(vertices.to_vec(), true));
    }
}
