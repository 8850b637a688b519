// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the plane: identifiers, flags, input, ticks, paint, and configuration.

use alloc::string::String;
use core::sync::atomic::{AtomicU32, Ordering};
use core::time::Duration;

use kurbo::Size;

/// Identity of a [`Plane`](crate::Plane).
///
/// Every plane draws a fresh identity when it is created; a [`MatterId`]
/// minted by one plane is never bound to another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PlaneId(u32);

impl PlaneId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifier for a matter in a plane (generational).
///
/// A handle stays valid until the matter is removed (or the plane erased);
/// after that every operation taking it is a no-op, even if the slot is
/// reused by a later insertion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MatterId {
    pub(crate) plane: PlaneId,
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl MatterId {
    pub(crate) const fn new(plane: PlaneId, slot: u32, generation: u32) -> Self {
        Self {
            plane,
            slot,
            generation,
        }
    }

    pub(crate) const fn idx(self) -> usize {
        self.slot as usize
    }

    /// The plane that minted this identifier.
    pub const fn plane(self) -> PlaneId {
        self.plane
    }
}

bitflags::bitflags! {
    /// Interaction capabilities a matter opts into.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Matter receives high-level events (tap, hover, goodbye) and may own the caret.
        const EVENTS            = 0b0000_0001;
        /// Matter also receives raw pointer events. Only honored together with [`Self::EVENTS`].
        const LOW_LEVEL_EVENTS  = 0b0000_0010;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}

impl Capabilities {
    /// Whether high-level events are delivered.
    pub fn events_allowed(self) -> bool {
        self.contains(Self::EVENTS)
    }

    /// Whether raw pointer events are delivered.
    pub fn low_level_events_allowed(self) -> bool {
        self.contains(Self::EVENTS | Self::LOW_LEVEL_EVENTS)
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT = 0b0000_0001;
        /// Either control key.
        const CTRL  = 0b0000_0010;
        /// Either alt/option key.
        const ALT   = 0b0000_0100;
        /// Either meta/command key.
        const META  = 0b0000_1000;
    }
}

bitflags::bitflags! {
    /// Pointer buttons held during a pointer motion.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        /// Primary button.
        const LEFT   = 0b0000_0001;
        /// Middle button or wheel press.
        const MIDDLE = 0b0000_0010;
        /// Secondary button.
        const RIGHT  = 0b0000_0100;
    }
}

/// A single pointer button, as reported with press and release events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Middle button or wheel press.
    Middle,
    /// Secondary button.
    Right,
    /// Any other button, by platform index.
    Other(u8),
}

/// Timing information delivered with every [`Plane::on_elapse`](crate::Plane::on_elapse).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// Number of ticks since the plane's owner started ticking.
    pub count: u64,
    /// Nominal interval between ticks.
    pub interval: Duration,
    /// Time elapsed since the first tick.
    pub uptime: Duration,
}

/// Color and opacity handed to the renderer.
///
/// Color-space conversion is the renderer's business; the plane only passes
/// these values through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    /// `0xRRGGBB`.
    pub rgb: u32,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f64,
}

impl Paint {
    /// Opaque paint of the given `0xRRGGBB` color.
    pub const fn rgb(rgb: u32) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// The same color with a different opacity.
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Whether anything would be painted at all.
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::rgb(0x00_00_00)
    }
}

/// Construction-time settings of a [`Plane`](crate::Plane).
#[derive(Clone, Debug, Default)]
pub struct PlaneConfig {
    /// Human-readable name, used in logs.
    pub name: String,
    /// Mode mask active when the plane is created.
    ///
    /// Every matter records the mode active at its insertion; see
    /// [`Plane::change_mode`](crate::Plane::change_mode).
    pub initial_mode: u32,
    /// Extent of the area movables bounce around in.
    ///
    /// `None` disables border detection: movables keep advancing freely.
    pub extent: Option<Size>,
    /// Background painted under every matter by [`Plane::draw`](crate::Plane::draw).
    pub background: Option<Paint>,
}
